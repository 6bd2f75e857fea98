//! RBM (Restricted Boltzmann Machine) 라이브러리
//!
//! 1단계 대조 발산(CD-1)으로 가중치를 학습하고, 학습된 가중치로
//! 가시 유닛에서 은닉 유닛 상태를 샘플링한다.

pub mod core;

// 핵심 모듈들 재수출
pub use crate::core::{
    // 엔진
    Rbm, TrainingConfig, DEFAULT_SEED,
    // 진단
    DiagnosticsSink, EpochReport, LogSink,
    // 오류
    RbmError, RbmResult,
    // 수학 도우미
    logistic, logistic_matrix, sampler_rng,
};
