//! # RBM 엔진
//!
//! 초기화, CD-1 학습, 가시 → 은닉 추론

pub mod config;
pub mod diagnostics;
pub mod inference;
pub mod rbm;
pub mod training;

pub use config::{TrainingConfig, DEFAULT_LEARNING_RATE, DEFAULT_MAX_EPOCHS};
pub use diagnostics::{DiagnosticsSink, EpochReport, LogSink};
pub use rbm::{Rbm, DEFAULT_SEED};

#[cfg(test)]
mod __tests__;
