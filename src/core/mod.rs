//! # RBM 핵심 모듈
//!
//! 활성화/샘플링 수학 함수와 CD-1 엔진

pub mod engine;
pub mod error;
pub mod math;

// 주요 타입들 재수출
pub use engine::*;
pub use error::{RbmError, RbmResult};
pub use math::{logistic, logistic_matrix, sampler_rng};
