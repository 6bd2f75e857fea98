//! # RBM 오류 타입
//!
//! 모든 검증은 연산 전에 수행되므로, 오류가 반환되면 가중치는 변경되지 않은 상태다.

use thiserror::Error;

/// RBM 엔진 오류
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RbmError {
    /// 가시/은닉 유닛 수가 0
    #[error("invalid dimension: num_visible={num_visible}, num_hidden={num_hidden} (both must be >= 1)")]
    InvalidDimension {
        num_visible: usize,
        num_hidden: usize,
    },

    /// 입력 데이터의 열 수가 가시 유닛 수와 다름
    #[error("dimension mismatch: expected {expected} visible columns, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// 에포크 수, 학습률, 데이터 행 수 등 하이퍼파라미터 오류
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type RbmResult<T> = Result<T, RbmError>;
