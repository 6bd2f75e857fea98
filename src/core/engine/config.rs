//! # 학습 구성
//!
//! CD-1 학습 하이퍼파라미터. 모멘텀, 가중치 감소, 희소성 항은 없다.

use serde::{Deserialize, Serialize};

use crate::core::error::{RbmError, RbmResult};

/// 기본 최대 에포크
pub const DEFAULT_MAX_EPOCHS: usize = 1000;
/// 기본 학습률
pub const DEFAULT_LEARNING_RATE: f64 = 0.1;

/// CD-1 학습 구성
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// 에포크 수 (>= 1)
    pub max_epochs: usize,
    /// 학습률 (유한한 양수)
    pub learning_rate: f64,
    /// 에포크별 재구성 오차 보고 여부
    pub diagnostics: bool,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            max_epochs: DEFAULT_MAX_EPOCHS,
            learning_rate: DEFAULT_LEARNING_RATE,
            diagnostics: false,
        }
    }
}

impl TrainingConfig {
    /// 새 구성 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 에포크 수 설정
    pub fn with_max_epochs(mut self, max_epochs: usize) -> Self {
        self.max_epochs = max_epochs;
        self
    }

    /// 학습률 설정
    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// 진단 보고 설정
    pub fn with_diagnostics(mut self, diagnostics: bool) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// 하이퍼파라미터 검증
    pub fn validate(&self) -> RbmResult<()> {
        if self.max_epochs == 0 {
            return Err(RbmError::InvalidParameter(
                "max_epochs must be a positive integer".to_string(),
            ));
        }
        // NaN도 여기서 걸러진다
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(RbmError::InvalidParameter(format!(
                "learning_rate must be a positive finite number, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }
}
