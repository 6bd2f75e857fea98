//! # RBM 엔진 본체
//!
//! 가중치 행렬은 (V+1)×(H+1) 형상이다. 0번 행은 은닉 바이어스, 0번 열은
//! 가시 바이어스이며 [0, 0]은 사용하지 않는 자리로 항상 0이다.

use ndarray::{s, Array2};
use rand::distributions::Uniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::error::{RbmError, RbmResult};

/// 가중치 초기화 스트림의 기본 시드
pub const DEFAULT_SEED: u64 = 1235;

/// Glorot 구간에 곱하는 추가 축소 인자
const INIT_SCALE: f64 = 0.1;

/// 제한 볼츠만 머신 (CD-1 학습)
///
/// 엔진은 가중치만 소유한다. 샘플링 난수 스트림은 `train`/`run_visible`
/// 호출마다 명시적으로 넘겨받는다.
#[derive(Debug, Clone, PartialEq)]
pub struct Rbm {
    num_visible: usize,
    num_hidden: usize,
    pub(crate) weights: Array2<f64>,
}

impl Rbm {
    /// 기본 시드(1235)로 엔진 생성
    pub fn new(num_visible: usize, num_hidden: usize) -> RbmResult<Self> {
        Self::with_seed(num_visible, num_hidden, DEFAULT_SEED)
    }

    /// 지정한 시드로 초기화 스트림을 만들어 엔진 생성
    pub fn with_seed(num_visible: usize, num_hidden: usize, seed: u64) -> RbmResult<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::from_rng(num_visible, num_hidden, &mut rng)
    }

    /// 주입된 초기화 스트림으로 엔진 생성
    ///
    /// V×H 블록을 ±0.1·sqrt(6/(V+H)) 균등 분포에서 행 우선으로 뽑고,
    /// 바이어스 행/열은 0으로 둔다.
    pub fn from_rng<R>(num_visible: usize, num_hidden: usize, rng: &mut R) -> RbmResult<Self>
    where
        R: Rng + ?Sized,
    {
        if num_visible == 0 || num_hidden == 0 {
            return Err(RbmError::InvalidDimension {
                num_visible,
                num_hidden,
            });
        }

        let bound = INIT_SCALE * (6.0 / (num_hidden + num_visible) as f64).sqrt();
        let dist = Uniform::new_inclusive(-bound, bound);
        let block = Array2::from_shape_fn((num_visible, num_hidden), |_| rng.sample(dist));

        let mut weights = Array2::<f64>::zeros((num_visible + 1, num_hidden + 1));
        weights.slice_mut(s![1.., 1..]).assign(&block);

        log::debug!(
            "RBM initialized: {} visible, {} hidden, init bound ±{:.6}",
            num_visible,
            num_hidden,
            bound
        );

        Ok(Self {
            num_visible,
            num_hidden,
            weights,
        })
    }

    /// 가시 유닛 수 (바이어스 제외)
    pub fn num_visible(&self) -> usize {
        self.num_visible
    }

    /// 은닉 유닛 수 (바이어스 제외)
    pub fn num_hidden(&self) -> usize {
        self.num_hidden
    }

    /// (V+1)×(H+1) 가중치 행렬
    pub fn weights(&self) -> &Array2<f64> {
        &self.weights
    }

    /// 데이터 열 수가 가시 유닛 수와 같은지 확인
    pub(crate) fn check_visible_columns(&self, columns: usize) -> RbmResult<()> {
        if columns != self.num_visible {
            return Err(RbmError::DimensionMismatch {
                expected: self.num_visible,
                actual: columns,
            });
        }
        Ok(())
    }
}
