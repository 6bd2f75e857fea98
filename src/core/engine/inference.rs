//! 가시 → 은닉 추론

use ndarray::{s, Array2};
use rand::Rng;

use super::rbm::Rbm;
use crate::core::error::RbmResult;
use crate::core::math::{augment_with_bias, logistic_inplace, sample_states};

impl Rbm {
    /// 가시 데이터(N×V)에서 은닉 상태(N×H, 0/1)를 샘플링
    ///
    /// 바이어스 열도 일반 계산대로 샘플링(난수 소비)한 뒤 버린다.
    /// 학습과 달리 샘플링 전에 바이어스 확률을 1로 고정하지 않는다.
    pub fn run_visible<R>(&self, data: &Array2<f64>, rng: &mut R) -> RbmResult<Array2<f64>>
    where
        R: Rng + ?Sized,
    {
        self.check_visible_columns(data.ncols())?;

        let data = augment_with_bias(data);
        let mut hidden_probs = data.dot(&self.weights);
        logistic_inplace(&mut hidden_probs);
        let hidden_states = sample_states(&hidden_probs, rng);

        log::trace!("run_visible: sampled {} hidden rows", hidden_states.nrows());
        Ok(hidden_states.slice(s![.., 1..]).to_owned())
    }
}
