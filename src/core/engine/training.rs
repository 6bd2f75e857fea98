//! # CD-1 학습
//!
//! 양의 단계(데이터 고정)와 음의 단계(재구성) 연관 행렬 차이로
//! 가중치를 경사 상승한다. 연관 항에는 상태가 아닌 확률을 쓴다.

use ndarray::Array2;
use rand::Rng;

use super::config::TrainingConfig;
use super::diagnostics::{DiagnosticsSink, EpochReport, LogSink};
use super::rbm::Rbm;
use crate::core::error::{RbmError, RbmResult};
use crate::core::math::{augment_with_bias, logistic_inplace, sample_states};

impl Rbm {
    /// CD-1 학습. 진단이 켜져 있으면 에포크별 오차를 `log`로 보고한다.
    pub fn train<R>(
        &mut self,
        data: &Array2<f64>,
        config: &TrainingConfig,
        rng: &mut R,
    ) -> RbmResult<()>
    where
        R: Rng + ?Sized,
    {
        self.train_with_sink(data, config, rng, &mut LogSink)
    }

    /// CD-1 학습, 에포크 보고를 `sink`로 전달
    ///
    /// 검증은 가중치를 건드리기 전에 끝나므로 실패 시 가중치는 그대로다.
    pub fn train_with_sink<R, K>(
        &mut self,
        data: &Array2<f64>,
        config: &TrainingConfig,
        rng: &mut R,
        sink: &mut K,
    ) -> RbmResult<()>
    where
        R: Rng + ?Sized,
        K: DiagnosticsSink + ?Sized,
    {
        self.check_visible_columns(data.ncols())?;
        config.validate()?;
        let num_examples = data.nrows();
        if num_examples == 0 {
            return Err(RbmError::InvalidParameter(
                "training data must contain at least one example".to_string(),
            ));
        }

        log::info!(
            "Training RBM: {} examples, {} visible, {} hidden, {} epochs, learning rate {}",
            num_examples,
            self.num_visible(),
            self.num_hidden(),
            config.max_epochs,
            config.learning_rate
        );

        let data = augment_with_bias(data);
        let step = config.learning_rate / num_examples as f64;

        for epoch in 0..config.max_epochs {
            let error = self.contrastive_divergence_step(&data, step, config.diagnostics, rng);
            log::debug!("epoch {} of {} applied", epoch + 1, config.max_epochs);

            if let Some(reconstruction_error) = error {
                sink.record(&EpochReport {
                    epoch,
                    reconstruction_error,
                });
            }
        }

        log::info!("Training finished after {} epochs", config.max_epochs);
        Ok(())
    }

    /// 한 에포크의 CD-1 갱신. `want_error`이면 재구성 오차를 돌려준다.
    fn contrastive_divergence_step<R>(
        &mut self,
        data: &Array2<f64>,
        step: f64,
        want_error: bool,
        rng: &mut R,
    ) -> Option<f64>
    where
        R: Rng + ?Sized,
    {
        // 양의 단계: 데이터에 고정하고 은닉 유닛을 샘플링
        let mut pos_hidden_probs = data.dot(&self.weights);
        logistic_inplace(&mut pos_hidden_probs);
        pos_hidden_probs.column_mut(0).fill(1.0);
        let pos_hidden_states = sample_states(&pos_hidden_probs, rng);
        let pos_associations = data.t().dot(&pos_hidden_probs);

        // 음의 단계: 가시 유닛을 재구성한 뒤 은닉 확률을 다시 계산
        let mut neg_visible_probs = pos_hidden_states.dot(&self.weights.t());
        logistic_inplace(&mut neg_visible_probs);
        neg_visible_probs.column_mut(0).fill(1.0);
        // 음의 은닉 바이어스 확률은 1로 고정하지 않는다
        let mut neg_hidden_probs = neg_visible_probs.dot(&self.weights);
        logistic_inplace(&mut neg_hidden_probs);
        let neg_associations = neg_visible_probs.t().dot(&neg_hidden_probs);

        self.weights
            .scaled_add(step, &(&pos_associations - &neg_associations));
        // 바이어스-바이어스 자리는 사용하지 않음
        self.weights[[0, 0]] = 0.0;

        want_error.then(|| {
            (data - &neg_visible_probs)
                .mapv(|d| d * d)
                .sum()
        })
    }
}
