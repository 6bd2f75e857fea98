use super::six_by_six;
use crate::core::engine::*;
use crate::core::error::RbmError;
use crate::core::math::sampler_rng;
use ndarray::{array, Array2};
use rand::Rng;

#[test]
fn 은닉_상태_형상_테스트() {
    let rbm = Rbm::new(6, 2).unwrap();
    let user = array![[0.0, 0.0, 0.0, 1.0, 1.0, 0.0]];
    let hidden = rbm.run_visible(&user, &mut sampler_rng(10)).unwrap();

    assert_eq!(hidden.dim(), (1, 2));
    assert!(hidden.iter().all(|&s| s == 0.0 || s == 1.0));
}

#[test]
fn 미학습_가중치_추론_허용_테스트() {
    let rbm = Rbm::with_seed(6, 4, 1).unwrap();
    let hidden = rbm.run_visible(&six_by_six(), &mut sampler_rng(2)).unwrap();
    assert_eq!(hidden.dim(), (6, 4));
}

#[test]
fn test_saturated_hidden_bias_drives_states() {
    // 은닉 바이어스 행(0번 행)으로 확률을 포화시키면 샘플링 결과가 결정적
    let mut rbm = Rbm::new(3, 2).unwrap();
    rbm.weights = Array2::zeros((4, 3));
    rbm.weights[[0, 1]] = 60.0;
    rbm.weights[[0, 2]] = -60.0;

    let data = array![[1.0, 0.0, 1.0], [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]];
    let hidden = rbm.run_visible(&data, &mut sampler_rng(123)).unwrap();

    assert_eq!(hidden, array![[1.0, 0.0], [1.0, 0.0], [1.0, 0.0]]);
}

#[test]
fn test_bias_column_draw_is_consumed_and_discarded() {
    let rbm = Rbm::new(6, 2).unwrap();
    let data = six_by_six();

    let mut rng = sampler_rng(55);
    let _ = rbm.run_visible(&data, &mut rng).unwrap();

    // N × (H+1) 개의 난수를 소비해야 함
    let mut reference = sampler_rng(55);
    for _ in 0..6 * 3 {
        let _: f64 = reference.gen();
    }
    assert_eq!(rng.gen::<u64>(), reference.gen::<u64>());
}

#[test]
fn test_inference_does_not_touch_weights() {
    let rbm = Rbm::new(6, 2).unwrap();
    let before = rbm.clone();
    let _ = rbm.run_visible(&six_by_six(), &mut sampler_rng(0)).unwrap();
    assert_eq!(rbm, before);
}

#[test]
fn test_inference_deterministic_for_fixed_stream() {
    let rbm = Rbm::with_seed(6, 5, 8).unwrap();
    let data = six_by_six();

    let a = rbm.run_visible(&data, &mut sampler_rng(31)).unwrap();
    let b = rbm.run_visible(&data, &mut sampler_rng(31)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_empty_input_yields_empty_output() {
    let rbm = Rbm::new(4, 3).unwrap();
    let data = Array2::<f64>::zeros((0, 4));
    let hidden = rbm.run_visible(&data, &mut sampler_rng(0)).unwrap();
    assert_eq!(hidden.dim(), (0, 3));
}

#[test]
fn 추론_차원_불일치_테스트() {
    let rbm = Rbm::new(6, 2).unwrap();
    let data = array![[1.0, 0.0]];
    assert_eq!(
        rbm.run_visible(&data, &mut sampler_rng(0)).unwrap_err(),
        RbmError::DimensionMismatch {
            expected: 6,
            actual: 2
        }
    );
}
