//! 확률적 샘플링과 바이어스 열 처리

use ndarray::{s, Array2, ArrayBase, Data, Ix2, Zip};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 시드 고정 샘플러 스트림 생성
pub fn sampler_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// 확률 행렬을 이진 상태로 샘플링
///
/// 행 우선 순서로 원소마다 [0, 1) 균등 난수를 하나씩 뽑고,
/// 확률이 난수보다 **엄격히 클 때만** 1.0이 된다.
pub fn sample_states<S, R>(probabilities: &ArrayBase<S, Ix2>, rng: &mut R) -> Array2<f64>
where
    S: Data<Elem = f64>,
    R: Rng + ?Sized,
{
    let draws = Array2::from_shape_fn(probabilities.raw_dim(), |_| rng.gen::<f64>());
    Zip::from(probabilities)
        .and(&draws)
        .map_collect(|&p, &u| if p > u { 1.0 } else { 0.0 })
}

/// 0번 열에 상수 1 바이어스 유닛을 끼워 넣은 N×(K+1) 행렬 반환
pub fn augment_with_bias<S>(data: &ArrayBase<S, Ix2>) -> Array2<f64>
where
    S: Data<Elem = f64>,
{
    let mut augmented = Array2::<f64>::ones((data.nrows(), data.ncols() + 1));
    augmented.slice_mut(s![.., 1..]).assign(data);
    augmented
}
