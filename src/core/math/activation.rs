//! 로지스틱(시그모이드) 활성화
//!
//! σ(x) = 1 / (1 + e^(-x)). 극단값에서도 NaN 없이 0 또는 1로 포화된다.

use ndarray::{Array, ArrayBase, Data, Dimension};

/// 스칼라 로지스틱 함수
///
/// 음수 입력은 e^x / (1 + e^x) 형태로 계산해서 `exp` 오버플로를 피한다.
#[inline]
pub fn logistic(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

/// 행렬 전체에 로지스틱 적용 (같은 형상의 새 배열 반환)
pub fn logistic_matrix<S, D>(activations: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    activations.mapv(logistic)
}

/// 제자리 로지스틱
pub fn logistic_inplace<D: Dimension>(activations: &mut Array<f64, D>) {
    activations.mapv_inplace(logistic);
}
