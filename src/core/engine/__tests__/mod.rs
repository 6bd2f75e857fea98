pub mod inference_test;

use ndarray::{array, Array2};

/// 6×6 이진 학습 데이터 (두 개의 군집)
pub(crate) fn six_by_six() -> Array2<f64> {
    array![
        [1.0, 1.0, 1.0, 0.0, 0.0, 0.0],
        [1.0, 0.0, 1.0, 0.0, 0.0, 0.0],
        [1.0, 1.0, 1.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 1.0, 1.0, 0.0],
        [0.0, 0.0, 1.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 1.0, 1.0, 0.0],
    ]
}
