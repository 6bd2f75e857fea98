pub mod activation;
pub mod sampling;


// 재수출
pub use activation::*;
pub use sampling::*;
