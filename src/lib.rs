pub mod error;
pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod io;

// Convenience re-exports
pub use error::{MlpError, Result};
pub use math::matrix::Matrix;
pub use activation::activation::Activation;
pub use layers::dense::Dense;
pub use network::network::MlpNetwork;
pub use network::classification::Classification;
pub use network::topology::{MatrixDims, BIAS_DIMS, IMAGE_DIMS, MLP_SIZE, WEIGHT_DIMS};
