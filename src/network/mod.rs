pub mod classification;
pub mod network;
pub mod topology;

pub use classification::Classification;
pub use network::MlpNetwork;
pub use topology::{MatrixDims, BIAS_DIMS, IMAGE_DIMS, MLP_SIZE, WEIGHT_DIMS};
