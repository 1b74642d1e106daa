use crate::activation::activation::Activation;

/// Matrix dimensions as (rows, cols).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixDims {
    pub rows: usize,
    pub cols: usize,
}

/// Number of layers in the network. The topology is part of the system's
/// contract, not configuration.
pub const MLP_SIZE: usize = 4;

/// Shape of the raw input image.
pub const IMAGE_DIMS: MatrixDims = MatrixDims { rows: 28, cols: 28 };

/// Per-layer weight shapes, input side to output side.
pub const WEIGHT_DIMS: [MatrixDims; MLP_SIZE] = [
    MatrixDims { rows: 128, cols: 784 },
    MatrixDims { rows: 64, cols: 128 },
    MatrixDims { rows: 20, cols: 64 },
    MatrixDims { rows: 10, cols: 20 },
];

/// Per-layer bias shapes; always a column vector matching the weight rows.
pub const BIAS_DIMS: [MatrixDims; MLP_SIZE] = [
    MatrixDims { rows: 128, cols: 1 },
    MatrixDims { rows: 64, cols: 1 },
    MatrixDims { rows: 20, cols: 1 },
    MatrixDims { rows: 10, cols: 1 },
];

/// Fixed activation assignment: ReLU on the hidden layers, Softmax on the
/// output layer.
pub const ACTIVATIONS: [Activation; MLP_SIZE] = [
    Activation::ReLU,
    Activation::ReLU,
    Activation::ReLU,
    Activation::Softmax,
];
