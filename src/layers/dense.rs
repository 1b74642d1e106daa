use serde::{Serialize, Deserialize};

use crate::activation::activation::Activation;
use crate::error::Result;
use crate::math::matrix::Matrix;

/// One fully-connected layer: a linear transform (weights * input +
/// biases) followed by an activation. Immutable after construction; owns
/// its parameter matrices exclusively.
///
/// No shape cross-validation happens here. Incompatible weight/bias/input
/// shapes surface as `ShapeMismatch` from the matrix operations when the
/// layer is applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dense {
    weights: Matrix,
    biases: Matrix,
    activation: Activation,
}

impl Dense {
    pub fn new(weights: Matrix, biases: Matrix, activation: Activation) -> Dense {
        Dense {
            weights,
            biases,
            activation,
        }
    }

    pub fn weights(&self) -> &Matrix {
        &self.weights
    }

    pub fn biases(&self) -> &Matrix {
        &self.biases
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Forward pass: `activation(weights * input + biases)`. Pure given
    /// the layer's fixed parameters; `input` must be a column vector with
    /// `weights.cols` rows.
    pub fn apply(&self, input: &Matrix) -> Result<Matrix> {
        let mut z = self.weights.matmul(input)?;
        z.add_in_place(&self.biases)?;
        Ok(self.activation.apply(&z))
    }
}
