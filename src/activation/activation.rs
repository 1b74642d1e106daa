use serde::{Serialize, Deserialize};

use crate::error::{MlpError, Result};
use crate::math::matrix::Matrix;

/// The two activation kinds the network uses. Selected at construction
/// and immutable afterwards; carries no state of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activation {
    ReLU,
    /// Softmax is vector-valued: it normalizes over every element of the
    /// input matrix, not element by element.
    Softmax,
}

impl Activation {
    /// Parses an activation selector as it appears in CLI arguments or
    /// config text. The enum itself cannot hold an invalid kind, so this
    /// is the only place an unrecognized selector can surface.
    pub fn from_name(name: &str) -> Result<Activation> {
        match name {
            "relu" => Ok(Activation::ReLU),
            "softmax" => Ok(Activation::Softmax),
            other => Err(MlpError::InvalidActivation(other.to_string())),
        }
    }

    /// Applies the activation to a matrix, yielding a new one.
    pub fn apply(&self, m: &Matrix) -> Matrix {
        match self {
            Activation::ReLU => relu(m),
            Activation::Softmax => softmax(m),
        }
    }
}

/// Elementwise max(0, x).
fn relu(m: &Matrix) -> Matrix {
    m.map(|x| if x < 0.0 { 0.0 } else { x })
}

/// exp every element, then divide by the sum of exponentials. No
/// max-subtraction stability shift: large positive inputs overflow to
/// infinity.
fn softmax(m: &Matrix) -> Matrix {
    let exps = m.map(f32::exp);
    let sum: f32 = exps.as_slice().iter().sum();
    exps.scale(1.0 / sum)
}
