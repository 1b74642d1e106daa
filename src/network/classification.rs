use serde::{Serialize, Deserialize};

use crate::math::matrix::Matrix;

/// The network's verdict for one input image: the best-scoring digit
/// class and the probability the final Softmax layer assigned to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Digit class in [0, 9].
    pub value: usize,
    pub probability: f32,
}

impl Classification {
    /// Argmax reduction over an output vector: scan in index order and
    /// keep the first index whose value is strictly greater than the best
    /// seen so far, starting from probability 0.0. Among equal maxima the
    /// lowest index wins. The index starts at 0, so an output with no
    /// positive element (unreachable from a finite Softmax) classifies as
    /// 0 rather than being left undefined.
    pub fn from_output(output: &Matrix) -> Classification {
        let mut value = 0;
        let mut probability = 0.0;
        for (i, &p) in output.as_slice().iter().enumerate() {
            if p > probability {
                probability = p;
                value = i;
            }
        }
        Classification { value, probability }
    }
}
