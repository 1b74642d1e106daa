use serde::{Serialize, Deserialize};

use crate::error::Result;
use crate::layers::dense::Dense;
use crate::math::matrix::Matrix;
use crate::network::classification::Classification;
use crate::network::topology::{ACTIVATIONS, MLP_SIZE};

/// The fixed four-layer digit classifier. Owns its layers exclusively;
/// immutable after construction, so independent inferences may run
/// concurrently against the same network.
#[derive(Serialize, Deserialize)]
pub struct MlpNetwork {
    layers: [Dense; MLP_SIZE],
}

impl MlpNetwork {
    /// Builds the network from one weight and one bias matrix per layer,
    /// with the fixed ReLU/ReLU/ReLU/Softmax assignment. Shapes are not
    /// validated here; a matrix that disagrees with the topology surfaces
    /// as `ShapeMismatch` from the first incompatible layer in `apply`.
    pub fn new(weights: [Matrix; MLP_SIZE], biases: [Matrix; MLP_SIZE]) -> MlpNetwork {
        let [w0, w1, w2, w3] = weights;
        let [b0, b1, b2, b3] = biases;
        MlpNetwork {
            layers: [
                Dense::new(w0, b0, ACTIVATIONS[0]),
                Dense::new(w1, b1, ACTIVATIONS[1]),
                Dense::new(w2, b2, ACTIVATIONS[2]),
                Dense::new(w3, b3, ACTIVATIONS[3]),
            ],
        }
    }

    pub fn layers(&self) -> &[Dense; MLP_SIZE] {
        &self.layers
    }

    /// Runs a vectorized input through all four layers in order and
    /// reduces the final 10-element Softmax output to a classification.
    /// The network's parameters are never mutated.
    pub fn apply(&self, input: Matrix) -> Result<Classification> {
        let mut current = input;
        for layer in &self.layers {
            current = layer.apply(&current)?;
        }
        Ok(Classification::from_output(&current))
    }

    /// Writes all four layers' parameters to `path` as pretty-printed
    /// JSON, an editable alternative to the raw per-matrix binary files.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let writer = std::io::BufWriter::new(std::fs::File::create(path)?);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Reads a network back from a file written by [`MlpNetwork::save_json`].
    pub fn load_json(path: &str) -> std::io::Result<MlpNetwork> {
        let reader = std::io::BufReader::new(std::fs::File::open(path)?);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}
