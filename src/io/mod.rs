pub mod image;

pub use self::image::{image_bytes_to_grayscale_matrix, load_grayscale_image};

use std::fs::File;

use crate::error::Result;
use crate::math::matrix::Matrix;

/// Opens a raw binary file of little-endian f32 values and loads it into
/// a matrix of the given shape. The file must hold exactly
/// `rows * cols * 4` bytes.
pub fn load_matrix(path: &str, rows: usize, cols: usize) -> Result<Matrix> {
    let mut file = File::open(path)?;
    let mut matrix = Matrix::zeros(rows, cols)?;
    matrix.read_binary(&mut file)?;
    Ok(matrix)
}
