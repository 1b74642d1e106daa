use rand::prelude::*;
use serde::{Serialize, Deserialize};
use std::fmt;
use std::io::Read;

use crate::error::{MlpError, Result};

/// Pixel values below this render as a filled glyph in the `Display`
/// image rendering; values at or above it render blank.
const RENDER_THRESHOLD: f32 = 0.1;

/// A dense 2-D matrix of `f32` values.
///
/// The buffer is a single flat `Vec` in row-major order: element (i, j)
/// lives at offset `i * cols + j`. The fields are private so that
/// `data.len() == rows * cols` and `rows, cols >= 1` hold for the whole
/// lifetime of a value; `Clone` deep-copies the buffer, so no two live
/// matrices ever share storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl Matrix {
    /// Zero-filled matrix of the given shape. Both dimensions must be
    /// strictly positive.
    pub fn zeros(rows: usize, cols: usize) -> Result<Matrix> {
        if rows == 0 || cols == 0 {
            return Err(MlpError::InvalidDimensions { rows, cols });
        }
        Ok(Matrix {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        })
    }

    /// Builds a matrix around an existing row-major buffer.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f32>) -> Result<Matrix> {
        if rows == 0 || cols == 0 {
            return Err(MlpError::InvalidDimensions { rows, cols });
        }
        if data.len() != rows * cols {
            return Err(MlpError::SizeMismatch {
                expected: rows * cols,
                actual: data.len(),
            });
        }
        Ok(Matrix { rows, cols, data })
    }

    /// Matrix with elements drawn uniformly from [-1, 1).
    pub fn random(rows: usize, cols: usize) -> Result<Matrix> {
        let mut rng = rand::thread_rng();
        let mut res = Matrix::zeros(rows, cols)?;
        for x in res.data.iter_mut() {
            *x = rng.gen::<f32>() * 2.0 - 1.0;
        }
        Ok(res)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of elements (`rows * cols`).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The underlying row-major buffer.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Elementwise sum. Requires identical shapes.
    pub fn add(&self, rhs: &Matrix) -> Result<Matrix> {
        self.require_same_shape(rhs, "add")?;
        let data = self.data.iter().zip(rhs.data.iter()).map(|(a, b)| a + b).collect();
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    /// Elementwise sum into `self`. Requires identical shapes.
    pub fn add_in_place(&mut self, rhs: &Matrix) -> Result<()> {
        self.require_same_shape(rhs, "add")?;
        for (a, b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a += b;
        }
        Ok(())
    }

    /// Elementwise (Hadamard) product. Requires identical shapes; this is
    /// NOT the linear-algebra matrix product (see [`Matrix::matmul`]).
    pub fn hadamard(&self, rhs: &Matrix) -> Result<Matrix> {
        self.require_same_shape(rhs, "hadamard")?;
        let data = self.data.iter().zip(rhs.data.iter()).map(|(a, b)| a * b).collect();
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    /// Matrix product. Requires `self.cols == rhs.rows`; the result has
    /// shape `self.rows x rhs.cols`.
    pub fn matmul(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.cols != rhs.rows {
            return Err(MlpError::ShapeMismatch {
                op: "matmul",
                lhs_rows: self.rows,
                lhs_cols: self.cols,
                rhs_rows: rhs.rows,
                rhs_cols: rhs.cols,
            });
        }

        let mut res = Matrix {
            rows: self.rows,
            cols: rhs.cols,
            data: vec![0.0; self.rows * rhs.cols],
        };
        for i in 0..self.rows {
            for j in 0..rhs.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.data[i * self.cols + k] * rhs.data[k * rhs.cols + j];
                }
                res.data[i * res.cols + j] = sum;
            }
        }
        Ok(res)
    }

    /// Elementwise product with a scalar.
    pub fn scale(&self, scalar: f32) -> Matrix {
        self.map(|x| x * scalar)
    }

    /// Applies `functor` to every element, yielding a new matrix.
    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f32) -> f32,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&x| functor(x)).collect(),
        }
    }

    /// Transposes in place: element (i, j) moves to (j, i) and the shape
    /// becomes `cols x rows`. Physically reorders the buffer.
    pub fn transpose(&mut self) {
        let mut transposed = vec![0.0; self.data.len()];
        for i in 0..self.rows {
            for j in 0..self.cols {
                transposed[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        self.data = transposed;
        std::mem::swap(&mut self.rows, &mut self.cols);
    }

    /// Reshapes in place to a single `(rows * cols) x 1` column. The
    /// buffer is untouched; the column reads in row-major element order.
    pub fn vectorize(&mut self) {
        self.rows *= self.cols;
        self.cols = 1;
    }

    /// Value of element (i, j).
    pub fn at(&self, row: usize, col: usize) -> Result<f32> {
        self.check_index(row, col)?;
        Ok(self.data[row * self.cols + col])
    }

    /// Mutable reference to element (i, j).
    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut f32> {
        self.check_index(row, col)?;
        let cols = self.cols;
        Ok(&mut self.data[row * cols + col])
    }

    /// Value at flat row-major offset `index`.
    pub fn at_flat(&self, index: usize) -> Result<f32> {
        self.check_flat_index(index)?;
        Ok(self.data[index])
    }

    /// Mutable reference to the element at flat row-major offset `index`.
    pub fn at_flat_mut(&mut self, index: usize) -> Result<&mut f32> {
        self.check_flat_index(index)?;
        Ok(&mut self.data[index])
    }

    /// Frobenius norm: sqrt of the sum of squared elements.
    pub fn norm(&self) -> f32 {
        self.data.iter().map(|x| x * x).sum::<f32>().sqrt()
    }

    /// Fills this matrix from a raw binary stream of little-endian `f32`
    /// values in row-major order. The stream must hold exactly
    /// `rows * cols * 4` bytes for the matrix's already-set shape; the
    /// shape is never inferred from the stream length.
    pub fn read_binary<R: Read>(&mut self, reader: &mut R) -> Result<()> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;

        let expected = self.data.len() * std::mem::size_of::<f32>();
        if bytes.len() != expected {
            return Err(MlpError::SizeMismatch {
                expected,
                actual: bytes.len(),
            });
        }

        for (slot, chunk) in self.data.iter_mut().zip(bytes.chunks_exact(4)) {
            *slot = f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Ok(())
    }

    /// Prints the raw element values, one matrix row per line.
    pub fn plain_print(&self) {
        for i in 0..self.rows {
            for j in 0..self.cols {
                print!("{} ", self.data[i * self.cols + j]);
            }
            println!();
        }
    }

    fn require_same_shape(&self, rhs: &Matrix, op: &'static str) -> Result<()> {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            return Err(MlpError::ShapeMismatch {
                op,
                lhs_rows: self.rows,
                lhs_cols: self.cols,
                rhs_rows: rhs.rows,
                rhs_cols: rhs.cols,
            });
        }
        Ok(())
    }

    fn check_index(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(MlpError::IndexOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    fn check_flat_index(&self, index: usize) -> Result<()> {
        if index >= self.data.len() {
            return Err(MlpError::FlatIndexOutOfRange {
                index,
                len: self.data.len(),
            });
        }
        Ok(())
    }
}

/// ASCII rendering of an image-shaped matrix: dark pixels (below the
/// brightness threshold) print as `**`, bright ones as blank.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            for j in 0..self.cols {
                if self.data[i * self.cols + j] < RENDER_THRESHOLD {
                    write!(f, "**")?;
                } else {
                    write!(f, "  ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
