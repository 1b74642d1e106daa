use thiserror::Error;

/// All failure conditions surfaced by the matrix library and the network
/// built on top of it. Every fallible operation returns one of these
/// instead of aborting; the caller decides whether a failure is fatal.
#[derive(Error, Debug)]
pub enum MlpError {
    /// Matrix rows and cols must both be strictly positive.
    #[error("matrix dimensions must be strictly positive, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    /// Operand shapes are incompatible for the attempted operation.
    #[error("incompatible matrix shapes {lhs_rows}x{lhs_cols} and {rhs_rows}x{rhs_cols} for {op}")]
    ShapeMismatch {
        op: &'static str,
        lhs_rows: usize,
        lhs_cols: usize,
        rhs_rows: usize,
        rhs_cols: usize,
    },

    /// (i, j) element access outside [0, rows) x [0, cols).
    #[error("index ({row}, {col}) out of range for a {rows}x{cols} matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Flat element access outside [0, rows * cols).
    #[error("flat index {index} out of range for a matrix of {len} elements")]
    FlatIndexOutOfRange { index: usize, len: usize },

    /// Byte count of a binary source does not match the target matrix.
    #[error("expected {expected} bytes but got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Unrecognized activation selector (parsing only; the enum itself
    /// cannot hold an invalid kind).
    #[error("invalid activation {0:?}, expected \"relu\" or \"softmax\"")]
    InvalidActivation(String),

    #[error("image decode error: {0}")]
    Image(String),
}

pub type Result<T> = std::result::Result<T, MlpError>;
