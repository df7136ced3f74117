//! Error types for gausselim

use thiserror::Error;

/// Result type alias using gausselim's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building or solving a linear system
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Shape mismatch in an operation
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Expected shape
        expected: Vec<usize>,
        /// Actual shape
        got: Vec<usize>,
    },

    /// Operation requires a square matrix
    #[error("Matrix is not square: {rows}x{cols}")]
    NotSquare {
        /// Row count
        rows: usize,
        /// Column count
        cols: usize,
    },

    /// Invalid random-value interval
    #[error("Invalid bounds: upper bound {upper} is below lower bound {lower}")]
    InvalidBounds {
        /// Inclusive lower bound
        lower: f64,
        /// Inclusive upper bound
        upper: f64,
    },
}
