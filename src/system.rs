//! Linear system `A x = b`
//!
//! Bundles the coefficient matrix and the right-hand side vector into one
//! value so row swaps and elimination updates always apply to both in
//! lockstep. Keeping them in separate variables is how the two arrays drift
//! out of sync.

use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// A dense linear system: coefficient matrix `A` paired with right-hand side
/// vector `b`, one entry of `b` per row of `A`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystem {
    a: Matrix,
    b: Vec<f64>,
}

impl LinearSystem {
    /// Pair a matrix with a right-hand side vector. `b` must have one entry
    /// per matrix row.
    pub fn new(a: Matrix, b: Vec<f64>) -> Result<Self> {
        if b.len() != a.rows() {
            return Err(Error::ShapeMismatch {
                expected: vec![a.rows()],
                got: vec![b.len()],
            });
        }
        Ok(Self { a, b })
    }

    /// Coefficient matrix.
    pub fn matrix(&self) -> &Matrix {
        &self.a
    }

    /// Right-hand side vector.
    pub fn rhs(&self) -> &[f64] {
        &self.b
    }

    /// Number of equations (rows).
    pub fn rows(&self) -> usize {
        self.a.rows()
    }

    /// Number of unknowns (columns).
    pub fn cols(&self) -> usize {
        self.a.cols()
    }

    /// Swap equations `i` and `j`: the matrix row and the paired `b` entry
    /// move together.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        self.a.swap_rows(i, j);
        self.b.swap(i, j);
    }

    /// Split into mutable matrix and right-hand side for the elimination
    /// kernel.
    pub(crate) fn parts_mut(&mut self) -> (&mut Matrix, &mut [f64]) {
        (&mut self.a, &mut self.b)
    }

    /// Take the system apart.
    pub fn into_parts(self) -> (Matrix, Vec<f64>) {
        (self.a, self.b)
    }
}
