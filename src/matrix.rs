//! Dense row-major matrix storage
//!
//! The elimination engine works on a flat `Vec<f64>` with row-major layout,
//! so `Matrix` keeps entries contiguous and exposes both `(row, col)` indexing
//! and whole-row slices.

use std::ops::{Index, IndexMut};

use crate::error::{Error, Result};

/// Dense `rows x cols` matrix of f64 entries, row-major, mutated in place
/// during elimination.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Create a matrix filled with zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Create a matrix from a flat row-major slice.
    pub fn from_slice(data: &[f64], rows: usize, cols: usize) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(Error::ShapeMismatch {
                expected: vec![rows, cols],
                got: vec![data.len()],
            });
        }
        Ok(Self {
            data: data.to_vec(),
            rows,
            cols,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row `i` as a slice of `cols` entries.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Swap rows `i` and `j` in full (all columns).
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        for col in 0..self.cols {
            self.data.swap(i * self.cols + col, j * self.cols + col);
        }
    }

    /// Flat row-major view of the entries.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Mutable flat row-major view of the entries.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Matrix-vector product `A * x`. Used to check solutions against the
    /// original equations.
    pub fn mul_vec(&self, x: &[f64]) -> Result<Vec<f64>> {
        if x.len() != self.cols {
            return Err(Error::ShapeMismatch {
                expected: vec![self.cols],
                got: vec![x.len()],
            });
        }
        let mut out = vec![0.0; self.rows];
        for (i, out_i) in out.iter_mut().enumerate() {
            let mut sum = 0.0;
            for (a_ij, x_j) in self.row(i).iter().zip(x) {
                sum += a_ij * x_j;
            }
            *out_i = sum;
        }
        Ok(out)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        &mut self.data[row * self.cols + col]
    }
}
