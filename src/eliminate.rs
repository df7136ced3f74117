//! Gaussian elimination with partial pivoting
//!
//! Forward elimination reduces the coefficient matrix to row-echelon form in
//! place; partial pivoting (largest absolute value in the pivot column) keeps
//! the elimination factors bounded by 1 in magnitude, which is what makes the
//! reduction numerically stable. Back-substitution then recovers the unknowns
//! for square systems.
//!
//! Two modes share one kernel: [`reduce`] works on a bare matrix,
//! [`reduce_system`] and [`solve`] co-transform the right-hand side.

use log::debug;

use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::system::LinearSystem;

/// Summary of a forward-elimination pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EchelonReport {
    pivot_cols: Vec<usize>,
    swaps: usize,
}

impl EchelonReport {
    /// Pivot column chosen for each pivot row, strictly increasing.
    pub fn pivot_cols(&self) -> &[usize] {
        &self.pivot_cols
    }

    /// Number of pivot rows, i.e. the rank of the reduced matrix.
    pub fn rank(&self) -> usize {
        self.pivot_cols.len()
    }

    /// Number of row swaps performed.
    pub fn swaps(&self) -> usize {
        self.swaps
    }
}

/// Forward elimination over the matrix alone; the right-hand side (if any)
/// is untouched.
pub fn reduce(a: &mut Matrix) -> EchelonReport {
    eliminate_in_place(a, None)
}

/// Forward elimination over the full system: every row swap and combination
/// applied to the matrix is mirrored on the right-hand side.
pub fn reduce_system(system: &mut LinearSystem) -> EchelonReport {
    let (a, b) = system.parts_mut();
    eliminate_in_place(a, Some(b))
}

/// Reduce a square system and back-substitute for the unknowns.
///
/// Returns the solution vector alongside the elimination report. The system
/// is left in row-echelon form.
pub fn solve(system: &mut LinearSystem) -> Result<(Vec<f64>, EchelonReport)> {
    if system.rows() != system.cols() {
        return Err(Error::NotSquare {
            rows: system.rows(),
            cols: system.cols(),
        });
    }
    let report = reduce_system(system);
    let x = back_substitute(system)?;
    Ok((x, report))
}

/// Back-substitution over an already-reduced square system.
///
/// `x[i] = (b[i] - sum_{j>i} A[i][j] * x[j]) / A[i][i]`, computed in reverse
/// row order. A zero diagonal entry (singular system) divides to infinity or
/// NaN, which propagates into `x` rather than being reported.
pub fn back_substitute(system: &LinearSystem) -> Result<Vec<f64>> {
    let a = system.matrix();
    let n = a.cols();
    if a.rows() != n {
        return Err(Error::NotSquare {
            rows: a.rows(),
            cols: n,
        });
    }
    let b = system.rhs();

    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let mut s = 0.0;
        for j in (i + 1)..n {
            s += a[(i, j)] * x[j];
        }
        x[i] = (b[i] - s) / a[(i, i)];
    }
    Ok(x)
}

/// Shared elimination kernel. `b` is `Some` when the right-hand side must be
/// co-transformed, `None` in reduce-only mode.
fn eliminate_in_place(a: &mut Matrix, mut b: Option<&mut [f64]>) -> EchelonReport {
    let (m, n) = (a.rows(), a.cols());
    let data = a.as_mut_slice();

    let mut pivot_cols = Vec::new();
    let mut swaps = 0usize;

    let mut h = 0; // next pivot row
    let mut k = 0; // next pivot column
    while h < m && k < n {
        // Find the k-th pivot: first-max scan, so ties keep the smallest
        // row index.
        let mut i_max = h;
        let mut col_max = data[h * n + k].abs();
        for i in (h + 1)..m {
            let val = data[i * n + k].abs();
            if val > col_max {
                col_max = val;
                i_max = i;
            }
        }

        // Exact-zero test on purpose: a tiny nonzero pivot is still used,
        // matching classic partial-pivoting behavior.
        if data[i_max * n + k] == 0.0 {
            debug!("no pivot in column {k}, passing to the next column");
            k += 1;
            continue;
        }

        if i_max != h {
            for j in 0..n {
                data.swap(h * n + j, i_max * n + j);
            }
            if let Some(b) = b.as_deref_mut() {
                b.swap(h, i_max);
            }
            swaps += 1;
        }

        for i in (h + 1)..m {
            let f = data[i * n + k] / data[h * n + k];

            // Fill the lower part of the pivot column with exact zeros
            // instead of leaving rounding residue.
            data[i * n + k] = 0.0;

            for j in (k + 1)..n {
                let update = data[h * n + j] * f;
                data[i * n + j] -= update;
            }
            if let Some(b) = b.as_deref_mut() {
                let update = b[h] * f;
                b[i] -= update;
            }
        }

        pivot_cols.push(k);
        h += 1;
        k += 1;
    }

    EchelonReport { pivot_cols, swaps }
}
