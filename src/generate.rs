//! Random generation of coefficient matrices and right-hand side vectors
//!
//! Entries are independent draws from a uniform continuous distribution over
//! the inclusive interval `[lower, upper]`. The random source is passed in by
//! the caller, so generation is deterministic under a seeded `StdRng` and
//! repeated calls within one process draw from the same evolving stream
//! instead of restarting an identically seeded default engine.

use log::debug;
use rand::Rng;
use rand::distr::Uniform;
use rand::prelude::Distribution;

use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::system::LinearSystem;

fn uniform(lower: f64, upper: f64) -> Result<Uniform<f64>> {
    if upper < lower {
        return Err(Error::InvalidBounds { lower, upper });
    }
    Uniform::new_inclusive(lower, upper).map_err(|_| Error::InvalidBounds { lower, upper })
}

/// Generate a `rows x cols` coefficient matrix with entries drawn uniformly
/// from `[lower, upper]`.
pub fn random_matrix<R: Rng + ?Sized>(
    rng: &mut R,
    rows: usize,
    cols: usize,
    lower: f64,
    upper: f64,
) -> Result<Matrix> {
    let dist = uniform(lower, upper)?;
    debug!("generating {rows}x{cols} matrix over [{lower}, {upper}]");

    let mut a = Matrix::zeros(rows, cols);
    for entry in a.as_mut_slice() {
        *entry = dist.sample(rng);
    }
    Ok(a)
}

/// Generate a right-hand side vector of `len` entries drawn uniformly from
/// `[lower, upper]`.
pub fn random_vector<R: Rng + ?Sized>(
    rng: &mut R,
    len: usize,
    lower: f64,
    upper: f64,
) -> Result<Vec<f64>> {
    let dist = uniform(lower, upper)?;

    let mut b = vec![0.0; len];
    for entry in &mut b {
        *entry = dist.sample(rng);
    }
    Ok(b)
}

/// Generate a full linear system: `rows x cols` matrix and matching
/// right-hand side, all entries from `[lower, upper]`.
pub fn random_system<R: Rng + ?Sized>(
    rng: &mut R,
    rows: usize,
    cols: usize,
    lower: f64,
    upper: f64,
) -> Result<LinearSystem> {
    let a = random_matrix(rng, rows, cols, lower, upper)?;
    let b = random_vector(rng, rows, lower, upper)?;
    LinearSystem::new(a, b)
}
