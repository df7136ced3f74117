//! Fixed-point rendering and compute-phase timing

use std::fmt::Write;
use std::time::Instant;

use crate::matrix::Matrix;

/// Decimal places used by the CLI for matrices, vectors, and the elapsed
/// time line.
pub const DEFAULT_PRECISION: usize = 4;

/// Render a matrix with fixed-point entries: `precision` decimal places,
/// entries space-separated, one row per line.
pub fn format_matrix(a: &Matrix, precision: usize) -> String {
    let mut out = String::new();
    for i in 0..a.rows() {
        for val in a.row(i) {
            let _ = write!(out, "{val:.precision$} ");
        }
        out.push('\n');
    }
    out
}

/// Render a vector on a single line, fixed-point, space-separated.
pub fn format_vector(v: &[f64], precision: usize) -> String {
    let mut out = String::new();
    for val in v {
        let _ = write!(out, "{val:.precision$} ");
    }
    out.push('\n');
    out
}

/// Monotonic stopwatch around the elimination/substitution phase.
#[derive(Debug)]
pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    /// Start timing.
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Seconds elapsed since start.
    pub fn elapsed_secs(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }
}
