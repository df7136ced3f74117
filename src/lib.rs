//! # gausselim
//!
//! **Dense linear system solver: Gaussian elimination with partial pivoting.**
//!
//! gausselim generates a random coefficient matrix `A` and right-hand side
//! vector `b`, reduces `A` to row-echelon form in place, and back-substitutes
//! for the solution vector `x` when the system is square.
//!
//! ## Quick Start
//!
//! ```rust
//! use gausselim::prelude::*;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut system = random_system(&mut rng, 8, 8, -10.0, 10.0)?;
//! let original = system.clone();
//!
//! let (x, report) = solve(&mut system)?;
//! assert_eq!(report.rank(), 8);
//!
//! // x satisfies the original equations
//! let ax = original.matrix().mul_vec(&x)?;
//! for (lhs, rhs) in ax.iter().zip(original.rhs()) {
//!     assert!((lhs - rhs).abs() < 1e-6 * (1.0 + rhs.abs()));
//! }
//! # Ok::<(), gausselim::error::Error>(())
//! ```
//!
//! ## Design notes
//!
//! - The matrix and right-hand side travel together as a [`system::LinearSystem`],
//!   so row swaps cannot desynchronize them.
//! - The random source is caller-supplied; seed a `StdRng` for reproducible
//!   systems.
//! - Pivot selection uses an exact `== 0.0` test to skip empty columns; tiny
//!   nonzero pivots are still used, as in classic partial pivoting.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod eliminate;
pub mod error;
pub mod generate;
pub mod matrix;
pub mod report;
pub mod system;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::eliminate::{EchelonReport, back_substitute, reduce, reduce_system, solve};
    pub use crate::error::{Error, Result};
    pub use crate::generate::{random_matrix, random_system, random_vector};
    pub use crate::matrix::Matrix;
    pub use crate::system::LinearSystem;
}
