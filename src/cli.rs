//! Command-line front end
//!
//! Five positional arguments drive one run: generate a random system, reduce
//! it, solve it when square, and report the compute time. Argument validation
//! maps to distinct exit codes so scripts can tell the failure modes apart.

use std::io::{self, Write};

use clap::Parser;
use log::debug;
use rand::Rng;

use crate::eliminate;
use crate::generate;
use crate::report::{self, DEFAULT_PRECISION, Stopwatch};

/// Usage text printed when the argument list does not parse.
pub const USAGE: &str = "Argument #1: Number of rows\n\
    Argument #2: Number of columns\n\
    Argument #3: Lower bound of the random variables interval\n\
    Argument #4: Upper bound of the random variables interval\n\
    Argument #5: 1 for printing initial and final matrices, and 0 for not printing anything\n";

/// Exit code for an argument list that does not parse.
pub const EXIT_USAGE: u8 = 1;
/// Exit code for an upper bound below the lower bound.
pub const EXIT_BAD_BOUNDS: u8 = 2;
/// Exit code for a print flag outside {0, 1}.
pub const EXIT_BAD_PRINT_FLAG: u8 = 3;

/// Positional arguments for one solver run.
#[derive(Parser, Debug)]
#[command(
    name = "gausselim",
    about = "Solve a random dense linear system by Gaussian elimination with partial pivoting",
    allow_negative_numbers = true
)]
pub struct Cli {
    /// Number of rows
    pub rows: usize,

    /// Number of columns
    pub cols: usize,

    /// Lower bound of the random variables interval
    pub lower_bound: f64,

    /// Upper bound of the random variables interval
    pub upper_bound: f64,

    /// 1 for printing initial and final matrices, 0 for not printing anything
    pub print_results: i64,
}

/// Execute one run against the given random source and output stream.
///
/// Returns the process exit code. All diagnostics go to `out`; the only
/// failure surfaced as `Err` is a write error on the stream itself.
pub fn run<R, W>(cli: &Cli, rng: &mut R, out: &mut W) -> io::Result<u8>
where
    R: Rng + ?Sized,
    W: Write,
{
    if cli.upper_bound < cli.lower_bound {
        writeln!(
            out,
            "Upper bound of the random values interval cannot be lower than the lower bound."
        )?;
        return Ok(EXIT_BAD_BOUNDS);
    }

    if cli.print_results != 0 && cli.print_results != 1 {
        writeln!(out, "Argument #5 should be either 0 or 1.")?;
        return Ok(EXIT_BAD_PRINT_FLAG);
    }
    let verbose = cli.print_results == 1;

    let mut system = match generate::random_system(
        rng,
        cli.rows,
        cli.cols,
        cli.lower_bound,
        cli.upper_bound,
    ) {
        Ok(system) => system,
        Err(err) => {
            writeln!(out, "{err}")?;
            return Ok(EXIT_BAD_BOUNDS);
        }
    };

    if verbose {
        writeln!(out, "Coefficient matrix:\nA =")?;
        write!(out, "{}", report::format_matrix(system.matrix(), DEFAULT_PRECISION))?;
        writeln!(out, "\nRight-hand side vector:\nb =")?;
        write!(out, "{}", report::format_vector(system.rhs(), DEFAULT_PRECISION))?;
    }

    // No I/O inside the timed region.
    let stopwatch = Stopwatch::start();
    let echelon = eliminate::reduce_system(&mut system);
    let x = if system.rows() == system.cols() {
        eliminate::back_substitute(&system).ok()
    } else {
        None
    };
    let elapsed = stopwatch.elapsed_secs();

    debug!(
        "reduced {}x{} system: rank {}, {} row swaps",
        system.rows(),
        system.cols(),
        echelon.rank(),
        echelon.swaps()
    );

    if verbose {
        writeln!(out, "\nRow echelon form of coefficient matrix:\nAref =")?;
        write!(out, "{}", report::format_matrix(system.matrix(), DEFAULT_PRECISION))?;
        if let Some(x) = &x {
            writeln!(out, "\nx =")?;
            write!(out, "{}", report::format_vector(x, DEFAULT_PRECISION))?;
        }
        writeln!(out)?;
    }

    writeln!(out, "Elapsed time: {elapsed:.4} sec.")?;
    Ok(0)
}
