//! Command-line entry point for the gausselim solver.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use gausselim::cli::{self, Cli};

fn main() -> ExitCode {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(_) => {
            // wrong arity or unparseable numbers: usage on stdout
            print!("{}", cli::USAGE);
            return ExitCode::from(cli::EXIT_USAGE);
        }
    };

    let mut stdout = io::stdout().lock();
    match cli::run(&cli, &mut rand::rng(), &mut stdout) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("gausselim: {err}");
            ExitCode::FAILURE
        }
    }
}
