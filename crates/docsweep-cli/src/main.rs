use docsweep_core::logging;

mod cli;

use crate::cli::{CliCommand, Outcome};

fn main() {
    // Initialize logging as early as possible; fall back to stderr if the state dir is unusable.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    // Parse CLI and dispatch.
    match CliCommand::run_from_args() {
        Ok(Outcome::Clean) => {}
        Ok(Outcome::Problems) => std::process::exit(2),
        Err(err) => {
            eprintln!("docsweep error: {:#}", err);
            std::process::exit(1);
        }
    }
}
