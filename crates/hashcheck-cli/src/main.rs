use hashcheck_core::logging;

mod cli;

use crate::cli::{Cli, RunStatus};

fn main() {
    // Initialize logging as early as possible.
    if let Err(err) = logging::init_logging() {
        eprintln!("hashcheck: logging disabled: {:#}", err);
    }

    match Cli::run_from_args() {
        Ok(RunStatus::Clean) => {}
        Ok(RunStatus::Failures) => std::process::exit(1),
        Err(err) => {
            eprintln!("hashcheck error: {:#}", err);
            std::process::exit(1);
        }
    }
}
