//! CLI for hashcheck.

mod check;

use anyhow::Result;
use clap::Parser;
use hashcheck_core::config::CheckConfig;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use check::run_check;

pub const USAGE: &str = "Usage: hashcheck <file> [...]";

/// Verify files against the CRC32 embedded in their names.
///
/// The last run of exactly 8 hex digits in each path is taken as the expected
/// CRC32. Files without one are skipped.
#[derive(Debug, Parser)]
#[command(name = "hashcheck", version)]
pub struct Cli {
    /// Files to verify. Names may start with '-'; options must come first.
    #[arg(value_name = "FILE", trailing_var_arg = true, allow_hyphen_values = true)]
    pub files: Vec<PathBuf>,

    /// Verify up to N files in parallel (default: available CPUs).
    #[arg(short = 'j', long, value_name = "N")]
    pub jobs: Option<NonZeroUsize>,

    /// Exit with status 1 if any file is BAD or ERR.
    #[arg(long)]
    pub strict: bool,
}

/// How the run went, for the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Clean,
    /// Strict mode and at least one file was bad or unreadable.
    Failures,
}

impl Cli {
    pub fn config(&self) -> CheckConfig {
        CheckConfig {
            strict: self.strict,
            ..CheckConfig::with_workers(self.jobs)
        }
    }

    pub fn run_from_args() -> Result<RunStatus> {
        Cli::parse().run()
    }

    pub fn run(self) -> Result<RunStatus> {
        if self.files.is_empty() {
            println!("{USAGE}");
            return Ok(RunStatus::Clean);
        }
        let cfg = self.config();
        tracing::debug!("config: {:?}", cfg);

        let summary = run_check(&cfg, self.files)?;
        if cfg.strict && summary.has_failures() {
            return Ok(RunStatus::Failures);
        }
        Ok(RunStatus::Clean)
    }
}

#[cfg(test)]
mod tests;
