//! Check command: verify files and print the report to stdout.

use anyhow::{Context, Result};
use hashcheck_core::config::CheckConfig;
use hashcheck_core::distributor::Distributor;
use hashcheck_core::report::{Reporter, Summary};
use std::io::{self, Write};
use std::path::PathBuf;

/// Verify `files` and print one line per file plus the summary.
pub fn run_check(cfg: &CheckConfig, files: Vec<PathBuf>) -> Result<Summary> {
    run_check_to(cfg, files, io::stdout().lock())
}

pub(crate) fn run_check_to<W: Write>(
    cfg: &CheckConfig,
    files: Vec<PathBuf>,
    out: W,
) -> Result<Summary> {
    let mut reporter = Reporter::new(out);
    Distributor::from_config(cfg).run(files, |outcome| {
        reporter.record(&outcome).context("write report line")
    })?;
    reporter.finish().context("write summary")
}
