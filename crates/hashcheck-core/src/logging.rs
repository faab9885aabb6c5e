//! Logging init: diagnostics go to stderr, stdout carries only the report.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset: quiet unless something is wrong.
const DEFAULT_FILTER: &str = "warn";

/// Initialize structured logging to stderr.
///
/// Returns Err if a global subscriber is already installed so the caller can
/// decide whether that matters.
pub fn init_logging() -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install tracing subscriber: {e}"))?;

    tracing::debug!("hashcheck logging initialized");

    Ok(())
}
