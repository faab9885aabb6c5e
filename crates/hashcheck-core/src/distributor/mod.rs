//! Fan a list of paths out to a bounded pool of verification workers and fan
//! the outcomes back in to a single consumer.
//!
//! Outcomes arrive in completion order, not input order. [`Distributor::run`]
//! returns only after every worker has exited and every outcome has been
//! handed to the consumer, so a summary built from the callback is complete.

use anyhow::Result;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Instant;

use crate::config::CheckConfig;
use crate::verify::Outcome;

mod run;

/// Bounded-parallelism verifier for a fixed list of paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Distributor {
    workers: NonZeroUsize,
}

impl Distributor {
    pub fn new(workers: NonZeroUsize) -> Self {
        Self { workers }
    }

    pub fn from_config(cfg: &CheckConfig) -> Self {
        Self::new(cfg.workers)
    }

    pub fn workers(&self) -> NonZeroUsize {
        self.workers
    }

    /// Verify every path exactly once, passing each outcome to `on_outcome`
    /// as soon as it is available.
    ///
    /// Uses `min(workers, paths.len())` threads; with a single worker the
    /// paths are verified in the calling thread. An error from `on_outcome`
    /// stops the run: remaining workers are told to stop and joined before the
    /// error is returned.
    pub fn run<F>(&self, paths: Vec<PathBuf>, on_outcome: F) -> Result<()>
    where
        F: FnMut(Outcome) -> Result<()>,
    {
        let count = paths.len();
        let num_workers = self.workers.get().min(count);
        let started = Instant::now();
        tracing::debug!(files = count, workers = num_workers, "verification run starting");

        let delivered = if num_workers <= 1 {
            run::run_sequential(paths, on_outcome)?
        } else {
            run::run_concurrent(paths, num_workers, on_outcome)?
        };

        anyhow::ensure!(
            delivered == count,
            "{} of {} outcomes were never delivered",
            count - delivered,
            count
        );
        tracing::debug!(
            files = count,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "verification run complete"
        );
        Ok(())
    }
}
