//! Sequential and concurrent execution of a verification run.

use anyhow::{Context, Result};
use crossbeam_channel::{bounded, unbounded, Receiver, Sender};
use std::path::PathBuf;
use std::thread;

use crate::verify::{verify, Outcome};

/// Verify paths one after another in the calling thread.
/// Returns the number of outcomes delivered.
pub(super) fn run_sequential<F>(paths: Vec<PathBuf>, mut on_outcome: F) -> Result<usize>
where
    F: FnMut(Outcome) -> Result<()>,
{
    let mut delivered = 0usize;
    for path in paths {
        on_outcome(verify(&path))?;
        delivered += 1;
    }
    Ok(delivered)
}

/// Verify paths with `num_workers` threads pulling from a shared supply.
/// Outcomes are consumed in the calling thread as they arrive.
///
/// Each worker owns one clone of the result sender, so the result stream ends
/// only after the last worker has exited. All workers are joined before
/// returning. Returns the number of outcomes delivered.
pub(super) fn run_concurrent<F>(
    paths: Vec<PathBuf>,
    num_workers: usize,
    mut on_outcome: F,
) -> Result<usize>
where
    F: FnMut(Outcome) -> Result<()>,
{
    // Every path is known up front: fill the supply, then close it so workers
    // stop once it is drained.
    let (path_tx, path_rx) = unbounded::<PathBuf>();
    for path in paths {
        path_tx
            .send(path)
            .map_err(|_| anyhow::anyhow!("path supply closed before run started"))?;
    }
    drop(path_tx);

    let (result_tx, result_rx) = bounded::<Outcome>(num_workers);
    let mut handles = Vec::with_capacity(num_workers);
    for id in 0..num_workers {
        let supply = path_rx.clone();
        let results = result_tx.clone();
        let handle = thread::Builder::new()
            .name(format!("hashcheck-worker-{id}"))
            .spawn(move || worker_loop(id, supply, results))
            .context("spawn verification worker")?;
        handles.push(handle);
    }
    drop(result_tx);
    drop(path_rx);

    let mut delivered = 0usize;
    let mut first_error: Option<anyhow::Error> = None;
    for outcome in result_rx.iter() {
        delivered += 1;
        if let Err(e) = on_outcome(outcome) {
            first_error = Some(e);
            break;
        }
    }
    // Workers blocked on a full result channel see the disconnect and exit.
    drop(result_rx);

    for handle in handles {
        if handle.join().is_err() && first_error.is_none() {
            first_error = Some(anyhow::anyhow!("verification worker panicked"));
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(delivered),
    }
}

fn worker_loop(id: usize, supply: Receiver<PathBuf>, results: Sender<Outcome>) {
    let _span = tracing::debug_span!("worker", id).entered();
    let mut processed = 0usize;
    for path in supply.iter() {
        if results.send(verify(&path)).is_err() {
            tracing::debug!("result consumer gone, stopping");
            break;
        }
        processed += 1;
    }
    tracing::trace!(processed, "worker exiting");
}
