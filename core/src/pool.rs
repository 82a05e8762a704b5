//! Bounded concurrent execution of a [`Probe`] over a batch of candidates.
//!
//! Every candidate becomes one task in a [`JoinSet`]; a [`Semaphore`] caps how
//! many of them probe at the same time. Results are drained from the set in
//! completion order, so the output carries one `(candidate, outcome)` pair per
//! input but no particular order.

use std::sync::Arc;
use std::time::Duration;

use domscout_common::config::Config;
use domscout_common::domain::Candidate;
use domscout_common::error;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::debug;

use crate::ports::Progress;
use crate::probe::{Probe, Signal};

pub const DEFAULT_WORKERS: usize = 5;

#[derive(Debug, Clone, Copy)]
pub struct WorkerPool {
    workers: usize,
    delay: Option<Duration>,
}

impl Default for WorkerPool {
    fn default() -> Self {
        Self::new(DEFAULT_WORKERS)
    }
}

impl WorkerPool {
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
            delay: None,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.workers).with_delay(cfg.delay)
    }

    /// Makes each worker slot pause for `delay` after every probe, for
    /// services that expect client-side rate limiting.
    pub fn with_delay(mut self, delay: Option<Duration>) -> Self {
        self.delay = delay.filter(|d| !d.is_zero());
        self
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub async fn run<S: Signal>(
        &self,
        probe: Arc<Probe<S>>,
        items: Vec<Candidate>,
        label: &str,
        progress: &dyn Progress,
    ) -> Vec<(Candidate, S::Outcome)> {
        let total: usize = items.len();
        progress.start(label, total);
        debug!(probe = probe.name(), total, workers = self.workers, "starting batch");

        let semaphore = Arc::new(Semaphore::new(self.workers));
        let mut tasks: JoinSet<(Candidate, S::Outcome)> = JoinSet::new();

        for candidate in items {
            let probe = probe.clone();
            let semaphore = semaphore.clone();
            let delay = self.delay;

            tasks.spawn(async move {
                // The semaphore is never closed, so the permit is always granted.
                let _permit = semaphore.acquire_owned().await.ok();
                let outcome = isolated_check(probe, candidate.clone()).await;
                if let Some(delay) = delay {
                    tokio::time::sleep(delay).await;
                }
                (candidate, outcome)
            });
        }

        let mut results: Vec<(Candidate, S::Outcome)> = Vec::with_capacity(total);
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(pair) => results.push(pair),
                Err(err) => error!("worker task for {label} did not complete: {err}"),
            }
            progress.advance();
        }

        progress.finish();
        results
    }
}

/// Runs the probe in its own task so a panic costs one outcome, not the batch.
async fn isolated_check<S: Signal>(probe: Arc<Probe<S>>, candidate: Candidate) -> S::Outcome {
    let fallback = probe.fallback();
    let name = candidate.to_string();

    match tokio::spawn(async move { probe.check(&candidate).await }).await {
        Ok(outcome) => outcome,
        Err(err) => {
            error!("probe for {name} aborted ({err}), using {fallback:?}");
            fallback
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
