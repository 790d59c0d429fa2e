//! Bounded fan-out of per-repository jobs

use futures::stream::{FuturesUnordered, StreamExt};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Semaphore;

use crate::git::Status;

/// Result of one job run by [`fan_out`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobReport {
    /// Repository name
    pub repo: String,
    pub status: Status,
    /// The line printed for this repository
    pub line: String,
    /// Cleaned failure reason, if any
    pub detail: Option<String>,
}

impl JobReport {
    pub fn success(repo: impl Into<String>, status: Status, line: impl Into<String>) -> Self {
        Self {
            repo: repo.into(),
            status,
            line: line.into(),
            detail: None,
        }
    }

    pub fn failure(
        repo: impl Into<String>,
        status: Status,
        line: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            repo: repo.into(),
            status,
            line: line.into(),
            detail: Some(detail.into()),
        }
    }
}

/// Runs `op` over every job with at most `limit` in flight.
///
/// `on_done` sees each result as soon as its job finishes, in completion
/// order. Returns once every job has completed; results come back in
/// completion order too. Jobs are never cancelled. `limit` is clamped to
/// what a semaphore can hold.
pub async fn fan_out<J, R, F, Fut, D>(jobs: Vec<J>, limit: usize, op: F, mut on_done: D) -> Vec<R>
where
    F: Fn(J) -> Fut,
    Fut: Future<Output = R>,
    D: FnMut(&R),
{
    let semaphore = Arc::new(Semaphore::new(limit.clamp(1, Semaphore::MAX_PERMITS)));
    let mut futures = FuturesUnordered::new();

    for job in jobs {
        let semaphore = Arc::clone(&semaphore);
        let work = op(job);
        futures.push(async move {
            // The semaphore is never closed, so acquire cannot fail
            let _permit = semaphore.acquire().await.ok();
            work.await
        });
    }

    let mut results = Vec::with_capacity(futures.len());
    while let Some(result) = futures.next().await {
        on_done(&result);
        results.push(result);
    }
    results
}
