//! Batch executor.

use super::collector::{BatchCollector, BatchResult, FetchResult};
use crate::{Error, Result};
use futures::StreamExt;
use std::fmt::Display;
use std::future::Future;
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::debug;

pub const DEFAULT_MAX_CONCURRENCY: usize = 10;

#[derive(Debug, Clone)]
pub struct BatchExecutorConfig {
    /// Ceiling on fetches in flight at once.
    pub max_concurrency: usize,
}
impl Default for BatchExecutorConfig {
    fn default() -> Self {
        Self {
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
        }
    }
}
impl BatchExecutorConfig {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_max_concurrency(mut self, n: usize) -> Self {
        self.max_concurrency = n;
        self
    }
}

/// Bounded fan-out / fan-in over a list of identifiers.
pub struct BatchExecutor {
    config: BatchExecutorConfig,
}
impl BatchExecutor {
    pub fn new() -> Self {
        Self {
            config: BatchExecutorConfig::default(),
        }
    }
    pub fn with_config(config: BatchExecutorConfig) -> Self {
        Self { config }
    }
    pub fn with_max_concurrency(n: usize) -> Self {
        Self::with_config(BatchExecutorConfig::new().with_max_concurrency(n))
    }
    pub fn config(&self) -> &BatchExecutorConfig {
        &self.config
    }

    /// Run `fetch` once per identifier with at most `max_concurrency` calls in flight.
    ///
    /// Every identifier is attempted exactly once, duplicates included. All
    /// fetches drain before returning; a failure never aborts the others.
    /// Fetches still queued or running when `cancel` fires finish with a
    /// cancellation error.
    ///
    /// Returns `Err(Error::BatchFailed)` only when every fetch failed.
    pub async fn execute_concurrent<I, T, F, Fut>(
        &self,
        identifiers: Vec<I>,
        cancel: &CancellationToken,
        fetch: F,
    ) -> Result<BatchResult<T>>
    where
        I: Clone + Display,
        F: Fn(I) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let start = Instant::now();
        let total = identifiers.len();
        if total == 0 {
            return Ok(BatchResult::new());
        }

        let limit = self.config.max_concurrency.max(1);
        debug!(total, concurrency = limit, "starting batch");

        let fetch = &fetch;
        let mut results = futures::stream::iter(identifiers)
            .map(|identifier| async move {
                let outcome = if cancel.is_cancelled() {
                    Err(Error::Cancelled.for_resource(identifier.to_string()))
                } else {
                    tokio::select! {
                        biased;
                        _ = cancel.cancelled() => Err(Error::Cancelled.for_resource(identifier.to_string())),
                        res = fetch(identifier.clone()) => res,
                    }
                };
                FetchResult {
                    identifier,
                    outcome,
                }
            })
            .buffer_unordered(limit);

        let mut collector = BatchCollector::new(total);
        while let Some(result) = results.next().await {
            collector.push(result);
        }
        collector.finish(start.elapsed())
    }
}
impl Default for BatchExecutor {
    fn default() -> Self {
        Self::new()
    }
}
