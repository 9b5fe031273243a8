//! Batch collector: folds per-identifier outcomes into a [`BatchResult`].

use crate::{Error, Result};
use std::fmt::Display;
use std::time::Duration;
use tracing::warn;

/// Outcome of fetching one identifier.
#[derive(Debug)]
pub struct FetchResult<I, T> {
    pub identifier: I,
    pub outcome: Result<T>,
}

/// Values fetched by one batch call, plus the first failure if any.
///
/// `values` are in completion order, not input order. A present
/// `first_error` alongside non-empty `values` means the batch partially
/// succeeded; callers must inspect both.
#[derive(Debug)]
pub struct BatchResult<T> {
    pub values: Vec<T>,
    pub first_error: Option<Error>,
    pub failure_count: usize,
    pub total_processed: usize,
    pub execution_time: Duration,
}

impl<T> BatchResult<T> {
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            first_error: None,
            failure_count: 0,
            total_processed: 0,
            execution_time: Duration::ZERO,
        }
    }
    pub fn all_succeeded(&self) -> bool {
        self.first_error.is_none()
    }
    pub fn success_count(&self) -> usize {
        self.values.len()
    }
    pub fn success_rate(&self) -> f64 {
        if self.total_processed == 0 {
            0.0
        } else {
            self.values.len() as f64 / self.total_processed as f64
        }
    }
    pub fn into_parts(self) -> (Vec<T>, Option<Error>) {
        (self.values, self.first_error)
    }
}
impl<T> Default for BatchResult<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Single-reader sink for the fan-in side of a batch.
pub struct BatchCollector<T> {
    values: Vec<T>,
    first_error: Option<Error>,
    failures: usize,
    expected: usize,
}

impl<T> BatchCollector<T> {
    pub fn new(expected: usize) -> Self {
        Self {
            values: Vec::with_capacity(expected),
            first_error: None,
            failures: 0,
            expected,
        }
    }

    pub fn push<I: Display>(&mut self, result: FetchResult<I, T>) {
        match result.outcome {
            Ok(value) => self.values.push(value),
            Err(err) => {
                self.failures += 1;
                if self.first_error.is_none() {
                    self.first_error = Some(err);
                } else {
                    tracing::debug!(identifier = %result.identifier, error = %err, "additional batch failure");
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.values.len() + self.failures
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Close the batch. Fails only when something was attempted and nothing succeeded.
    pub fn finish(self, execution_time: Duration) -> Result<BatchResult<T>> {
        let total = self.len();
        debug_assert_eq!(total, self.expected);

        if self.values.is_empty() {
            if let Some(err) = self.first_error {
                return Err(Error::BatchFailed {
                    attempted: total,
                    source: Box::new(err),
                });
            }
        }

        if let Some(err) = &self.first_error {
            warn!(
                failed = self.failures,
                succeeded = self.values.len(),
                error = %err,
                "batch completed with failures"
            );
        }

        Ok(BatchResult {
            values: self.values,
            first_error: self.first_error,
            failure_count: self.failures,
            total_processed: total,
            execution_time,
        })
    }
}
