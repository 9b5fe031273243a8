//! 批量获取模块：在并发上限内并行获取多个资源，并汇总部分失败。
//!
//! # Batch Fetch Module
//!
//! Retrieves many resources in parallel while keeping the number of requests
//! in flight under a ceiling, then folds the outcomes into a single result.
//!
//! ## Key Components
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`BatchExecutor`] | Bounded fan-out over identifiers, fan-in of outcomes |
//! | [`BatchExecutorConfig`] | Concurrency ceiling (default 10) |
//! | [`BatchCollector`] | Folds [`FetchResult`]s into a [`BatchResult`] |
//! | [`BatchResult`] | Successful values plus the first failure |
//!
//! ## Outcome rules
//!
//! - Empty input: empty result, no error, no fetches.
//! - Some failures: the successful subset *and* the first failure (by completion order).
//! - Every fetch failed: `Err(Error::BatchFailed)`.
//!
//! ## Example
//!
//! ```rust
//! use hnapi::batch::BatchExecutor;
//! use tokio_util::sync::CancellationToken;
//!
//! # #[tokio::main]
//! # async fn main() -> hnapi::Result<()> {
//! let executor = BatchExecutor::with_max_concurrency(4);
//! let result = executor
//!     .execute_concurrent(vec![1u64, 2, 3], &CancellationToken::new(), |id| async move {
//!         Ok(id * 2)
//!     })
//!     .await?;
//! assert_eq!(result.values.len(), 3);
//! # Ok(())
//! # }
//! ```

mod collector;
mod executor;

pub use collector::{BatchCollector, BatchResult, FetchResult};
pub use executor::{BatchExecutor, BatchExecutorConfig, DEFAULT_MAX_CONCURRENCY};
