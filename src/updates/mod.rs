//! 更新流模块：轮询变更接口，并以异步流的形式推送更新。
//!
//! # Updates Module
//!
//! Turns the periodically refreshed `updates.json` change feed into a
//! continuous stream of [`UpdateBatch`](crate::types::UpdateBatch) values.
//!
//! ## Key Components
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`UpdateSource`] | Anything that can fetch one change-feed snapshot |
//! | [`UpdatePoller`] | Background polling loop bound to a cancellation token |
//! | [`UpdateStream`] | Consumer side; ends when the poller stops |
//!
//! ## Polling semantics
//!
//! - The first poll runs immediately, later polls on every interval tick.
//! - Empty batches are dropped; only batches with items or profiles are delivered.
//! - A failed poll is logged and skipped; it never ends the stream.
//! - The stream closes once the cancellation token fires (while idle, fetching
//!   or delivering) or once the consumer drops the [`UpdateStream`].

mod poller;
mod source;
mod stream;

pub use poller::{UpdatePoller, DEFAULT_POLL_INTERVAL};
pub use source::UpdateSource;
pub use stream::UpdateStream;
