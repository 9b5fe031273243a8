//! # hnapi
//!
//! 这是 Hacker News API 的异步 Rust 客户端，支持并发批量获取与实时更新流。
//!
//! Async client for the read-only Hacker News API: items, user profiles,
//! ranked story lists and the `updates.json` change feed.
//!
//! ## Overview
//!
//! Single lookups are plain request/response calls. Two operations do real
//! concurrent work:
//!
//! - **Batch fetch**: [`HnClient::get_items_batch`] fetches many items with a
//!   bounded number of requests in flight and returns partial results plus the
//!   first failure instead of failing fast.
//! - **Update stream**: [`HnClient::start_updates`] polls the change feed in the
//!   background (immediately, then on every interval tick) and pushes non-empty
//!   batches into an [`UpdateStream`] until its cancellation token fires.
//!
//! Every network call takes a [`CancellationToken`]; cancelling it abandons
//! in-flight and queued work with [`Error::Cancelled`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hnapi::{CancellationToken, HnClient};
//!
//! #[tokio::main]
//! async fn main() -> hnapi::Result<()> {
//!     let client = HnClient::builder().concurrency(5).build()?;
//!     let cancel = CancellationToken::new();
//!
//!     let top = client.get_top_stories(&cancel).await?;
//!     let batch = client.get_items_batch(&top[..10.min(top.len())], &cancel).await?;
//!     for item in &batch.values {
//!         println!("{}", item.title.as_deref().unwrap_or("<untitled>"));
//!     }
//!
//!     let mut updates = client.start_updates(cancel.clone())?;
//!     if let Some(batch) = updates.recv().await {
//!         println!("{} items changed", batch.items.len());
//!     }
//!     cancel.cancel();
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | [`HnClient`] and its builder |
//! | [`config`] | [`Config`] with defaults and validation |
//! | [`types`] | Items, users, update batches, story lists |
//! | [`batch`] | Bounded-concurrency batch execution |
//! | [`updates`] | Change-feed poller and stream |
//! | [`transport`] | GET + JSON primitive over `reqwest` |

pub mod batch;
pub mod client;
pub mod config;
pub mod transport;
pub mod types;
pub mod updates;

pub use batch::BatchResult;
pub use client::{HnClient, HnClientBuilder};
pub use config::Config;
pub use tokio_util::sync::CancellationToken;
pub use types::{Item, ItemType, StoryList, UpdateBatch, User};
pub use updates::UpdateStream;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext, ErrorKind};
