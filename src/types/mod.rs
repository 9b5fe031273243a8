//! 类型模块：Hacker News API 返回的数据结构。
//!
//! # Types Module
//!
//! Strongly-typed representations of the JSON documents served by the
//! Hacker News API.
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Item`] | Story, comment, job, poll or poll option |
//! | [`ItemType`] | Discriminator of an [`Item`] |
//! | [`User`] | User profile |
//! | [`UpdateBatch`] | One poll of the change feed (`updates.json`) |
//! | [`StoryList`] | Ranked story lists (`topstories.json`, ...) |
//!
//! ## Example
//!
//! ```rust
//! use hnapi::types::{Item, ItemType};
//!
//! let item: Item = serde_json::from_str(
//!     r#"{"id": 8863, "type": "story", "by": "dhouston", "title": "My YC app"}"#,
//! ).unwrap();
//! assert_eq!(item.kind, ItemType::Story);
//! ```

pub mod item;
pub mod updates;
pub mod user;

pub use item::{Item, ItemType, StoryList};
pub use updates::UpdateBatch;
pub use user::User;
