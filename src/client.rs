//! Hacker News client.
//!
//! Single lookups and story lists live in `core`, bounded batch lookups in
//! `batch`, the update stream entry points in `updates`.

pub mod builder;
mod batch;
pub mod core;
mod updates;

pub use builder::HnClientBuilder;
pub use core::HnClient;
