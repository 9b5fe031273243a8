//! Integration tests with mock HTTP server

mod batch;
mod client_api;
mod updates;
