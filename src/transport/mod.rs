//! HTTP transport: the single "GET and decode JSON" primitive every client
//! operation is built on.

mod http;

pub use http::{HttpTransport, TransportError};
