//! Event Sink Implementations
//!
//! Terminal rendering lives with the binary; the NDJSON sink is shared.

mod json;

pub use json::JsonEventSink;
