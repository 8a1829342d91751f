//! Event Sink Implementations
//!
//! Provides concrete implementations of DropdownEventSink:
//! - JsonEventSink: NDJSON output for automation
//! - TracingEventSink: Structured log records

mod json;
mod tracing_sink;

pub use json::JsonEventSink;
pub use tracing_sink::TracingEventSink;
