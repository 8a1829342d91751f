//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `models/` - Model descriptors (InMemory, JsonFile)
//! - `events/` - Event sinks (Tracing, Json)

pub mod events;
pub mod models;

// Re-export for convenience
pub use events::{JsonEventSink, TracingEventSink};
pub use models::{InMemoryModel, JsonFileModel};
