//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod dropdown_events;
pub mod model_descriptor;

pub use dropdown_events::{DropdownEvent, DropdownEventSink, NoopEventSink};
pub use model_descriptor::{FetchError, ModelDescriptor, ObjectCache};
