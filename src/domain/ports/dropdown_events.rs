//! Dropdown Event Port
//!
//! Observable interface for loading and selection activity.
//! Enables log output, JSON event streams, and debugging.

use crate::domain::entities::ObjectId;

/// Event emitted by the dropdown view-model
#[derive(Debug, Clone, PartialEq)]
pub enum DropdownEvent {
    /// A bulk load was issued for a newly set model
    FetchStarted { model: String, generation: u64 },

    /// Options and selection were rebuilt from a finished load
    FetchCompleted {
        model: String,
        generation: u64,
        option_count: usize,
        selected_count: usize,
    },

    /// A finished load was dropped because a newer one had been issued
    FetchSuperseded {
        model: String,
        generation: u64,
        current: u64,
    },

    /// The bulk load failed; derived state is left as it was
    FetchFailed {
        model: String,
        generation: u64,
        error: String,
    },

    /// A value entry refers to an object missing from the fetched options
    StaleSelection { id: ObjectId },

    /// The cache had nothing for a selected id
    CacheMiss { model: String, id: ObjectId },

    /// The value was replaced after a user selection change
    SelectionChanged {
        model: String,
        count: usize,
        missing: usize,
    },
}

/// Trait for receiving dropdown events
///
/// Implementations can be:
/// - TracingEventSink: structured log records
/// - JsonEventSink: NDJSON event stream
/// - NoopEventSink: Silent operation
pub trait DropdownEventSink: Send + Sync {
    /// Handle a dropdown event
    fn on_event(&self, event: DropdownEvent);

    /// Check if this sink wants per-item events (`CacheMiss`, `StaleSelection`)
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DropdownEventSink for NoopEventSink {
    fn on_event(&self, _event: DropdownEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
