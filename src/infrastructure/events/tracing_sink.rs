//! Tracing Event Sink
//!
//! Forwards dropdown events to `tracing` as structured records.

use crate::domain::ports::{DropdownEvent, DropdownEventSink};

/// Event sink that logs every event under the `multiselect` target
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventSink;

impl DropdownEventSink for TracingEventSink {
    fn on_event(&self, event: DropdownEvent) {
        match event {
            DropdownEvent::FetchStarted { model, generation } => {
                tracing::info!(target: "multiselect", %model, generation, "fetch started");
            }
            DropdownEvent::FetchCompleted {
                model,
                generation,
                option_count,
                selected_count,
            } => {
                tracing::info!(
                    target: "multiselect",
                    %model,
                    generation,
                    option_count,
                    selected_count,
                    "options ready"
                );
            }
            DropdownEvent::FetchSuperseded {
                model,
                generation,
                current,
            } => {
                tracing::info!(
                    target: "multiselect",
                    %model,
                    generation,
                    current,
                    "fetch superseded"
                );
            }
            DropdownEvent::FetchFailed {
                model,
                generation,
                error,
            } => {
                tracing::error!(target: "multiselect", %model, generation, %error, "fetch failed");
            }
            DropdownEvent::StaleSelection { id } => {
                tracing::debug!(target: "multiselect", %id, "value entry not among options");
            }
            DropdownEvent::CacheMiss { model, id } => {
                tracing::debug!(target: "multiselect", %model, %id, "cache miss");
            }
            DropdownEvent::SelectionChanged {
                model,
                count,
                missing,
            } => {
                tracing::info!(target: "multiselect", %model, count, missing, "selection changed");
            }
        }
    }
}
