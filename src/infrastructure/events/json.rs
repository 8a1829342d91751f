//! JSON Event Sink
//!
//! Outputs dropdown events as NDJSON for automation consumption.

use crate::domain::ports::{DropdownEvent, DropdownEventSink};
use std::io::Write;
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to a writer
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl DropdownEventSink for JsonEventSink {
    fn on_event(&self, event: DropdownEvent) {
        let json = match event {
            DropdownEvent::FetchStarted { model, generation } => {
                serde_json::json!({
                    "event": "fetch_start",
                    "model": model,
                    "generation": generation,
                })
            }

            DropdownEvent::FetchCompleted {
                model,
                generation,
                option_count,
                selected_count,
            } => {
                serde_json::json!({
                    "event": "fetch_complete",
                    "model": model,
                    "generation": generation,
                    "options": option_count,
                    "selected": selected_count,
                })
            }

            DropdownEvent::FetchSuperseded {
                model,
                generation,
                current,
            } => {
                serde_json::json!({
                    "event": "fetch_superseded",
                    "model": model,
                    "generation": generation,
                    "current": current,
                })
            }

            DropdownEvent::FetchFailed {
                model,
                generation,
                error,
            } => {
                serde_json::json!({
                    "event": "fetch_error",
                    "model": model,
                    "generation": generation,
                    "error": error,
                })
            }

            DropdownEvent::StaleSelection { id } => {
                serde_json::json!({
                    "event": "stale_selection",
                    "id": id,
                })
            }

            DropdownEvent::CacheMiss { model, id } => {
                serde_json::json!({
                    "event": "cache_miss",
                    "model": model,
                    "id": id,
                })
            }

            DropdownEvent::SelectionChanged {
                model,
                count,
                missing,
            } => {
                let status = if missing == 0 { "resolved" } else { "partial" };
                serde_json::json!({
                    "event": "selection_changed",
                    "model": model,
                    "status": status,
                    "count": count,
                    "missing": missing,
                })
            }
        };

        self.write_event(json);
    }

    fn wants_detailed_events(&self) -> bool {
        true // JSON mode wants all events
    }
}
