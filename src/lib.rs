//! multiselect - view-model core for multi-select dropdowns
//!
//! Loads every instance of a model type, reconciles the list against the
//! current selection by identity, and writes user selection changes back as
//! fully hydrated objects resolved from the model's cache.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{FetchHandle, FetchOutcome, MultiselectDropdown, OptionsSnapshot, SelectionChange};
pub use config::{Config, EventsMode, FetchPolicy, Verbosity};
pub use domain::entities::{DomainObject, ObjectId, OptionRecord, SelectionEntry};
pub use domain::ports::{
    DropdownEvent, DropdownEventSink, FetchError, ModelDescriptor, NoopEventSink, ObjectCache,
};
pub use domain::services::{prepare_options, resolve_selection, ReconciledOptions};
pub use error::{DropdownError, DropdownResult};
pub use infrastructure::{InMemoryModel, JsonEventSink, JsonFileModel, TracingEventSink};
