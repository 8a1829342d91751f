//! Application Layer
//!
//! The dropdown view-model that orchestrates loading and selection.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Owns the mutable state and the fetch continuation
//!
//! ## Components
//!
//! - `MultiselectDropdown` - Options, selection and value of one dropdown
//! - `FetchHandle` - Pending bulk load issued when a model is set

pub mod dropdown;
pub mod loader;

pub use dropdown::{MultiselectDropdown, OptionsSnapshot, SelectionChange};
pub use loader::{FetchHandle, FetchOutcome};
