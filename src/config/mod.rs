//! Configuration module
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (MULTISELECT_*)
//! 3. Project config (./multiselect.toml)
//! 4. User config (<config dir>/multiselect/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{Config, EventsMode, FetchConfig, FetchPolicy, OutputConfig, Verbosity};
