//! Error types for the dropdown core
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::entities::ObjectId;
use crate::domain::ports::FetchError;

/// Result type alias for dropdown operations
pub type DropdownResult<T> = Result<T, DropdownError>;

/// Main error type for dropdown operations
#[derive(Error, Debug)]
pub enum DropdownError {
    /// The bulk load of options failed
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The fetch task panicked or was aborted before finishing
    #[error("option loading for {model} was aborted")]
    FetchAborted { model: String },

    /// A load was requested with no Tokio runtime to run it on
    #[error("cannot load {model} options outside a Tokio runtime")]
    NoRuntime { model: String },

    /// A selection arrived before any model was set
    #[error("no model set - assign a model before changing the selection")]
    NoModel,

    /// The value still holds entries the cache could not resolve
    #[error("selection has unresolved ids: {}", join_ids(.ids))]
    UnresolvedSelection { ids: Vec<ObjectId> },

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn join_ids(ids: &[ObjectId]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
