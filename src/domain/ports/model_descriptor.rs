//! ModelDescriptor port - the data layer behind a dropdown
//!
//! A descriptor identifies one domain type and offers two capabilities:
//! a bulk asynchronous load of every instance, and a synchronous
//! identity lookup against an already populated cache.

use async_trait::async_trait;

use crate::domain::entities::{DomainObject, ObjectId};

/// Synchronous identity-keyed lookup.
///
/// Population and eviction belong to the implementation; callers only read.
pub trait ObjectCache: Send + Sync {
    fn find_by_id(&self, id: &ObjectId) -> Option<DomainObject>;
}

/// Handle to a domain type that can list all of its instances.
#[async_trait]
pub trait ModelDescriptor: ObjectCache {
    /// Short name used in events and logs (e.g. `"Category"`).
    fn model_name(&self) -> &str;

    /// Loads every instance of the type. No paging, no filtering.
    async fn find_all(&self) -> Result<Vec<DomainObject>, FetchError>;
}

/// Bulk load failure reported by a descriptor.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("failed to load {model}: {message}")]
    Unavailable { model: String, message: String },

    #[error("invalid {model} payload: {message}")]
    InvalidPayload { model: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_display_names_the_model() {
        let err = FetchError::Unavailable {
            model: "Category".to_string(),
            message: "connection refused".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to load Category: connection refused"
        );
    }
}
