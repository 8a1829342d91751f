//! Lightweight option projection rendered by the dropdown.

use serde::{Deserialize, Serialize};

use super::domain_object::{DomainObject, ObjectId};

/// One row of the dropdown.
///
/// Carries only what rendering and round-tripping need. Domain attributes
/// beyond `id` and `name` are never copied here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionRecord {
    pub id: ObjectId,
    /// Display label, taken from the object's `name`.
    pub value: String,
    #[serde(default)]
    pub checked: bool,
}

impl OptionRecord {
    pub fn new(id: impl Into<ObjectId>, value: impl Into<String>, checked: bool) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
            checked,
        }
    }

    /// Projects a domain object, dropping every attribute except id and name.
    pub fn from_object(object: &DomainObject, checked: bool) -> Self {
        Self {
            id: object.id.clone(),
            value: object.name.clone(),
            checked,
        }
    }
}
