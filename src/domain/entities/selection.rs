//! Entries of the authoritative selection value.

use serde::{Deserialize, Serialize};

use super::domain_object::{DomainObject, ObjectId};

/// One entry of the dropdown's `value`.
///
/// A cache lookup that finds nothing still occupies its slot as
/// `CacheMiss`, so the value keeps one entry per selected option.
///
/// On the wire the entry payload sits under `object`, apart from the
/// `state` tag, so object attributes can never shadow the tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "object", rename_all = "snake_case")]
pub enum SelectionEntry {
    Resolved(DomainObject),
    CacheMiss { id: ObjectId },
}

impl SelectionEntry {
    /// Identity used when reconciling against fetched options.
    ///
    /// A miss has no object behind it and so no identity to match.
    pub fn resolved_id(&self) -> Option<&ObjectId> {
        match self {
            SelectionEntry::Resolved(object) => Some(&object.id),
            SelectionEntry::CacheMiss { .. } => None,
        }
    }

    pub fn as_object(&self) -> Option<&DomainObject> {
        match self {
            SelectionEntry::Resolved(object) => Some(object),
            SelectionEntry::CacheMiss { .. } => None,
        }
    }

    pub fn is_miss(&self) -> bool {
        matches!(self, SelectionEntry::CacheMiss { .. })
    }
}

impl From<DomainObject> for SelectionEntry {
    fn from(object: DomainObject) -> Self {
        SelectionEntry::Resolved(object)
    }
}

/// Ids that the cache could not resolve, in value order.
pub fn unresolved_ids(value: &[SelectionEntry]) -> Vec<ObjectId> {
    value
        .iter()
        .filter_map(|entry| match entry {
            SelectionEntry::CacheMiss { id } => Some(id.clone()),
            SelectionEntry::Resolved(_) => None,
        })
        .collect()
}
