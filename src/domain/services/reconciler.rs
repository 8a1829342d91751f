//! Option reconciliation
//!
//! Turns a freshly fetched collection into dropdown rows and cross-references
//! them with the current selection value by identity.

use std::collections::HashSet;

use crate::domain::entities::{DomainObject, ObjectId, OptionRecord, SelectionEntry};

/// Result of one reconciliation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconciledOptions {
    /// One row per fetched object, in fetch order.
    pub options: Vec<OptionRecord>,
    /// The checked rows, in the same relative order as `options`.
    pub selected: Vec<OptionRecord>,
    /// Value ids that matched no fetched object.
    pub stale: Vec<ObjectId>,
}

impl ReconciledOptions {
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// Builds the option list and its selected subset.
///
/// Duplicates in `raw` are kept as separate rows. Value entries whose id is
/// not in `raw` produce no row and are reported in `stale`; they are not an
/// error.
pub fn prepare_options(raw: &[DomainObject], value: &[SelectionEntry]) -> ReconciledOptions {
    let selected_ids: HashSet<&ObjectId> = value.iter().filter_map(|e| e.resolved_id()).collect();

    let options: Vec<OptionRecord> = raw
        .iter()
        .map(|object| OptionRecord::from_object(object, selected_ids.contains(&object.id)))
        .collect();

    let selected = options.iter().filter(|o| o.checked).cloned().collect();

    let fetched_ids: HashSet<&ObjectId> = raw.iter().map(|o| &o.id).collect();
    let mut seen = HashSet::new();
    let stale = value
        .iter()
        .filter_map(|e| e.resolved_id())
        .filter(|id| !fetched_ids.contains(id) && seen.insert(*id))
        .cloned()
        .collect();

    ReconciledOptions {
        options,
        selected,
        stale,
    }
}
