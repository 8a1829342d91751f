//! Selection synchronization
//!
//! Maps the rows a user checked back onto full domain objects through the
//! model's cache.

use crate::domain::entities::{OptionRecord, SelectionEntry};
use crate::domain::ports::ObjectCache;

/// Resolves each selected row through `cache`, keeping order and length.
///
/// A lookup that returns nothing yields `SelectionEntry::CacheMiss` in that
/// slot; the entry is never skipped and never synthesized from the row.
pub fn resolve_selection<C>(selected: &[OptionRecord], cache: &C) -> Vec<SelectionEntry>
where
    C: ObjectCache + ?Sized,
{
    selected
        .iter()
        .map(|record| match cache.find_by_id(&record.id) {
            Some(object) => SelectionEntry::Resolved(object),
            None => SelectionEntry::CacheMiss {
                id: record.id.clone(),
            },
        })
        .collect()
}
