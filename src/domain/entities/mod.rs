//! Domain Entities
//!
//! - `DomainObject` - A full entity served by the data layer
//! - `OptionRecord` - The `{id, value, checked}` row the dropdown renders
//! - `SelectionEntry` - One slot of the authoritative selection value

mod domain_object;
mod option_record;
mod selection;

pub use domain_object::{DomainObject, ObjectId};
pub use option_record::OptionRecord;
pub use selection::{unresolved_ids, SelectionEntry};
