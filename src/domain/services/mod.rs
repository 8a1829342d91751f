//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod reconciler;
mod synchronizer;

pub use reconciler::{prepare_options, ReconciledOptions};
pub use synchronizer::resolve_selection;
