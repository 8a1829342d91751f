//! Domain Layer
//!
//! Pure selection logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Domain objects, option rows and selection entries
//! - `services/` - Reconciliation and selection synchronization
//! - `ports/` - Interface definitions for the data layer and event sinks
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All data access goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
