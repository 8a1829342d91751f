//! Model Descriptor Implementations
//!
//! - InMemoryModel: fixed collection, cache filled on load
//! - JsonFileModel: collection read from a JSON file

mod json_file;
mod memory;

pub use json_file::JsonFileModel;
pub use memory::InMemoryModel;
