//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - The interactive picker (via dialoguer)
//! - Output formatting (text/JSON)

pub mod cli;
pub mod menu;
pub mod output;
