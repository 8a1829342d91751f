//! Common test utilities for dropdown integration tests.
//!
//! This module provides:
//! - `DeferredModel`: a model whose bulk load settles when the test says so
//! - `RecordingEventSink`: captures every emitted event
//! - `TestEnv`: isolated directory for running the CLI
//! - Fixtures: the four-object response used throughout

#![allow(dead_code)]

pub mod env;
pub mod fixtures;
pub mod models;

pub use env::*;
pub use fixtures::*;
pub use models::*;
