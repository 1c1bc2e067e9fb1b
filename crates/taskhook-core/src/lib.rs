//! Shared types for task lifecycle hooks.

pub mod error;
pub mod types;

pub use error::CoreError;
pub use types::{Label, OutputFormat, TaskState};
