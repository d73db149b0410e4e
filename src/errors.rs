// src/errors.rs

//! Crate-wide error types.
//!
//! Dependency-path resolution never fails: every outcome of a walk is encoded
//! as a terminal `PathStatus`. The only typed failures are the three
//! configuration errors that `TaskSequence::sequence` surfaces when it
//! encounters a broken path.

use thiserror::Error;

/// Errors returned by `TaskSequence::sequence`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    #[error("tasks can't have circular dependencies")]
    CircularDependency,

    #[error("tasks can't depend on themselves")]
    SelfDependentTask,

    #[error("tasks can't depend on undefined tasks")]
    DependsOnUndefinedTask,
}

pub use anyhow::{Error, Result};
