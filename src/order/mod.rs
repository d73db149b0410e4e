// src/order/mod.rs

//! Dependency-path resolution and sequence construction.
//!
//! - [`path`] walks a single task's dependency chain and classifies it.
//! - [`sequence`] applies that classification to every declared task and
//!   builds the final execution order.

pub mod path;
pub mod sequence;

pub use path::{dependency_path, DependencyPath, PathStatus};
pub use sequence::TaskSequence;
