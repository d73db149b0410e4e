// src/config/mod.rs

//! Configuration parsing and loading for tasker.
//!
//! Responsibilities:
//! - Define the declaration-list data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//!
//! There is no validation step here: broken dependency graphs are only
//! detected when a dependency path is resolved.

pub mod loader;
pub mod model;

pub use loader::{default_config_path, load_from_path};
pub use model::{ConfigData, TaskDeclaration};
