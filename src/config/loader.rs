// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::order::TaskSequence;

/// Load a configuration file from a given path and return a ready
/// [`TaskSequence`].
///
/// This only reads the file and parses the flat `name => dependency` lines;
/// it does **not** check the dependency graph for cycles or undefined
/// references. Those are detected lazily, when the sequence (or a single
/// dependency path) is resolved.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<TaskSequence> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading config file at {:?}", path))?;

    Ok(TaskSequence::new(&contents))
}

/// Default config location: `tasks.conf` in the current working directory.
///
/// Lives here so richer discovery (an env var, project-local lookup) has a
/// single place to go.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("tasks.conf")
}
