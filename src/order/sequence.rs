// src/order/sequence.rs

use tracing::debug;

use crate::config::model::{ConfigData, TaskDeclaration};
use crate::errors::SequenceError;
use crate::order::path::{dependency_path, DependencyPath};

/// Task sequencer: holds a parsed configuration and resolves a linear
/// execution order in which every task appears after the tasks it depends
/// on.
///
/// Reconfiguring replaces the parsed state wholesale; nothing is mutated in
/// place, so repeated [`TaskSequence::sequence`] calls on the same state
/// always agree.
#[derive(Debug, Clone)]
pub struct TaskSequence {
    raw_config: String,
    config: ConfigData,
}

impl TaskSequence {
    /// Build a sequencer from raw configuration text.
    pub fn new(raw_config: &str) -> Self {
        Self {
            raw_config: raw_config.to_string(),
            config: ConfigData::parse(raw_config),
        }
    }

    /// Replace the current configuration with freshly parsed state.
    pub fn reconfigure(&mut self, raw_config: &str) {
        *self = Self::new(raw_config);
    }

    /// The raw text this sequencer was last configured with.
    pub fn raw_config(&self) -> &str {
        &self.raw_config
    }

    /// The parsed declaration list.
    pub fn config_data(&self) -> &ConfigData {
        &self.config
    }

    /// Dependency path of a single task. Diagnostic entry point; never
    /// fails, including for names that were never declared.
    pub fn dependency_path(&self, task_name: &str) -> DependencyPath {
        dependency_path(&self.config, task_name)
    }

    /// Resolve the execution order.
    ///
    /// Walks every declaration in input order; the first one whose path ends
    /// in a broken status aborts the whole operation. Otherwise each task is
    /// pulled out of the working order and re-inserted just before its
    /// dependency's current slot (or appended when the dependency is absent),
    /// and the final order is the reverse of that, so dependencies come
    /// first.
    ///
    /// Only the relative order of dependent and dependency is guaranteed;
    /// unrelated tasks may land in any order.
    pub fn sequence(&self) -> Result<Vec<String>, SequenceError> {
        let mut working = self.config.all_task_names();

        for decl in self.config.declarations() {
            let path = self.dependency_path(&decl.name);
            if let Some(err) = path.status().as_sequence_error() {
                debug!(task = %decl.name, status = %path.status(), "broken dependency path");
                return Err(err);
            }

            // Pull the task out (every occurrence: a duplicate declaration
            // re-places the name on its second pass) and put it back in
            // front of its dependency.
            working.retain(|name| name != &decl.name);
            match dependency_slot(&working, decl) {
                Some(idx) => working.insert(idx, decl.name.clone()),
                None => working.push(decl.name.clone()),
            }
        }

        working.reverse();
        Ok(working)
    }
}

/// Index of the declaration's dependency in the current working order, if it
/// has one and the dependency is still present.
fn dependency_slot(working: &[String], decl: &TaskDeclaration) -> Option<usize> {
    let dep = decl.dependency.as_deref()?;
    working.iter().position(|name| name == dep)
}
