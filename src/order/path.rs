// src/order/path.rs

use std::fmt;

use serde::Serialize;

use crate::config::model::ConfigData;
use crate::errors::SequenceError;

/// Terminal classification of a dependency-path walk.
///
/// Exactly one status ends every [`DependencyPath`]. The first three are
/// benign; the last three mark a broken configuration and map onto
/// [`SequenceError`] via [`PathStatus::as_sequence_error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PathStatus {
    /// The starting task is declared and has no dependency.
    NoDependencies,
    /// The starting task itself has no declaration.
    UndefinedTask,
    /// The chain reached an undeclared name after at least one hop.
    UndefinedDependencies,
    /// A task declares itself as its own dependency.
    SelfDependentTask,
    /// The chain revisited an already-seen name.
    CircularDependencies,
    /// The chain ended at a task with no dependency.
    CorrectDependencies,
}

impl PathStatus {
    /// The error this status maps to when encountered during sequencing,
    /// if any.
    pub fn as_sequence_error(self) -> Option<SequenceError> {
        match self {
            PathStatus::CircularDependencies => Some(SequenceError::CircularDependency),
            PathStatus::SelfDependentTask => Some(SequenceError::SelfDependentTask),
            PathStatus::UndefinedDependencies => Some(SequenceError::DependsOnUndefinedTask),
            PathStatus::NoDependencies
            | PathStatus::UndefinedTask
            | PathStatus::CorrectDependencies => None,
        }
    }
}

impl fmt::Display for PathStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PathStatus::NoDependencies => "no_dependencies",
            PathStatus::UndefinedTask => "undefined_task",
            PathStatus::UndefinedDependencies => "undefined_dependencies",
            PathStatus::SelfDependentTask => "self_dependent_task",
            PathStatus::CircularDependencies => "circular_dependencies",
            PathStatus::CorrectDependencies => "correct_dependencies",
        };
        f.write_str(name)
    }
}

/// The chain of dependency names traversed from a starting task, ending in
/// exactly one terminal [`PathStatus`].
///
/// For the configuration `e => b`, `b => c`, `c => f`, `f =>` the path of
/// `e` is `["b", "c", "f"]` with status `CorrectDependencies`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyPath {
    links: Vec<String>,
    status: PathStatus,
}

impl DependencyPath {
    fn new(links: Vec<String>, status: PathStatus) -> Self {
        Self { links, status }
    }

    /// Dependency names in traversal order.
    pub fn links(&self) -> &[String] {
        &self.links
    }

    /// Terminal classification of this path.
    pub fn status(&self) -> PathStatus {
        self.status
    }
}

impl fmt::Display for DependencyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.links.is_empty() {
            write!(f, "[{}]", self.status)
        } else {
            write!(f, "{} [{}]", self.links.join(" -> "), self.status)
        }
    }
}

/// Walk the dependency chain starting at `task_name` and classify it.
///
/// Pure function of the declaration list; never fails. The walk keeps a
/// visited list and stops the moment a name repeats, so when the status is
/// `CircularDependencies` the links are the exact minimal cycle.
///
/// Missing declarations are classified asymmetrically: only the *starting*
/// name can yield `UndefinedTask`; an undeclared name reached after at least
/// one hop always terminates the path as `UndefinedDependencies`.
pub fn dependency_path(config: &ConfigData, task_name: &str) -> DependencyPath {
    let mut visited: Vec<String> = Vec::new();
    let mut current = task_name.to_string();

    loop {
        let Some(decl) = config.declaration_of(&current) else {
            if visited.is_empty() {
                return DependencyPath::new(visited, PathStatus::UndefinedTask);
            }
            // The last link points at a name nobody declared; drop it so the
            // path ends at the last declared task.
            visited.pop();
            return DependencyPath::new(visited, PathStatus::UndefinedDependencies);
        };

        match decl.dependency.as_deref() {
            None if visited.is_empty() => {
                return DependencyPath::new(visited, PathStatus::NoDependencies);
            }
            None => {
                return DependencyPath::new(visited, PathStatus::CorrectDependencies);
            }
            Some(dep) if dep == decl.name => {
                return DependencyPath::new(visited, PathStatus::SelfDependentTask);
            }
            Some(dep) if visited.iter().any(|seen| seen == dep) => {
                return DependencyPath::new(visited, PathStatus::CircularDependencies);
            }
            Some(dep) => {
                visited.push(dep.to_string());
                current = dep.to_string();
            }
        }
    }
}
