// src/config/model.rs

use serde::Serialize;

/// A single parsed `name => dependency` pair.
///
/// `dependency` is `None` when the right-hand side was blank or the line had
/// no `=>` at all; both mean "this task depends on nothing".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskDeclaration {
    pub name: String,
    pub dependency: Option<String>,
}

/// Ordered list of task declarations as parsed from the raw configuration.
///
/// This is a direct mapping of the flat text format:
///
/// ```text
/// a =>
/// b => c
/// c =>
/// ```
///
/// Declaration order is preserved and duplicate names are kept; both matter
/// to the sequence builder. The list is immutable once parsed; reconfiguring
/// builds a fresh `ConfigData` and swaps it in wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConfigData {
    declarations: Vec<TaskDeclaration>,
}

impl ConfigData {
    /// Parse raw configuration text into a declaration list.
    ///
    /// Each line is trimmed, then split at the first `=>`, and both sides are
    /// trimmed again. Lines that are empty after trimming are skipped, so
    /// blank input yields an empty list.
    ///
    /// No semantic validation happens here: undefined references, cycles and
    /// self-dependencies are only detected when a dependency path is
    /// resolved.
    pub fn parse(raw: &str) -> Self {
        let declarations = raw.trim().lines().filter_map(parse_line).collect();
        Self { declarations }
    }

    /// All declarations, in input order.
    pub fn declarations(&self) -> &[TaskDeclaration] {
        &self.declarations
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// All task names in declaration order, duplicates included.
    pub fn all_task_names(&self) -> Vec<String> {
        self.declarations.iter().map(|decl| decl.name.clone()).collect()
    }

    /// The first declaration matching `name`, if any.
    pub fn declaration_of(&self, name: &str) -> Option<&TaskDeclaration> {
        self.declarations.iter().find(|decl| decl.name == name)
    }

    /// The declared dependency of the first declaration matching `name`.
    ///
    /// Returns `None` both when the task is undeclared and when it is
    /// declared without a dependency; use [`Self::contains_task`] to tell the
    /// two apart.
    pub fn dependency_of(&self, name: &str) -> Option<&str> {
        self.declaration_of(name)?.dependency.as_deref()
    }

    /// Whether any declaration has the given name.
    pub fn contains_task(&self, name: &str) -> bool {
        self.declaration_of(name).is_some()
    }
}

fn parse_line(line: &str) -> Option<TaskDeclaration> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (name, dependency) = match line.split_once("=>") {
        Some((lhs, rhs)) => (lhs.trim(), rhs.trim()),
        None => (line, ""),
    };

    Some(TaskDeclaration {
        name: name.to_string(),
        dependency: (!dependency.is_empty()).then(|| dependency.to_string()),
    })
}
