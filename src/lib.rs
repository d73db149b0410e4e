// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod order;

use anyhow::Result;
use tracing::debug;

use crate::cli::{CliArgs, OutputFormat};
use crate::config::loader::load_from_path;
use crate::order::{DependencyPath, TaskSequence};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - sequencing (or single-task path diagnostics with `--path`)
/// - output formatting
pub fn run(args: CliArgs) -> Result<()> {
    let tasks = load_from_path(&args.config)?;
    debug!(declarations = tasks.config_data().len(), "configuration loaded");

    if args.dry_run {
        print_declarations(&tasks, args.format);
        return Ok(());
    }

    if let Some(ref name) = args.path {
        print_path(name, &tasks.dependency_path(name), args.format);
        return Ok(());
    }

    let sequence = tasks.sequence()?;
    print_sequence(&sequence, args.format);
    Ok(())
}

/// Print the resolved execution order, one task per line (or a JSON object).
fn print_sequence(sequence: &[String], format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            for name in sequence {
                println!("{name}");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "sequence": sequence }));
        }
    }
}

/// Print a single task's dependency path.
fn print_path(task: &str, path: &DependencyPath, format: OutputFormat) {
    match format {
        OutputFormat::Text => println!("{task}: {path}"),
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "task": task, "path": path }));
        }
    }
}

/// Simple dry-run output: print the parsed declarations without sequencing.
fn print_declarations(tasks: &TaskSequence, format: OutputFormat) {
    let data = tasks.config_data();

    if format == OutputFormat::Json {
        println!(
            "{}",
            serde_json::json!({ "declarations": data.declarations() })
        );
        return;
    }

    println!("tasker dry-run");
    println!("declarations ({}):", data.len());
    for decl in data.declarations() {
        match decl.dependency.as_deref() {
            Some(dep) => println!("  - {} => {}", decl.name, dep),
            None => println!("  - {}", decl.name),
        }
    }
}
