// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `tasker`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "tasker",
    version,
    about = "Resolve an execution order for tasks declared as `name => dependency` pairs.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (flat `name => dependency` lines).
    ///
    /// Default: `tasks.conf` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "tasks.conf")]
    pub config: String,

    /// Print the dependency path of a single task instead of sequencing.
    #[arg(long, value_name = "NAME")]
    pub path: Option<String>,

    /// Output format.
    #[arg(long, value_enum, value_name = "FORMAT", default_value = "text")]
    pub format: OutputFormat,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TASKER_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse the config and print the declarations, but don't sequence.
    #[arg(long)]
    pub dry_run: bool,
}

/// Output format for sequences, paths and dry-run listings.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
