use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub mod global;

pub use global::OutputFormat;

use way_core::{Category, Severity};

/// Top-level CLI parser for the `wmk` binary.
#[derive(Debug, Parser)]
#[command(name = "wmk", version, about = "Waymark - workflow wiring audit")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Audit an extracted facts payload
    Audit(AuditArgs),
    /// List detector categories with ids and default severities
    Categories,
    /// Print the JSON Schema of the facts payload contract
    Schema,
}

#[derive(Debug, Args)]
pub struct AuditArgs {
    /// Path to the facts payload (JSON), as produced by the extractor
    pub facts: PathBuf,

    /// Exit non-zero when any finding reaches this severity
    /// (overrides the configured gate)
    #[arg(long)]
    pub fail_on: Option<Severity>,

    /// Run only the given categories (repeatable; overrides configuration)
    #[arg(long = "only")]
    pub only: Vec<Category>,

    /// Fan detectors out over a thread pool
    #[arg(long)]
    pub parallel: bool,
}
