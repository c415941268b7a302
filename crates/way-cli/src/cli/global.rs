use clap::ValueEnum;

/// How command output is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Generic key/value or row table
    Table,
    /// Compact single-line JSON
    Raw,
}
