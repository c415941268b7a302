//! Cross-cutting error types for Waymark.
//!
//! Domain-specific errors (`FactsError`, `ReportError`, `ConfigError`) are
//! defined in their respective crates; this module holds only the errors that
//! arise from the shared vocabulary itself.

use thiserror::Error;

/// Errors raised while parsing core vocabulary values from strings.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A category name did not match any known anti-pattern category.
    #[error("unknown finding category: {value}")]
    UnknownCategory { value: String },

    /// A severity name did not match any known severity level.
    #[error("unknown severity: {value}")]
    UnknownSeverity { value: String },
}
