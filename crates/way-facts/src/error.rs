use thiserror::Error;

/// Errors raised while parsing or loading a facts payload. All of these are
/// fatal for the run; no partial report is produced.
#[derive(Debug, Error)]
pub enum FactsError {
    /// A structurally required field is absent from the payload.
    #[error("malformed facts payload: missing required field `{field}`")]
    MalformedFacts { field: String },

    /// The payload is not valid JSON for the documented schema.
    #[error("failed to parse facts payload: {0}")]
    Parse(#[from] serde_json::Error),
}
