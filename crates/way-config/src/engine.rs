//! Engine tuning configuration.

use serde::{Deserialize, Serialize};

use way_core::Severity;

/// Default fraction of available fields a decision function must read.
const fn default_threshold() -> f64 {
    0.4
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EngineConfig {
    /// Decision functions reading less than this fraction of their available
    /// fields are flagged. Must lie in `(0, 1]`.
    #[serde(default = "default_threshold")]
    pub decision_data_usage_threshold: f64,

    /// Fan detectors out over a thread pool. Output is identical either way.
    #[serde(default)]
    pub parallel: bool,

    /// Exit non-zero when any finding reaches this severity.
    #[serde(default)]
    pub fail_on: Option<Severity>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            decision_data_usage_threshold: default_threshold(),
            parallel: false,
            fail_on: None,
        }
    }
}
