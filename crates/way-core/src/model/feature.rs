use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Canonical feature registry entry.
///
/// Action-site labels are resolved against `name` and `label_aliases` to infer
/// the feature a site promises to open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Feature {
    pub name: String,
    #[serde(default)]
    pub label_aliases: Vec<String>,
    /// Sheet that opens this feature directly, when one exists.
    #[serde(default)]
    pub sheet: Option<String>,
    /// Sections where the feature is actually implemented.
    #[serde(default)]
    pub implemented_in: BTreeSet<String>,
    /// Flags that must be set for correct post-navigation behavior.
    #[serde(default)]
    pub required_flags: BTreeSet<String>,
}
