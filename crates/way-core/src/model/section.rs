use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A persistent top-level navigation destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Section {
    pub name: String,
    /// Features reachable at top level, without scrolling or searching.
    #[serde(default)]
    pub contains_features: BTreeSet<String>,
}
