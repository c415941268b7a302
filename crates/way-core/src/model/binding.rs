use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::SourceLocation;
use crate::enums::Visibility;

/// A reference from one file-scope construct to a symbol declared in another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DataBinding {
    pub symbol: String,
    pub declaring_construct: String,
    pub referencing_construct: String,
    pub visibility: Visibility,
    /// Platforms the declaring construct compiles for.
    #[serde(default)]
    pub declared_platforms: BTreeSet<String>,
    /// Platforms the referencing construct compiles for.
    #[serde(default)]
    pub referencing_platforms: BTreeSet<String>,
    #[serde(default)]
    pub location: Option<SourceLocation>,
}

impl DataBinding {
    /// Platforms where the reference is active but the declaration is absent.
    #[must_use]
    pub fn missing_platforms(&self) -> Vec<&str> {
        self.referencing_platforms
            .difference(&self.declared_platforms)
            .map(String::as_str)
            .collect()
    }
}
