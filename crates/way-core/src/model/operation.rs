use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::SourceLocation;
use crate::enums::OperationKind;

/// A backing operation an action site may invoke.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Operation {
    pub name: String,
    pub kind: OperationKind,
    #[serde(default)]
    pub destructive: bool,
    /// Whether a success path reaches user-visible feedback.
    #[serde(default)]
    pub success_feedback: bool,
    /// Whether a failure path reaches user-visible feedback.
    #[serde(default)]
    pub failure_feedback: bool,
    #[serde(default)]
    pub location: Option<SourceLocation>,
}
