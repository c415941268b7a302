use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::FlagRole;

/// A piece of UI state an effect can set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Flag {
    pub name: String,
    pub role: FlagRole,
}
