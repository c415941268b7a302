use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::SheetRole;

/// A declared sheet/modal variant.
///
/// `handled` is derived at load time from the handler registry; in an
/// exhaustive registry an unhandled kind is a coverage gap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SheetKind {
    pub name: String,
    pub role: SheetRole,
    pub handled: bool,
}
