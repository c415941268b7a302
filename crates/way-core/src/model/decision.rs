use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::SourceLocation;
use crate::enums::FunctionKind;

/// Symbolic description of a function computing an output from an entity's
/// fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DecisionFunction {
    pub name: String,
    pub kind: FunctionKind,
    /// Domain entity whose fields the function operates on.
    pub entity: String,
    /// Fields the function actually reads.
    #[serde(default)]
    pub consumed_fields: BTreeSet<String>,
    /// Fields present on the entity that the function could have read.
    #[serde(default)]
    pub available_fields: BTreeSet<String>,
    /// Fields the function's output claims to populate.
    #[serde(default)]
    pub produces_fields: BTreeSet<String>,
    /// Output is a fixed/constant value.
    #[serde(default)]
    pub constant_output: bool,
    /// Body contains an artificial delay construct.
    #[serde(default)]
    pub artificial_delay: bool,
    #[serde(default)]
    pub location: Option<SourceLocation>,
}

impl DecisionFunction {
    /// Fraction of available fields the function reads. 1.0 when nothing is
    /// available (nothing to ignore).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn data_usage(&self) -> f64 {
        if self.available_fields.is_empty() {
            return 1.0;
        }
        self.consumed_fields.len() as f64 / self.available_fields.len() as f64
    }

    /// Available fields the function never reads, in name order.
    #[must_use]
    pub fn unused_fields(&self) -> Vec<&str> {
        self.available_fields
            .difference(&self.consumed_fields)
            .map(String::as_str)
            .collect()
    }

    /// Unused real fields that overlap with the names the function's constant
    /// output claims to populate.
    #[must_use]
    pub fn shadowed_fields(&self) -> Vec<&str> {
        self.available_fields
            .difference(&self.consumed_fields)
            .filter(|field| self.produces_fields.contains(*field))
            .map(String::as_str)
            .collect()
    }
}
