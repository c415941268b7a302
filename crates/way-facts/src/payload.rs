//! The extraction payload contract.
//!
//! Raw types mirror the normalized model in `way-core` but tolerate the gaps
//! machine extraction produces: effects may be absent, registries may be
//! missing. `FactStore::load` decides which gaps are fatal and which skip a
//! single site. `payload_schema` exports this contract as JSON Schema for
//! extractor authors (`wmk schema`).

use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};

use way_core::enums::SheetRole;
use way_core::model::{
    DataBinding, DecisionFunction, Effect, Feature, Flag, Operation, Section, SourceLocation,
};

use crate::error::FactsError;

/// An action site as extracted, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RawActionSite {
    pub id: String,
    #[serde(default)]
    pub display_label: String,
    /// Absent when the extractor could not determine the effect; fatal at load.
    #[serde(default)]
    pub effect: Option<Effect>,
    #[serde(default)]
    pub static_eligible_count: Option<u64>,
    #[serde(default)]
    pub has_single_item_shortcut: bool,
    #[serde(default)]
    pub location: Option<SourceLocation>,
}

/// A declared sheet variant as extracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RawSheetKind {
    pub name: String,
    #[serde(default = "default_sheet_role")]
    pub role: SheetRole,
}

const fn default_sheet_role() -> SheetRole {
    SheetRole::Feature
}

/// One entry of the sheet → handler mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HandlerEntry {
    pub sheet: String,
    pub handler: String,
}

/// The declared sheet set and its handler coverage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RawSheetRegistry {
    #[serde(default)]
    pub kinds: Vec<RawSheetKind>,
    #[serde(default)]
    pub handlers: Vec<HandlerEntry>,
    /// Whether the handler set claims to cover every declared kind.
    #[serde(default)]
    pub exhaustive: bool,
}

/// Everything one audit run consumes, as handed over by the extractor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FactsPayload {
    #[serde(default)]
    pub action_sites: Vec<RawActionSite>,
    /// Required; its absence is a `MalformedFacts` error.
    #[serde(default)]
    pub sheet_registry: Option<RawSheetRegistry>,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub flags: Vec<Flag>,
    #[serde(default)]
    pub operations: Vec<Operation>,
    #[serde(default)]
    pub decision_functions: Vec<DecisionFunction>,
    #[serde(default)]
    pub data_bindings: Vec<DataBinding>,
}

impl FactsPayload {
    /// Parse a payload from its JSON representation.
    pub fn from_json_str(json: &str) -> Result<Self, FactsError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// JSON Schema of the extraction contract.
#[must_use]
pub fn payload_schema() -> Schema {
    schema_for!(FactsPayload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_payload_parses() {
        let payload = FactsPayload::from_json_str(r#"{"sheet_registry": {}}"#).unwrap();
        assert!(payload.action_sites.is_empty());
        assert!(payload.sheet_registry.is_some());
    }

    #[test]
    fn sheet_role_defaults_to_feature() {
        let payload = FactsPayload::from_json_str(
            r#"{"sheet_registry": {"kinds": [{"name": "price_watch"}]}}"#,
        )
        .unwrap();
        let registry = payload.sheet_registry.unwrap();
        assert_eq!(registry.kinds[0].role, SheetRole::Feature);
        assert!(!registry.exhaustive);
    }

    #[test]
    fn site_without_effect_parses_as_none() {
        let payload = FactsPayload::from_json_str(
            r#"{"action_sites": [{"id": "card-1"}], "sheet_registry": {}}"#,
        )
        .unwrap();
        assert!(payload.action_sites[0].effect.is_none());
    }

    #[test]
    fn schema_names_top_level_fields() {
        let schema = serde_json::to_value(payload_schema()).unwrap();
        let properties = schema["properties"].as_object().unwrap();
        assert!(properties.contains_key("action_sites"));
        assert!(properties.contains_key("sheet_registry"));
        assert!(properties.contains_key("decision_functions"));
    }
}
