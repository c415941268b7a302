use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::SourceLocation;

/// The effect an action site produces when triggered.
///
/// Every site has exactly one effect; multi-step behavior is an explicit
/// `Composite` with its steps in trigger order, never inferred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Effect {
    NavigateToSection { section: String },
    OpenSheet { sheet: String },
    SetFlags { flags: BTreeSet<String> },
    Invoke { operation: String },
    Composite { effects: Vec<Effect> },
}

impl Effect {
    /// Leaf effects in trigger order, with nested composites flattened.
    #[must_use]
    pub fn leaves(&self) -> Vec<&Self> {
        match self {
            Self::Composite { effects } => effects.iter().flat_map(Self::leaves).collect(),
            leaf => vec![leaf],
        }
    }

    /// Section names this effect chain navigates to, in order.
    #[must_use]
    pub fn navigated_sections(&self) -> Vec<&str> {
        self.leaves()
            .into_iter()
            .filter_map(|leaf| match leaf {
                Self::NavigateToSection { section } => Some(section.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Sheet names this effect chain opens, in order.
    #[must_use]
    pub fn opened_sheets(&self) -> Vec<&str> {
        self.leaves()
            .into_iter()
            .filter_map(|leaf| match leaf {
                Self::OpenSheet { sheet } => Some(sheet.as_str()),
                _ => None,
            })
            .collect()
    }

    /// All flags set anywhere in the chain.
    #[must_use]
    pub fn set_flags(&self) -> BTreeSet<&str> {
        self.leaves()
            .into_iter()
            .filter_map(|leaf| match leaf {
                Self::SetFlags { flags } => Some(flags.iter().map(String::as_str)),
                _ => None,
            })
            .flatten()
            .collect()
    }
}

/// A user-triggerable UI element (button, card) and the effect it produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ActionSite {
    pub id: String,
    /// Label text shown to the user; resolved against the feature registry to
    /// infer which feature the site promises.
    pub display_label: String,
    pub effect: Effect,
    /// Eligible-item count when the extractor can prove it statically.
    #[serde(default)]
    pub static_eligible_count: Option<u64>,
    /// Whether the site branches past its picker when one item is eligible.
    #[serde(default)]
    pub has_single_item_shortcut: bool,
    #[serde(default)]
    pub location: Option<SourceLocation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn leaves_flatten_nested_composites_in_order() {
        let effect = Effect::Composite {
            effects: vec![
                Effect::SetFlags {
                    flags: flags(&["is_select_mode"]),
                },
                Effect::Composite {
                    effects: vec![
                        Effect::NavigateToSection {
                            section: "my_items".into(),
                        },
                        Effect::Invoke {
                            operation: "refresh".into(),
                        },
                    ],
                },
            ],
        };

        let kinds: Vec<&Effect> = effect.leaves();
        assert_eq!(kinds.len(), 3);
        assert!(matches!(kinds[0], Effect::SetFlags { .. }));
        assert!(matches!(kinds[1], Effect::NavigateToSection { .. }));
        assert!(matches!(kinds[2], Effect::Invoke { .. }));
    }

    #[test]
    fn navigated_sections_and_set_flags() {
        let effect = Effect::Composite {
            effects: vec![
                Effect::NavigateToSection {
                    section: "my_items".into(),
                },
                Effect::SetFlags {
                    flags: flags(&["is_select_mode"]),
                },
            ],
        };
        assert_eq!(effect.navigated_sections(), vec!["my_items"]);
        assert_eq!(effect.set_flags(), ["is_select_mode"].into_iter().collect());
    }

    #[test]
    fn effect_serializes_with_kind_tag() {
        let effect = Effect::OpenSheet {
            sheet: "price_watch".into(),
        };
        let json = serde_json::to_value(&effect).unwrap();
        assert_eq!(json["kind"], "open_sheet");
        assert_eq!(json["sheet"], "price_watch");
    }
}
