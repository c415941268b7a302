//! The loaded, immutable fact store.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

use way_core::finding::SkippedSite;
use way_core::model::{
    ActionSite, DataBinding, DecisionFunction, Effect, Feature, Flag, Operation, Section, SheetKind,
};

use crate::error::FactsError;
use crate::payload::FactsPayload;

/// Normalized snapshot of one audit run's input facts.
///
/// Built once per run by [`FactStore::load`] and never mutated afterwards.
/// Detectors hold `&FactStore` references only.
#[derive(Debug)]
pub struct FactStore {
    sites: Vec<ActionSite>,
    skipped: Vec<SkippedSite>,
    sheets: BTreeMap<String, SheetKind>,
    sheets_exhaustive: bool,
    sections: BTreeMap<String, Section>,
    features: BTreeMap<String, Feature>,
    label_index: BTreeMap<String, String>,
    flags: BTreeMap<String, Flag>,
    operations: BTreeMap<String, Operation>,
    functions: BTreeMap<String, DecisionFunction>,
    bindings: Vec<DataBinding>,
}

impl FactStore {
    /// Validate and normalize an extraction payload.
    ///
    /// Fatal (`MalformedFacts`): the sheet registry is absent, or an action
    /// site lacks an id or an effect. Recoverable: a site referencing an
    /// unknown section, sheet, flag, or operation is excluded and recorded as
    /// a skip note.
    pub fn load(payload: FactsPayload) -> Result<Self, FactsError> {
        let registry = payload
            .sheet_registry
            .ok_or_else(|| FactsError::MalformedFacts {
                field: "sheet_registry".to_string(),
            })?;

        let mut sheets = BTreeMap::new();
        for kind in registry.kinds {
            match sheets.entry(kind.name.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(SheetKind {
                        name: kind.name,
                        role: kind.role,
                        handled: false,
                    });
                }
                Entry::Occupied(_) => {
                    tracing::warn!(sheet = %kind.name, "duplicate sheet kind declaration ignored");
                }
            }
        }
        for entry in registry.handlers {
            match sheets.get_mut(&entry.sheet) {
                Some(kind) => kind.handled = true,
                None => {
                    tracing::warn!(
                        sheet = %entry.sheet,
                        handler = %entry.handler,
                        "handler registered for undeclared sheet kind"
                    );
                }
            }
        }

        let sections: BTreeMap<String, Section> = payload
            .sections
            .into_iter()
            .map(|section| (section.name.clone(), section))
            .collect();
        let flags: BTreeMap<String, Flag> = payload
            .flags
            .into_iter()
            .map(|flag| (flag.name.clone(), flag))
            .collect();
        let operations: BTreeMap<String, Operation> = payload
            .operations
            .into_iter()
            .map(|operation| (operation.name.clone(), operation))
            .collect();
        let functions: BTreeMap<String, DecisionFunction> = payload
            .decision_functions
            .into_iter()
            .map(|function| (function.name.clone(), function))
            .collect();

        let mut features = BTreeMap::new();
        let mut label_index = BTreeMap::new();
        for feature in payload.features {
            label_index.insert(normalize_label(&feature.name), feature.name.clone());
            for alias in &feature.label_aliases {
                label_index.insert(normalize_label(alias), feature.name.clone());
            }
            features.insert(feature.name.clone(), feature);
        }

        let mut sites = Vec::new();
        let mut skipped = Vec::new();
        let mut seen_ids = BTreeSet::new();
        for (index, raw) in payload.action_sites.into_iter().enumerate() {
            if raw.id.is_empty() {
                return Err(FactsError::MalformedFacts {
                    field: format!("action_sites[{index}].id"),
                });
            }
            let Some(effect) = raw.effect else {
                return Err(FactsError::MalformedFacts {
                    field: format!("action_sites[{index}].effect"),
                });
            };

            if !seen_ids.insert(raw.id.clone()) {
                skipped.push(SkippedSite {
                    site_id: raw.id,
                    reason: "duplicate action site id".to_string(),
                    location: raw.location,
                });
                continue;
            }

            let site = ActionSite {
                id: raw.id,
                display_label: raw.display_label,
                effect,
                static_eligible_count: raw.static_eligible_count,
                has_single_item_shortcut: raw.has_single_item_shortcut,
                location: raw.location,
            };

            match dangling_reference(&site.effect, &sections, &sheets, &flags, &operations) {
                Some(reason) => skipped.push(SkippedSite {
                    site_id: site.id,
                    reason,
                    location: site.location,
                }),
                None => sites.push(site),
            }
        }

        tracing::debug!(
            sites = sites.len(),
            skipped = skipped.len(),
            sheets = sheets.len(),
            sections = sections.len(),
            features = features.len(),
            functions = functions.len(),
            bindings = payload.data_bindings.len(),
            "fact store loaded"
        );

        Ok(Self {
            sites,
            skipped,
            sheets,
            sheets_exhaustive: registry.exhaustive,
            sections,
            features,
            label_index,
            flags,
            operations,
            functions,
            bindings: payload.data_bindings,
        })
    }

    // --- Read-only lookups ---

    #[must_use]
    pub fn sites(&self) -> &[ActionSite] {
        &self.sites
    }

    #[must_use]
    pub fn skipped(&self) -> &[SkippedSite] {
        &self.skipped
    }

    #[must_use]
    pub fn sheet(&self, name: &str) -> Option<&SheetKind> {
        self.sheets.get(name)
    }

    pub fn sheets(&self) -> impl Iterator<Item = &SheetKind> {
        self.sheets.values()
    }

    /// Whether the handler set claims total coverage of declared kinds.
    #[must_use]
    pub const fn sheets_exhaustive(&self) -> bool {
        self.sheets_exhaustive
    }

    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    #[must_use]
    pub fn feature(&self, name: &str) -> Option<&Feature> {
        self.features.get(name)
    }

    /// Resolve a display label to the feature it promises, if any.
    /// Matching is case- and surrounding-whitespace-insensitive over feature
    /// names and label aliases.
    #[must_use]
    pub fn feature_for_label(&self, label: &str) -> Option<&Feature> {
        let name = self.label_index.get(&normalize_label(label))?;
        self.features.get(name)
    }

    #[must_use]
    pub fn flag(&self, name: &str) -> Option<&Flag> {
        self.flags.get(name)
    }

    #[must_use]
    pub fn operation(&self, name: &str) -> Option<&Operation> {
        self.operations.get(name)
    }

    pub fn operations(&self) -> impl Iterator<Item = &Operation> {
        self.operations.values()
    }

    #[must_use]
    pub fn function(&self, name: &str) -> Option<&DecisionFunction> {
        self.functions.get(name)
    }

    pub fn functions(&self) -> impl Iterator<Item = &DecisionFunction> {
        self.functions.values()
    }

    #[must_use]
    pub fn bindings(&self) -> &[DataBinding] {
        &self.bindings
    }

    #[must_use]
    pub fn site_count(&self) -> usize {
        self.sites.len()
    }

    #[must_use]
    pub fn function_count(&self) -> usize {
        self.functions.len()
    }
}

fn normalize_label(label: &str) -> String {
    label.trim().to_lowercase()
}

/// First unresolvable reference in an effect chain, as a human-readable reason.
fn dangling_reference(
    effect: &Effect,
    sections: &BTreeMap<String, Section>,
    sheets: &BTreeMap<String, SheetKind>,
    flags: &BTreeMap<String, Flag>,
    operations: &BTreeMap<String, Operation>,
) -> Option<String> {
    for leaf in effect.leaves() {
        match leaf {
            Effect::NavigateToSection { section } if !sections.contains_key(section) => {
                return Some(format!("unknown section `{section}`"));
            }
            Effect::OpenSheet { sheet } if !sheets.contains_key(sheet) => {
                return Some(format!("unknown sheet kind `{sheet}`"));
            }
            Effect::SetFlags { flags: set } => {
                if let Some(missing) = set.iter().find(|flag| !flags.contains_key(*flag)) {
                    return Some(format!("unknown flag `{missing}`"));
                }
            }
            Effect::Invoke { operation } if !operations.contains_key(operation) => {
                return Some(format!("unknown operation `{operation}`"));
            }
            _ => {}
        }
    }
    None
}
