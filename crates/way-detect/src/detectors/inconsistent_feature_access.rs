//! The same feature reached through different effect kinds across sites:
//! a sheet here, section navigation there, a direct invocation elsewhere.
//! One finding per feature, listing every divergent site.

use std::collections::BTreeMap;

use way_core::finding::{Finding, SubjectRef};
use way_core::model::{ActionSite, Effect, SourceLocation};
use way_core::Category;
use way_facts::FactStore;

use crate::{Detector, DetectorContext};

/// How a site reaches its feature. Not a wire type; ordering only fixes the
/// listing order in messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum AccessKind {
    Navigate,
    OpenSheet,
    Invoke,
}

impl AccessKind {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Navigate => "navigate",
            Self::OpenSheet => "open_sheet",
            Self::Invoke => "invoke",
        }
    }
}

pub struct InconsistentFeatureAccess;

impl Detector for InconsistentFeatureAccess {
    fn category(&self) -> Category {
        Category::InconsistentFeatureAccess
    }

    fn detect(&self, store: &FactStore, _ctx: &DetectorContext) -> Vec<Finding> {
        // feature name -> access kind -> sites using it
        let mut by_feature: BTreeMap<&str, BTreeMap<AccessKind, Vec<&ActionSite>>> =
            BTreeMap::new();

        for site in store.sites() {
            let Some(feature) = store.feature_for_label(&site.display_label) else {
                continue;
            };
            for kind in access_kinds(site) {
                by_feature
                    .entry(feature.name.as_str())
                    .or_default()
                    .entry(kind)
                    .or_default()
                    .push(site);
            }
        }

        let mut findings = Vec::new();
        for (feature_name, by_kind) in by_feature {
            if by_kind.len() < 2 {
                continue;
            }
            let total_sites: usize = by_kind.values().map(Vec::len).sum();
            if total_sites < 2 {
                continue;
            }

            let mut descriptions = Vec::new();
            let mut earliest: Option<&SourceLocation> = None;
            for (kind, sites) in &by_kind {
                for site in sites {
                    descriptions.push(format!("`{}` uses {}", site.id, kind.as_str()));
                    if let Some(location) = &site.location {
                        if earliest.is_none_or(|current| location < current) {
                            earliest = Some(location);
                        }
                    }
                }
            }

            let fix = store
                .feature(feature_name)
                .and_then(|feature| feature.sheet.as_deref())
                .map_or_else(
                    || "standardize on a single access pattern".to_string(),
                    |sheet| format!("standardize on opening sheet `{sheet}` everywhere"),
                );

            findings.push(
                Finding::new(
                    self.category(),
                    SubjectRef::Feature(feature_name.to_string()),
                    format!(
                        "feature `{}` is reached through {} different effect kinds: {}",
                        feature_name,
                        by_kind.len(),
                        descriptions.join("; ")
                    ),
                )
                .with_location(earliest.cloned())
                .with_fix(fix),
            );
        }

        findings
    }
}

/// Effect kinds through which a site reaches its feature, deduplicated.
fn access_kinds(site: &ActionSite) -> Vec<AccessKind> {
    let mut kinds = Vec::new();
    for leaf in site.effect.leaves() {
        let kind = match leaf {
            Effect::NavigateToSection { .. } => AccessKind::Navigate,
            Effect::OpenSheet { .. } => AccessKind::OpenSheet,
            Effect::Invoke { .. } => AccessKind::Invoke,
            Effect::SetFlags { .. } | Effect::Composite { .. } => continue,
        };
        if !kinds.contains(&kind) {
            kinds.push(kind);
        }
    }
    kinds
}

#[cfg(test)]
mod tests {
    use super::*;

    use way_core::model::Effect;

    fn site(id: &str, effect: Effect) -> ActionSite {
        ActionSite {
            id: id.into(),
            display_label: "Export".into(),
            effect,
            static_eligible_count: None,
            has_single_item_shortcut: false,
            location: None,
        }
    }

    #[test]
    fn composite_contributes_each_leaf_kind_once() {
        let s = site(
            "a",
            Effect::Composite {
                effects: vec![
                    Effect::NavigateToSection {
                        section: "tools".into(),
                    },
                    Effect::NavigateToSection {
                        section: "export".into(),
                    },
                    Effect::Invoke {
                        operation: "export".into(),
                    },
                ],
            },
        );
        assert_eq!(
            access_kinds(&s),
            vec![AccessKind::Navigate, AccessKind::Invoke]
        );
    }

    #[test]
    fn set_flags_is_not_an_access_kind() {
        let s = site(
            "a",
            Effect::SetFlags {
                flags: std::collections::BTreeSet::new(),
            },
        );
        assert!(access_kinds(&s).is_empty());
    }
}
