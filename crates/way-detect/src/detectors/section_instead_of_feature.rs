//! A card promises a feature but navigates to a whole section, leaving the
//! user to scroll or search for it.
//!
//! Only flagged when the sheet registry offers a direct alternative; a feature
//! with no sheet entry is a missing entry point, not a navigation mistake.

use way_core::Category;
use way_core::finding::{Finding, SubjectRef};
use way_facts::FactStore;

use crate::{Detector, DetectorContext};

pub struct SectionInsteadOfFeature;

impl Detector for SectionInsteadOfFeature {
    fn category(&self) -> Category {
        Category::SectionInsteadOfFeature
    }

    fn detect(&self, store: &FactStore, _ctx: &DetectorContext) -> Vec<Finding> {
        let mut findings = Vec::new();

        for site in store.sites() {
            let Some(feature) = store.feature_for_label(&site.display_label) else {
                continue;
            };
            let Some(sheet) = feature
                .sheet
                .as_deref()
                .filter(|sheet| store.sheet(sheet).is_some())
            else {
                continue;
            };

            for section_name in site.effect.navigated_sections() {
                let Some(section) = store.section(section_name) else {
                    continue;
                };
                if section.contains_features.contains(&feature.name) {
                    continue;
                }
                // Not implemented there at all is a dead end, a different category.
                if !feature.implemented_in.contains(section_name) {
                    continue;
                }

                findings.push(
                    Finding::new(
                        self.category(),
                        SubjectRef::ActionSite(site.id.clone()),
                        format!(
                            "\"{}\" navigates to section `{}`, where `{}` is only reachable by \
                             scrolling or searching",
                            site.display_label, section_name, feature.name
                        ),
                    )
                    .with_location(site.location.clone())
                    .with_fix(format!(
                        "open sheet `{sheet}` directly instead of navigating to `{section_name}`"
                    )),
                );
                break;
            }
        }

        findings
    }
}
