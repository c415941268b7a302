//! Navigation whose target section does not implement the feature the label
//! promises. The user lands somewhere the feature simply is not.

use way_core::Category;
use way_core::finding::{Finding, SubjectRef};
use way_facts::FactStore;

use crate::{Detector, DetectorContext};

pub struct DeadEndDestination;

impl Detector for DeadEndDestination {
    fn category(&self) -> Category {
        Category::DeadEndDestination
    }

    fn detect(&self, store: &FactStore, _ctx: &DetectorContext) -> Vec<Finding> {
        let mut findings = Vec::new();

        for site in store.sites() {
            let Some(feature) = store.feature_for_label(&site.display_label) else {
                continue;
            };

            for section_name in site.effect.navigated_sections() {
                if feature.implemented_in.contains(section_name) {
                    continue;
                }

                let fix = feature
                    .sheet
                    .as_deref()
                    .filter(|sheet| store.sheet(sheet).is_some())
                    .map_or_else(
                        || {
                            format!(
                                "add an entry point where `{}` is implemented, or retarget the \
                                 navigation",
                                feature.name
                            )
                        },
                        |sheet| format!("open sheet `{sheet}` directly"),
                    );

                findings.push(
                    Finding::new(
                        self.category(),
                        SubjectRef::ActionSite(site.id.clone()),
                        format!(
                            "\"{}\" navigates to section `{}`, but `{}` is not implemented there",
                            site.display_label, section_name, feature.name
                        ),
                    )
                    .with_location(site.location.clone())
                    .with_fix(fix),
                );
                break;
            }
        }

        findings
    }
}
