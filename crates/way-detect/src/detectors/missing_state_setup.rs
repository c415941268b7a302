//! Navigation that omits the companion flags the target feature needs.
//!
//! A "Bulk Edit" card that navigates to the item list without turning on
//! selection mode drops the user on a screen that looks nothing like the
//! promise. Flagged only when none of the required flags is set; partial
//! setup is left alone.

use way_core::Category;
use way_core::finding::{Finding, SubjectRef};
use way_facts::FactStore;

use crate::{Detector, DetectorContext};

pub struct MissingStateSetup;

impl Detector for MissingStateSetup {
    fn category(&self) -> Category {
        Category::MissingStateSetup
    }

    fn detect(&self, store: &FactStore, _ctx: &DetectorContext) -> Vec<Finding> {
        let mut findings = Vec::new();

        for site in store.sites() {
            let Some(feature) = store.feature_for_label(&site.display_label) else {
                continue;
            };
            if feature.required_flags.is_empty() {
                continue;
            }
            if site.effect.navigated_sections().is_empty() {
                continue;
            }

            let set = site.effect.set_flags();
            if feature
                .required_flags
                .iter()
                .any(|flag| set.contains(flag.as_str()))
            {
                continue;
            }

            let required: Vec<&str> = feature.required_flags.iter().map(String::as_str).collect();
            findings.push(
                Finding::new(
                    self.category(),
                    SubjectRef::ActionSite(site.id.clone()),
                    format!(
                        "\"{}\" navigates without setting required flag(s) {}",
                        site.display_label,
                        backticked(&required)
                    ),
                )
                .with_location(site.location.clone())
                .with_fix(format!(
                    "set {} alongside the navigation",
                    backticked(&required)
                )),
            );
        }

        findings
    }
}

fn backticked(names: &[&str]) -> String {
    names
        .iter()
        .map(|name| format!("`{name}`"))
        .collect::<Vec<_>>()
        .join(", ")
}
