//! A picker step forced on the user although exactly one item is eligible
//! and the site has no short-circuit branch.
//!
//! Fires only on a statically proven count of one; dynamic counts are never
//! guessed.

use way_core::enums::{Confidence, SheetRole};
use way_core::finding::{Finding, SubjectRef};
use way_core::Category;
use way_facts::FactStore;

use crate::{Detector, DetectorContext};

pub struct UnnecessaryTwoStep;

impl Detector for UnnecessaryTwoStep {
    fn category(&self) -> Category {
        Category::UnnecessaryTwoStep
    }

    fn detect(&self, store: &FactStore, _ctx: &DetectorContext) -> Vec<Finding> {
        let mut findings = Vec::new();

        for site in store.sites() {
            if site.static_eligible_count != Some(1) || site.has_single_item_shortcut {
                continue;
            }
            let Some(picker) = site
                .effect
                .opened_sheets()
                .into_iter()
                .find(|sheet| {
                    store
                        .sheet(sheet)
                        .is_some_and(|kind| kind.role == SheetRole::Picker)
                })
            else {
                continue;
            };

            findings.push(
                Finding::new(
                    self.category(),
                    SubjectRef::ActionSite(site.id.clone()),
                    format!(
                        "`{}` always opens picker `{}` although exactly one item is eligible",
                        site.id, picker
                    ),
                )
                .with_location(site.location.clone())
                .with_confidence(Confidence::Medium)
                .with_fix(
                    "branch straight to the feature when the eligible count is one".to_string(),
                ),
            );
        }

        findings
    }
}
