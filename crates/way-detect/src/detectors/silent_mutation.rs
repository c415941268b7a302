//! A save/delete/update operation that completes (or fails) without telling
//! the user. `try? save(); dismiss()` leaves no trace either way.

use way_core::Category;
use way_core::finding::{Finding, SubjectRef};
use way_facts::FactStore;

use crate::{Detector, DetectorContext};

pub struct SilentMutation;

impl Detector for SilentMutation {
    fn category(&self) -> Category {
        Category::SilentMutation
    }

    fn detect(&self, store: &FactStore, _ctx: &DetectorContext) -> Vec<Finding> {
        let mut findings = Vec::new();

        for operation in store.operations() {
            if !operation.kind.is_mutating() {
                continue;
            }
            let silent_path = match (operation.success_feedback, operation.failure_feedback) {
                (true, true) => continue,
                (false, true) => "its success path",
                (true, false) => "its failure path",
                (false, false) => "both its success and failure paths",
            };

            findings.push(
                Finding::new(
                    self.category(),
                    SubjectRef::Operation(operation.name.clone()),
                    format!(
                        "{} operation `{}` gives no user feedback on {}",
                        operation.kind, operation.name, silent_path
                    ),
                )
                .with_location(operation.location.clone())
                .with_fix(format!(
                    "surface success and failure feedback (e.g. a toast) from `{}`",
                    operation.name
                )),
            );
        }

        findings
    }
}
