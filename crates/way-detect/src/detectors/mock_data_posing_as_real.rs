//! Hardcoded output behind an artificial delay, dressed up as a real fetch,
//! while real fields with the same names sit unused on the entity.

use way_core::enums::{Confidence, FunctionKind};
use way_core::finding::{Finding, SubjectRef};
use way_core::Category;
use way_facts::FactStore;

use crate::{Detector, DetectorContext};

pub struct MockDataPosingAsReal;

impl Detector for MockDataPosingAsReal {
    fn category(&self) -> Category {
        Category::MockDataPosingAsReal
    }

    fn detect(&self, store: &FactStore, _ctx: &DetectorContext) -> Vec<Finding> {
        let mut findings = Vec::new();

        for function in store.functions() {
            if function.kind == FunctionKind::Accessor {
                continue;
            }
            if !(function.constant_output && function.artificial_delay) {
                continue;
            }
            let shadowed = function.shadowed_fields();
            if shadowed.is_empty() {
                continue;
            }

            findings.push(
                Finding::new(
                    self.category(),
                    SubjectRef::Function(function.name.clone()),
                    format!(
                        "`{}` returns constant data behind an artificial delay while real \
                         field(s) {} on `{}` go unused",
                        function.name,
                        backticked(&shadowed),
                        function.entity
                    ),
                )
                .with_location(function.location.clone())
                .with_confidence(Confidence::Medium)
                .with_fix(format!(
                    "compute the result from `{}` field(s) {} and drop the delay",
                    function.entity,
                    backticked(&shadowed)
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
