//! A decision function reading only a sliver of the fields available to it.
//!
//! The threshold is strict: usage below it is flagged, usage exactly at it is
//! not, so a function consuming `ceil(threshold * available)` fields passes.

use way_core::enums::{Confidence, FunctionKind};
use way_core::finding::{Finding, SubjectRef};
use way_core::Category;
use way_facts::FactStore;

use crate::{Detector, DetectorContext};

pub struct DecisionIgnoringData;

impl Detector for DecisionIgnoringData {
    fn category(&self) -> Category {
        Category::DecisionIgnoringData
    }

    fn detect(&self, store: &FactStore, ctx: &DetectorContext) -> Vec<Finding> {
        let threshold = ctx.decision_data_usage_threshold;
        let mut findings = Vec::new();

        for function in store.functions() {
            if function.kind != FunctionKind::Decision {
                continue;
            }
            if function.available_fields.is_empty() {
                continue;
            }
            let usage = function.data_usage();
            if usage >= threshold {
                continue;
            }

            let unused = function.unused_fields();
            findings.push(
                Finding::new(
                    self.category(),
                    SubjectRef::Function(function.name.clone()),
                    format!(
                        "`{}` reads {} of {} available field(s) on `{}` (usage {:.2}, threshold \
                         {:.2}); unused: {}",
                        function.name,
                        function.consumed_fields.len(),
                        function.available_fields.len(),
                        function.entity,
                        usage,
                        threshold,
                        unused
                            .iter()
                            .map(|field| format!("`{field}`"))
                            .collect::<Vec<_>>()
                            .join(", ")
                    ),
                )
                .with_location(function.location.clone())
                .with_confidence(Confidence::Medium)
                .with_fix(format!(
                    "weigh the unused fields into the decision, or reclassify `{}` as an accessor",
                    function.name
                )),
            );
        }

        findings
    }
}
