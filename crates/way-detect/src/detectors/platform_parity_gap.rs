//! A private symbol referenced from a construct that compiles for platforms
//! the declaration does not cover. Builds fine on the primary platform and
//! breaks with "cannot find in scope" everywhere else.

use way_core::enums::Visibility;
use way_core::finding::{Finding, SubjectRef};
use way_core::Category;
use way_facts::FactStore;

use crate::{Detector, DetectorContext};

pub struct PlatformParityGap;

impl Detector for PlatformParityGap {
    fn category(&self) -> Category {
        Category::PlatformParityGap
    }

    fn detect(&self, store: &FactStore, _ctx: &DetectorContext) -> Vec<Finding> {
        let mut findings = Vec::new();

        for binding in store.bindings() {
            if binding.visibility != Visibility::Private {
                continue;
            }
            let missing = binding.missing_platforms();
            if missing.is_empty() {
                continue;
            }

            findings.push(
                Finding::new(
                    self.category(),
                    SubjectRef::Binding(format!(
                        "{}.{}",
                        binding.declaring_construct, binding.symbol
                    )),
                    format!(
                        "private symbol `{}` declared in `{}` is referenced from `{}`, which is \
                         also active on {}",
                        binding.symbol,
                        binding.declaring_construct,
                        binding.referencing_construct,
                        missing
                            .iter()
                            .map(|platform| format!("`{platform}`"))
                            .collect::<Vec<_>>()
                            .join(", ")
                    ),
                )
                .with_location(binding.location.clone())
                .with_fix(format!(
                    "widen the availability of `{}` or inline the logic with a cross-platform \
                     property",
                    binding.symbol
                )),
            );
        }

        findings
    }
}
