//! A destructive operation invoked with no confirmation gate armed earlier in
//! the effect chain. Immediate and irreversible is the worst combination.

use way_core::enums::FlagRole;
use way_core::finding::{Finding, SubjectRef};
use way_core::model::Effect;
use way_core::Category;
use way_facts::FactStore;

use crate::{Detector, DetectorContext};

pub struct UnconfirmedDestructive;

impl Detector for UnconfirmedDestructive {
    fn category(&self) -> Category {
        Category::UnconfirmedDestructive
    }

    fn detect(&self, store: &FactStore, _ctx: &DetectorContext) -> Vec<Finding> {
        let mut findings = Vec::new();

        for site in store.sites() {
            let mut gate_armed = false;
            for leaf in site.effect.leaves() {
                match leaf {
                    Effect::SetFlags { flags } => {
                        if flags.iter().any(|flag| {
                            store
                                .flag(flag)
                                .is_some_and(|f| f.role == FlagRole::ConfirmationGate)
                        }) {
                            gate_armed = true;
                        }
                    }
                    Effect::Invoke { operation } => {
                        let destructive =
                            store.operation(operation).is_some_and(|op| op.destructive);
                        if destructive && !gate_armed {
                            findings.push(
                                Finding::new(
                                    self.category(),
                                    SubjectRef::ActionSite(site.id.clone()),
                                    format!(
                                        "destructive operation `{operation}` is invoked without a \
                                         confirmation gate"
                                    ),
                                )
                                .with_location(site.location.clone())
                                .with_fix(format!(
                                    "set a confirmation-gate flag first and invoke `{operation}` \
                                     from the confirmed branch"
                                )),
                            );
                            break;
                        }
                    }
                    _ => {}
                }
            }
        }

        findings
    }
}
