//! # way-detect
//!
//! The Waymark detector set.
//!
//! One [`Detector`] exists per anti-pattern category. Each is a pure function
//! over an immutable [`FactStore`] snapshot: detectors never mutate the store
//! and never read each other's output, so the set can be extended, reduced, or
//! run in parallel without reordering concerns. Ordering is imposed locally
//! (each detector sorts its own findings) and finally by the aggregator.

pub mod detectors;

use std::collections::BTreeSet;

use rayon::prelude::*;

use way_core::Category;
use way_core::finding::Finding;
use way_facts::FactStore;

/// Default fraction of available fields a decision function must read.
pub const DEFAULT_DECISION_DATA_USAGE_THRESHOLD: f64 = 0.4;

/// Tuning knobs shared by all detectors for one run.
#[derive(Debug, Clone)]
pub struct DetectorContext {
    /// Decision functions reading less than this fraction of their available
    /// fields are flagged by the data-usage detector.
    pub decision_data_usage_threshold: f64,
}

impl Default for DetectorContext {
    fn default() -> Self {
        Self {
            decision_data_usage_threshold: DEFAULT_DECISION_DATA_USAGE_THRESHOLD,
        }
    }
}

/// One anti-pattern rule.
pub trait Detector: Send + Sync {
    /// The category this detector reports under.
    fn category(&self) -> Category;

    /// Run the rule over the snapshot. Must be pure: no interior mutability,
    /// no dependence on other detectors.
    fn detect(&self, store: &FactStore, ctx: &DetectorContext) -> Vec<Finding>;
}

/// The full battery, one detector per category, in category order.
#[must_use]
pub fn all_detectors() -> Vec<Box<dyn Detector>> {
    vec![
        Box::new(detectors::section_instead_of_feature::SectionInsteadOfFeature),
        Box::new(detectors::dead_end_destination::DeadEndDestination),
        Box::new(detectors::missing_state_setup::MissingStateSetup),
        Box::new(detectors::unhandled_sheet_kind::UnhandledSheetKind),
        Box::new(detectors::silent_mutation::SilentMutation),
        Box::new(detectors::unconfirmed_destructive::UnconfirmedDestructive),
        Box::new(detectors::inconsistent_feature_access::InconsistentFeatureAccess),
        Box::new(detectors::mock_data_posing_as_real::MockDataPosingAsReal),
        Box::new(detectors::decision_ignoring_data::DecisionIgnoringData),
        Box::new(detectors::platform_parity_gap::PlatformParityGap),
        Box::new(detectors::unnecessary_two_step::UnnecessaryTwoStep),
    ]
}

/// Run the enabled detectors over one snapshot.
///
/// `enabled = None` runs the full battery. With `parallel`, detectors fan out
/// over rayon and their result vectors are joined in battery order, so output
/// is identical in both modes.
#[must_use]
pub fn run(
    store: &FactStore,
    enabled: Option<&BTreeSet<Category>>,
    ctx: &DetectorContext,
    parallel: bool,
) -> Vec<Finding> {
    let battery: Vec<Box<dyn Detector>> = all_detectors()
        .into_iter()
        .filter(|detector| enabled.is_none_or(|set| set.contains(&detector.category())))
        .collect();

    let per_detector: Vec<Vec<Finding>> = if parallel {
        battery
            .par_iter()
            .map(|detector| run_one(detector.as_ref(), store, ctx))
            .collect()
    } else {
        battery
            .iter()
            .map(|detector| run_one(detector.as_ref(), store, ctx))
            .collect()
    };

    per_detector.into_iter().flatten().collect()
}

fn run_one(detector: &dyn Detector, store: &FactStore, ctx: &DetectorContext) -> Vec<Finding> {
    let mut findings = detector.detect(store, ctx);
    sort_findings(&mut findings);
    tracing::debug!(
        category = %detector.category(),
        findings = findings.len(),
        "detector finished"
    );
    findings
}

/// Stable detector-output order: `(category, location, subject)`.
pub fn sort_findings(findings: &mut [Finding]) {
    findings.sort_by(|a, b| a.ordering_key().cmp(&b.ordering_key()));
}
