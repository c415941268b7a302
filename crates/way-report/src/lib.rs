//! # way-report
//!
//! The Waymark finding aggregator.
//!
//! Takes the joined output of all detectors, deduplicates findings that share
//! `(category, subject)`, imposes the final stable order, and assembles the
//! [`Report`]. Pure transform: no side effects, no persistence. Rendering is
//! the caller's concern.

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

use way_core::finding::{Finding, SubjectRef};
use way_core::report::Report;
use way_core::Category;
use way_facts::FactStore;

/// Errors raised while assembling a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The store holds nothing auditable. Distinct from a clean pass: a clean
    /// pass still requires at least one site or decision function.
    #[error("nothing to audit: the fact store has no action sites and no decision functions")]
    EmptyFactStore,
}

/// Assemble the final report from one run's detector output.
///
/// Findings sharing `(category, subject)` collapse to their first occurrence.
/// The result is sorted by `(category, location, subject)`, so two runs over
/// identical input produce byte-identical reports.
pub fn aggregate(store: &FactStore, findings: Vec<Finding>) -> Result<Report, ReportError> {
    if store.site_count() == 0 && store.function_count() == 0 {
        return Err(ReportError::EmptyFactStore);
    }

    let mut seen: BTreeSet<(Category, SubjectRef)> = BTreeSet::new();
    let mut deduped: Vec<Finding> = Vec::with_capacity(findings.len());
    for finding in findings {
        if seen.insert((finding.category, finding.subject.clone())) {
            deduped.push(finding);
        }
    }

    deduped.sort_by(|a, b| a.ordering_key().cmp(&b.ordering_key()));

    let mut summary: BTreeMap<Category, usize> = BTreeMap::new();
    for finding in &deduped {
        *summary.entry(finding.category).or_insert(0) += 1;
    }

    Ok(Report {
        findings: deduped,
        skipped: store.skipped().to_vec(),
        summary,
        audited_sites: store.site_count(),
        audited_functions: store.function_count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use way_core::model::SourceLocation;
    use way_facts::{FactsPayload, RawActionSite, RawSheetRegistry};

    fn store_with_one_site() -> FactStore {
        let payload = FactsPayload {
            action_sites: vec![RawActionSite {
                id: "card-1".into(),
                display_label: "Settings".into(),
                effect: Some(way_core::model::Effect::SetFlags {
                    flags: BTreeSet::new(),
                }),
                static_eligible_count: None,
                has_single_item_shortcut: false,
                location: None,
            }],
            sheet_registry: Some(RawSheetRegistry::default()),
            ..FactsPayload::default()
        };
        FactStore::load(payload).unwrap()
    }

    fn empty_store() -> FactStore {
        FactStore::load(FactsPayload {
            sheet_registry: Some(RawSheetRegistry::default()),
            ..FactsPayload::default()
        })
        .unwrap()
    }

    fn finding(category: Category, subject: &str, file: &str, line: u32) -> Finding {
        Finding::new(
            category,
            SubjectRef::ActionSite(subject.into()),
            "test finding",
        )
        .with_location(Some(SourceLocation::new(file, line)))
    }

    #[test]
    fn empty_store_is_a_configuration_error() {
        let err = aggregate(&empty_store(), Vec::new()).unwrap_err();
        assert!(matches!(err, ReportError::EmptyFactStore));
    }

    #[test]
    fn zero_findings_on_a_populated_store_is_a_clean_pass() {
        let report = aggregate(&store_with_one_site(), Vec::new()).unwrap();
        assert!(report.is_clean());
        assert_eq!(report.audited_sites, 1);
    }

    #[test]
    fn duplicate_category_subject_pairs_collapse_to_first() {
        let first = finding(Category::SilentMutation, "card-1", "a.swift", 1);
        let duplicate = finding(Category::SilentMutation, "card-1", "b.swift", 9);
        let other_category = finding(Category::MissingStateSetup, "card-1", "a.swift", 1);

        let report = aggregate(
            &store_with_one_site(),
            vec![first.clone(), duplicate, other_category],
        )
        .unwrap();

        assert_eq!(report.findings.len(), 2);
        assert!(report.findings.contains(&first));
        assert_eq!(report.summary[&Category::SilentMutation], 1);
        assert_eq!(report.summary[&Category::MissingStateSetup], 1);
    }

    #[test]
    fn findings_sort_by_category_then_location() {
        let late = finding(Category::UnnecessaryTwoStep, "z", "z.swift", 9);
        let early_category = finding(Category::SectionInsteadOfFeature, "a", "z.swift", 9);
        let early_location = finding(Category::UnnecessaryTwoStep, "b", "a.swift", 1);

        let report = aggregate(
            &store_with_one_site(),
            vec![late.clone(), early_category.clone(), early_location.clone()],
        )
        .unwrap();

        assert_eq!(
            report.findings,
            vec![early_category, early_location, late]
        );
    }
}
