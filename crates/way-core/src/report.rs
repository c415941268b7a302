//! The aggregated audit report.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::enums::{Category, Severity};
use crate::finding::{Finding, SkippedSite};

/// Output of one audit run: ordered findings, per-site skip notes, and summary
/// counts. Contains no timestamps or run metadata, so two runs over identical
/// input serialize identically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Report {
    pub findings: Vec<Finding>,
    pub skipped: Vec<SkippedSite>,
    /// Finding count per category; categories with zero findings are omitted.
    pub summary: BTreeMap<Category, usize>,
    pub audited_sites: usize,
    pub audited_functions: usize,
}

impl Report {
    /// Highest severity among the findings, if any.
    #[must_use]
    pub fn max_severity(&self) -> Option<Severity> {
        self.findings.iter().map(|finding| finding.severity).max()
    }

    /// Whether any finding reaches the given gate severity.
    #[must_use]
    pub fn violates(&self, fail_on: Option<Severity>) -> bool {
        match fail_on {
            Some(gate) => self.max_severity().is_some_and(|max| max >= gate),
            None => false,
        }
    }

    /// A clean pass: sites were audited and nothing was found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finding::SubjectRef;

    fn report_with(severities: &[Severity]) -> Report {
        let findings = severities
            .iter()
            .map(|severity| {
                let mut finding = Finding::new(
                    Category::SilentMutation,
                    SubjectRef::Operation(format!("op-{severity}")),
                    "test",
                );
                finding.severity = *severity;
                finding
            })
            .collect();
        Report {
            findings,
            skipped: Vec::new(),
            summary: BTreeMap::new(),
            audited_sites: 1,
            audited_functions: 0,
        }
    }

    #[test]
    fn max_severity_over_findings() {
        let report = report_with(&[Severity::Low, Severity::Critical, Severity::Medium]);
        assert_eq!(report.max_severity(), Some(Severity::Critical));
        assert!(report_with(&[]).max_severity().is_none());
    }

    #[test]
    fn violates_compares_against_gate() {
        let report = report_with(&[Severity::Medium]);
        assert!(report.violates(Some(Severity::Medium)));
        assert!(report.violates(Some(Severity::Low)));
        assert!(!report.violates(Some(Severity::High)));
        assert!(!report.violates(None));
    }

    #[test]
    fn clean_report_never_violates() {
        let report = report_with(&[]);
        assert!(report.is_clean());
        assert!(!report.violates(Some(Severity::Low)));
    }
}
