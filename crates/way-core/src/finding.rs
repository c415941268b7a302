//! Finding records emitted by detectors.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::{Category, Confidence, Severity};
use crate::model::SourceLocation;

// ---------------------------------------------------------------------------
// SubjectRef
// ---------------------------------------------------------------------------

/// What a finding points at. Together with the category this is the
/// deduplication key in the aggregator.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SubjectRef {
    ActionSite(String),
    Function(String),
    SheetKind(String),
    Feature(String),
    Binding(String),
    Operation(String),
}

impl SubjectRef {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::ActionSite(name)
            | Self::Function(name)
            | Self::SheetKind(name)
            | Self::Feature(name)
            | Self::Binding(name)
            | Self::Operation(name) => name,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::ActionSite(_) => "action_site",
            Self::Function(_) => "function",
            Self::SheetKind(_) => "sheet_kind",
            Self::Feature(_) => "feature",
            Self::Binding(_) => "binding",
            Self::Operation(_) => "operation",
        }
    }
}

impl fmt::Display for SubjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind(), self.name())
    }
}

// ---------------------------------------------------------------------------
// Finding
// ---------------------------------------------------------------------------

/// One detected anti-pattern instance. Immutable once created; detectors build
/// findings during a run and hand them to the aggregator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Finding {
    pub category: Category,
    pub severity: Severity,
    pub confidence: Confidence,
    pub subject: SubjectRef,
    pub location: Option<SourceLocation>,
    pub message: String,
    pub suggested_fix: Option<String>,
}

impl Finding {
    /// Finding with the category's default severity and high confidence.
    /// Detectors override severity/confidence after construction when needed.
    #[must_use]
    pub fn new(category: Category, subject: SubjectRef, message: impl Into<String>) -> Self {
        Self {
            category,
            severity: category.default_severity(),
            confidence: Confidence::High,
            subject,
            location: None,
            message: message.into(),
            suggested_fix: None,
        }
    }

    #[must_use]
    pub fn with_location(mut self, location: Option<SourceLocation>) -> Self {
        self.location = location;
        self
    }

    #[must_use]
    pub fn with_confidence(mut self, confidence: Confidence) -> Self {
        self.confidence = confidence;
        self
    }

    #[must_use]
    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.suggested_fix = Some(fix.into());
        self
    }

    /// Sort key shared by detectors and the aggregator: `(category, location,
    /// subject)`. Findings without a location sort before located ones within
    /// a category.
    #[must_use]
    pub fn ordering_key(&self) -> (Category, Option<&SourceLocation>, &SubjectRef) {
        (self.category, self.location.as_ref(), &self.subject)
    }
}

// ---------------------------------------------------------------------------
// SkippedSite
// ---------------------------------------------------------------------------

/// A site excluded from the run because its facts were unusable. Recorded in
/// the report instead of aborting the whole audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SkippedSite {
    pub site_id: String,
    pub reason: String,
    pub location: Option<SourceLocation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_displays_as_kind_colon_name() {
        assert_eq!(
            SubjectRef::ActionSite("promo-1".into()).to_string(),
            "action_site:promo-1"
        );
        assert_eq!(
            SubjectRef::SheetKind("orphaned_feature".into()).to_string(),
            "sheet_kind:orphaned_feature"
        );
    }

    #[test]
    fn new_finding_uses_category_default_severity() {
        let finding = Finding::new(
            Category::UnhandledSheetKind,
            SubjectRef::SheetKind("orphaned".into()),
            "no handler",
        );
        assert_eq!(finding.severity, Severity::Critical);
        assert_eq!(finding.confidence, Confidence::High);
        assert!(finding.location.is_none());
    }

    #[test]
    fn ordering_key_sorts_unlocated_first_within_category() {
        let located = Finding::new(
            Category::SilentMutation,
            SubjectRef::Operation("save".into()),
            "silent",
        )
        .with_location(Some(SourceLocation::new("a.swift", 1)));
        let unlocated = Finding::new(
            Category::SilentMutation,
            SubjectRef::Operation("delete".into()),
            "silent",
        );
        assert!(unlocated.ordering_key() < located.ordering_key());
    }
}
