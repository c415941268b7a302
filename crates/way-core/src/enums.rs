//! Categories, severities, and the small closed vocabularies of the fact model.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! `Category` and `Severity` additionally implement `FromStr` so configuration
//! files can name them as plain strings.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;
use crate::ids;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Anti-pattern category. One detector exists per category.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    SectionInsteadOfFeature,
    DeadEndDestination,
    MissingStateSetup,
    UnhandledSheetKind,
    SilentMutation,
    UnconfirmedDestructive,
    InconsistentFeatureAccess,
    MockDataPosingAsReal,
    DecisionIgnoringData,
    PlatformParityGap,
    UnnecessaryTwoStep,
}

impl Category {
    /// All categories, in report order.
    pub const ALL: [Self; 11] = [
        Self::SectionInsteadOfFeature,
        Self::DeadEndDestination,
        Self::MissingStateSetup,
        Self::UnhandledSheetKind,
        Self::SilentMutation,
        Self::UnconfirmedDestructive,
        Self::InconsistentFeatureAccess,
        Self::MockDataPosingAsReal,
        Self::DecisionIgnoringData,
        Self::PlatformParityGap,
        Self::UnnecessaryTwoStep,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SectionInsteadOfFeature => "section_instead_of_feature",
            Self::DeadEndDestination => "dead_end_destination",
            Self::MissingStateSetup => "missing_state_setup",
            Self::UnhandledSheetKind => "unhandled_sheet_kind",
            Self::SilentMutation => "silent_mutation",
            Self::UnconfirmedDestructive => "unconfirmed_destructive",
            Self::InconsistentFeatureAccess => "inconsistent_feature_access",
            Self::MockDataPosingAsReal => "mock_data_posing_as_real",
            Self::DecisionIgnoringData => "decision_ignoring_data",
            Self::PlatformParityGap => "platform_parity_gap",
            Self::UnnecessaryTwoStep => "unnecessary_two_step",
        }
    }

    /// Stable dotted identifier for external tooling.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::SectionInsteadOfFeature => ids::navigation::SECTION_INSTEAD_OF_FEATURE,
            Self::DeadEndDestination => ids::navigation::DEAD_END_DESTINATION,
            Self::MissingStateSetup => ids::navigation::MISSING_STATE_SETUP,
            Self::UnhandledSheetKind => ids::coverage::UNHANDLED_SHEET_KIND,
            Self::SilentMutation => ids::feedback::SILENT_MUTATION,
            Self::UnconfirmedDestructive => ids::feedback::UNCONFIRMED_DESTRUCTIVE,
            Self::InconsistentFeatureAccess => ids::consistency::INCONSISTENT_FEATURE_ACCESS,
            Self::MockDataPosingAsReal => ids::data::MOCK_DATA_POSING_AS_REAL,
            Self::DecisionIgnoringData => ids::data::DECISION_IGNORING_DATA,
            Self::PlatformParityGap => ids::platform::PARITY_GAP,
            Self::UnnecessaryTwoStep => ids::consistency::UNNECESSARY_TWO_STEP,
        }
    }

    /// Severity assigned to findings of this category unless a detector
    /// overrides it.
    #[must_use]
    pub const fn default_severity(self) -> Severity {
        match self {
            Self::UnhandledSheetKind => Severity::Critical,
            Self::DeadEndDestination | Self::UnconfirmedDestructive | Self::PlatformParityGap => {
                Severity::High
            }
            Self::SectionInsteadOfFeature
            | Self::MissingStateSetup
            | Self::SilentMutation
            | Self::InconsistentFeatureAccess
            | Self::MockDataPosingAsReal
            | Self::DecisionIgnoringData
            | Self::UnnecessaryTwoStep => Severity::Medium,
        }
    }

    /// One-line description, shown by `wmk categories`.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::SectionInsteadOfFeature => {
                "navigation lands on a section when the promised feature could open directly"
            }
            Self::DeadEndDestination => {
                "navigation target does not implement the feature the label promises"
            }
            Self::MissingStateSetup => {
                "navigation omits the mode flags the target feature requires"
            }
            Self::UnhandledSheetKind => "declared sheet kind has no handler in an exhaustive set",
            Self::SilentMutation => "mutating operation gives no success or failure feedback",
            Self::UnconfirmedDestructive => "destructive operation runs without a confirmation gate",
            Self::InconsistentFeatureAccess => {
                "the same feature is reached through different effect kinds"
            }
            Self::MockDataPosingAsReal => {
                "constant output behind an artificial delay shadows unused real data"
            }
            Self::DecisionIgnoringData => {
                "decision function reads a small fraction of the fields available to it"
            }
            Self::PlatformParityGap => {
                "private symbol referenced from a platform its declaration does not cover"
            }
            Self::UnnecessaryTwoStep => {
                "picker step opens unconditionally although exactly one item is eligible"
            }
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| CoreError::UnknownCategory {
                value: s.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Finding severity. Ordering is significant: `Low < Medium < High < Critical`,
/// used by the `fail_on` gate.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            other => Err(CoreError::UnknownSeverity {
                value: other.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Confidence
// ---------------------------------------------------------------------------

/// Confidence level for findings. Structural detectors report `High`;
/// heuristic detectors report `Medium` or `Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SheetRole
// ---------------------------------------------------------------------------

/// What a sheet is for. Pickers matter to the two-step-flow detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SheetRole {
    Feature,
    Picker,
    Confirmation,
}

impl SheetRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Feature => "feature",
            Self::Picker => "picker",
            Self::Confirmation => "confirmation",
        }
    }
}

impl fmt::Display for SheetRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FlagRole
// ---------------------------------------------------------------------------

/// Role of a UI state flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FlagRole {
    ModeToggle,
    ConfirmationGate,
}

impl FlagRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ModeToggle => "mode_toggle",
            Self::ConfirmationGate => "confirmation_gate",
        }
    }
}

impl fmt::Display for FlagRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// OperationKind
// ---------------------------------------------------------------------------

/// Kind of a backing operation an action site may invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    Save,
    Delete,
    Update,
    Read,
}

impl OperationKind {
    /// Whether the operation changes persisted state.
    #[must_use]
    pub const fn is_mutating(self) -> bool {
        matches!(self, Self::Save | Self::Delete | Self::Update)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Save => "save",
            Self::Delete => "delete",
            Self::Update => "update",
            Self::Read => "read",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FunctionKind
// ---------------------------------------------------------------------------

/// Classification of an analyzed function. Only `decision` functions are held
/// to the data-usage threshold; `accessor`s are simple pass-throughs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FunctionKind {
    Decision,
    Accessor,
    Producer,
}

impl FunctionKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Decision => "decision",
            Self::Accessor => "accessor",
            Self::Producer => "producer",
        }
    }
}

impl fmt::Display for FunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Visibility
// ---------------------------------------------------------------------------

/// Symbol visibility of a data binding's declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Public,
    Internal,
    Private,
}

impl Visibility {
    /// Whether the symbol is visible across file boundaries.
    #[must_use]
    pub const fn crosses_files(self) -> bool {
        matches!(self, Self::Public | Self::Internal)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Internal => "internal",
            Self::Private => "private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
