//! Stable finding identifiers.
//!
//! Dotted `waymark.<area>.<code>` constants referenced by [`crate::Category::id`].
//! External tooling keys suppressions and dashboards on these strings, so they
//! never change once published.

/// Navigation wiring findings.
pub mod navigation {
    /// Card navigates to a section although the feature could open directly.
    pub const SECTION_INSTEAD_OF_FEATURE: &str = "waymark.navigation.section_instead_of_feature";
    /// Navigation target does not implement the promised feature.
    pub const DEAD_END_DESTINATION: &str = "waymark.navigation.dead_end_destination";
    /// Navigation without the companion state flags the feature needs.
    pub const MISSING_STATE_SETUP: &str = "waymark.navigation.missing_state_setup";
}

/// Variant-coverage findings.
pub mod coverage {
    /// Declared sheet kind with no handler in an exhaustive handler set.
    pub const UNHANDLED_SHEET_KIND: &str = "waymark.coverage.unhandled_sheet_kind";
}

/// User-feedback findings.
pub mod feedback {
    /// Mutating operation with no success/failure feedback.
    pub const SILENT_MUTATION: &str = "waymark.feedback.silent_mutation";
    /// Destructive operation invoked without a confirmation gate.
    pub const UNCONFIRMED_DESTRUCTIVE: &str = "waymark.feedback.unconfirmed_destructive";
}

/// Access-consistency findings.
pub mod consistency {
    /// Same feature reached through different effect kinds.
    pub const INCONSISTENT_FEATURE_ACCESS: &str = "waymark.consistency.inconsistent_feature_access";
    /// Picker step forced although exactly one item is eligible.
    pub const UNNECESSARY_TWO_STEP: &str = "waymark.consistency.unnecessary_two_step";
}

/// Data-wiring findings.
pub mod data {
    /// Constant output behind an artificial delay shadowing real data.
    pub const MOCK_DATA_POSING_AS_REAL: &str = "waymark.data.mock_data_posing_as_real";
    /// Decision function ignoring most of its available fields.
    pub const DECISION_IGNORING_DATA: &str = "waymark.data.decision_ignoring_data";
}

/// Platform-parity findings.
pub mod platform {
    /// Private symbol referenced from a platform its declaration does not cover.
    pub const PARITY_GAP: &str = "waymark.platform.parity_gap";
}
