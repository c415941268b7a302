//! One module per anti-pattern category.

pub mod dead_end_destination;
pub mod decision_ignoring_data;
pub mod inconsistent_feature_access;
pub mod missing_state_setup;
pub mod mock_data_posing_as_real;
pub mod platform_parity_gap;
pub mod section_instead_of_feature;
pub mod silent_mutation;
pub mod unconfirmed_destructive;
pub mod unhandled_sheet_kind;
pub mod unnecessary_two_step;
