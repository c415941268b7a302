//! # way-core
//!
//! Core types for the Waymark workflow-audit engine.
//!
//! This crate provides the vocabulary shared across all Waymark crates:
//! - The normalized fact model (action sites, sheets, sections, features,
//!   flags, operations, decision functions, data bindings)
//! - Finding categories, severities, and confidence levels
//! - The `Finding` record and the aggregated `Report`
//! - Stable finding-id constants
//! - Cross-cutting error types

pub mod enums;
pub mod errors;
pub mod finding;
pub mod ids;
pub mod model;
pub mod report;

pub use enums::{
    Category, Confidence, FlagRole, FunctionKind, OperationKind, Severity, SheetRole, Visibility,
};
pub use errors::CoreError;
pub use finding::{Finding, SkippedSite, SubjectRef};
pub use model::{
    ActionSite, DataBinding, DecisionFunction, Effect, Feature, Flag, Operation, Section,
    SheetKind, SourceLocation,
};
pub use report::Report;
