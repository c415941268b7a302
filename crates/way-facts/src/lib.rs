//! # way-facts
//!
//! The Waymark fact store.
//!
//! An external extractor hands the engine a [`FactsPayload`]: action sites,
//! the sheet registry, sections, the feature registry, flags, operations,
//! decision functions, and data bindings. [`FactStore::load`] validates the
//! payload structurally, normalizes references (skipping unusable sites with
//! a recorded note), and exposes read-only indexed lookups. A loaded store is
//! immutable: detectors hold shared references into one snapshot per run.

mod error;
mod payload;
mod store;

pub use error::FactsError;
pub use payload::{
    FactsPayload, HandlerEntry, RawActionSite, RawSheetKind, RawSheetRegistry, payload_schema,
};
pub use store::FactStore;
