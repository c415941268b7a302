//! Normalized fact model.
//!
//! These are the entities a fact-store snapshot holds after load-time
//! validation: every reference has been checked and every action site carries
//! exactly one effect. The raw extraction payload (where fields may be absent)
//! lives in `way-facts`.

mod action_site;
mod binding;
mod decision;
mod feature;
mod flag;
mod location;
mod operation;
mod section;
mod sheet;

pub use action_site::{ActionSite, Effect};
pub use binding::DataBinding;
pub use decision::DecisionFunction;
pub use feature::Feature;
pub use flag::Flag;
pub use location::SourceLocation;
pub use operation::Operation;
pub use section::Section;
pub use sheet::SheetKind;
