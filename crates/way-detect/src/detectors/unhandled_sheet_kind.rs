//! A declared sheet kind with no handler in a handler set that claims to be
//! exhaustive. The closed variant set must have total coverage; a gap is a
//! crash or a blank sheet waiting to happen.

use way_core::Category;
use way_core::finding::{Finding, SubjectRef};
use way_facts::FactStore;

use crate::{Detector, DetectorContext};

pub struct UnhandledSheetKind;

impl Detector for UnhandledSheetKind {
    fn category(&self) -> Category {
        Category::UnhandledSheetKind
    }

    fn detect(&self, store: &FactStore, _ctx: &DetectorContext) -> Vec<Finding> {
        if !store.sheets_exhaustive() {
            return Vec::new();
        }

        store
            .sheets()
            .filter(|kind| !kind.handled)
            .map(|kind| {
                Finding::new(
                    self.category(),
                    SubjectRef::SheetKind(kind.name.clone()),
                    format!("sheet kind `{}` is declared but has no handler", kind.name),
                )
                .with_fix(format!(
                    "add a handler arm for `{}` to the sheet content mapping",
                    kind.name
                ))
            })
            .collect()
    }
}
