//! Detector category selection.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use way_core::Category;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CategoriesConfig {
    /// Categories to run. Absent means the full battery of 11.
    #[serde(default)]
    pub enabled: Option<BTreeSet<Category>>,
}

impl CategoriesConfig {
    /// The effective set: configured categories, or all of them.
    #[must_use]
    pub fn effective(&self) -> BTreeSet<Category> {
        self.enabled
            .clone()
            .unwrap_or_else(|| Category::ALL.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_enables_all_categories() {
        let config = CategoriesConfig::default();
        assert_eq!(config.effective().len(), Category::ALL.len());
    }

    #[test]
    fn explicit_set_is_honored() {
        let config = CategoriesConfig {
            enabled: Some([Category::UnhandledSheetKind].into_iter().collect()),
        };
        let effective = config.effective();
        assert_eq!(effective.len(), 1);
        assert!(effective.contains(&Category::UnhandledSheetKind));
    }
}
