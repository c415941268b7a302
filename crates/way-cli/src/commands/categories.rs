//! Handle `wmk categories`.

use serde::Serialize;

use way_core::{Category, Severity};

use crate::cli::OutputFormat;
use crate::output;

#[derive(Debug, Serialize)]
struct CategoryRow {
    category: Category,
    id: &'static str,
    default_severity: Severity,
    description: &'static str,
}

pub fn handle(format: OutputFormat) -> anyhow::Result<()> {
    let rows: Vec<CategoryRow> = Category::ALL
        .into_iter()
        .map(|category| CategoryRow {
            category,
            id: category.id(),
            default_severity: category.default_severity(),
            description: category.description(),
        })
        .collect();
    output::output(&rows, format)
}
