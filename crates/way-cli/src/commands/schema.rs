//! Handle `wmk schema`: print the extraction payload contract as JSON Schema.

use crate::cli::OutputFormat;
use crate::output;

pub fn handle(format: OutputFormat) -> anyhow::Result<()> {
    let schema = way_facts::payload_schema();
    output::output(&schema, format)
}
