//! Handle `wmk audit`.

use std::collections::BTreeSet;

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::Serialize;

use way_config::WaymarkConfig;
use way_core::report::Report;
use way_core::Category;
use way_detect::DetectorContext;
use way_facts::{FactStore, FactsPayload};

use crate::cli::{AuditArgs, OutputFormat};
use crate::output;

/// Report plus run metadata. The metadata lives out here so the `Report`
/// itself stays deterministic across runs.
#[derive(Debug, Serialize)]
struct AuditResponse {
    meta: RunMeta,
    report: Report,
}

#[derive(Debug, Serialize)]
struct RunMeta {
    facts: String,
    generated_at: DateTime<Utc>,
    categories_run: usize,
    parallel: bool,
}

pub fn handle(
    args: &AuditArgs,
    format: OutputFormat,
    config: &WaymarkConfig,
) -> anyhow::Result<()> {
    let json = std::fs::read_to_string(&args.facts)
        .with_context(|| format!("failed to read facts payload at {}", args.facts.display()))?;
    let payload = FactsPayload::from_json_str(&json)?;
    let store = FactStore::load(payload)?;

    let enabled: BTreeSet<Category> = if args.only.is_empty() {
        config.categories.effective()
    } else {
        args.only.iter().copied().collect()
    };
    let ctx = DetectorContext {
        decision_data_usage_threshold: config.engine.decision_data_usage_threshold,
    };
    let parallel = args.parallel || config.engine.parallel;

    let findings = way_detect::run(&store, Some(&enabled), &ctx, parallel);
    let report = way_report::aggregate(&store, findings)?;
    tracing::debug!(
        findings = report.findings.len(),
        skipped = report.skipped.len(),
        audited_sites = report.audited_sites,
        "audit complete"
    );

    let response = AuditResponse {
        meta: RunMeta {
            facts: args.facts.display().to_string(),
            generated_at: Utc::now(),
            categories_run: enabled.len(),
            parallel,
        },
        report,
    };
    output::output(&response, format)?;

    if let Some(gate) = args.fail_on.or(config.engine.fail_on) {
        if response.report.violates(Some(gate)) {
            anyhow::bail!("findings at or above `{gate}` severity");
        }
    }

    Ok(())
}
