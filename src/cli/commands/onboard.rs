//! Bulk onboarding command.

use anyhow::{Context, Result};
use chrono::Utc;
use comfy_table::Table;
use serde::Serialize;

use crate::cli::output::{output, truncate, CommandOutput};
use crate::cli::types::OnboardArgs;
use crate::domain::models::{BatchSummary, OperationOutcome, RowError};
use crate::infrastructure::{config::ConfigLoader, logging};
use crate::services::{load_roster, BatchReconciler};

/// One reconciled record, flattened for display.
#[derive(Debug, Serialize)]
pub struct OutcomeRow {
    /// Roster username.
    pub username: String,
    /// GitHub account name.
    pub github_username: String,
    /// Target organization.
    pub org_name: String,
    /// Stage that decided the disposition.
    pub stage: String,
    /// Whether the record was fully onboarded.
    pub success: bool,
    /// Tracking-ticket key, when one was created.
    pub ticket_key: Option<String>,
    /// Failure detail, when any stage failed.
    pub error_detail: Option<String>,
}

impl From<&OperationOutcome> for OutcomeRow {
    fn from(outcome: &OperationOutcome) -> Self {
        Self {
            username: outcome.record.username.clone(),
            github_username: outcome.record.github_username.clone(),
            org_name: outcome.record.org_name.clone(),
            stage: outcome.stage.as_str().to_string(),
            success: outcome.success,
            ticket_key: outcome.ticket_key.clone(),
            error_detail: outcome.error_detail.clone(),
        }
    }
}

/// Result of an onboarding run.
#[derive(Debug, Serialize)]
pub struct OnboardOutput {
    /// Roster path the batch came from.
    pub roster: String,
    /// When the run finished (RFC 3339).
    pub completed_at: String,
    /// Per-record dispositions, in roster order.
    pub outcomes: Vec<OutcomeRow>,
    /// Roster rows rejected before reconciliation.
    pub rejected_rows: Vec<RowError>,
    /// Aggregate counts.
    pub summary: BatchSummary,
}

impl CommandOutput for OnboardOutput {
    fn to_human(&self) -> String {
        let mut lines = Vec::new();

        if self.outcomes.is_empty() {
            lines.push("No records to onboard.".to_string());
        } else {
            let mut table = Table::new();
            table.set_header(vec![
                "USER", "GITHUB", "ORG", "STAGE", "RESULT", "TICKET", "DETAIL",
            ]);
            for row in &self.outcomes {
                table.add_row(vec![
                    row.username.clone(),
                    row.github_username.clone(),
                    row.org_name.clone(),
                    row.stage.clone(),
                    if row.success { "ok" } else { "failed" }.to_string(),
                    row.ticket_key.clone().unwrap_or_default(),
                    truncate(row.error_detail.as_deref().unwrap_or(""), 48),
                ]);
            }
            lines.push(table.to_string());
        }

        for rejected in &self.rejected_rows {
            lines.push(format!(
                "Rejected roster line {}: {}",
                rejected.line_number, rejected.message
            ));
        }

        lines.push(format!(
            "{} record(s) processed: {} onboarded, {} failed, {} roster row(s) rejected.",
            self.summary.total,
            self.summary.succeeded,
            self.summary.failed,
            self.rejected_rows.len()
        ));

        lines.join("\n")
    }
}

/// Run the bulk onboarding batch.
///
/// Exits zero whenever the batch completes, even with per-record
/// failures; only configuration and source-loading problems are fatal.
pub async fn execute(args: OnboardArgs, json: bool) -> Result<()> {
    let settings = ConfigLoader::load()?;
    let _logging = logging::init(&settings.logging)?;

    let batch = load_roster(&args.roster)
        .with_context(|| format!("failed to load roster {}", args.roster.display()))?;

    for rejected in &batch.rejected {
        tracing::warn!(
            line = rejected.line_number,
            detail = %rejected.message,
            "roster row rejected"
        );
    }

    let (directory, ticketing, defaults) = super::build_services(&settings);
    let reconciler = BatchReconciler::new(directory, ticketing, defaults);
    let outcomes = reconciler.run(batch.records).await;

    let result = OnboardOutput {
        roster: args.roster.display().to_string(),
        completed_at: Utc::now().to_rfc3339(),
        outcomes: outcomes.iter().map(OutcomeRow::from).collect(),
        rejected_rows: batch.rejected,
        summary: BatchSummary::from_outcomes(&outcomes),
    };
    output(&result, json);

    Ok(())
}
