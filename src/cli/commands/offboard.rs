//! Single-user offboarding command.

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::cli::types::OffboardArgs;
use crate::infrastructure::{config::ConfigLoader, logging};
use crate::services::offboard::{OffboardReport, OffboardRequest, OffboardWorkflow};

/// Result of an offboarding run.
#[derive(Debug, Serialize)]
pub struct OffboardOutput {
    /// GitHub account that was offboarded.
    pub user: String,
    /// Organization the account was removed from.
    pub org: String,
    /// When the run finished (RFC 3339).
    pub completed_at: String,
    /// What the workflow did.
    pub report: OffboardReport,
}

impl CommandOutput for OffboardOutput {
    fn to_human(&self) -> String {
        let mut lines = Vec::new();

        if self.report.removed_from_org {
            lines.push(format!("Removed {} from organization {}.", self.user, self.org));
        }
        if !self.report.removed_repos.is_empty() {
            lines.push(format!(
                "Revoked collaborator access on: {}.",
                self.report.removed_repos.join(", ")
            ));
        }
        if let Some(key) = &self.report.ticket_key {
            lines.push(format!("Documented in ticket {key}."));
        }
        for failure in &self.report.failures {
            lines.push(format!("Failed: {failure}"));
        }
        if lines.is_empty() {
            lines.push(format!("Nothing done for {}.", self.user));
        }

        lines.join("\n")
    }
}

/// Run the offboarding workflow for one user.
///
/// A completed run exits zero even when some removal failed; failures
/// are logged and listed in the output for manual follow-up.
pub async fn execute(args: OffboardArgs, json: bool) -> Result<()> {
    let settings = ConfigLoader::load()?;
    let _logging = logging::init(&settings.logging)?;

    let (directory, ticketing, defaults) = super::build_services(&settings);
    let workflow = OffboardWorkflow::new(directory, ticketing, defaults);

    let request = OffboardRequest {
        github_username: args.user.clone(),
        org_name: args.org.clone(),
        repos: args.repos.clone(),
    };
    let report = workflow.run(&request).await;

    let result = OffboardOutput {
        user: args.user,
        org: args.org,
        completed_at: Utc::now().to_rfc3339(),
        report,
    };
    output(&result, json);

    Ok(())
}
