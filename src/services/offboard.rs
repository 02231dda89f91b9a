//! Single-user offboarding workflow.
//!
//! The removal-direction sibling of the batch reconciler, for exactly
//! one identity: remove org membership, optionally revoke collaborator
//! access on listed repositories, then create a documenting ticket.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::models::TicketRequest;
use crate::domain::ports::{DirectoryService, TicketingService};
use crate::services::reconciler::TicketDefaults;

/// One offboarding request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffboardRequest {
    /// GitHub account to offboard.
    pub github_username: String,
    /// Organization to remove the account from.
    pub org_name: String,
    /// Repositories to revoke collaborator access on. May be empty;
    /// org removal alone already revokes org-granted access.
    pub repos: Vec<String>,
}

/// What an offboarding run did, for reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffboardReport {
    /// Whether the org membership was removed.
    pub removed_from_org: bool,
    /// Repositories whose collaborator entry was revoked.
    pub removed_repos: Vec<String>,
    /// Failures encountered, in the order they happened.
    pub failures: Vec<String>,
    /// Key of the documenting ticket, when one was created.
    pub ticket_key: Option<String>,
}

impl OffboardReport {
    /// True when every stage of the run succeeded.
    pub fn is_clean(&self) -> bool {
        self.removed_from_org && self.failures.is_empty() && self.ticket_key.is_some()
    }
}

/// Removal-direction workflow over the same ports as onboarding.
pub struct OffboardWorkflow {
    directory: Arc<dyn DirectoryService>,
    ticketing: Arc<dyn TicketingService>,
    defaults: TicketDefaults,
}

impl OffboardWorkflow {
    /// Create a workflow over the given service implementations.
    pub fn new(
        directory: Arc<dyn DirectoryService>,
        ticketing: Arc<dyn TicketingService>,
        defaults: TicketDefaults,
    ) -> Self {
        Self {
            directory,
            ticketing,
            defaults,
        }
    }

    /// Run the offboarding for one identity.
    ///
    /// If the org removal fails the remaining stages are skipped, the
    /// same dependency rule the onboarding loop applies. Collaborator
    /// removals after it fail independently; the run continues so the
    /// ticket can document what was actually revoked. Never returns an
    /// error: failures are collected in the report for the caller.
    pub async fn run(&self, request: &OffboardRequest) -> OffboardReport {
        let mut report = OffboardReport::default();

        match self
            .directory
            .remove_org_member(&request.github_username, &request.org_name)
            .await
        {
            Ok(()) => {
                tracing::info!(
                    username = %request.github_username,
                    org = %request.org_name,
                    "removed from organization"
                );
                report.removed_from_org = true;
            }
            Err(err) => {
                tracing::warn!(
                    username = %request.github_username,
                    org = %request.org_name,
                    error = %err,
                    "org removal failed"
                );
                report
                    .failures
                    .push(format!("removing from {} failed: {err}", request.org_name));
                return report;
            }
        }

        for repo in &request.repos {
            match self
                .directory
                .remove_repo_collaborator(&request.github_username, &request.org_name, repo)
                .await
            {
                Ok(()) => {
                    tracing::info!(
                        username = %request.github_username,
                        repo = %format!("{}/{}", request.org_name, repo),
                        "collaborator access revoked"
                    );
                    report.removed_repos.push(repo.clone());
                }
                Err(err) => {
                    tracing::warn!(
                        username = %request.github_username,
                        repo = %repo,
                        error = %err,
                        "collaborator removal failed"
                    );
                    report.failures.push(format!(
                        "revoking {}/{repo} failed: {err}",
                        request.org_name
                    ));
                }
            }
        }

        let ticket = TicketRequest {
            project: self.defaults.project.clone(),
            summary: format!("Offboard user: {}", request.github_username),
            description: format!(
                "Offboarding process for {} from GitHub organization {}",
                request.github_username, request.org_name
            ),
            issue_type: self.defaults.issue_type.clone(),
        };

        match self.ticketing.create_ticket(&ticket).await {
            Ok(key) => {
                tracing::info!(
                    username = %request.github_username,
                    ticket = %key,
                    "offboarding documented"
                );
                report.ticket_key = Some(key);
            }
            Err(err) => {
                report
                    .failures
                    .push(format!("ticket creation failed: {err}"));
            }
        }

        report
    }
}
