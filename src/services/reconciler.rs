//! Batch onboarding reconciliation.
//!
//! For each roster record, in order: grant org membership, grant
//! per-repository collaborator access, create a tracking ticket. A
//! failure at one stage short-circuits the stages that depend on it
//! within that record, but never aborts the batch: every remote error
//! is converted into an [`OperationOutcome`] at the record boundary and
//! processing moves on to the next record.

use std::sync::Arc;

use crate::domain::models::{OnboardingRecord, OperationOutcome, Stage, TicketRequest};
use crate::domain::ports::{DirectoryService, RepoPermission, TicketingService};

/// Ticket-creation parameters shared by every record in a run.
#[derive(Debug, Clone)]
pub struct TicketDefaults {
    /// Project key tickets are filed under.
    pub project: String,
    /// Issue type name for created tickets.
    pub issue_type: String,
}

/// Drives a batch of onboarding records against the directory and
/// ticketing services.
///
/// Records are processed one at a time, fully, in input order; there is
/// no parallelism across records. Partial grants are never rolled back:
/// a half-onboarded identity is an accepted, logged outcome for a human
/// operator to follow up on, not an error state to recover from.
pub struct BatchReconciler {
    directory: Arc<dyn DirectoryService>,
    ticketing: Arc<dyn TicketingService>,
    defaults: TicketDefaults,
}

impl BatchReconciler {
    /// Create a reconciler over the given service implementations.
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

    /// Run the batch, returning exactly one outcome per input record,
    /// in input order.
    pub async fn run(&self, records: Vec<OnboardingRecord>) -> Vec<OperationOutcome> {
        let mut outcomes = Vec::with_capacity(records.len());

        for record in records {
            let outcome = self.reconcile(record).await;

            if outcome.success {
                tracing::info!(
                    username = %outcome.record.username,
                    ticket = outcome.ticket_key.as_deref().unwrap_or(""),
                    "onboarding complete"
                );
            } else {
                tracing::warn!(
                    username = %outcome.record.username,
                    stage = outcome.stage.as_str(),
                    detail = outcome.error_detail.as_deref().unwrap_or(""),
                    "onboarding failed"
                );
            }

            outcomes.push(outcome);
        }

        outcomes
    }

    /// Run all stages for one record.
    async fn reconcile(&self, record: OnboardingRecord) -> OperationOutcome {
        // Stage 1: org membership. Repository grants and the ticket are
        // meaningless without it, so a failure here ends the record.
        if let Err(err) = self
            .directory
            .add_org_member(&record.github_username, &record.org_name)
            .await
        {
            return OperationOutcome::failed(record, Stage::OrgGrant, err.to_string());
        }
        tracing::info!(
            username = %record.github_username,
            org = %record.org_name,
            "added to organization"
        );

        // Stage 2: repository grants, in roster order, stopping at the
        // first failure. Grants already applied stay applied.
        let mut granted: Vec<String> = Vec::with_capacity(record.repos.len());
        let mut repo_failure: Option<String> = None;

        for repo in &record.repos {
            match self
                .directory
                .add_repo_collaborator(
                    &record.github_username,
                    &record.org_name,
                    repo,
                    RepoPermission::Push,
                )
                .await
            {
                Ok(()) => {
                    tracing::info!(
                        username = %record.github_username,
                        repo = %format!("{}/{}", record.org_name, repo),
                        "added as collaborator"
                    );
                    granted.push(repo.clone());
                }
                Err(err) => {
                    repo_failure = Some(format!(
                        "granting {}/{repo} failed: {err}",
                        record.org_name
                    ));
                    break;
                }
            }
        }

        // Stage 3: the ticket is attempted even after a repository
        // failure, so it documents exactly what succeeded.
        let request = self.ticket_request(&record, &granted);
        let ticket = self.ticketing.create_ticket(&request).await;

        match (repo_failure, ticket) {
            (None, Ok(key)) => OperationOutcome::succeeded(record, key),
            (None, Err(err)) => {
                OperationOutcome::failed(record, Stage::TicketCreate, err.to_string())
            }
            (Some(detail), Ok(key)) => {
                OperationOutcome::failed(record, Stage::RepoGrant, detail).with_ticket_key(key)
            }
            (Some(detail), Err(err)) => OperationOutcome::failed(
                record,
                Stage::RepoGrant,
                format!("{detail}; ticket creation failed: {err}"),
            ),
        }
    }

    /// Build the tracking-ticket request for one record.
    ///
    /// `granted` holds the repositories actually granted, which may be
    /// a prefix of the requested list.
    fn ticket_request(&self, record: &OnboardingRecord, granted: &[String]) -> TicketRequest {
        TicketRequest {
            project: self.defaults.project.clone(),
            summary: format!("Onboard user: {}", record.username),
            description: format!(
                "Onboarding process for {} ({}) to GitHub organization {} and repositories: {}",
                record.username,
                record.email,
                record.org_name,
                granted.join(", "),
            ),
            issue_type: self.defaults.issue_type.clone(),
        }
    }
}
