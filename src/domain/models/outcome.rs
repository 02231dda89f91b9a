//! Per-record reconciliation outcomes.

use serde::{Deserialize, Serialize};

use super::record::OnboardingRecord;

/// The stage of the onboarding workflow an outcome refers to.
///
/// Stages run in declaration order for each record; a failure at one
/// stage short-circuits the stages that depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Granting organization membership.
    OrgGrant,
    /// Granting per-repository collaborator access.
    RepoGrant,
    /// Creating the tracking ticket.
    TicketCreate,
}

impl Stage {
    /// Returns the string representation of this stage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OrgGrant => "org_grant",
            Self::RepoGrant => "repo_grant",
            Self::TicketCreate => "ticket_create",
        }
    }
}

/// The terminal disposition of one record in a reconciliation run.
///
/// Exactly one of these is produced per input record. `stage` names the
/// furthest stage that decided the disposition: the first failed stage
/// for a failed record, or [`Stage::TicketCreate`] for a fully
/// successful one. Outcomes are transient; they live only as long as
/// batch reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationOutcome {
    /// The record this outcome belongs to.
    pub record: OnboardingRecord,
    /// The stage that decided the disposition.
    pub stage: Stage,
    /// Whether the record was fully onboarded.
    pub success: bool,
    /// Underlying error message(s) for a failed record.
    pub error_detail: Option<String>,
    /// Key of the tracking ticket, when one was created.
    pub ticket_key: Option<String>,
}

impl OperationOutcome {
    /// Outcome for a fully onboarded record.
    pub fn succeeded(record: OnboardingRecord, ticket_key: impl Into<String>) -> Self {
        Self {
            record,
            stage: Stage::TicketCreate,
            success: true,
            error_detail: None,
            ticket_key: Some(ticket_key.into()),
        }
    }

    /// Outcome for a record that failed at `stage`.
    pub fn failed(record: OnboardingRecord, stage: Stage, detail: impl Into<String>) -> Self {
        Self {
            record,
            stage,
            success: false,
            error_detail: Some(detail.into()),
            ticket_key: None,
        }
    }

    /// Attach the key of a ticket that was still created for this record.
    ///
    /// Used for partial failures where repository grants failed but the
    /// documenting ticket was created anyway.
    pub fn with_ticket_key(mut self, ticket_key: impl Into<String>) -> Self {
        self.ticket_key = Some(ticket_key.into());
        self
    }
}

/// Aggregate counts over a batch of outcomes, for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Records processed by the reconciler.
    pub total: usize,
    /// Records fully onboarded.
    pub succeeded: usize,
    /// Records that failed at some stage.
    pub failed: usize,
}

impl BatchSummary {
    /// Summarize a batch result.
    pub fn from_outcomes(outcomes: &[OperationOutcome]) -> Self {
        let succeeded = outcomes.iter().filter(|o| o.success).count();
        Self {
            total: outcomes.len(),
            succeeded,
            failed: outcomes.len() - succeeded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> OnboardingRecord {
        OnboardingRecord {
            username: "alice".to_string(),
            email: "alice@x.com".to_string(),
            github_username: "alice-gh".to_string(),
            org_name: "acme".to_string(),
            repos: vec!["svc-a".to_string()],
        }
    }

    #[test]
    fn test_stage_as_str() {
        assert_eq!(Stage::OrgGrant.as_str(), "org_grant");
        assert_eq!(Stage::RepoGrant.as_str(), "repo_grant");
        assert_eq!(Stage::TicketCreate.as_str(), "ticket_create");
    }

    #[test]
    fn test_succeeded_outcome() {
        let outcome = OperationOutcome::succeeded(record(), "HR-101");
        assert!(outcome.success);
        assert_eq!(outcome.stage, Stage::TicketCreate);
        assert_eq!(outcome.ticket_key.as_deref(), Some("HR-101"));
        assert!(outcome.error_detail.is_none());
    }

    #[test]
    fn test_failed_outcome_with_ticket_key() {
        let outcome = OperationOutcome::failed(record(), Stage::RepoGrant, "svc-b: 403")
            .with_ticket_key("HR-102");
        assert!(!outcome.success);
        assert_eq!(outcome.stage, Stage::RepoGrant);
        assert_eq!(outcome.error_detail.as_deref(), Some("svc-b: 403"));
        assert_eq!(outcome.ticket_key.as_deref(), Some("HR-102"));
    }

    #[test]
    fn test_batch_summary_counts() {
        let outcomes = vec![
            OperationOutcome::succeeded(record(), "HR-101"),
            OperationOutcome::failed(record(), Stage::OrgGrant, "boom"),
            OperationOutcome::succeeded(record(), "HR-103"),
        ];
        let summary = BatchSummary::from_outcomes(&outcomes);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.succeeded, 2);
        assert_eq!(summary.failed, 1);
    }
}
