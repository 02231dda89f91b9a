//! Shared test doubles for the reconciliation workflows.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use idsync::domain::errors::{DomainError, DomainResult};
use idsync::domain::models::TicketRequest;
use idsync::domain::ports::{DirectoryService, RepoPermission, TicketingService};
use idsync::services::TicketDefaults;

/// Ticket defaults used across the workflow tests.
pub fn defaults() -> TicketDefaults {
    TicketDefaults {
        project: "HR".to_string(),
        issue_type: "Task".to_string(),
    }
}

/// In-memory directory double that records every call in order and
/// fails on demand.
#[derive(Default)]
pub struct MockDirectory {
    /// Calls in invocation order, e.g. `add_org:alice-gh@acme`.
    pub calls: Mutex<Vec<String>>,
    /// GitHub usernames whose org grant fails.
    pub fail_org_grants: HashSet<String>,
    /// Repository names whose collaborator grant fails.
    pub fail_repo_grants: HashSet<String>,
    /// GitHub usernames whose org removal fails.
    pub fail_org_removals: HashSet<String>,
    /// Repository names whose collaborator removal fails.
    pub fail_repo_removals: HashSet<String>,
}

impl MockDirectory {
    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    /// Snapshot of the calls made so far.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DirectoryService for MockDirectory {
    async fn add_org_member(&self, username: &str, org: &str) -> DomainResult<()> {
        self.record(format!("add_org:{username}@{org}"));
        if self.fail_org_grants.contains(username) {
            return Err(DomainError::RemoteOperationFailed(format!(
                "cannot add {username} to {org}"
            )));
        }
        Ok(())
    }

    async fn add_repo_collaborator(
        &self,
        username: &str,
        org: &str,
        repo: &str,
        permission: RepoPermission,
    ) -> DomainResult<()> {
        self.record(format!(
            "add_repo:{username}@{org}/{repo}:{}",
            permission.as_str()
        ));
        if self.fail_repo_grants.contains(repo) {
            return Err(DomainError::RemoteOperationFailed(format!(
                "cannot grant {repo}"
            )));
        }
        Ok(())
    }

    async fn remove_org_member(&self, username: &str, org: &str) -> DomainResult<()> {
        self.record(format!("remove_org:{username}@{org}"));
        if self.fail_org_removals.contains(username) {
            return Err(DomainError::RemoteOperationFailed(format!(
                "cannot remove {username} from {org}"
            )));
        }
        Ok(())
    }

    async fn remove_repo_collaborator(
        &self,
        username: &str,
        org: &str,
        repo: &str,
    ) -> DomainResult<()> {
        self.record(format!("remove_repo:{username}@{org}/{repo}"));
        if self.fail_repo_removals.contains(repo) {
            return Err(DomainError::RemoteOperationFailed(format!(
                "cannot revoke {repo}"
            )));
        }
        Ok(())
    }
}

/// In-memory ticketing double handing out sequential keys starting at
/// `{project}-101`.
#[derive(Default)]
pub struct MockTicketing {
    /// Every creation request, in order.
    pub created: Mutex<Vec<TicketRequest>>,
    /// Every status update as `(ticket_id, status)`, in order.
    pub updates: Mutex<Vec<(String, String)>>,
    /// Fail all creations.
    pub fail_create: bool,
    /// Fail all status updates.
    pub fail_update: bool,
    /// Offset added to the first ticket number (keys start at 101).
    pub counter: AtomicU64,
}

impl MockTicketing {
    /// Snapshot of the creation requests made so far.
    pub fn created(&self) -> Vec<TicketRequest> {
        self.created.lock().unwrap().clone()
    }

    /// Snapshot of the status updates made so far.
    pub fn updates(&self) -> Vec<(String, String)> {
        self.updates.lock().unwrap().clone()
    }
}

#[async_trait]
impl TicketingService for MockTicketing {
    async fn create_ticket(&self, request: &TicketRequest) -> DomainResult<String> {
        self.created.lock().unwrap().push(request.clone());
        if self.fail_create {
            return Err(DomainError::RemoteOperationFailed(
                "ticket service unavailable".to_string(),
            ));
        }
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        Ok(format!("{}-{}", request.project, 101 + n))
    }

    async fn update_ticket_status(&self, ticket_id: &str, status: &str) -> DomainResult<()> {
        self.updates
            .lock()
            .unwrap()
            .push((ticket_id.to_string(), status.to_string()));
        if self.fail_update {
            return Err(DomainError::RemoteOperationFailed(
                "ticket service unavailable".to_string(),
            ));
        }
        Ok(())
    }
}
