//! GitHub implementation of the directory port.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::{DirectoryService, RepoPermission};

use super::client::GitHubClient;

/// [`DirectoryService`] backed by the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GitHubDirectory {
    /// Shared GitHub HTTP client.
    client: Arc<GitHubClient>,
}

impl GitHubDirectory {
    /// Create a new directory adapter over the given client.
    pub fn new(client: Arc<GitHubClient>) -> Self {
        Self { client }
    }

    /// Map a port permission level to the GitHub API parameter.
    pub(crate) fn permission_param(permission: RepoPermission) -> &'static str {
        match permission {
            RepoPermission::Pull => "pull",
            RepoPermission::Push => "push",
            RepoPermission::Admin => "admin",
        }
    }

    /// Reject blank identities before they reach the wire.
    fn check_identity(username: &str, org: &str) -> DomainResult<()> {
        if username.trim().is_empty() || org.trim().is_empty() {
            return Err(DomainError::ValidationFailed(
                "username and organization must be non-empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl DirectoryService for GitHubDirectory {
    async fn add_org_member(&self, username: &str, org: &str) -> DomainResult<()> {
        Self::check_identity(username, org)?;
        let membership = self.client.put_org_membership(org, username).await?;
        tracing::info!(
            username = username,
            org = org,
            state = %membership.state,
            "GitHub: org membership set"
        );
        Ok(())
    }

    async fn add_repo_collaborator(
        &self,
        username: &str,
        org: &str,
        repo: &str,
        permission: RepoPermission,
    ) -> DomainResult<()> {
        tracing::info!(
            username = username,
            org = org,
            repo = repo,
            permission = permission.as_str(),
            "GitHub: adding repository collaborator"
        );
        self.client
            .put_repo_collaborator(org, repo, username, Self::permission_param(permission))
            .await
    }

    async fn remove_org_member(&self, username: &str, org: &str) -> DomainResult<()> {
        Self::check_identity(username, org)?;
        tracing::info!(username = username, org = org, "GitHub: removing org member");
        self.client.delete_org_member(org, username).await
    }

    async fn remove_repo_collaborator(
        &self,
        username: &str,
        org: &str,
        repo: &str,
    ) -> DomainResult<()> {
        tracing::info!(
            username = username,
            org = org,
            repo = repo,
            "GitHub: removing repository collaborator"
        );
        self.client.delete_repo_collaborator(org, repo, username).await
    }
}
