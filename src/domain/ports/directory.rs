//! Directory port: org membership and repository access.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;

/// Permission level granted to a repository collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepoPermission {
    /// Read-only access.
    Pull,
    /// Read/write access. Onboarding always grants this level.
    Push,
    /// Administrative access.
    Admin,
}

impl RepoPermission {
    /// Returns the string representation of this permission.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pull => "pull",
            Self::Push => "push",
            Self::Admin => "admin",
        }
    }
}

/// Port for the system that owns organizations and repositories.
///
/// Each operation is a single blocking remote call from the caller's
/// point of view: no retries, and any timeout policy belongs to the
/// implementation, not to the services calling it. Errors come back as
/// explicit [`DomainResult`] values so the reconciler can isolate them
/// at the record boundary.
#[async_trait]
pub trait DirectoryService: Send + Sync {
    /// Add (or invite) `username` to the organization `org`.
    async fn add_org_member(&self, username: &str, org: &str) -> DomainResult<()>;

    /// Grant `username` collaborator access on `org/repo`.
    async fn add_repo_collaborator(
        &self,
        username: &str,
        org: &str,
        repo: &str,
        permission: RepoPermission,
    ) -> DomainResult<()>;

    /// Remove `username` from the organization `org`.
    async fn remove_org_member(&self, username: &str, org: &str) -> DomainResult<()>;

    /// Revoke `username`'s collaborator access on `org/repo`.
    async fn remove_repo_collaborator(
        &self,
        username: &str,
        org: &str,
        repo: &str,
    ) -> DomainResult<()>;
}
