//! GitHub HTTP client with rate limiting.
//!
//! Wraps the GitHub REST API v3, providing typed methods for the org
//! membership and repository collaborator operations the lifecycle
//! workflows use. Includes a token-bucket rate limiter to stay within
//! the 5 000 req/hour authenticated API limit.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use tokio::sync::Mutex;

use crate::adapters::rate_limit::RateLimiter;
use crate::domain::errors::{DomainError, DomainResult};

use super::models::{CollaboratorRequest, OrgMembershipRequest, OrgMembershipResponse};

/// HTTP client for the GitHub REST API v3.
///
/// All methods return [`DomainResult`] and map HTTP / network errors
/// to [`DomainError::RemoteOperationFailed`].
#[derive(Debug, Clone)]
pub struct GitHubClient {
    /// The underlying HTTP client.
    http: Client,
    /// GitHub personal access token or fine-grained token.
    token: String,
    /// API base URL; injectable so tests can point at a local server.
    base_url: String,
    /// Shared rate limiter (5 000 req/hr for authenticated requests).
    rate_limiter: Arc<Mutex<RateLimiter>>,
}

impl GitHubClient {
    /// Create a new client with the given token and API base URL.
    pub fn new(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        // GitHub allows 5 000 authenticated requests per hour.
        let rate_limiter = RateLimiter::new(5_000, Duration::from_secs(3_600));
        Self {
            http: Client::new(),
            token: token.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            rate_limiter: Arc::new(Mutex::new(rate_limiter)),
        }
    }

    /// Acquire a rate-limit token and build an authorized request.
    async fn rate_limited_request(
        &self,
        method: reqwest::Method,
        url: &str,
    ) -> reqwest::RequestBuilder {
        self.rate_limiter.lock().await.acquire().await;
        self.http
            .request(method, url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .header("User-Agent", "idsync")
    }

    /// Add `username` to `org`, or invite them if they are not yet a
    /// member.
    ///
    /// The returned membership state is `active` for existing members
    /// and `pending` when the call produced an invitation.
    pub async fn put_org_membership(
        &self,
        org: &str,
        username: &str,
    ) -> DomainResult<OrgMembershipResponse> {
        let url = format!("{}/orgs/{}/memberships/{}", self.base_url, org, username);
        let body = OrgMembershipRequest {
            role: "member".to_string(),
        };

        let resp = self
            .rate_limited_request(reqwest::Method::PUT, &url)
            .await
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                DomainError::RemoteOperationFailed(format!(
                    "GitHub org membership request failed: {e}"
                ))
            })?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body_text = resp.text().await.unwrap_or_default();
            return Err(DomainError::RemoteOperationFailed(format!(
                "GitHub org membership returned {status}: {body_text}"
            )));
        }

        resp.json::<OrgMembershipResponse>().await.map_err(|e| {
            DomainError::RemoteOperationFailed(format!("GitHub org membership parse failed: {e}"))
        })
    }

    /// Grant `username` collaborator access on `org/repo` at the given
    /// permission level (`pull`, `push`, or `admin`).
    pub async fn put_repo_collaborator(
        &self,
        org: &str,
        repo: &str,
        username: &str,
        permission: &str,
    ) -> DomainResult<()> {
        let url = format!(
            "{}/repos/{}/{}/collaborators/{}",
            self.base_url, org, repo, username
        );
        let body = CollaboratorRequest {
            permission: permission.to_string(),
        };

        let resp = self
            .rate_limited_request(reqwest::Method::PUT, &url)
            .await
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                DomainError::RemoteOperationFailed(format!(
                    "GitHub add collaborator request failed: {e}"
                ))
            })?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body_text = resp.text().await.unwrap_or_default();
            return Err(DomainError::RemoteOperationFailed(format!(
                "GitHub add collaborator returned {status}: {body_text}"
            )));
        }

        Ok(())
    }

    /// Remove `username` from `org`.
    pub async fn delete_org_member(&self, org: &str, username: &str) -> DomainResult<()> {
        let url = format!("{}/orgs/{}/members/{}", self.base_url, org, username);

        let resp = self
            .rate_limited_request(reqwest::Method::DELETE, &url)
            .await
            .send()
            .await
            .map_err(|e| {
                DomainError::RemoteOperationFailed(format!(
                    "GitHub remove member request failed: {e}"
                ))
            })?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body_text = resp.text().await.unwrap_or_default();
            return Err(DomainError::RemoteOperationFailed(format!(
                "GitHub remove member returned {status}: {body_text}"
            )));
        }

        Ok(())
    }

    /// Revoke `username`'s collaborator access on `org/repo`.
    pub async fn delete_repo_collaborator(
        &self,
        org: &str,
        repo: &str,
        username: &str,
    ) -> DomainResult<()> {
        let url = format!(
            "{}/repos/{}/{}/collaborators/{}",
            self.base_url, org, repo, username
        );

        let resp = self
            .rate_limited_request(reqwest::Method::DELETE, &url)
            .await
            .send()
            .await
            .map_err(|e| {
                DomainError::RemoteOperationFailed(format!(
                    "GitHub remove collaborator request failed: {e}"
                ))
            })?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body_text = resp.text().await.unwrap_or_default();
            return Err(DomainError::RemoteOperationFailed(format!(
                "GitHub remove collaborator returned {status}: {body_text}"
            )));
        }

        Ok(())
    }
}
