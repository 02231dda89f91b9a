//! Jira HTTP client with rate limiting.
//!
//! Wraps the Jira REST API v2, providing typed methods for issue
//! creation and updates. Authenticates with basic auth (user + API
//! token) and keeps a modest token-bucket rate limit so unattended
//! batch runs stay polite.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use tokio::sync::Mutex;

use crate::adapters::rate_limit::RateLimiter;
use crate::domain::errors::{DomainError, DomainResult};

use super::models::{JiraCreateIssueRequest, JiraIssueCreated, JiraIssueUpdateRequest};

/// HTTP client for the Jira REST API v2.
///
/// All methods return [`DomainResult`] and map HTTP / network errors
/// to [`DomainError::RemoteOperationFailed`].
#[derive(Debug, Clone)]
pub struct JiraClient {
    /// The underlying HTTP client.
    http: Client,
    /// Jira server base URL, e.g. `https://yourcompany.atlassian.net`.
    base_url: String,
    /// Account the API token belongs to.
    user: String,
    /// API token paired with `user` for basic auth.
    token: String,
    /// Shared rate limiter.
    rate_limiter: Arc<Mutex<RateLimiter>>,
}

impl JiraClient {
    /// Create a new client against the given server.
    pub fn new(
        base_url: impl Into<String>,
        user: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        let rate_limiter = RateLimiter::new(100, Duration::from_secs(60));
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            user: user.into(),
            token: token.into(),
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
            .basic_auth(&self.user, Some(&self.token))
            .header("Content-Type", "application/json")
    }

    /// Create an issue.
    ///
    /// Returns the created issue's id, key, and URL.
    pub async fn create_issue(
        &self,
        request: &JiraCreateIssueRequest,
    ) -> DomainResult<JiraIssueCreated> {
        let url = format!("{}/rest/api/2/issue", self.base_url);

        let resp = self
            .rate_limited_request(reqwest::Method::POST, &url)
            .await
            .json(request)
            .send()
            .await
            .map_err(|e| {
                DomainError::RemoteOperationFailed(format!(
                    "Jira create issue request failed: {e}"
                ))
            })?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(DomainError::RemoteOperationFailed(format!(
                "Jira create issue returned {status}: {body}"
            )));
        }

        resp.json::<JiraIssueCreated>().await.map_err(|e| {
            DomainError::RemoteOperationFailed(format!("Jira create issue parse failed: {e}"))
        })
    }

    /// Update fields on the issue `key`.
    pub async fn update_issue(
        &self,
        key: &str,
        request: &JiraIssueUpdateRequest,
    ) -> DomainResult<()> {
        let url = format!("{}/rest/api/2/issue/{}", self.base_url, key);

        let resp = self
            .rate_limited_request(reqwest::Method::PUT, &url)
            .await
            .json(request)
            .send()
            .await
            .map_err(|e| {
                DomainError::RemoteOperationFailed(format!(
                    "Jira update issue request failed: {e}"
                ))
            })?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(DomainError::RemoteOperationFailed(format!(
                "Jira update issue returned {status}: {body}"
            )));
        }

        Ok(())
    }
}
