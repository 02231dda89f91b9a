//! Jira implementation of the ticketing port.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::TicketRequest;
use crate::domain::ports::TicketingService;

use super::client::JiraClient;
use super::models::{
    JiraCreateIssueRequest, JiraIssueFields, JiraIssueTypeRef, JiraIssueUpdateRequest,
    JiraProjectRef,
};

/// [`TicketingService`] backed by the Jira REST API.
#[derive(Debug, Clone)]
pub struct JiraTicketing {
    /// Shared Jira HTTP client.
    client: Arc<JiraClient>,
}

impl JiraTicketing {
    /// Create a new ticketing adapter over the given client.
    pub fn new(client: Arc<JiraClient>) -> Self {
        Self { client }
    }

    /// Map a port-level ticket request to the Jira wire shape.
    pub(crate) fn to_create_request(request: &TicketRequest) -> JiraCreateIssueRequest {
        JiraCreateIssueRequest {
            fields: JiraIssueFields {
                project: JiraProjectRef {
                    key: request.project.clone(),
                },
                summary: request.summary.clone(),
                description: request.description.clone(),
                issuetype: JiraIssueTypeRef {
                    name: request.issue_type.clone(),
                },
            },
        }
    }
}

#[async_trait]
impl TicketingService for JiraTicketing {
    async fn create_ticket(&self, request: &TicketRequest) -> DomainResult<String> {
        if request.project.is_empty() {
            return Err(DomainError::ValidationFailed(
                "ticket request missing project key".to_string(),
            ));
        }
        tracing::info!(
            project = %request.project,
            summary = %request.summary,
            "Jira: creating ticket"
        );
        let created = self
            .client
            .create_issue(&Self::to_create_request(request))
            .await?;
        tracing::info!(ticket = %created.key, "Jira: ticket created");
        Ok(created.key)
    }

    async fn update_ticket_status(&self, ticket_id: &str, status: &str) -> DomainResult<()> {
        tracing::info!(ticket = ticket_id, status = status, "Jira: updating ticket status");
        self.client
            .update_issue(ticket_id, &JiraIssueUpdateRequest::status(status))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_create_request_maps_all_fields() {
        let request = TicketRequest {
            project: "HR".to_string(),
            summary: "Onboard user: alice".to_string(),
            description: "Onboarding process for alice".to_string(),
            issue_type: "Task".to_string(),
        };
        let wire = JiraTicketing::to_create_request(&request);
        assert_eq!(wire.fields.project.key, "HR");
        assert_eq!(wire.fields.summary, "Onboard user: alice");
        assert_eq!(wire.fields.description, "Onboarding process for alice");
        assert_eq!(wire.fields.issuetype.name, "Task");
    }

    #[tokio::test]
    async fn test_create_ticket_rejects_empty_project() {
        let ticketing = JiraTicketing::new(Arc::new(JiraClient::new(
            "https://jira.example.com",
            "bot@example.com",
            "secret",
        )));
        let result = ticketing
            .create_ticket(&TicketRequest {
                project: String::new(),
                summary: "Onboard user: alice".to_string(),
                description: "details".to_string(),
                issue_type: "Task".to_string(),
            })
            .await;

        assert!(matches!(result, Err(DomainError::ValidationFailed(_))));
    }
}
