//! CLI command implementations.

pub mod offboard;
pub mod onboard;
pub mod ticket;

use std::sync::Arc;

use crate::adapters::github::{GitHubClient, GitHubDirectory};
use crate::adapters::jira::{JiraClient, JiraTicketing};
use crate::domain::ports::{DirectoryService, TicketingService};
use crate::infrastructure::config::Settings;
use crate::services::TicketDefaults;

/// Wire the remote-service adapters from validated settings.
pub(crate) fn build_services(
    settings: &Settings,
) -> (
    Arc<dyn DirectoryService>,
    Arc<dyn TicketingService>,
    TicketDefaults,
) {
    let github = Arc::new(GitHubClient::new(
        settings.github.token.clone(),
        settings.github.api_url.clone(),
    ));
    let jira = Arc::new(JiraClient::new(
        settings.jira.server.clone(),
        settings.jira.user.clone(),
        settings.jira.token.clone(),
    ));

    (
        Arc::new(GitHubDirectory::new(github)),
        Arc::new(JiraTicketing::new(jira)),
        TicketDefaults {
            project: settings.jira.project.clone(),
            issue_type: settings.jira.issue_type.clone(),
        },
    )
}
