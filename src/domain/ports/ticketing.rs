//! Ticketing port: tracking-ticket creation and status updates.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::TicketRequest;

/// Port for the issue tracker documenting lifecycle actions.
#[async_trait]
pub trait TicketingService: Send + Sync {
    /// Create a tracking ticket and return its key (e.g. `HR-101`).
    async fn create_ticket(&self, request: &TicketRequest) -> DomainResult<String>;

    /// Move the ticket `ticket_id` to `status`.
    async fn update_ticket_status(&self, ticket_id: &str, status: &str) -> DomainResult<()>;
}
