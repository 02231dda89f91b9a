//! Tracking-ticket requests.

use serde::{Deserialize, Serialize};

/// A request to create a tracking ticket documenting a lifecycle action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRequest {
    /// Project key the ticket is filed under (e.g. `HR`).
    pub project: String,
    /// One-line summary.
    pub summary: String,
    /// Full description of what was done (or attempted).
    pub description: String,
    /// Issue type name (e.g. `Task`).
    pub issue_type: String,
}
