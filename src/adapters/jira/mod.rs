//! Jira integration.
//!
//! [`client::JiraClient`] wraps the REST API v2 endpoints idsync needs;
//! [`ticketing::JiraTicketing`] implements the
//! [`TicketingService`](crate::domain::ports::TicketingService) port on
//! top of it.

pub mod client;
pub mod models;
pub mod ticketing;

pub use client::JiraClient;
pub use ticketing::JiraTicketing;
