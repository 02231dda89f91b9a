//! Adapter layer: HTTP integrations behind the domain ports.

pub mod github;
pub mod jira;
pub mod rate_limit;
