//! Idsync - Identity Lifecycle Synchronizer
//!
//! Idsync keeps external systems in step with a source-of-truth CSV
//! roster of identity-lifecycle events: it grants GitHub organization
//! membership and repository collaborator access during onboarding,
//! reverses them during offboarding, and documents every action with a
//! Jira tracking ticket.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Models, error taxonomy, and port traits
//! - **Service Layer** (`services`): Roster loading and the reconciliation workflows
//! - **Adapter Layer** (`adapters`): GitHub and Jira HTTP integrations
//! - **Infrastructure Layer** (`infrastructure`): Configuration and logging
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use idsync::services::BatchReconciler;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Load a roster and reconcile it against GitHub and Jira
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{DomainError, DomainResult};
pub use domain::models::{
    BatchSummary, OnboardingRecord, OperationOutcome, RowError, Stage, TicketRequest,
};
pub use domain::ports::{DirectoryService, RepoPermission, TicketingService};
pub use infrastructure::config::{ConfigError, ConfigLoader, Settings};
pub use services::{BatchReconciler, LoadedBatch, OffboardWorkflow};
