//! Port traits.
//!
//! The reconciliation services interact with external systems
//! exclusively through these traits, keeping the domain layer decoupled
//! from any specific hosting platform or issue tracker.

pub mod directory;
pub mod ticketing;

pub use directory::{DirectoryService, RepoPermission};
pub use ticketing::TicketingService;
