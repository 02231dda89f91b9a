//! Domain models.

pub mod outcome;
pub mod record;
pub mod ticket;

pub use outcome::{BatchSummary, OperationOutcome, Stage};
pub use record::{OnboardingRecord, RowError};
pub use ticket::TicketRequest;
