//! Service layer: roster loading and the reconciliation workflows.

pub mod offboard;
pub mod reconciler;
pub mod record_source;

pub use offboard::{OffboardReport, OffboardRequest, OffboardWorkflow};
pub use reconciler::{BatchReconciler, TicketDefaults};
pub use record_source::{load_roster, LoadedBatch};
