//! Tracking-ticket commands.

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::cli::types::{TicketArgs, TicketCommands};
use crate::infrastructure::{config::ConfigLoader, logging};

/// Result of a ticket status update.
#[derive(Debug, Serialize)]
pub struct TicketStatusOutput {
    /// Ticket that was updated.
    pub ticket_id: String,
    /// Status the ticket was moved to.
    pub status: String,
    /// When the update happened (RFC 3339).
    pub updated_at: String,
}

impl CommandOutput for TicketStatusOutput {
    fn to_human(&self) -> String {
        format!("Updated ticket {} to status: {}", self.ticket_id, self.status)
    }
}

/// Run a ticket command.
///
/// Unlike the batch workflows, a failed status update surfaces as a
/// non-zero process outcome: there is exactly one remote call, so
/// nothing was accomplished if it failed.
pub async fn execute(args: TicketArgs, json: bool) -> Result<()> {
    let settings = ConfigLoader::load()?;
    let _logging = logging::init(&settings.logging)?;

    match args.command {
        TicketCommands::UpdateStatus { ticket_id, status } => {
            let (_, ticketing, _) = super::build_services(&settings);

            ticketing
                .update_ticket_status(&ticket_id, &status)
                .await
                .with_context(|| format!("failed to update ticket {ticket_id}"))?;

            let result = TicketStatusOutput {
                ticket_id,
                status,
                updated_at: Utc::now().to_rfc3339(),
            };
            output(&result, json);
        }
    }

    Ok(())
}
