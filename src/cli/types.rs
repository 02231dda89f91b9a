//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI arguments.
#[derive(Parser)]
#[command(name = "idsync")]
#[command(about = "Idsync - Identity Lifecycle Synchronizer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// The command to run.
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Onboard a batch of users from a CSV roster
    Onboard(OnboardArgs),

    /// Offboard a single user from an organization
    Offboard(OffboardArgs),

    /// Tracking-ticket maintenance commands
    Ticket(TicketArgs),
}

/// Arguments for `idsync onboard`.
#[derive(Args, Debug)]
pub struct OnboardArgs {
    /// Path to the CSV roster of users to onboard
    #[arg(default_value = "users_to_onboard.csv")]
    pub roster: PathBuf,
}

/// Arguments for `idsync offboard`.
#[derive(Args, Debug)]
pub struct OffboardArgs {
    /// GitHub username to offboard
    #[arg(short, long, env = "IDSYNC_OFFBOARD_USER")]
    pub user: String,

    /// GitHub organization to remove the user from
    #[arg(short, long, env = "IDSYNC_OFFBOARD_ORG")]
    pub org: String,

    /// Repositories to revoke collaborator access on (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub repos: Vec<String>,
}

/// Arguments for `idsync ticket`.
#[derive(Args, Debug)]
pub struct TicketArgs {
    /// The ticket operation to run.
    #[command(subcommand)]
    pub command: TicketCommands,
}

/// Ticket subcommands.
#[derive(Subcommand, Debug)]
pub enum TicketCommands {
    /// Update the status of a tracking ticket
    UpdateStatus {
        /// Ticket key, e.g. HR-101
        #[arg(env = "IDSYNC_TICKET_ID")]
        ticket_id: String,

        /// Target status name
        #[arg(short, long, default_value = "Done", env = "IDSYNC_TICKET_STATUS")]
        status: String,
    },
}
