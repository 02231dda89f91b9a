//! Idsync CLI entry point.

use clap::Parser;

use idsync::cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Onboard(args) => idsync::cli::commands::onboard::execute(args, cli.json).await,
        Commands::Offboard(args) => idsync::cli::commands::offboard::execute(args, cli.json).await,
        Commands::Ticket(args) => idsync::cli::commands::ticket::execute(args, cli.json).await,
    };

    if let Err(err) = result {
        idsync::cli::handle_error(&err, cli.json);
        std::process::exit(1);
    }
}
