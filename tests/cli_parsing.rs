//! CLI argument parsing.

use std::path::PathBuf;

use clap::Parser;
use idsync::cli::{Cli, Commands};
use idsync::cli::types::TicketCommands;

#[test]
fn test_parse_onboard_default_roster() {
    let cli = Cli::try_parse_from(vec!["idsync", "onboard"]).unwrap();

    match cli.command {
        Commands::Onboard(args) => {
            assert_eq!(args.roster, PathBuf::from("users_to_onboard.csv"));
        }
        _ => panic!("Wrong top-level command"),
    }
    assert!(!cli.json);
}

#[test]
fn test_parse_onboard_custom_roster() {
    let cli = Cli::try_parse_from(vec!["idsync", "onboard", "rosters/2026-q3.csv"]).unwrap();

    match cli.command {
        Commands::Onboard(args) => {
            assert_eq!(args.roster, PathBuf::from("rosters/2026-q3.csv"));
        }
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_offboard_with_repos() {
    let cli = Cli::try_parse_from(vec![
        "idsync", "offboard", "--user", "alice-gh", "--org", "acme", "--repos", "svc-a,svc-b",
    ])
    .unwrap();

    match cli.command {
        Commands::Offboard(args) => {
            assert_eq!(args.user, "alice-gh");
            assert_eq!(args.org, "acme");
            assert_eq!(args.repos, vec!["svc-a", "svc-b"]);
        }
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_offboard_requires_user_and_org() {
    temp_env::with_vars_unset(["IDSYNC_OFFBOARD_USER", "IDSYNC_OFFBOARD_ORG"], || {
        let result = Cli::try_parse_from(vec!["idsync", "offboard"]);
        assert!(result.is_err());
    });
}

#[test]
fn test_parse_offboard_user_from_env() {
    temp_env::with_vars(
        [
            ("IDSYNC_OFFBOARD_USER", Some("alice-gh")),
            ("IDSYNC_OFFBOARD_ORG", Some("acme")),
        ],
        || {
            let cli = Cli::try_parse_from(vec!["idsync", "offboard"]).unwrap();
            match cli.command {
                Commands::Offboard(args) => {
                    assert_eq!(args.user, "alice-gh");
                    assert_eq!(args.org, "acme");
                    assert!(args.repos.is_empty());
                }
                _ => panic!("Wrong top-level command"),
            }
        },
    );
}

#[test]
fn test_parse_ticket_update_status_default() {
    temp_env::with_vars_unset(["IDSYNC_TICKET_ID", "IDSYNC_TICKET_STATUS"], || {
        let cli = Cli::try_parse_from(vec!["idsync", "ticket", "update-status", "HR-101"]).unwrap();

        match cli.command {
            Commands::Ticket(args) => match args.command {
                TicketCommands::UpdateStatus { ticket_id, status } => {
                    assert_eq!(ticket_id, "HR-101");
                    assert_eq!(status, "Done");
                }
            },
            _ => panic!("Wrong top-level command"),
        }
    });
}

#[test]
fn test_parse_ticket_update_status_explicit() {
    let cli = Cli::try_parse_from(vec![
        "idsync", "ticket", "update-status", "HR-101", "--status", "In Progress",
    ])
    .unwrap();

    match cli.command {
        Commands::Ticket(args) => match args.command {
            TicketCommands::UpdateStatus { ticket_id, status } => {
                assert_eq!(ticket_id, "HR-101");
                assert_eq!(status, "In Progress");
            }
        },
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_global_json_flag() {
    let cli = Cli::try_parse_from(vec!["idsync", "onboard", "--json"]).unwrap();
    assert!(cli.json);
}
