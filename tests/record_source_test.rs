//! Roster loading against real files.

use std::fs;
use std::path::PathBuf;

use idsync::domain::errors::DomainError;
use idsync::services::load_roster;
use tempfile::TempDir;

const HEADER: &str = "username,email,github_username,org_name,repos\n";

fn write_roster(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("users_to_onboard.csv");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_valid_roster() {
    let dir = TempDir::new().unwrap();
    let path = write_roster(
        &dir,
        &format!("{HEADER}alice,alice@x.com,alice-gh,acme,svc-a;svc-b\n"),
    );

    let batch = load_roster(&path).unwrap();
    assert_eq!(batch.records.len(), 1);
    assert!(batch.rejected.is_empty());
    assert_eq!(batch.records[0].github_username, "alice-gh");
    assert_eq!(batch.records[0].repos, vec!["svc-a", "svc-b"]);
}

#[test]
fn test_load_missing_file_is_source_not_found() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.csv");

    let result = load_roster(&path);
    match result {
        Err(DomainError::SourceNotFound(p)) => assert_eq!(p, path),
        other => panic!("Expected SourceNotFound, got: {other:?}"),
    }
}

#[test]
fn test_load_header_only_is_source_empty() {
    let dir = TempDir::new().unwrap();
    let path = write_roster(&dir, HEADER);

    let result = load_roster(&path);
    assert!(matches!(result, Err(DomainError::SourceEmpty(_))));
}

#[test]
fn test_bad_rows_are_reported_with_line_numbers() {
    let dir = TempDir::new().unwrap();
    let path = write_roster(
        &dir,
        &format!(
            "{HEADER}alice,alice@x.com,alice-gh,acme,svc-a\n\
             bob,bob@x.com,,acme,svc-b\n\
             carol,carol@x.com,carol-gh,acme,\n"
        ),
    );

    let batch = load_roster(&path).unwrap();
    assert_eq!(batch.records.len(), 1);
    assert_eq!(batch.rejected.len(), 2);
    assert_eq!(batch.rejected[0].line_number, 3);
    assert!(batch.rejected[0].message.contains("github_username"));
    assert_eq!(batch.rejected[1].line_number, 4);
    assert!(batch.rejected[1].message.contains("repos"));
}

#[test]
fn test_loading_twice_yields_equal_batches() {
    let dir = TempDir::new().unwrap();
    let path = write_roster(
        &dir,
        &format!(
            "{HEADER}alice,alice@x.com,alice-gh,acme,svc-a;svc-b\n\
             bob,bob@x.com,bob-gh,acme,svc-c\n"
        ),
    );

    let first = load_roster(&path).unwrap();
    let second = load_roster(&path).unwrap();
    assert_eq!(first, second);
}
