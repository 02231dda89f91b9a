//! CSV roster loading.
//!
//! Reads a roster of onboarding requests, validating each row
//! independently: a malformed row is reported with its line number and
//! excluded, and never aborts loading of the rows after it. No remote
//! calls happen here.

use std::collections::HashMap;
use std::path::Path;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{OnboardingRecord, RowError};

/// Columns every roster must carry.
const REQUIRED_COLUMNS: [&str; 5] = ["username", "email", "github_username", "org_name", "repos"];

/// Delimiter separating repository names inside the `repos` field.
const REPO_DELIMITER: char = ';';

/// UTF-8 BOM bytes.
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// The result of loading one roster file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedBatch {
    /// Valid records, in roster order.
    pub records: Vec<OnboardingRecord>,
    /// Rows rejected during validation, with their line numbers.
    pub rejected: Vec<RowError>,
}

/// Load and validate the roster at `path`.
///
/// Fails with [`DomainError::SourceNotFound`] when the file does not
/// exist, [`DomainError::SourceEmpty`] when it holds a header but no
/// data rows, and [`DomainError::SourceInvalid`] when the header is
/// missing a required column. Per-row validation failures land in
/// [`LoadedBatch::rejected`] and do not abort the load.
pub fn load_roster(path: impl AsRef<Path>) -> DomainResult<LoadedBatch> {
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => DomainError::SourceNotFound(path.to_path_buf()),
        _ => DomainError::SourceInvalid(format!("failed to read {}: {e}", path.display())),
    })?;
    parse_roster(&data, path)
}

/// Strip a UTF-8 BOM from the beginning of `data` if present.
fn strip_utf8_bom(data: &[u8]) -> &[u8] {
    data.strip_prefix(UTF8_BOM).unwrap_or(data)
}

/// Parse roster bytes. `path` is only used in error values.
fn parse_roster(data: &[u8], path: &Path) -> DomainResult<LoadedBatch> {
    let data = strip_utf8_bom(data);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(data);

    let columns: HashMap<String, usize> = reader
        .headers()
        .map_err(|e| DomainError::SourceInvalid(format!("failed to read roster header: {e}")))?
        .iter()
        .enumerate()
        .map(|(idx, name)| (name.to_lowercase(), idx))
        .collect();

    for required in REQUIRED_COLUMNS {
        if !columns.contains_key(required) {
            return Err(DomainError::SourceInvalid(format!(
                "roster is missing required column '{required}'"
            )));
        }
    }

    let mut records = Vec::new();
    let mut rejected = Vec::new();
    let mut total_rows = 0usize;

    for (idx, result) in reader.records().enumerate() {
        // Header is line 1, first data row is line 2.
        let line_number = idx + 2;
        total_rows += 1;

        let row = match result {
            Ok(row) => row,
            Err(e) => {
                rejected.push(RowError::new(line_number, format!("failed to parse row: {e}")));
                continue;
            }
        };

        match parse_row(&row, &columns, line_number) {
            Ok(record) => records.push(record),
            Err(err) => rejected.push(err),
        }
    }

    if total_rows == 0 {
        return Err(DomainError::SourceEmpty(path.to_path_buf()));
    }

    tracing::debug!(
        records = records.len(),
        rejected = rejected.len(),
        "roster loaded"
    );

    Ok(LoadedBatch { records, rejected })
}

/// Validate one data row into a record.
fn parse_row(
    row: &csv::StringRecord,
    columns: &HashMap<String, usize>,
    line_number: usize,
) -> Result<OnboardingRecord, RowError> {
    let username = required_field(row, columns, "username", line_number)?;
    let email = required_field(row, columns, "email", line_number)?;
    let github_username = required_field(row, columns, "github_username", line_number)?;
    let org_name = required_field(row, columns, "org_name", line_number)?;
    let repos_field = required_field(row, columns, "repos", line_number)?;

    let repos: Vec<String> = repos_field
        .split(REPO_DELIMITER)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if repos.is_empty() {
        return Err(RowError::new(
            line_number,
            "field 'repos' holds no repository names",
        ));
    }

    Ok(OnboardingRecord {
        username,
        email,
        github_username,
        org_name,
        repos,
    })
}

/// Fetch a required field, trimmed; empty or absent is a row error.
fn required_field(
    row: &csv::StringRecord,
    columns: &HashMap<String, usize>,
    name: &str,
    line_number: usize,
) -> Result<String, RowError> {
    let value = columns
        .get(name)
        .and_then(|&idx| row.get(idx))
        .map(str::trim)
        .unwrap_or_default();

    if value.is_empty() {
        Err(RowError::new(
            line_number,
            format!("missing required field '{name}'"),
        ))
    } else {
        Ok(value.to_string())
    }
}
