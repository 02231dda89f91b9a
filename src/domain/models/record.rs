//! Onboarding roster records.

use serde::{Deserialize, Serialize};

/// One onboarding request loaded from the roster.
///
/// A record is only constructed once its row has passed validation:
/// every field is non-empty and `repos` holds at least one repository
/// name. Malformed rows never become records; they are reported as
/// [`RowError`]s by the record source instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingRecord {
    /// Human-facing identifier of the subject (e.g. an employee login).
    pub username: String,
    /// Contact email for the subject.
    pub email: String,
    /// The subject's GitHub account name.
    pub github_username: String,
    /// GitHub organization the subject joins.
    pub org_name: String,
    /// Repositories to grant collaborator access on, in roster order.
    pub repos: Vec<String>,
}

/// A roster row that failed validation.
///
/// Carries the 1-based line number (header = 1, first data row = 2) so
/// an operator can find the offending row in the source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowError {
    /// 1-based line number of the rejected row.
    pub line_number: usize,
    /// What was wrong with the row.
    pub message: String,
}

impl RowError {
    /// Create a row error for the given line.
    pub fn new(line_number: usize, message: impl Into<String>) -> Self {
        Self {
            line_number,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_roundtrip() {
        let record = OnboardingRecord {
            username: "alice".to_string(),
            email: "alice@x.com".to_string(),
            github_username: "alice-gh".to_string(),
            org_name: "acme".to_string(),
            repos: vec!["svc-a".to_string(), "svc-b".to_string()],
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: OnboardingRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }

    #[test]
    fn test_row_error_new() {
        let err = RowError::new(3, "missing field 'email'");
        assert_eq!(err.line_number, 3);
        assert!(err.message.contains("email"));
    }
}
