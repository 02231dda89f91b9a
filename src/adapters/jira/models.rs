//! Jira API request/response models.

use serde::{Deserialize, Serialize};

/// Reference to a project by key.
#[derive(Debug, Clone, Serialize)]
pub struct JiraProjectRef {
    /// Project key, e.g. `HR`.
    pub key: String,
}

/// Reference to an issue type by name.
#[derive(Debug, Clone, Serialize)]
pub struct JiraIssueTypeRef {
    /// Issue type name, e.g. `Task`.
    pub name: String,
}

/// Fields of a new issue.
#[derive(Debug, Clone, Serialize)]
pub struct JiraIssueFields {
    /// Target project.
    pub project: JiraProjectRef,
    /// One-line summary.
    pub summary: String,
    /// Full description.
    pub description: String,
    /// Issue type.
    pub issuetype: JiraIssueTypeRef,
}

/// Body for `POST /rest/api/2/issue`.
#[derive(Debug, Clone, Serialize)]
pub struct JiraCreateIssueRequest {
    /// The issue fields.
    pub fields: JiraIssueFields,
}

/// Response from `POST /rest/api/2/issue`.
#[derive(Debug, Clone, Deserialize)]
pub struct JiraIssueCreated {
    /// Numeric issue id.
    pub id: String,
    /// Issue key, e.g. `HR-101`.
    pub key: String,
    /// URL of the created issue resource.
    #[serde(rename = "self")]
    pub self_url: String,
}

/// Reference to a status by name.
#[derive(Debug, Clone, Serialize)]
pub struct JiraStatusRef {
    /// Status name, e.g. `Done`.
    pub name: String,
}

/// Status field of an issue update.
#[derive(Debug, Clone, Serialize)]
pub struct JiraStatusFields {
    /// New status.
    pub status: JiraStatusRef,
}

/// Body for `PUT /rest/api/2/issue/{key}`.
#[derive(Debug, Clone, Serialize)]
pub struct JiraIssueUpdateRequest {
    /// The fields to update.
    pub fields: JiraStatusFields,
}

impl JiraIssueUpdateRequest {
    /// Build a status-only update.
    pub fn status(name: impl Into<String>) -> Self {
        Self {
            fields: JiraStatusFields {
                status: JiraStatusRef { name: name.into() },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_issue_request_shape() {
        let request = JiraCreateIssueRequest {
            fields: JiraIssueFields {
                project: JiraProjectRef {
                    key: "HR".to_string(),
                },
                summary: "Onboard user: alice".to_string(),
                description: "details".to_string(),
                issuetype: JiraIssueTypeRef {
                    name: "Task".to_string(),
                },
            },
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["fields"]["project"]["key"], "HR");
        assert_eq!(json["fields"]["issuetype"]["name"], "Task");
        assert_eq!(json["fields"]["summary"], "Onboard user: alice");
    }

    #[test]
    fn test_status_update_shape() {
        let json = serde_json::to_value(JiraIssueUpdateRequest::status("Done")).unwrap();
        assert_eq!(json["fields"]["status"]["name"], "Done");
    }

    #[test]
    fn test_issue_created_deserializes_self_url() {
        let created: JiraIssueCreated = serde_json::from_str(
            r#"{"id":"10001","key":"HR-101","self":"https://jira.example.com/rest/api/2/issue/10001"}"#,
        )
        .unwrap();
        assert_eq!(created.key, "HR-101");
        assert!(created.self_url.ends_with("10001"));
    }
}
