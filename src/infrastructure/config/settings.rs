//! Settings model.

use serde::{Deserialize, Serialize};

/// Top-level idsync settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// GitHub connection settings.
    pub github: GithubSettings,
    /// Jira connection settings.
    pub jira: JiraSettings,
    /// Logging settings.
    pub logging: LoggingSettings,
}

/// GitHub connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubSettings {
    /// Personal access token or fine-grained token. Required.
    pub token: String,
    /// API base URL; override for GitHub Enterprise instances.
    pub api_url: String,
}

impl Default for GithubSettings {
    fn default() -> Self {
        Self {
            token: String::new(),
            api_url: "https://api.github.com".to_string(),
        }
    }
}

/// Jira connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JiraSettings {
    /// Server base URL, e.g. `https://yourcompany.atlassian.net`. Required.
    pub server: String,
    /// Account the API token belongs to. Required.
    pub user: String,
    /// API token. Required.
    pub token: String,
    /// Project key tracking tickets are filed under.
    pub project: String,
    /// Issue type name for created tickets.
    pub issue_type: String,
}

impl Default for JiraSettings {
    fn default() -> Self {
        Self {
            server: String::new(),
            user: String::new(),
            token: String::new(),
            project: "HR".to_string(),
            issue_type: "Task".to_string(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default log level when `RUST_LOG` is not set.
    pub level: String,
    /// Output format: `pretty` or `json`.
    pub format: String,
    /// Optional log file; appended to for the duration of a run.
    pub file: Option<String>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}
