//! Configuration loading with hierarchical merging.

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use super::settings::Settings;

/// Configuration error types.
///
/// All of these are fatal: a run refuses to start, before any remote
/// call, when a required value is missing or invalid.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing GitHub token. Set IDSYNC_GITHUB__TOKEN or github.token in idsync.yaml")]
    MissingGithubToken,

    #[error("Invalid GitHub API URL: {0}. Must start with http:// or https://")]
    InvalidGithubApiUrl(String),

    #[error("Missing Jira server URL. Set IDSYNC_JIRA__SERVER or jira.server in idsync.yaml")]
    MissingJiraServer,

    #[error("Invalid Jira server URL: {0}. Must start with http:// or https://")]
    InvalidJiraServer(String),

    #[error("Missing Jira user. Set IDSYNC_JIRA__USER or jira.user in idsync.yaml")]
    MissingJiraUser,

    #[error("Missing Jira API token. Set IDSYNC_JIRA__TOKEN or jira.token in idsync.yaml")]
    MissingJiraToken,

    #[error("Jira project key cannot be empty")]
    EmptyJiraProject,

    #[error("Jira issue type cannot be empty")]
    EmptyJiraIssueType,

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),
}

/// Configuration loader with hierarchical merging.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging.
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. idsync.yaml in the working directory (optional)
    /// 3. Environment variables (IDSYNC_* prefix, highest priority)
    pub fn load() -> Result<Settings> {
        let settings: Settings = Figment::new()
            // 1. Start with programmatic defaults
            .merge(Serialized::defaults(Settings::default()))
            // 2. Merge the optional project config file
            .merge(Yaml::file("idsync.yaml"))
            // 3. Merge environment variables (highest priority)
            .merge(Env::prefixed("IDSYNC_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&settings)?;
        Ok(settings)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Settings> {
        let settings: Settings = Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&settings)?;
        Ok(settings)
    }

    /// Validate configuration after loading.
    pub fn validate(settings: &Settings) -> Result<(), ConfigError> {
        // Validate GitHub settings
        if settings.github.token.is_empty() {
            return Err(ConfigError::MissingGithubToken);
        }

        if !is_http_url(&settings.github.api_url) {
            return Err(ConfigError::InvalidGithubApiUrl(
                settings.github.api_url.clone(),
            ));
        }

        // Validate Jira settings
        if settings.jira.server.is_empty() {
            return Err(ConfigError::MissingJiraServer);
        }

        if !is_http_url(&settings.jira.server) {
            return Err(ConfigError::InvalidJiraServer(settings.jira.server.clone()));
        }

        if settings.jira.user.is_empty() {
            return Err(ConfigError::MissingJiraUser);
        }

        if settings.jira.token.is_empty() {
            return Err(ConfigError::MissingJiraToken);
        }

        if settings.jira.project.is_empty() {
            return Err(ConfigError::EmptyJiraProject);
        }

        if settings.jira.issue_type.is_empty() {
            return Err(ConfigError::EmptyJiraIssueType);
        }

        // Validate logging settings
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&settings.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(settings.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&settings.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(
                settings.logging.format.clone(),
            ));
        }

        Ok(())
    }
}

/// True for `http://` and `https://` URLs.
fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}
