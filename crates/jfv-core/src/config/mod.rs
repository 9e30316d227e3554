//! Configuration parsing and management.
//!
//! A single TOML file with a `[jira]` section (where and how to connect)
//! and a `[view]` section (presentation defaults). Every key is optional.

use std::path::Path;
use std::time::Duration;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Environment variable holding the API token unless configured otherwise.
pub const DEFAULT_API_TOKEN_ENV: &str = "JIRA_API_TOKEN";

const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 15;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JfvConfig {
    /// Connection settings.
    #[serde(default)]
    pub jira: JiraConfig,

    /// Presentation defaults.
    #[serde(default)]
    pub view: ViewConfig,
}

impl JfvConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load configuration from `path` when it exists, defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read, parsed or
    /// validated.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or fails validation.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] describing the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(site_url) = &self.jira.site_url {
            let site_url = site_url.trim();
            if !(site_url.starts_with("https://") || site_url.starts_with("http://")) {
                return Err(ConfigError::Validation(format!(
                    "jira.site_url must start with http:// or https:// (got `{site_url}`)"
                )));
            }
        }
        if self.jira.connect_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "jira.connect_timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.jira.request_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "jira.request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.jira.api_token_env.trim().is_empty() {
            return Err(ConfigError::Validation(
                "jira.api_token_env must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// `[jira]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JiraConfig {
    /// Site base URL, e.g. `https://example.atlassian.net`.
    #[serde(default)]
    pub site_url: Option<String>,

    /// Account email used for basic auth.
    #[serde(default)]
    pub email: Option<String>,

    /// Name of the environment variable holding the API token.
    #[serde(default = "default_api_token_env")]
    pub api_token_env: String,

    /// TCP connect timeout.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Whole-request timeout.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for JiraConfig {
    fn default() -> Self {
        Self {
            site_url: None,
            email: None,
            api_token_env: default_api_token_env(),
            connect_timeout_secs: default_connect_timeout_secs(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl JiraConfig {
    /// Reads the API token from the configured environment variable.
    ///
    /// Unset or blank variables yield `None`.
    #[must_use]
    pub fn api_token(&self) -> Option<SecretString> {
        std::env::var(&self.api_token_env)
            .ok()
            .filter(|token| !token.trim().is_empty())
            .map(SecretString::from)
    }

    /// Connect timeout as a [`Duration`].
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Request timeout as a [`Duration`].
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// `[view]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewConfig {
    /// Filter applied when none is given on the command line.
    #[serde(default)]
    pub default_filter: String,
}

fn default_api_token_env() -> String {
    DEFAULT_API_TOKEN_ENV.to_string()
}

const fn default_connect_timeout_secs() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_SECS
}

const fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading configuration file.
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// Validation error.
    #[error("configuration validation failed: {0}")]
    Validation(String),
}
