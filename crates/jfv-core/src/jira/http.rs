//! Blocking HTTP source backed by the Jira Cloud REST API (v3).

use std::fmt;
use std::time::Duration;

use reqwest::header::{ACCEPT, USER_AGENT};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::types::{Field, Project};
use super::{FIELDS_PATH, JiraError, JiraSource, PROJECTS_PATH};
use crate::config::JiraConfig;

const CLIENT_USER_AGENT: &str = concat!("jfv/", env!("CARGO_PKG_VERSION"));

/// Basic-auth credentials (account email plus API token).
pub struct JiraCredentials {
    email: String,
    api_token: SecretString,
}

impl JiraCredentials {
    /// Creates a credential pair.
    #[must_use]
    pub const fn new(email: String, api_token: SecretString) -> Self {
        Self { email, api_token }
    }

    /// Account email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

impl fmt::Debug for JiraCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JiraCredentials")
            .field("email", &self.email)
            .field("api_token", &"[REDACTED]")
            .finish()
    }
}

/// Jira source that talks to a live site.
#[derive(Debug)]
pub struct JiraHttpSource {
    site_url: String,
    credentials: Option<JiraCredentials>,
    http_client: reqwest::blocking::Client,
}

impl JiraHttpSource {
    /// Creates a source for `site_url` with explicit timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error when the site URL is empty or the HTTP client
    /// cannot be initialized.
    pub fn new(
        site_url: impl Into<String>,
        credentials: Option<JiraCredentials>,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> Result<Self, JiraError> {
        let site_url = site_url.into();
        let site_url = site_url.trim().trim_end_matches('/').to_string();
        if site_url.is_empty() {
            return Err(JiraError::Configuration(
                "site URL must not be empty".to_string(),
            ));
        }

        let http_client = reqwest::blocking::Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .build()
            .map_err(|error| JiraError::Configuration(error.to_string()))?;

        Ok(Self {
            site_url,
            credentials,
            http_client,
        })
    }

    /// Creates a source from the `[jira]` configuration section.
    ///
    /// Credentials are attached only when both the email and the token
    /// environment variable are set.
    ///
    /// # Errors
    ///
    /// Returns an error when no site URL is configured or the HTTP client
    /// cannot be initialized.
    pub fn from_config(config: &JiraConfig) -> Result<Self, JiraError> {
        let site_url = config.site_url.as_deref().ok_or_else(|| {
            JiraError::Configuration("no Jira site URL configured (jira.site_url)".to_string())
        })?;
        let credentials = match (config.email.as_ref(), config.api_token()) {
            (Some(email), Some(api_token)) => Some(JiraCredentials::new(email.clone(), api_token)),
            _ => None,
        };
        Self::new(
            site_url,
            credentials,
            config.connect_timeout(),
            config.request_timeout(),
        )
    }

    /// Site base URL without a trailing slash.
    #[must_use]
    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, JiraError> {
        let endpoint = format!("{}{path}", self.site_url);
        debug!(endpoint = %endpoint, authenticated = self.credentials.is_some(), "GET");

        let mut request = self
            .http_client
            .get(&endpoint)
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, CLIENT_USER_AGENT);
        if let Some(credentials) = &self.credentials {
            request = request.basic_auth(
                &credentials.email,
                Some(credentials.api_token.expose_secret()),
            );
        }

        let response = request.send()?;
        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .unwrap_or_else(|_| "unable to read response body".to_string());
            return Err(JiraError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes()?;
        Ok(serde_json::from_slice(&body)?)
    }
}

impl JiraSource for JiraHttpSource {
    fn source_name(&self) -> &'static str {
        "jira-http"
    }

    fn list_fields(&self) -> Result<Vec<Field>, JiraError> {
        let fields: Vec<Field> = self.get_json(FIELDS_PATH)?;
        debug!(count = fields.len(), "fetched fields");
        Ok(fields)
    }

    fn list_projects(&self) -> Result<Vec<Project>, JiraError> {
        let projects: Vec<Project> = self.get_json(PROJECTS_PATH)?;
        debug!(count = projects.len(), "fetched projects");
        Ok(projects)
    }
}
