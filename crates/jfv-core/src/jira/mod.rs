//! Read-only access to a Jira instance's field and project catalogs.

use thiserror::Error;

pub mod http;
pub mod offline;
pub mod types;

pub use http::{JiraCredentials, JiraHttpSource};
pub use offline::{SavedResponseSource, StaticJiraSource};
pub use types::{Field, FieldSchema, FieldScope, Project, ScopeProject};

/// REST path listing every field visible to the caller.
pub const FIELDS_PATH: &str = "/rest/api/3/field";

/// REST path listing every project visible to the caller.
pub const PROJECTS_PATH: &str = "/rest/api/3/project";

/// Errors emitted by Jira sources.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum JiraError {
    /// Invalid source configuration.
    #[error("jira configuration error: {0}")]
    Configuration(String),

    /// Request transport failed.
    #[error("jira transport error: {0}")]
    Transport(String),

    /// API request failed with a structured status code.
    #[error("jira API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by Jira.
        status: u16,
        /// Error body/message.
        message: String,
    },

    /// API payload parse failed.
    #[error("jira parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for JiraError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value.to_string())
    }
}

impl From<serde_json::Error> for JiraError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value.to_string())
    }
}

/// A catalog of Jira fields and projects.
///
/// Implementations perform no caching: every call reaches the underlying
/// store.
pub trait JiraSource: Send + Sync {
    /// Returns the source name for logging.
    fn source_name(&self) -> &'static str;

    /// Lists every field definition.
    ///
    /// # Errors
    ///
    /// Returns an error when the catalog cannot be read or decoded.
    fn list_fields(&self) -> Result<Vec<Field>, JiraError>;

    /// Lists every project.
    ///
    /// # Errors
    ///
    /// Returns an error when the catalog cannot be read or decoded.
    fn list_projects(&self) -> Result<Vec<Project>, JiraError>;
}
