//! Offline sources: in-memory lists and saved endpoint responses.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::debug;

use super::types::{Field, Project};
use super::{JiraError, JiraSource};

/// Source that serves a fixed field and project list.
#[derive(Debug, Clone, Default)]
pub struct StaticJiraSource {
    fields: Vec<Field>,
    projects: Vec<Project>,
}

impl StaticJiraSource {
    /// Creates a source from decoded lists.
    #[must_use]
    pub const fn new(fields: Vec<Field>, projects: Vec<Project>) -> Self {
        Self { fields, projects }
    }

    /// Decodes the two endpoint payloads.
    ///
    /// # Errors
    ///
    /// Returns [`JiraError::Parse`] when either payload is not a JSON array
    /// of the expected shape.
    pub fn from_json(fields_json: &str, projects_json: &str) -> Result<Self, JiraError> {
        Ok(Self {
            fields: serde_json::from_str(fields_json)?,
            projects: serde_json::from_str(projects_json)?,
        })
    }
}

impl JiraSource for StaticJiraSource {
    fn source_name(&self) -> &'static str {
        "static"
    }

    fn list_fields(&self) -> Result<Vec<Field>, JiraError> {
        Ok(self.fields.clone())
    }

    fn list_projects(&self) -> Result<Vec<Project>, JiraError> {
        Ok(self.projects.clone())
    }
}

/// Source that reads saved `GET /rest/api/3/field` and
/// `GET /rest/api/3/project` responses from disk.
///
/// Files are read and decoded on every listing call, so an unreadable or
/// malformed file fails the fetch the same way a bad HTTP response does.
#[derive(Debug, Clone)]
pub struct SavedResponseSource {
    fields_path: PathBuf,
    projects_path: PathBuf,
}

impl SavedResponseSource {
    /// Creates a source over the two response files.
    #[must_use]
    pub fn new(fields_path: impl Into<PathBuf>, projects_path: impl Into<PathBuf>) -> Self {
        Self {
            fields_path: fields_path.into(),
            projects_path: projects_path.into(),
        }
    }

    fn read<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, JiraError> {
        let content = std::fs::read_to_string(path).map_err(|error| {
            JiraError::Configuration(format!("cannot read {}: {error}", path.display()))
        })?;
        let items: Vec<T> = serde_json::from_str(&content)?;
        debug!(path = %path.display(), count = items.len(), "read saved response");
        Ok(items)
    }
}

impl JiraSource for SavedResponseSource {
    fn source_name(&self) -> &'static str {
        "saved"
    }

    fn list_fields(&self) -> Result<Vec<Field>, JiraError> {
        Self::read(&self.fields_path)
    }

    fn list_projects(&self) -> Result<Vec<Project>, JiraError> {
        Self::read(&self.projects_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_decodes_both_lists() {
        let source = StaticJiraSource::from_json(
            r#"[{"id": "summary", "key": "summary", "name": "Summary"}]"#,
            r#"[{"id": "10001", "name": "Alpha"}]"#,
        )
        .unwrap();
        assert_eq!(source.list_fields().unwrap().len(), 1);
        assert_eq!(
            source.list_projects().unwrap(),
            vec![Project::new("10001", "Alpha")]
        );
    }

    #[test]
    fn test_from_json_rejects_non_array_payload() {
        let error = StaticJiraSource::from_json(r#"{"errorMessages": []}"#, "[]").unwrap_err();
        assert!(matches!(error, JiraError::Parse(_)));

        let error = StaticJiraSource::from_json("[]", "not json").unwrap_err();
        assert!(matches!(error, JiraError::Parse(_)));
    }

    #[test]
    fn test_saved_responses() {
        let dir = tempfile::tempdir().unwrap();
        let fields_path = dir.path().join("fields.json");
        let projects_path = dir.path().join("projects.json");
        std::fs::write(
            &fields_path,
            r#"[{"id": "f1", "name": "Team", "scope": {"project": {"id": "1"}}}]"#,
        )
        .unwrap();
        std::fs::write(&projects_path, r#"[{"id": "1", "name": "One"}]"#).unwrap();

        let source = SavedResponseSource::new(&fields_path, &projects_path);
        let fields = source.list_fields().unwrap();
        assert_eq!(fields[0].scoped_project_id(), Some("1"));
        assert_eq!(source.list_projects().unwrap(), vec![Project::new("1", "One")]);
    }

    #[test]
    fn test_saved_responses_are_read_per_call() {
        let dir = tempfile::tempdir().unwrap();
        let fields_path = dir.path().join("fields.json");
        let source = SavedResponseSource::new(&fields_path, dir.path().join("projects.json"));

        let error = source.list_fields().unwrap_err();
        assert!(matches!(error, JiraError::Configuration(_)));

        std::fs::write(&fields_path, r#"[{"id": "f1"}]"#).unwrap();
        assert_eq!(source.list_fields().unwrap().len(), 1);
    }

    #[test]
    fn test_malformed_saved_response_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let fields_path = dir.path().join("fields.json");
        std::fs::write(&fields_path, "not json").unwrap();

        let source = SavedResponseSource::new(&fields_path, &fields_path);
        let error = source.list_fields().unwrap_err();
        assert!(matches!(error, JiraError::Parse(_)), "got {error:?}");
    }
}
