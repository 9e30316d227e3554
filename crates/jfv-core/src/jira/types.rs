//! Jira catalog data shapes.
//!
//! Only the attributes this crate reads are typed. Everything else Jira
//! sends is kept in `extra` so it survives a decode/encode cycle.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A field definition from `GET /rest/api/3/field`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Field identifier (`summary`, `customfield_10020`, ...).
    pub id: String,
    /// Display name. Jira omits it for a handful of internal fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Stable field key.
    #[serde(default)]
    pub key: String,
    /// Data type description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<FieldSchema>,
    /// Project scope; only present for team-managed fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<FieldScope>,
    /// Remaining attributes, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Field {
    /// Creates a company-managed field with no schema.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            key: id.clone(),
            id,
            name: Some(name.into()),
            schema: None,
            scope: None,
            extra: Map::new(),
        }
    }

    /// Sets the schema type.
    #[must_use]
    pub fn with_type(mut self, field_type: impl Into<String>) -> Self {
        self.schema = Some(FieldSchema {
            field_type: Some(field_type.into()),
            extra: Map::new(),
        });
        self
    }

    /// Scopes the field to a project, making it team-managed.
    #[must_use]
    pub fn with_project(mut self, project_id: impl Into<String>) -> Self {
        self.scope = Some(FieldScope {
            scope_type: Some("PROJECT".to_string()),
            project: Some(ScopeProject {
                id: Some(project_id.into()),
                extra: Map::new(),
            }),
            extra: Map::new(),
        });
        self
    }

    /// Name used for filtering and ordering; absent names read as `""`.
    #[must_use]
    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Returns `schema.type`, if any.
    #[must_use]
    pub fn schema_type(&self) -> Option<&str> {
        self.schema.as_ref()?.field_type.as_deref()
    }

    /// Returns `scope.project.id` for team-managed fields.
    ///
    /// An empty id is treated as no scope at all.
    #[must_use]
    pub fn scoped_project_id(&self) -> Option<&str> {
        self.scope
            .as_ref()?
            .project
            .as_ref()?
            .id
            .as_deref()
            .filter(|id| !id.is_empty())
    }
}

/// `schema` object of a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSchema {
    /// Data type tag (`string`, `array`, `user`, ...).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,
    /// Remaining attributes (`custom`, `customId`, `items`, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `scope` object of a team-managed field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldScope {
    /// Scope kind, `PROJECT` in practice.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub scope_type: Option<String>,
    /// Owning project reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<ScopeProject>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `scope.project` reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScopeProject {
    /// Project id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A project from `GET /rest/api/3/project`.
///
/// Attributes other than `id` and `name` are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Project id.
    pub id: String,
    /// Project display name.
    pub name: String,
}

impl Project {
    /// Creates a project.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
