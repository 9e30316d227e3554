//! Field-project enrichment.
//!
//! Joins each team-managed field to the display name of its owning
//! project. Company-managed fields get no project name.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::jira::{Field, Project};

/// Project name given to a scoped field whose project was not returned.
pub const UNKNOWN_PROJECT: &str = "Unknown Project";

/// A field plus its resolved project name.
///
/// Serializes as the field's own attributes with `projectName` added;
/// `projectName` is written as `null` for company-managed fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedField {
    #[serde(flatten)]
    pub field: Field,
    #[serde(rename = "projectName")]
    pub project_name: Option<String>,
}

impl EnrichedField {
    /// Whether the field is scoped to a project.
    #[must_use]
    pub fn is_team_managed(&self) -> bool {
        self.field.scoped_project_id().is_some()
    }
}

/// Builds the project id to name lookup. The first project with a given
/// id wins.
#[must_use]
pub fn project_names(projects: &[Project]) -> HashMap<&str, &str> {
    let mut names = HashMap::with_capacity(projects.len());
    for project in projects {
        names
            .entry(project.id.as_str())
            .or_insert(project.name.as_str());
    }
    names
}

/// Attaches project names to `fields`, preserving their order.
#[must_use]
pub fn enrich(fields: Vec<Field>, projects: &[Project]) -> Vec<EnrichedField> {
    let names = project_names(projects);
    fields
        .into_iter()
        .map(|field| {
            let project_name = field.scoped_project_id().map(|project_id| {
                names
                    .get(project_id)
                    .copied()
                    .unwrap_or(UNKNOWN_PROJECT)
                    .to_string()
            });
            EnrichedField {
                field,
                project_name,
            }
        })
        .collect()
}
