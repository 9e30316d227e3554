//! Display rows for the "all fields" and "duplicate fields" tabs.
//!
//! Everything here is a pure function of the enriched list and the filter
//! text. Defaulting of absent attributes happens here and nowhere else.

use std::collections::HashMap;

use serde::Serialize;

use crate::collation::locale_compare;
use crate::enrich::EnrichedField;

/// Shown in the type column when a field has no `schema.type`.
pub const NO_TYPE_LABEL: &str = "N/A";

/// Shown in the project column for company-managed fields.
pub const COMPANY_MANAGED_LABEL: &str = "Company Managed Fields";

/// One rendered table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRow {
    /// 1-based position in the displayed sequence.
    pub row_number: usize,
    /// Underlying field id; the row's identity.
    pub id: String,
    pub name: String,
    pub key: String,
    #[serde(rename = "type")]
    pub field_type: String,
    pub project_name: String,
}

impl DisplayRow {
    fn from_field(row_number: usize, enriched: &EnrichedField) -> Self {
        let field = &enriched.field;
        Self {
            row_number,
            id: field.id.clone(),
            name: field.name_or_empty().to_string(),
            key: field.key.clone(),
            field_type: field.schema_type().unwrap_or(NO_TYPE_LABEL).to_string(),
            project_name: enriched
                .project_name
                .as_deref()
                .unwrap_or(COMPANY_MANAGED_LABEL)
                .to_string(),
        }
    }
}

/// Both tabs' rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldViews {
    /// Filtered fields, sorted by name.
    pub rows: Vec<DisplayRow>,
    /// Fields sharing a name with another field, sorted by name. Not
    /// affected by the filter.
    pub duplicate_rows: Vec<DisplayRow>,
}

/// Derives both tabs from the enriched list and the filter text.
#[must_use]
pub fn derive_views(enriched: &[EnrichedField], filter: &str) -> FieldViews {
    let needle = filter.to_lowercase();
    let visible: Vec<&EnrichedField> = enriched
        .iter()
        .filter(|field| matches_filter(field, &needle))
        .collect();

    FieldViews {
        rows: number_rows(sort_by_name(visible)),
        duplicate_rows: number_rows(sort_by_name(duplicated(enriched))),
    }
}

fn matches_filter(enriched: &EnrichedField, needle: &str) -> bool {
    enriched
        .field
        .name_or_empty()
        .to_lowercase()
        .contains(needle)
}

/// Fields whose exact name is carried by at least one other field.
/// Unnamed fields never count.
fn duplicated(enriched: &[EnrichedField]) -> Vec<&EnrichedField> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for name in enriched.iter().filter_map(|f| f.field.name.as_deref()) {
        *counts.entry(name).or_default() += 1;
    }
    enriched
        .iter()
        .filter(|f| {
            f.field
                .name
                .as_deref()
                .is_some_and(|name| counts.get(name).copied().unwrap_or_default() > 1)
        })
        .collect()
}

// `sort_by` is stable, so equal names keep their input order.
fn sort_by_name(mut fields: Vec<&EnrichedField>) -> Vec<&EnrichedField> {
    fields.sort_by(|a, b| locale_compare(a.field.name_or_empty(), b.field.name_or_empty()));
    fields
}

fn number_rows(fields: Vec<&EnrichedField>) -> Vec<DisplayRow> {
    fields
        .into_iter()
        .enumerate()
        .map(|(index, field)| DisplayRow::from_field(index + 1, field))
        .collect()
}
