//! Viewer page state.
//!
//! A [`FieldsPage`] is an immutable snapshot. Every transition returns a
//! new snapshot and the displayed rows are always derived from the current
//! one, never patched in place.
//!
//! ```text
//! Idle --begin_load--> Loading --finish_load(Ok)--> Loaded
//!                              \--finish_load(Err)-> Failed
//! Loaded | Failed --reload--> Loading
//! ```

use std::sync::Arc;

use crate::enrich::EnrichedField;
use crate::jira::JiraError;
use crate::view::{FieldViews, derive_views};

/// Where the one-shot fetch stands.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// Fetch in flight; no partial data is shown.
    Loading,
    /// Fetch succeeded. May be empty.
    Loaded(Arc<[EnrichedField]>),
    /// Fetch failed; carries the rendered error.
    Failed(String),
}

/// One snapshot of the viewer page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldsPage {
    load: LoadState,
    filter: String,
}

impl FieldsPage {
    /// Creates an idle page with an empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current load state.
    #[must_use]
    pub const fn load_state(&self) -> &LoadState {
        &self.load
    }

    /// Current filter text.
    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Whether the table should show its loading indicator.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::Loading)
    }

    /// Error message of a failed load.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.load {
            LoadState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Loaded fields; empty unless the load succeeded.
    #[must_use]
    pub fn fields(&self) -> &[EnrichedField] {
        match &self.load {
            LoadState::Loaded(fields) => fields.as_ref(),
            _ => &[],
        }
    }

    /// Replaces the filter text.
    #[must_use]
    pub fn with_filter(&self, filter: impl Into<String>) -> Self {
        Self {
            load: self.load.clone(),
            filter: filter.into(),
        }
    }

    /// `Idle -> Loading`. Any other state is returned unchanged.
    #[must_use]
    pub fn begin_load(&self) -> Self {
        match self.load {
            LoadState::Idle => self.with_load(LoadState::Loading),
            _ => self.clone(),
        }
    }

    /// `Loading -> Loaded | Failed`. Results arriving in any other state are
    /// dropped.
    #[must_use]
    pub fn finish_load(&self, result: Result<Vec<EnrichedField>, JiraError>) -> Self {
        if !self.is_loading() {
            return self.clone();
        }
        match result {
            Ok(fields) => self.with_load(LoadState::Loaded(fields.into())),
            Err(error) => self.with_load(LoadState::Failed(error.to_string())),
        }
    }

    /// `Loaded | Failed -> Loading`, keeping the filter.
    #[must_use]
    pub fn reload(&self) -> Self {
        match self.load {
            LoadState::Loaded(_) | LoadState::Failed(_) => self.with_load(LoadState::Loading),
            _ => self.clone(),
        }
    }

    /// Derives both tabs from this snapshot.
    #[must_use]
    pub fn views(&self) -> FieldViews {
        derive_views(self.fields(), &self.filter)
    }

    fn with_load(&self, load: LoadState) -> Self {
        Self {
            load,
            filter: self.filter.clone(),
        }
    }
}
