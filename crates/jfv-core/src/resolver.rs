//! Named backend functions callable by the presentation layer.
//!
//! A [`Resolver`] maps function names to handlers returning JSON, the same
//! contract a plugin host's invoke bridge offers. The only function the
//! viewer needs is [`GET_ALL_FIELDS`].

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::enrich::{EnrichedField, enrich};
use crate::jira::{JiraError, JiraSource};

/// Name under which [`get_all_fields`] is registered.
pub const GET_ALL_FIELDS: &str = "getAllFields";

/// Errors returned by [`Resolver::invoke`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ResolverError {
    /// No function is registered under the requested name.
    #[error("no resolver function named `{0}`")]
    UnknownFunction(String),

    /// The handler failed while talking to Jira.
    #[error(transparent)]
    Jira(#[from] JiraError),

    /// The handler's result could not be encoded as JSON.
    #[error("failed to encode resolver result: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Fetches fields, then projects, and joins them.
///
/// Exactly two source calls are made. A failure in either is returned as
/// is; nothing is retried and no partial list is produced.
///
/// # Errors
///
/// Returns the first [`JiraError`] raised by the source.
pub fn get_all_fields<S: JiraSource + ?Sized>(
    source: &S,
) -> Result<Vec<EnrichedField>, JiraError> {
    let fields = source.list_fields().inspect_err(|error| {
        warn!(source = source.source_name(), %error, "field listing failed");
    })?;
    let projects = source.list_projects().inspect_err(|error| {
        warn!(source = source.source_name(), %error, "project listing failed");
    })?;

    let enriched = enrich(fields, &projects);
    info!(
        source = source.source_name(),
        fields = enriched.len(),
        projects = projects.len(),
        team_managed = enriched.iter().filter(|f| f.is_team_managed()).count(),
        "enriched field catalog"
    );
    Ok(enriched)
}

type Handler = Box<dyn Fn() -> Result<Value, ResolverError> + Send + Sync>;

/// Registry of invocable backend functions.
#[derive(Default)]
pub struct Resolver {
    handlers: BTreeMap<String, Handler>,
}

impl Resolver {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with [`GET_ALL_FIELDS`] bound to `source`.
    #[must_use]
    pub fn for_source(source: Arc<dyn JiraSource>) -> Self {
        let mut resolver = Self::new();
        resolver.define(GET_ALL_FIELDS, move || get_all_fields(&*source));
        resolver
    }

    /// Registers `handler` under `name`, replacing any previous handler.
    pub fn define<F, T>(&mut self, name: impl Into<String>, handler: F)
    where
        F: Fn() -> Result<T, JiraError> + Send + Sync + 'static,
        T: Serialize,
    {
        let handler: Handler = Box::new(move || Ok(serde_json::to_value(handler()?)?));
        self.handlers.insert(name.into(), handler);
    }

    /// Registered function names, sorted.
    pub fn definitions(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    /// Calls the function registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolverError::UnknownFunction`] for unregistered names and
    /// propagates handler failures.
    pub fn invoke(&self, name: &str) -> Result<Value, ResolverError> {
        let handler = self
            .handlers
            .get(name)
            .ok_or_else(|| ResolverError::UnknownFunction(name.to_string()))?;
        handler()
    }
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("definitions", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}
