//! CLI command implementations.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use jfv_core::JfvConfig;
use jfv_core::config::JiraConfig;
use jfv_core::jira::{JiraHttpSource, JiraSource, SavedResponseSource};
use tracing::debug;

pub mod fields;
pub mod invoke;

/// Where field and project listings come from.
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// Jira site URL (overrides `jira.site_url`)
    #[arg(long, global = true, env = "JIRA_SITE_URL")]
    pub site: Option<String>,

    /// Account email for basic auth (overrides `jira.email`)
    #[arg(long, global = true, env = "JIRA_EMAIL")]
    pub email: Option<String>,

    /// Saved `GET /rest/api/3/field` response to use instead of a live site
    #[arg(long, global = true, requires = "projects_json")]
    pub fields_json: Option<PathBuf>,

    /// Saved `GET /rest/api/3/project` response to use instead of a live site
    #[arg(long, global = true, requires = "fields_json")]
    pub projects_json: Option<PathBuf>,
}

impl SourceArgs {
    /// Applies command-line overrides to the `[jira]` section.
    pub fn apply(&self, jira: &mut JiraConfig) {
        if let Some(site) = &self.site {
            jira.site_url = Some(site.clone());
        }
        if let Some(email) = &self.email {
            jira.email = Some(email.clone());
        }
    }
}

/// Builds the source selected by flags and configuration.
///
/// Saved response files take precedence over a configured site. They are
/// only read once the command fetches.
pub fn build_source(args: &SourceArgs, config: &JfvConfig) -> Result<Arc<dyn JiraSource>> {
    if let (Some(fields_path), Some(projects_path)) = (&args.fields_json, &args.projects_json) {
        debug!(
            fields = %fields_path.display(),
            projects = %projects_path.display(),
            "using saved responses"
        );
        return Ok(Arc::new(SavedResponseSource::new(fields_path, projects_path)));
    }

    let source = JiraHttpSource::from_config(&config.jira)
        .context("pass --site, set JIRA_SITE_URL, or set jira.site_url in the config file")?;
    Ok(Arc::new(source))
}

/// Reports a command failure on stdout (JSON) or stderr (text).
pub fn output_error(json_output: bool, code: &str, message: &str) {
    if json_output {
        let payload = serde_json::json!({
            "error": code,
            "message": message,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).unwrap_or_else(|_| "{}".to_string())
        );
    } else {
        eprintln!("Error: {message}");
    }
}
