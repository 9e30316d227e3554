//! jfv - Jira Fields Viewer
//!
//! Lists every field configured in a Jira instance, shows which project owns
//! each team-managed field, and points out field names used more than once.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jfv_core::{JfvConfig, JiraSource};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;
mod exit_codes;

/// jfv - Jira Fields Viewer
#[derive(Parser, Debug)]
#[command(name = "jfv")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, default_value = "jfv.toml")]
    config: PathBuf,

    #[command(flatten)]
    source: commands::SourceArgs,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show all fields and the fields sharing a name
    #[command(alias = "ls")]
    Fields(commands::fields::FieldsArgs),

    /// Call a backend function and print its JSON result
    Invoke(commands::invoke::InvokeArgs),
}

impl Commands {
    /// Whether failures should be reported as JSON on stdout.
    const fn json_output(&self) -> bool {
        match self {
            Self::Fields(args) => args.json,
            Self::Invoke(_) => true,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries tables and JSON.
    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let (config, source) = match prepare(&cli) {
        Ok(prepared) => prepared,
        Err(error) => {
            commands::output_error(
                cli.command.json_output(),
                "setup_failed",
                &format!("{error:#}"),
            );
            std::process::exit(i32::from(exit_codes::codes::GENERIC_ERROR));
        },
    };

    let exit_code = match cli.command {
        Commands::Fields(args) => commands::fields::run_fields(&*source, &config.view, &args),
        Commands::Invoke(args) => commands::invoke::run_invoke(source, &args),
    };
    std::process::exit(i32::from(exit_code));
}

/// Loads configuration, applies command-line overrides and builds the
/// Jira source.
fn prepare(cli: &Cli) -> Result<(JfvConfig, Arc<dyn JiraSource>)> {
    let mut config = JfvConfig::load_or_default(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;
    cli.source.apply(&mut config.jira);
    config
        .validate()
        .context("invalid configuration after applying command-line overrides")?;

    let source = commands::build_source(&cli.source, &config)?;
    Ok((config, source))
}
