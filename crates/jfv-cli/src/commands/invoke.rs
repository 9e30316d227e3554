//! `jfv invoke`: call a resolver function and print its JSON result.

use std::sync::Arc;

use clap::Args;
use jfv_core::{GET_ALL_FIELDS, JiraSource, Resolver, ResolverError};

use crate::exit_codes::codes as exit_codes;

/// Arguments for `jfv invoke`.
#[derive(Debug, Args)]
pub struct InvokeArgs {
    /// Function name
    #[arg(default_value = GET_ALL_FIELDS)]
    pub name: String,

    /// List registered function names instead of calling one
    #[arg(long)]
    pub list: bool,
}

pub fn run_invoke(source: Arc<dyn JiraSource>, args: &InvokeArgs) -> u8 {
    let resolver = Resolver::for_source(source);

    if args.list {
        for name in resolver.definitions() {
            println!("{name}");
        }
        return exit_codes::SUCCESS;
    }

    match resolver.invoke(&args.name) {
        Ok(value) => {
            println!(
                "{}",
                serde_json::to_string_pretty(&value).unwrap_or_else(|_| "null".to_string())
            );
            exit_codes::SUCCESS
        },
        Err(error) => {
            let code = match error {
                ResolverError::UnknownFunction(_) => "unknown_function",
                _ => "invoke_failed",
            };
            super::output_error(true, code, &error.to_string());
            exit_codes::GENERIC_ERROR
        },
    }
}
