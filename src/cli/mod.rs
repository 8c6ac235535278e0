//! Command line interface for bootstrapp.
//!
//! Parses and validates the flags, builds the configuration and runs the
//! pipeline. Errors carry their exit code (see [`crate::error`]).

mod args;
pub mod commands;
mod output;

pub use args::{Args, RuntimeConfig};
pub use output::OutputManager;

use crate::error::{CliError, EXIT_CONFIG, Result};
use clap::Parser;

/// Main CLI entry point
///
/// Returns the exit code for runs that end before the pipeline starts
/// (help, version, unparsable flags).
pub async fn run() -> Result<i32> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // help and version go to stdout and are not failures
            let code = if e.use_stderr() { EXIT_CONFIG } else { 0 };
            e.print()?;
            return Ok(code);
        }
    };

    init_logging(args.verbose);

    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    let runtime_config = RuntimeConfig::from(&args);
    let config = args
        .build_configuration()
        .await
        .map_err(CliError::Configuration)?;

    commands::execute(config, &runtime_config).await?;
    Ok(0)
}

/// Initializes `env_logger`; `RUST_LOG` wins over the defaults.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}
