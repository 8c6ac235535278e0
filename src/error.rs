//! Error types for the command line front end.
//!
//! Argument problems and pipeline failures map to different exit codes.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, BootstrappError>;

/// Exit code for invalid arguments or configuration.
pub const EXIT_CONFIG: i32 = 1;

/// Exit code for a failed pipeline stage.
pub const EXIT_PIPELINE: i32 = 2;

/// Top-level error returned by [`crate::cli::run`].
#[derive(Error, Debug)]
pub enum BootstrappError {
    /// CLI argument errors
    #[error("{0}")]
    Cli(#[from] CliError),

    /// Pipeline errors
    #[error("{0}")]
    Bundler(#[from] crate::bundler::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BootstrappError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            BootstrappError::Cli(_) => EXIT_CONFIG,
            BootstrappError::Bundler(_) | BootstrappError::Io(_) => EXIT_PIPELINE,
        }
    }
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// The arguments could not be turned into a configuration
    #[error("Invalid configuration: {0}")]
    Configuration(crate::bundler::Error),
}
