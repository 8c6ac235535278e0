//! Error types for the bootstrapping pipeline.
//!
//! Every stage returns [`Result`]; the first failure stops the pipeline and its
//! `Display` output is the message reported to the user.

use std::{
    fmt::Display,
    io,
    path::{Path, PathBuf},
};

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the pipeline stages.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Free-form failure message.
    #[error("{0}")]
    GenericError(String),

    /// Plain I/O failure without path information.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// I/O failure on a specific path.
    #[error("{action} '{}': {source}", .path.display())]
    Fs {
        /// What was being attempted
        action: String,
        /// The path involved
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// A message wrapping a lower-level error.
    #[error("{context}: {source}")]
    Context {
        /// Added context
        context: String,
        /// Wrapped error
        source: Box<Error>,
    },

    /// A stage that launches the application was requested without a main class.
    #[error("no main class configured, required for {stage}")]
    MissingMainClass {
        /// Name of the stage that needed it
        stage: &'static str,
    },

    /// Container descriptor generation was requested without a base image.
    #[error("no base image configured for the Dockerfile")]
    MissingBaseImage,

    /// A toolchain home directory does not exist.
    #[error("{kind} home does not exist: {}", .path.display())]
    HomeNotFound {
        /// "Maven" or "Java"
        kind: &'static str,
        /// The offending path
        path: PathBuf,
    },

    /// A toolchain home exists but is not a directory.
    #[error("{kind} home is not a directory: {}", .path.display())]
    HomeNotDirectory {
        /// "Maven" or "Java"
        kind: &'static str,
        /// The offending path
        path: PathBuf,
    },

    /// The external build returned a non-zero exit status.
    #[error("failed to bootstrap the application ({command}): exit code {}", exit_code_str(.code))]
    BuildFailed {
        /// The command line that was executed
        command: String,
        /// Exit code, `None` when terminated by a signal
        code: Option<i32>,
    },

    /// The launched application returned a non-zero exit status.
    #[error("failed to launch class ({command}): exit code {}", exit_code_str(.code))]
    LaunchFailed {
        /// The command line that was executed
        command: String,
        /// Exit code, `None` when terminated by a signal
        code: Option<i32>,
    },

    /// One or more archive entries could not be extracted.
    #[error("failed to extract '{}': {}", .archive.display(), .errors.join("; "))]
    Extraction {
        /// The archive being extracted
        archive: PathBuf,
        /// Per-entry error messages
        errors: Vec<String>,
    },

    /// Toolchain download failure.
    #[error("download of {url} failed: {reason}")]
    Download {
        /// Requested URL
        url: String,
        /// Reason reported by the HTTP client
        reason: String,
    },

    /// Handlebars rendering failure for generated snippets and scripts.
    #[error("failed to render {name}: {source}")]
    Render {
        /// Template name
        name: &'static str,
        /// Underlying error
        source: handlebars::RenderError,
    },
}

fn exit_code_str(code: &Option<i32>) -> String {
    code.map_or_else(|| "terminated by signal".to_string(), |c| c.to_string())
}

/// Attach a context message to an error or a missing value.
pub trait Context<T> {
    /// Wraps the failure with `msg`.
    fn context<C: Display>(self, msg: C) -> Result<T>;
}

impl<T> Context<T> for Result<T> {
    fn context<C: Display>(self, msg: C) -> Result<T> {
        self.map_err(|e| Error::Context {
            context: msg.to_string(),
            source: Box::new(e),
        })
    }
}

impl<T> Context<T> for Option<T> {
    fn context<C: Display>(self, msg: C) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(msg.to_string()))
    }
}

/// Attach path information to I/O failures.
pub trait ErrorExt<T> {
    /// Converts an I/O error into [`Error::Fs`] naming `action` and `path`.
    fn fs_context(self, action: &str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, action: &str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|source| Error::Fs {
            action: action.to_string(),
            path: path.as_ref().to_path_buf(),
            source,
        })
    }
}

/// Returns early with an [`Error::GenericError`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::bundler::Error::GenericError(format!($($arg)*)))
    };
}
