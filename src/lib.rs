//! Bootstraps Java applications from Maven dependency coordinates.
//!
//! This library renders a `pom.xml` from a template, runs Maven to download
//! and copy the jars, and generates:
//! - start scripts (`bin/start.sh`, `bin/start.bat`)
//! - Debian and RPM package inputs
//! - a `Dockerfile`
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;

// Re-export commonly used types
pub use error::{BootstrappError, CliError, Result};
