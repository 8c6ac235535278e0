//! Configuration structures for a bootstrapping run.
//!
//! This module provides the immutable [`BuildConfiguration`], its builder,
//! coordinate parsing and the per-packaging-kind settings.

mod builder;
pub mod coordinates;
mod core;
mod docker;
mod linux;
mod package;
mod toolchain;

// Re-export all public types
pub use builder::BuildConfigurationBuilder;
pub use coordinates::{Dependency, Exclusion, Repository};
pub use core::BuildConfiguration;
pub use docker::DockerSettings;
pub use linux::{DebianSettings, RpmSettings};
pub use package::PackageSettings;
pub use toolchain::{MAVEN_VERSION, ToolchainSettings, ToolchainSource};
