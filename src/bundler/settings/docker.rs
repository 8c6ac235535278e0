//! Container image settings.

use std::path::PathBuf;

/// Dockerfile generation settings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DockerSettings {
    /// Image for the `FROM` directive, e.g. `openjdk:11-jdk-slim-buster`.
    ///
    /// Required; generation fails without it.
    pub base_image: Option<String>,

    /// File whose contents are copied verbatim after the `FROM` directive.
    pub instructions: Option<PathBuf>,
}
