//! Toolchain locations.

use std::path::PathBuf;

/// Maven version provisioned when no Maven home is configured.
pub const MAVEN_VERSION: &str = "3.6.3";

/// Where an auto-provisioned Maven installation comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToolchainSource {
    /// Download the binary zip from a URL.
    Download {
        /// Archive URL
        url: String,
    },
    /// Extract a zip that ships alongside the application.
    Archive(PathBuf),
}

impl Default for ToolchainSource {
    fn default() -> Self {
        Self::Download {
            url: format!(
                "https://archive.apache.org/dist/maven/maven-3/{v}/binaries/apache-maven-{v}-bin.zip",
                v = MAVEN_VERSION
            ),
        }
    }
}

/// Toolchain overrides.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToolchainSettings {
    /// Explicit Maven home; skips provisioning.
    pub maven_home: Option<PathBuf>,

    /// Explicit Java home; defaults to the Java found in the environment.
    pub java_home: Option<PathBuf>,

    /// Root of the toolchain cache (`BOOTSTRAPP_HOME`).
    ///
    /// Default: `<data-local-dir>/bootstrapp`
    pub cache_root: Option<PathBuf>,

    /// How to obtain Maven when it is not cached yet.
    pub source: ToolchainSource,

    /// Custom Maven `settings.xml` passed to the build.
    pub user_settings: Option<PathBuf>,
}
