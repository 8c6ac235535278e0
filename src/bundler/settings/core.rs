//! Core BuildConfiguration struct and implementations.

use super::{DebianSettings, DockerSettings, PackageSettings, RpmSettings, ToolchainSettings};
use std::path::{Path, PathBuf};

/// Immutable configuration for one pipeline run.
///
/// Constructed via [`BuildConfigurationBuilder`](super::BuildConfigurationBuilder),
/// which reads coordinate files, expands jar directories and absolutizes the
/// output location. No stage mutates it.
///
/// # See Also
///
/// - [`PackageSettings`] - Name and version
/// - [`ToolchainSettings`] - Maven/Java overrides
#[derive(Clone, Debug)]
pub struct BuildConfiguration {
    pub(super) package: PackageSettings,
    pub(super) toolchain: ToolchainSettings,

    /// Absolute project root; receives `pom.xml`.
    pub(super) project_root: PathBuf,

    /// Whether build output goes into the root instead of `<root>/output`.
    pub(super) compress_output: bool,

    pub(super) dependencies: Vec<String>,
    pub(super) exclusions: Vec<String>,
    pub(super) repositories: Vec<String>,
    pub(super) external_jars: Vec<PathBuf>,
    pub(super) external_sources: Vec<PathBuf>,

    /// Alternative descriptor template; None uses the bundled one.
    pub(super) pom_template: Option<PathBuf>,

    pub(super) main_class: Option<String>,
    pub(super) jvm_args: Vec<String>,

    pub(super) sources: bool,
    pub(super) single_jar: bool,
    pub(super) clean: bool,
    pub(super) scripts: bool,
    pub(super) launch: bool,

    pub(super) debian: Option<DebianSettings>,
    pub(super) rpm: Option<RpmSettings>,
    pub(super) docker: Option<DockerSettings>,
}

impl BuildConfiguration {
    /// Returns the project name.
    pub fn name(&self) -> &str {
        &self.package.name
    }

    /// Returns the project version.
    pub fn version(&self) -> &str {
        &self.package.version
    }

    /// Returns the project root directory.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Returns the directory Maven copies the application into.
    ///
    /// `<root>/output`, or the root itself with the compressed layout.
    pub fn build_output(&self) -> PathBuf {
        if self.compress_output {
            self.project_root.clone()
        } else {
            self.project_root.join("output")
        }
    }

    /// Returns the directory holding the dependency jars.
    pub fn lib_dir(&self) -> PathBuf {
        self.build_output().join("lib")
    }

    /// Returns the directory holding the source jars.
    pub fn src_dir(&self) -> PathBuf {
        self.build_output().join("src")
    }

    /// Returns the toolchain overrides.
    pub fn toolchain(&self) -> &ToolchainSettings {
        &self.toolchain
    }

    /// Returns the raw `group:artifact:version` coordinates.
    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    /// Returns the raw `group:artifact` exclusions.
    pub fn exclusions(&self) -> &[String] {
        &self.exclusions
    }

    /// Returns the raw `id;name;url` repositories.
    pub fn repositories(&self) -> &[String] {
        &self.repositories
    }

    /// Returns the external jar files.
    pub fn external_jars(&self) -> &[PathBuf] {
        &self.external_jars
    }

    /// Returns the external source jar files.
    pub fn external_sources(&self) -> &[PathBuf] {
        &self.external_sources
    }

    /// Returns the user-supplied descriptor template, if any.
    pub fn pom_template(&self) -> Option<&Path> {
        self.pom_template.as_deref()
    }

    /// Returns the main class, if any.
    pub fn main_class(&self) -> Option<&str> {
        self.main_class.as_deref()
    }

    /// Returns the JVM arguments used by scripts and the launch stage.
    pub fn jvm_args(&self) -> &[String] {
        &self.jvm_args
    }

    /// Whether source jars are skipped.
    pub fn skip_sources(&self) -> bool {
        !self.sources
    }

    /// Whether the single (spring-boot) jar is skipped.
    pub fn skip_single_jar(&self) -> bool {
        !self.single_jar
    }

    /// Whether `clean` precedes `package`.
    pub fn clean(&self) -> bool {
        self.clean
    }

    /// Whether start scripts are generated.
    pub fn scripts(&self) -> bool {
        self.scripts
    }

    /// Whether the main class is launched after the build.
    pub fn launch(&self) -> bool {
        self.launch
    }

    /// Returns the Debian settings when a .deb was requested.
    pub fn debian(&self) -> Option<&DebianSettings> {
        self.debian.as_ref()
    }

    /// Returns the RPM settings when a .rpm was requested.
    pub fn rpm(&self) -> Option<&RpmSettings> {
        self.rpm.as_ref()
    }

    /// Returns the Dockerfile settings when generation was requested.
    pub fn docker(&self) -> Option<&DockerSettings> {
        self.docker.as_ref()
    }

    /// Whether any OS package was requested.
    pub fn os_packages(&self) -> bool {
        self.debian.is_some() || self.rpm.is_some()
    }
}
