//! Builder for constructing BuildConfiguration.

use super::{
    BuildConfiguration, DebianSettings, DockerSettings, PackageSettings, RpmSettings,
    ToolchainSettings, coordinates::read_list_file,
};
use crate::bundler::error::{Context, Error, ErrorExt, Result};
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Builder for constructing [`BuildConfiguration`].
///
/// Inline coordinates and coordinate files may be mixed; file entries are
/// appended after the inline ones.
///
/// # Examples
///
/// ```no_run
/// use bootstrapp::bundler::{BuildConfigurationBuilder, PackageSettings};
///
/// # async fn example() -> bootstrapp::bundler::Result<()> {
/// let config = BuildConfigurationBuilder::new()
///     .project_root("./weka")
///     .package_settings(PackageSettings {
///         name: "weka".into(),
///         version: "3.9.4".into(),
///     })
///     .dependencies(vec!["nz.ac.waikato.cms.weka:weka-stable:3.8.4".into()])
///     .main_class("weka.gui.GUIChooser")
///     .build()
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct BuildConfigurationBuilder {
    project_root: Option<PathBuf>,
    package: PackageSettings,
    toolchain: ToolchainSettings,
    compress_output: bool,
    dependencies: Vec<String>,
    dependency_files: Vec<PathBuf>,
    exclusions: Vec<String>,
    exclusion_files: Vec<PathBuf>,
    repositories: Vec<String>,
    repository_files: Vec<PathBuf>,
    external_jars: Vec<PathBuf>,
    external_sources: Vec<PathBuf>,
    pom_template: Option<PathBuf>,
    main_class: Option<String>,
    jvm_args: Vec<String>,
    sources: bool,
    single_jar: bool,
    clean: bool,
    scripts: bool,
    launch: bool,
    debian: Option<DebianSettings>,
    rpm: Option<RpmSettings>,
    docker: Option<DockerSettings>,
}

impl BuildConfigurationBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the project root directory.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn project_root<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.project_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets name and version.
    ///
    /// Default: `bootstrapp` / `0.0.1`
    pub fn package_settings(mut self, package: PackageSettings) -> Self {
        self.package = package;
        self
    }

    /// Sets the toolchain overrides.
    pub fn toolchain(mut self, toolchain: ToolchainSettings) -> Self {
        self.toolchain = toolchain;
        self
    }

    /// Places build output directly in the project root.
    pub fn compress_output(mut self, compress: bool) -> Self {
        self.compress_output = compress;
        self
    }

    /// Sets inline `group:artifact:version` coordinates.
    pub fn dependencies(mut self, dependencies: Vec<String>) -> Self {
        self.dependencies = dependencies;
        self
    }

    /// Adds files with one coordinate per line.
    pub fn dependency_files(mut self, files: Vec<PathBuf>) -> Self {
        self.dependency_files = files;
        self
    }

    /// Sets inline `group:artifact` exclusions.
    pub fn exclusions(mut self, exclusions: Vec<String>) -> Self {
        self.exclusions = exclusions;
        self
    }

    /// Adds files with one exclusion per line.
    pub fn exclusion_files(mut self, files: Vec<PathBuf>) -> Self {
        self.exclusion_files = files;
        self
    }

    /// Sets inline `id;name;url` repositories.
    pub fn repositories(mut self, repositories: Vec<String>) -> Self {
        self.repositories = repositories;
        self
    }

    /// Adds files with one repository per line.
    pub fn repository_files(mut self, files: Vec<PathBuf>) -> Self {
        self.repository_files = files;
        self
    }

    /// Sets external jars; directories contribute every `*.jar` they contain.
    pub fn external_jars(mut self, paths: Vec<PathBuf>) -> Self {
        self.external_jars = paths;
        self
    }

    /// Sets external source jars; directories are expanded like jars.
    pub fn external_sources(mut self, paths: Vec<PathBuf>) -> Self {
        self.external_sources = paths;
        self
    }

    /// Sets an alternative descriptor template.
    pub fn pom_template<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.pom_template = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the main class.
    pub fn main_class(mut self, main_class: impl Into<String>) -> Self {
        self.main_class = Some(main_class.into());
        self
    }

    /// Sets JVM arguments.
    pub fn jvm_args(mut self, args: Vec<String>) -> Self {
        self.jvm_args = args;
        self
    }

    /// Downloads source jars as well.
    pub fn sources(mut self, enabled: bool) -> Self {
        self.sources = enabled;
        self
    }

    /// Produces a single executable jar.
    pub fn single_jar(mut self, enabled: bool) -> Self {
        self.single_jar = enabled;
        self
    }

    /// Runs `clean` before `package`.
    pub fn clean(mut self, enabled: bool) -> Self {
        self.clean = enabled;
        self
    }

    /// Generates start scripts.
    pub fn scripts(mut self, enabled: bool) -> Self {
        self.scripts = enabled;
        self
    }

    /// Launches the main class after the build.
    pub fn launch(mut self, enabled: bool) -> Self {
        self.launch = enabled;
        self
    }

    /// Requests a Debian package.
    pub fn debian(mut self, settings: DebianSettings) -> Self {
        self.debian = Some(settings);
        self
    }

    /// Requests an RPM package.
    pub fn rpm(mut self, settings: RpmSettings) -> Self {
        self.rpm = Some(settings);
        self
    }

    /// Requests a Dockerfile.
    pub fn docker(mut self, settings: DockerSettings) -> Self {
        self.docker = Some(settings);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// - `project_root` missing or not absolutizable
    /// - a coordinate file cannot be read
    /// - an external jar path does not exist
    pub async fn build(self) -> Result<BuildConfiguration> {
        let project_root = self
            .project_root
            .context("project_root is required")?
            .absolutize()
            .fs_context("resolving output directory", ".")?
            .into_owned();

        if self.package.name.trim().is_empty() {
            return Err(Error::GenericError("project name must not be empty".into()));
        }

        let mut dependencies = self.dependencies;
        for file in &self.dependency_files {
            dependencies.extend(read_list_file(file, ':').await?);
        }
        let mut exclusions = self.exclusions;
        for file in &self.exclusion_files {
            exclusions.extend(read_list_file(file, ':').await?);
        }
        let mut repositories = self.repositories;
        for file in &self.repository_files {
            repositories.extend(read_list_file(file, ';').await?);
        }

        let external_jars = expand_jars(self.external_jars).await?;
        let external_sources = expand_jars(self.external_sources).await?;

        Ok(BuildConfiguration {
            package: self.package,
            toolchain: self.toolchain,
            project_root,
            compress_output: self.compress_output,
            dependencies,
            exclusions,
            repositories,
            external_jars,
            external_sources,
            pom_template: self.pom_template,
            main_class: self.main_class,
            jvm_args: self.jvm_args,
            sources: self.sources,
            single_jar: self.single_jar,
            clean: self.clean,
            scripts: self.scripts,
            launch: self.launch,
            debian: self.debian,
            rpm: self.rpm,
            docker: self.docker,
        })
    }
}

/// Resolves jar references to absolute file paths.
///
/// Files are kept as-is; directories are replaced by the `*.jar` files directly
/// inside them, in name order.
async fn expand_jars(paths: Vec<PathBuf>) -> Result<Vec<PathBuf>> {
    tokio::task::spawn_blocking(move || {
        let mut result = Vec::new();
        for path in paths {
            let path = path
                .absolutize()
                .fs_context("resolving jar path", &path)?
                .into_owned();
            if path.is_file() {
                result.push(path);
            } else if path.is_dir() {
                let mut jars: Vec<PathBuf> = walkdir::WalkDir::new(&path)
                    .min_depth(1)
                    .max_depth(1)
                    .into_iter()
                    .filter_map(|e| e.ok())
                    .filter(|e| e.file_type().is_file())
                    .map(|e| e.into_path())
                    .filter(|p| p.extension().is_some_and(|ext| ext == "jar"))
                    .collect();
                jars.sort();
                log::debug!("{} jar(s) found in {}", jars.len(), path.display());
                result.extend(jars);
            } else {
                return Err(Error::GenericError(format!(
                    "external jar does not exist: {}",
                    path.display()
                )));
            }
        }
        Ok(result)
    })
    .await
    .map_err(|e| Error::GenericError(format!("jar expansion task panicked: {}", e)))?
}
