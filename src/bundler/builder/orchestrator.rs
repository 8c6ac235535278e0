//! Pipeline orchestration.
//!
//! This module provides the [`Bootstrapper`] that sequences toolchain
//! resolution, descriptor rendering, the Maven build and the packaging stages.

use super::invoker;
use crate::bundler::{
    BuildConfiguration, Result,
    error::{Context, Error},
    platform,
    template::{self, RenderedDescriptor},
    toolchain::{self, ResolvedToolchain},
    utils::fs,
};
use std::path::PathBuf;

/// Pipeline orchestrator.
///
/// Runs every stage of one bootstrapping run in a fixed order and stops at
/// the first failure:
///
/// 1. Check the configuration of every requested stage
/// 2. Resolve the Maven and Java homes
/// 3. Prepare the project root
/// 4. Render `pom.xml`
/// 5. OS package launch script (Debian/RPM only)
/// 6. Maven build
/// 7. Start scripts
/// 8. Dockerfile
/// 9. Launch
///
/// Nothing is rolled back on failure.
///
/// # Examples
///
/// ```no_run
/// use bootstrapp::bundler::{Bootstrapper, BuildConfigurationBuilder};
///
/// # async fn example() -> bootstrapp::bundler::Result<()> {
/// let config = BuildConfigurationBuilder::new()
///     .project_root("./app")
///     .dependencies(vec!["org.apache.commons:commons-lang3:3.11".into()])
///     .main_class("org.example.Main")
///     .scripts(true)
///     .build()
///     .await?;
///
/// let report = Bootstrapper::new(config).run().await?;
/// for path in &report.artifacts {
///     println!("Created: {}", path.display());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Bootstrapper {
    config: BuildConfiguration,
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    /// The homes used for the build and the launch
    pub toolchain: ResolvedToolchain,
    /// The rendered descriptor
    pub descriptor: RenderedDescriptor,
    /// Files written by the packaging stages, in stage order
    pub artifacts: Vec<PathBuf>,
}

impl Bootstrapper {
    /// Creates a new orchestrator for `config`.
    pub fn new(config: BuildConfiguration) -> Self {
        Self { config }
    }

    /// Executes the whole pipeline.
    pub async fn run(&self) -> Result<PipelineReport> {
        let config = &self.config;

        platform::preflight(config)?;

        let toolchain = toolchain::resolve(config.toolchain())
            .await
            .context("failed to resolve toolchain")?;

        self.prepare_output().await?;
        let descriptor = self.render_descriptor().await?;

        let mut artifacts = Vec::new();

        // jdeb/rpm pick the script up during the build
        if config.os_packages() {
            artifacts.extend(platform::linux::generate(config).await?);
        }

        invoker::run(config, &toolchain, &descriptor.path).await?;

        if config.scripts() {
            artifacts.extend(platform::scripts::generate(config).await?);
        }

        if config.docker().is_some() {
            artifacts.extend(platform::docker::generate(config).await?);
        }

        if config.launch() {
            platform::launch::run(config, &toolchain).await?;
        }

        Ok(PipelineReport {
            toolchain,
            descriptor,
            artifacts,
        })
    }

    /// Creates the project root; an existing non-directory is an error.
    pub async fn prepare_output(&self) -> Result<()> {
        let root = self.config.project_root();
        if root.exists() && !root.is_dir() {
            return Err(Error::GenericError(format!(
                "output directory points to a file: {}",
                root.display()
            )));
        }
        fs::create_dir_all(root).await
    }

    /// Renders the configured template, or the bundled one, into `pom.xml`.
    pub async fn render_descriptor(&self) -> Result<RenderedDescriptor> {
        match self.config.pom_template() {
            Some(custom) => template::render_custom(custom, &self.config).await,
            None => template::render_bundled(&self.config).await,
        }
    }
}
