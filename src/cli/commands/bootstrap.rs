//! Runs the bootstrapping pipeline and reports its outcome.

use crate::bundler::{Bootstrapper, BuildConfiguration};
use crate::cli::RuntimeConfig;
use crate::error::Result;

/// Runs the pipeline for `config`, printing what it produced.
pub async fn execute(config: BuildConfiguration, runtime_config: &RuntimeConfig) -> Result<()> {
    runtime_config.section(&format!(
        "Bootstrapping {} {}",
        config.name(),
        config.version()
    ))?;
    runtime_config.verbose_println(&format!(
        "   Output directory: {}",
        config.project_root().display()
    ))?;
    runtime_config.verbose_println(&format!(
        "   Dependencies: {}, exclusions: {}, repositories: {}",
        config.dependencies().len(),
        config.exclusions().len(),
        config.repositories().len()
    ))?;

    let bootstrapper = Bootstrapper::new(config);
    let report = bootstrapper.run().await?;

    runtime_config.success(&format!(
        "Build descriptor: {}",
        report.descriptor.path.display()
    ))?;
    if !report.descriptor.modified {
        runtime_config.warn("the pom.xml template contained no known placeholders")?;
    }
    runtime_config.progress(&format!(
        "Application in {}",
        report.descriptor.output_dir.display()
    ))?;
    for artifact in &report.artifacts {
        runtime_config.indent(&artifact.display().to_string())?;
    }

    Ok(())
}
