//! Packaging stages that run around the external build.
//!
//! - [`scripts`] - `bin/start.sh` and `bin/start.bat` in the build output
//! - [`linux`] - launch script and control file for Debian/RPM packages
//! - [`docker`] - container launch script and `Dockerfile`
//! - [`launch`] - runs the main class once the build succeeded
//!
//! Every stage that needs a main class checks for it before writing anything.
//! [`preflight`] runs the same checks for all requested stages up front.

pub mod docker;
pub mod launch;
pub mod linux;
pub mod scripts;

use crate::bundler::{
    error::{Error, Result},
    settings::BuildConfiguration,
    template::snippets::SnippetData,
};

/// Returns the main class or fails with [`Error::MissingMainClass`] naming `stage`.
pub fn require_main_class<'a>(
    config: &'a BuildConfiguration,
    stage: &'static str,
) -> Result<&'a str> {
    config
        .main_class()
        .ok_or(Error::MissingMainClass { stage })
}

/// Checks the configuration of every requested stage before anything runs.
///
/// Each stage repeats its own check; this lets the pipeline fail before the
/// build instead of after it.
pub fn preflight(config: &BuildConfiguration) -> Result<()> {
    if config.os_packages() {
        require_main_class(config, linux::STAGE)?;
    }
    if config.scripts() {
        require_main_class(config, scripts::STAGE)?;
    }
    if config.docker().is_some() {
        require_main_class(config, docker::STAGE)?;
        docker::require_base_image(config)?;
    }
    if config.launch() {
        require_main_class(config, launch::STAGE)?;
    }
    Ok(())
}

/// Template data shared by every generated launch script.
fn launch_data(config: &BuildConfiguration, main_class: &str) -> SnippetData {
    let mut data = SnippetData::new();
    data.insert("name", config.name().to_string());
    data.insert("version", config.version().to_string());
    data.insert("main_class", main_class.to_string());
    data.insert("jvm_args", config.jvm_args().join(" "));
    data
}
