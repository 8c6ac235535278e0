//! Inputs for the Debian and RPM packaging goals.
//!
//! The packaging plugins pick these files up during the build, so they are
//! written before Maven runs. Installed packages place the jars in
//! `/usr/lib/<name>` and the launch script in `/usr/bin/<name>`.

use super::{launch_data, require_main_class};
use crate::bundler::{
    error::Result,
    settings::BuildConfiguration,
    template::snippets,
    utils::fs,
};
use std::path::PathBuf;

const LAUNCH_SCRIPT: &str = r#"#!/bin/sh
exec java {{#if jvm_args}}{{jvm_args}} {{/if}}-cp "/usr/lib/{{name}}/*" {{main_class}} "$@"
"#;

/// Directory holding the generated OS package inputs.
pub fn linux_dir(config: &BuildConfiguration) -> PathBuf {
    config.project_root().join("linux")
}

/// Returns `<root>/linux/<name>`.
pub fn launch_script_path(config: &BuildConfiguration) -> PathBuf {
    linux_dir(config).join(config.name())
}

/// Returns the jdeb control directory.
pub fn control_dir(config: &BuildConfiguration) -> PathBuf {
    linux_dir(config).join("deb")
}

/// Stage name reported when the main class is missing.
pub const STAGE: &str = "OS packages";

/// Writes the OS package launch script, plus the Debian control file when a
/// .deb was requested.
pub async fn generate(config: &BuildConfiguration) -> Result<Vec<PathBuf>> {
    let main_class = require_main_class(config, STAGE)?;
    let data = launch_data(config, main_class);

    let script = snippets::render("OS package launch script", LAUNCH_SCRIPT, &data)?;
    let control = match config.debian() {
        Some(_) => Some(snippets::render("debian control", snippets::DEB_CONTROL, &data)?),
        None => None,
    };

    let script_path = launch_script_path(config);
    fs::write_script(&script_path, &script).await?;
    log::info!("Generated OS package launch script {}", script_path.display());

    let mut written = vec![script_path];
    if let Some(control) = control {
        let control_path = control_dir(config).join("control");
        fs::write_file(&control_path, control).await?;
        written.push(control_path);
    }

    Ok(written)
}
