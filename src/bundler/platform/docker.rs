//! Container image descriptor.
//!
//! Writes `<root>/docker/<name>` and `<root>/Dockerfile`. The image itself is
//! left to the user; the follow-up commands are logged.

use super::{launch_data, require_main_class};
use crate::bundler::{
    error::{Error, ErrorExt, Result},
    settings::BuildConfiguration,
    template::snippets,
    utils::fs,
};
use std::path::{Path, PathBuf};

const LAUNCH_SCRIPT: &str = r#"#!/bin/sh
exec java {{#if jvm_args}}{{jvm_args}} {{/if}}-cp "/opt/{{name}}/lib/*" {{main_class}} "$@"
"#;

const DOCKERFILE: &str = r#"FROM {{base_image}}
{{#if instructions}}{{instructions}}
{{/if}}COPY {{lib_dir}} /opt/{{name}}/lib
{{#if src_dir}}COPY {{src_dir}} /opt/{{name}}/src
{{/if}}COPY docker/{{name}} /usr/bin/{{name}}
ENTRYPOINT ["/usr/bin/{{name}}"]
"#;

/// Returns `<root>/docker/<name>`.
pub fn launch_script_path(config: &BuildConfiguration) -> PathBuf {
    config.project_root().join("docker").join(config.name())
}

/// Returns `<root>/Dockerfile`.
pub fn dockerfile_path(config: &BuildConfiguration) -> PathBuf {
    config.project_root().join("Dockerfile")
}

/// Stage name reported when the main class is missing.
pub const STAGE: &str = "the Dockerfile";

/// Returns the configured base image; unset or blank is [`Error::MissingBaseImage`].
pub fn require_base_image(config: &BuildConfiguration) -> Result<&str> {
    config
        .docker()
        .and_then(|settings| settings.base_image.as_deref())
        .filter(|image| !image.trim().is_empty())
        .ok_or(Error::MissingBaseImage)
}

/// Writes the container launch script and the `Dockerfile`.
pub async fn generate(config: &BuildConfiguration) -> Result<Vec<PathBuf>> {
    let main_class = require_main_class(config, STAGE)?;
    let base_image = require_base_image(config)?.to_string();

    let instructions = match config.docker().and_then(|settings| settings.instructions.as_ref()) {
        Some(file) => tokio::fs::read_to_string(file)
            .await
            .fs_context("reading Docker instructions", file)?
            .trim_end()
            .to_string(),
        None => String::new(),
    };

    let mut data = launch_data(config, main_class);
    let script = snippets::render("docker launch script", LAUNCH_SCRIPT, &data)?;

    data.insert("base_image", base_image);
    data.insert("instructions", instructions);
    data.insert("lib_dir", context_path(config, &config.lib_dir()));
    let src_dir = if config.skip_sources() {
        String::new()
    } else {
        context_path(config, &config.src_dir())
    };
    data.insert("src_dir", src_dir);
    let dockerfile = snippets::render("Dockerfile", DOCKERFILE, &data)?;

    let script_path = launch_script_path(config);
    fs::write_script(&script_path, &script).await?;
    let dockerfile_path = dockerfile_path(config);
    fs::write_file(&dockerfile_path, dockerfile).await?;
    log::info!("Generated {}", dockerfile_path.display());

    let tag = format!("{}:{}", config.name(), config.version());
    log::info!("Build the image with:");
    log::info!("  cd {} && docker build -t {} .", config.project_root().display(), tag);
    log::info!("Run it with:");
    log::info!("  docker run --rm -it {}", tag);

    Ok(vec![script_path, dockerfile_path])
}

/// Path of `dir` relative to the build context, with `/` separators.
fn context_path(config: &BuildConfiguration, dir: &Path) -> String {
    let relative = dir.strip_prefix(config.project_root()).unwrap_or(dir);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
