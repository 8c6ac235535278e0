//! Maven invocation.

use crate::bundler::{
    error::{Error, Result},
    settings::BuildConfiguration,
    toolchain::ResolvedToolchain,
    utils::process,
};
use std::path::Path;
use tokio::process::Command;

/// Returns the goals in execution order.
///
/// `clean` (optional), `package`, then one goal per requested OS package.
pub fn goals(config: &BuildConfiguration) -> Vec<&'static str> {
    let mut goals = Vec::with_capacity(4);
    if config.clean() {
        goals.push("clean");
    }
    goals.push("package");
    if config.debian().is_some() {
        goals.push("jdeb:jdeb");
    }
    if config.rpm().is_some() {
        goals.push("rpm:rpm");
    }
    goals
}

/// Builds the Maven command for `pom`.
///
/// The Maven and Java homes are passed explicitly through the environment of
/// the child only.
pub fn command(config: &BuildConfiguration, toolchain: &ResolvedToolchain, pom: &Path) -> Command {
    let mut cmd = Command::new(toolchain.mvn_executable());
    cmd.arg("--batch-mode").arg("-f").arg(pom);
    if let Some(user_settings) = &config.toolchain().user_settings {
        cmd.arg("-s").arg(user_settings);
    }
    cmd.args(goals(config))
        .current_dir(config.project_root())
        .env("JAVA_HOME", &toolchain.java_home)
        .env("MAVEN_HOME", &toolchain.maven_home);
    cmd
}

/// Runs Maven against `pom`; any unsuccessful exit is [`Error::BuildFailed`].
pub async fn run(config: &BuildConfiguration, toolchain: &ResolvedToolchain, pom: &Path) -> Result<()> {
    let cmd = command(config, toolchain, pom);
    let description = process::describe(&cmd);
    log::info!("Building: {}", description);

    let status = process::run_streaming(cmd).await?;
    if !status.success() {
        return Err(Error::BuildFailed {
            command: description,
            code: status.code(),
        });
    }
    Ok(())
}
