//! Runs the bootstrapped application.

use super::require_main_class;
use crate::bundler::{
    error::{Error, Result},
    settings::BuildConfiguration,
    toolchain::ResolvedToolchain,
    utils::process,
};
use tokio::process::Command;

/// Stage name reported when the main class is missing.
pub const STAGE: &str = "launching";

/// Builds `java <jvm args> -cp <lib>/* <main class>` against the resolved runtime.
pub fn command(config: &BuildConfiguration, toolchain: &ResolvedToolchain) -> Result<Command> {
    let main_class = require_main_class(config, STAGE)?;

    let mut cmd = Command::new(toolchain.java_executable());
    cmd.args(config.jvm_args())
        .arg("-cp")
        .arg(config.lib_dir().join("*"))
        .arg(main_class)
        .current_dir(config.project_root())
        .env("JAVA_HOME", &toolchain.java_home);
    Ok(cmd)
}

/// Launches the main class and waits for it, streaming its output.
pub async fn run(config: &BuildConfiguration, toolchain: &ResolvedToolchain) -> Result<()> {
    let cmd = command(config, toolchain)?;
    let description = process::describe(&cmd);
    log::info!("Launching: {}", description);

    let status = process::run_streaming(cmd).await?;
    if !status.success() {
        return Err(Error::LaunchFailed {
            command: description,
            code: status.code(),
        });
    }
    Ok(())
}
