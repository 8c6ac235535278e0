//! Start scripts shipped inside the build output.

use super::{launch_data, require_main_class};
use crate::bundler::{
    error::Result,
    settings::BuildConfiguration,
    template::snippets,
    utils::fs,
};
use std::path::PathBuf;

const START_SH: &str = r#"#!/bin/bash
BASEDIR="$(cd "$(dirname "$0")/.." && pwd)"
LIB="$BASEDIR/lib"
CP="$LIB/*"
java {{#if jvm_args}}{{jvm_args}} {{/if}}-cp "$CP" {{main_class}} "$@"
"#;

const START_BAT: &str = "@echo off\r\n\
set BASEDIR=%~dp0\\..\r\n\
set LIB=%BASEDIR%\\lib\r\n\
set CP=%LIB%\\*\r\n\
java {{#if jvm_args}}{{jvm_args}} {{/if}}-cp \"%CP%\" {{main_class}} %*\r\n";

/// Stage name reported when the main class is missing.
pub const STAGE: &str = "start scripts";

/// Writes `bin/start.sh` and `bin/start.bat` below the build output.
///
/// Returns the paths of both scripts.
pub async fn generate(config: &BuildConfiguration) -> Result<Vec<PathBuf>> {
    let main_class = require_main_class(config, STAGE)?;
    let data = launch_data(config, main_class);

    // render both before writing either
    let sh = snippets::render("start.sh", START_SH, &data)?;
    let bat = snippets::render("start.bat", START_BAT, &data)?;

    let bin = config.build_output().join("bin");
    let sh_path = bin.join("start.sh");
    let bat_path = bin.join("start.bat");

    fs::write_script(&sh_path, &sh).await?;
    fs::write_file(&bat_path, bat).await?;
    log::info!("Generated start scripts in {}", bin.display());

    Ok(vec![sh_path, bat_path])
}
