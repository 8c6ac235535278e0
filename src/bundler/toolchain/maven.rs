//! Auto-provisioned Maven installation.
//!
//! Maven is unpacked once per version into a per-user cache and reused by
//! later runs. The cache is guarded by an existence check only; two first-time
//! runs racing on the same cache may both extract.

use super::archive;
use crate::{
    bail,
    bundler::{
        error::{Context, ErrorExt, Result},
        settings::{MAVEN_VERSION, ToolchainSettings, ToolchainSource},
        utils::{fs, http},
    },
};
use std::path::{Path, PathBuf};

/// Files made executable after extraction, relative to the Maven home.
pub const EXECUTABLES: &[&str] = &["bin/mvn", "bin/mvnDebug", "bin/mvnyjp"];

/// Returns the toolchain cache root: the override, else `<data-local-dir>/bootstrapp`.
pub fn cache_root(override_root: Option<&Path>) -> Result<PathBuf> {
    match override_root {
        Some(root) => Ok(root.to_path_buf()),
        None => Ok(dirs::data_local_dir()
            .context("cannot determine the user data directory; set BOOTSTRAPP_HOME")?
            .join("bootstrapp")),
    }
}

/// Returns the install directory for the pinned Maven version.
pub fn install_dir(cache_root: &Path) -> PathBuf {
    cache_root.join(format!("mvn-{}", MAVEN_VERSION))
}

/// Returns the Maven home inside an install directory.
pub fn home_in(install_dir: &Path) -> PathBuf {
    install_dir.join(format!("apache-maven-{}", MAVEN_VERSION))
}

/// Returns the `mvn` launcher inside `maven_home`.
pub fn mvn_executable(maven_home: &Path) -> PathBuf {
    let name = if cfg!(windows) { "mvn.cmd" } else { "mvn" };
    maven_home.join("bin").join(name)
}

/// Returns the cached Maven home, installing it first when absent.
pub async fn provision(settings: &ToolchainSettings) -> Result<PathBuf> {
    let install_dir = install_dir(&cache_root(settings.cache_root.as_deref())?);
    let home = home_in(&install_dir);

    if home.is_dir() {
        log::debug!("Reusing Maven installation at {}", home.display());
        return Ok(home);
    }

    log::info!("Installing Maven {} into {}", MAVEN_VERSION, install_dir.display());
    fs::create_dir_all(&install_dir).await?;

    // a partial install would pass the reuse check above on the next run
    if let Err(e) = install(settings, &install_dir, &home).await {
        if let Err(cleanup) = fs::remove_dir_all(&install_dir).await {
            log::warn!("Failed to remove incomplete Maven installation: {}", cleanup);
        }
        return Err(e);
    }
    Ok(home)
}

async fn install(settings: &ToolchainSettings, install_dir: &Path, home: &Path) -> Result<()> {
    match &settings.source {
        ToolchainSource::Archive(archive) => unpack(archive, install_dir).await?,
        ToolchainSource::Download { url } => {
            let archive = install_dir.join(format!("apache-maven-{}-bin.zip", MAVEN_VERSION));
            http::download_to(url, &archive).await?;
            let unpacked = unpack(&archive, install_dir).await;
            fs::remove_file(&archive).await?;
            unpacked?;
        }
    }

    if !home.is_dir() {
        bail!("Maven archive did not contain apache-maven-{}/", MAVEN_VERSION);
    }

    archive::set_executables(home, EXECUTABLES)
}

async fn unpack(archive: &Path, install_dir: &Path) -> Result<()> {
    if !archive.is_file() {
        return Err(std::io::Error::from(std::io::ErrorKind::NotFound))
            .fs_context("opening Maven archive", archive);
    }
    archive::extract(archive, install_dir, true)
        .await?
        .into_result(archive)?;
    Ok(())
}
