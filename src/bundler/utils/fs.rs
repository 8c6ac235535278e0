//! File system utilities for the pipeline stages.
//!
//! Provides file writes with automatic directory creation and
//! executable-bit handling.

use crate::bundler::error::{ErrorExt, Result};
use std::{io, path::Path};
use tokio::fs;

/// Writes `content` to `path`, creating any parent directories as needed.
pub async fn write_file(path: &Path, content: impl AsRef<[u8]>) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .fs_context("creating directory", parent)?;
    }
    fs::write(path, content).await.fs_context("writing file", path)
}

/// Writes an executable script to `path`.
pub async fn write_script(path: &Path, content: &str) -> Result<()> {
    write_file(path, content).await?;
    set_executable(path)
}

/// Creates `path` and all of its missing parents; an existing directory is fine.
pub async fn create_dir_all(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .await
        .fs_context("creating directory", path)
}

/// Removes the directory and its contents if it exists.
pub async fn remove_dir_all(path: &Path) -> Result<()> {
    match fs::remove_dir_all(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()), // Idempotent
        Err(e) => Err(e).fs_context("removing directory", path),
    }
}

/// Removes a file if it exists.
pub async fn remove_file(path: &Path) -> Result<()> {
    match fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).fs_context("removing file", path),
    }
}

/// Adds the executable bits to `path`.
#[cfg(unix)]
pub fn set_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut permissions = std::fs::metadata(path)
        .fs_context("reading permissions", path)?
        .permissions();
    permissions.set_mode(permissions.mode() | 0o111);
    std::fs::set_permissions(path, permissions).fs_context("setting permissions", path)
}

/// Adds the executable bits to `path`.
#[cfg(not(unix))]
pub fn set_executable(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn write_file_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a/b/c.txt");
        write_file(&path, "hello").await.unwrap();
        assert_eq!(tokio::fs::read_to_string(&path).await.unwrap(), "hello");
    }

    #[tokio::test]
    async fn create_dir_all_keeps_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out");
        write_file(&target.join("kept.txt"), "x").await.unwrap();

        create_dir_all(&target).await.unwrap();
        assert!(target.join("kept.txt").exists());
    }

    #[tokio::test]
    async fn removals_are_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        remove_dir_all(&dir.path().join("nope")).await.unwrap();
        remove_file(&dir.path().join("nope.txt")).await.unwrap();
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn scripts_are_executable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.sh");
        write_script(&path, "#!/bin/sh\n").await.unwrap();
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0o111);
    }
}
