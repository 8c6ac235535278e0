//! Resources embedded in the binary.
//!
//! Bundled resources are compiled in with `include_str!` and materialized to
//! disk when a stage needs a real file to work on.

use crate::bundler::error::{ErrorExt, Result};
use std::{
    path::{Path, PathBuf},
    sync::atomic::{AtomicUsize, Ordering},
};

static MATERIALIZED: AtomicUsize = AtomicUsize::new(0);

/// A named resource compiled into the binary.
#[derive(Debug, Clone, Copy)]
pub struct Resource {
    /// File name used when materializing
    pub name: &'static str,
    /// Resource content
    pub content: &'static str,
}

/// The default descriptor template.
pub const POM_TEMPLATE: Resource = Resource {
    name: "template.xml",
    content: include_str!("../../../resources/template.xml"),
};

/// A resource written to disk; the file is removed when this value is dropped.
#[derive(Debug)]
pub struct MaterializedResource {
    path: PathBuf,
}

impl MaterializedResource {
    /// Returns the path of the materialized file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for MaterializedResource {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            log::debug!("Failed to remove {}: {}", self.path.display(), e);
        }
    }
}

/// Writes `resource` into `dir` under a name unique to this process and call.
pub async fn materialize(resource: Resource, dir: &Path) -> Result<MaterializedResource> {
    tokio::fs::create_dir_all(dir)
        .await
        .fs_context("creating resource directory", dir)?;

    let path = dir.join(format!(
        "bootstrapp-{}-{}-{}",
        std::process::id(),
        MATERIALIZED.fetch_add(1, Ordering::Relaxed),
        resource.name
    ));
    tokio::fs::write(&path, resource.content)
        .await
        .fs_context("materializing resource", &path)?;
    log::debug!("Materialized {} to {}", resource.name, path.display());

    Ok(MaterializedResource { path })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn materialized_file_is_removed_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let materialized = materialize(POM_TEMPLATE, dir.path()).await.unwrap();
        let path = materialized.path().to_path_buf();

        let content = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(content.contains("<!-- dependencies -->"));

        drop(materialized);
        assert!(!path.exists());
    }
}
