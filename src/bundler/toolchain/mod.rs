//! Maven and Java toolchain resolution.
//!
//! Explicit homes win. Otherwise Maven is provisioned into the per-user cache
//! and Java is taken from the environment. Both homes are validated before the
//! pipeline touches the project root.
//!
//! # Module Organization
//!
//! - [`archive`] - zip extraction with per-entry error collection
//! - [`java`] - Java home detection
//! - [`maven`] - cached Maven installation

pub mod archive;
pub mod java;
pub mod maven;

use crate::bundler::{
    error::{Error, Result},
    settings::ToolchainSettings,
};
use std::path::{Path, PathBuf};

/// Validated Maven and Java installations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedToolchain {
    /// Maven installation directory
    pub maven_home: PathBuf,
    /// Java installation directory
    pub java_home: PathBuf,
}

impl ResolvedToolchain {
    /// Returns the `mvn` launcher.
    pub fn mvn_executable(&self) -> PathBuf {
        maven::mvn_executable(&self.maven_home)
    }

    /// Returns the `java` executable.
    pub fn java_executable(&self) -> PathBuf {
        java::java_executable(&self.java_home)
    }
}

/// Resolves both homes, provisioning Maven when no home was given.
pub async fn resolve(settings: &ToolchainSettings) -> Result<ResolvedToolchain> {
    let maven_home = match &settings.maven_home {
        Some(home) => home.clone(),
        None => maven::provision(settings).await?,
    };
    validate_home("Maven", &maven_home)?;

    let java_home = match &settings.java_home {
        Some(home) => home.clone(),
        None => (*java::DETECTED_JAVA_HOME).clone().ok_or_else(|| {
            Error::GenericError(
                "no Java installation found; set JAVA_HOME or pass --java-home".to_string(),
            )
        })?,
    };
    validate_home("Java", &java_home)?;

    log::info!("Maven home: {}", maven_home.display());
    log::info!("Java home: {}", java_home.display());

    Ok(ResolvedToolchain {
        maven_home,
        java_home,
    })
}

/// Fails unless `path` is an existing directory.
pub fn validate_home(kind: &'static str, path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::HomeNotFound {
            kind,
            path: path.to_path_buf(),
        });
    }
    if !path.is_dir() {
        return Err(Error::HomeNotDirectory {
            kind,
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_validation() {
        let dir = tempfile::tempdir().unwrap();
        assert!(validate_home("Maven", dir.path()).is_ok());

        let missing = dir.path().join("missing");
        assert!(matches!(
            validate_home("Maven", &missing),
            Err(Error::HomeNotFound { kind: "Maven", .. })
        ));

        let file = dir.path().join("file");
        std::fs::write(&file, "").unwrap();
        assert!(matches!(
            validate_home("Java", &file),
            Err(Error::HomeNotDirectory { kind: "Java", .. })
        ));
    }

    #[tokio::test]
    async fn explicit_homes_skip_provisioning() {
        let dir = tempfile::tempdir().unwrap();
        let settings = ToolchainSettings {
            maven_home: Some(dir.path().join("mvn")),
            java_home: Some(dir.path().join("jdk")),
            ..Default::default()
        };
        std::fs::create_dir_all(dir.path().join("mvn")).unwrap();
        std::fs::create_dir_all(dir.path().join("jdk")).unwrap();

        let resolved = resolve(&settings).await.unwrap();
        assert_eq!(resolved.maven_home, dir.path().join("mvn"));
        assert!(resolved.java_executable().starts_with(dir.path().join("jdk/bin")));
    }

    #[tokio::test]
    async fn missing_explicit_maven_home_fails() {
        let dir = tempfile::tempdir().unwrap();
        let settings = ToolchainSettings {
            maven_home: Some(dir.path().join("nope")),
            java_home: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        assert!(matches!(
            resolve(&settings).await,
            Err(Error::HomeNotFound { kind: "Maven", .. })
        ));
    }
}
