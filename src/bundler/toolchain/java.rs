//! Java runtime detection.
//!
//! Without an explicit Java home the pipeline uses the runtime the user's
//! environment would run: `JAVA_HOME` if set, otherwise the `java` on `PATH`.

use std::{
    path::{Path, PathBuf},
    sync::LazyLock,
};

/// Java home detected from the environment.
///
/// Cached result to avoid repeated `PATH` lookups.
pub static DETECTED_JAVA_HOME: LazyLock<Option<PathBuf>> = LazyLock::new(|| {
    if let Some(home) = std::env::var_os("JAVA_HOME").filter(|v| !v.is_empty()) {
        log::debug!("Using JAVA_HOME: {}", Path::new(&home).display());
        return Some(PathBuf::from(home));
    }

    match which::which("java") {
        Ok(path) => {
            let home = home_from_binary(&path);
            match &home {
                Some(home) => log::debug!("Found java at {}, home {}", path.display(), home.display()),
                None => log::warn!("Found java at {} but cannot derive its home", path.display()),
            }
            home
        }
        Err(e) => {
            log::debug!("java not found in PATH: {}", e);
            None
        }
    }
});

/// Derives the home directory from a `<home>/bin/java` binary, following symlinks.
pub fn home_from_binary(binary: &Path) -> Option<PathBuf> {
    let resolved = std::fs::canonicalize(binary).unwrap_or_else(|_| binary.to_path_buf());
    resolved.parent()?.parent().map(Path::to_path_buf)
}

/// Returns the `java` executable inside `java_home`.
pub fn java_executable(java_home: &Path) -> PathBuf {
    let name = if cfg!(windows) { "java.exe" } else { "java" };
    java_home.join("bin").join(name)
}
