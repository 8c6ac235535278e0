//! Zip extraction for toolchain archives.
//!
//! Extraction keeps going after a failed entry; every failure is recorded in
//! the returned [`ExtractionReport`] and the caller decides what a non-empty
//! error list means.

use crate::bundler::error::{Error, Result};
use std::{
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
};

/// Outcome of extracting an archive.
#[derive(Debug, Default)]
pub struct ExtractionReport {
    /// Files written, in archive order
    pub files: Vec<PathBuf>,
    /// One message per entry that could not be extracted
    pub errors: Vec<String>,
}

impl ExtractionReport {
    /// Converts the report into an error when any entry failed.
    pub fn into_result(self, archive: &Path) -> Result<Vec<PathBuf>> {
        if self.errors.is_empty() {
            Ok(self.files)
        } else {
            Err(Error::Extraction {
                archive: archive.to_path_buf(),
                errors: self.errors,
            })
        }
    }
}

/// Extracts `input` into `output_dir` on the blocking thread pool.
pub async fn extract(input: &Path, output_dir: &Path, create_dirs: bool) -> Result<ExtractionReport> {
    let input = input.to_path_buf();
    let output_dir = output_dir.to_path_buf();

    tokio::task::spawn_blocking(move || decompress(&input, &output_dir, create_dirs))
        .await
        .map_err(|e| Error::GenericError(format!("Extraction task panicked: {}", e)))
}

/// Extracts every entry of the zip `input` into `output_dir`.
///
/// With `create_dirs` the archive's directory structure is recreated;
/// otherwise directory entries are skipped and files land directly in
/// `output_dir` under their base name.
pub fn decompress(input: &Path, output_dir: &Path, create_dirs: bool) -> ExtractionReport {
    let mut report = ExtractionReport::default();

    let mut archive = match File::open(input)
        .map_err(zip::result::ZipError::Io)
        .and_then(|f| zip::ZipArchive::new(BufReader::new(f)))
    {
        Ok(archive) => archive,
        Err(e) => {
            let msg = format!("Error opening '{}': {}", input.display(), e);
            log::error!("{}", msg);
            report.errors.push(msg);
            return report;
        }
    };

    for i in 0..archive.len() {
        let mut entry = match archive.by_index(i) {
            Ok(entry) => entry,
            Err(e) => {
                let msg = format!("Error reading entry #{} of '{}': {}", i, input.display(), e);
                log::error!("{}", msg);
                report.errors.push(msg);
                continue;
            }
        };

        let name = entry.name().to_string();
        let Some(relative) = entry.enclosed_name() else {
            let msg = format!("Skipping entry with unsafe path '{}'", name);
            log::error!("{}", msg);
            report.errors.push(msg);
            continue;
        };

        if entry.is_dir() {
            if create_dirs {
                let dir = output_dir.join(&relative);
                if let Err(e) = std::fs::create_dir_all(&dir) {
                    let msg = format!("Failed to create directory '{}': {}", dir.display(), e);
                    log::error!("{}", msg);
                    report.errors.push(msg);
                }
            }
            continue;
        }

        let out_path = if create_dirs {
            output_dir.join(&relative)
        } else {
            match relative.file_name() {
                Some(base) => output_dir.join(base),
                None => {
                    let msg = format!("Entry '{}' has no file name", name);
                    log::error!("{}", msg);
                    report.errors.push(msg);
                    continue;
                }
            }
        };

        if let Some(parent) = out_path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                let msg = format!(
                    "Failed to create directory '{}', skipping extraction of '{}': {}",
                    parent.display(),
                    out_path.display(),
                    e
                );
                log::error!("{}", msg);
                report.errors.push(msg);
                continue;
            }
        }

        let written = File::create(&out_path).and_then(|mut out| io::copy(&mut entry, &mut out));
        match written {
            Ok(_) => report.files.push(out_path),
            Err(e) => {
                let msg = format!(
                    "Error extracting '{}' to '{}': {}",
                    name,
                    out_path.display(),
                    e
                );
                log::error!("{}", msg);
                report.errors.push(msg);
            }
        }
    }

    report
}

/// Marks `relative_paths` under `root` as executable.
///
/// Paths that do not exist are skipped with a warning. A no-op on platforms
/// without executable bits.
pub fn set_executables(root: &Path, relative_paths: &[&str]) -> Result<()> {
    for rel in relative_paths {
        let path = root.join(rel);
        if !path.is_file() {
            log::warn!("Cannot mark missing file as executable: {}", path.display());
            continue;
        }
        crate::bundler::utils::fs::set_executable(&path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn write_zip(path: &Path, dirs: &[&str], files: &[(&str, &str)]) {
        let mut zip = zip::ZipWriter::new(File::create(path).unwrap());
        let options = SimpleFileOptions::default();
        for dir in dirs {
            zip.add_directory(*dir, options).unwrap();
        }
        for (name, content) in files {
            zip.start_file(*name, options).unwrap();
            zip.write_all(content.as_bytes()).unwrap();
        }
        zip.finish().unwrap();
    }

    #[test]
    fn flattens_without_create_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("a.zip");
        write_zip(
            &archive,
            &["top/", "top/sub/"],
            &[("top/a.txt", "a"), ("top/sub/b.txt", "b")],
        );
        let out = dir.path().join("out");

        let report = decompress(&archive, &out, false);
        assert!(report.errors.is_empty(), "{:?}", report.errors);
        assert_eq!(report.files, vec![out.join("a.txt"), out.join("b.txt")]);

        let mut names: Vec<_> = std::fs::read_dir(&out)
            .unwrap()
            .map(|e| e.unwrap())
            .inspect(|e| assert!(e.file_type().unwrap().is_file()))
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, ["a.txt", "b.txt"]);
    }

    #[test]
    fn preserves_structure_with_create_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("a.zip");
        write_zip(&archive, &["top/", "top/empty/"], &[("top/bin/mvn", "#!/bin/sh\n")]);
        let out = dir.path().join("out");

        let report = decompress(&archive, &out, true);
        assert!(report.errors.is_empty());
        assert!(out.join("top/empty").is_dir());
        assert_eq!(std::fs::read_to_string(out.join("top/bin/mvn")).unwrap(), "#!/bin/sh\n");
    }

    #[test]
    fn continues_after_failed_entry() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("a.zip");
        write_zip(
            &archive,
            &[],
            &[("first.txt", "1"), ("blocked/inner.txt", "2"), ("last.txt", "3")],
        );
        let out = dir.path().join("out");
        std::fs::create_dir_all(&out).unwrap();
        // a regular file where a directory is needed
        std::fs::write(out.join("blocked"), "").unwrap();

        let report = decompress(&archive, &out, true);
        assert_eq!(report.errors.len(), 1, "{:?}", report.errors);
        assert!(report.errors[0].contains("blocked"));
        assert!(out.join("first.txt").is_file());
        assert!(out.join("last.txt").is_file());
        assert!(report.into_result(&archive).is_err());
    }

    #[test]
    fn unreadable_archive_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let report = decompress(&dir.path().join("missing.zip"), dir.path(), true);
        assert_eq!(report.errors.len(), 1);
        assert!(report.files.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn marks_listed_files_executable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("bin")).unwrap();
        std::fs::write(dir.path().join("bin/mvn"), "").unwrap();

        set_executables(dir.path(), &["bin/mvn", "bin/missing"]).unwrap();
        let mode = std::fs::metadata(dir.path().join("bin/mvn")).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0o111);
    }
}
