//! Maven coordinates, exclusions and repositories.
//!
//! Coordinates are carried through the configuration verbatim and only parsed
//! when the descriptor is rendered, so a single malformed entry can be skipped
//! with a warning instead of failing the whole run.

use crate::bundler::error::{ErrorExt, Result};
use std::path::Path;

/// A `group:artifact:version` dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    /// Maven groupId
    pub group: String,
    /// Maven artifactId
    pub artifact: String,
    /// Maven version
    pub version: String,
}

impl Dependency {
    /// Parses `group:artifact:version`; anything other than exactly three parts is rejected.
    pub fn parse(coordinate: &str) -> Option<Self> {
        match coordinate.split(':').collect::<Vec<_>>().as_slice() {
            [group, artifact, version] => Some(Self {
                group: (*group).to_string(),
                artifact: (*artifact).to_string(),
                version: (*version).to_string(),
            }),
            _ => None,
        }
    }
}

/// A `group:artifact` exclusion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exclusion {
    /// Maven groupId
    pub group: String,
    /// Maven artifactId
    pub artifact: String,
}

impl Exclusion {
    /// Parses `group:artifact`; anything other than exactly two parts is rejected.
    pub fn parse(coordinate: &str) -> Option<Self> {
        match coordinate.split(':').collect::<Vec<_>>().as_slice() {
            [group, artifact] => Some(Self {
                group: (*group).to_string(),
                artifact: (*artifact).to_string(),
            }),
            _ => None,
        }
    }
}

/// An `id;name;url` repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    /// Repository id
    pub id: String,
    /// Display name
    pub name: String,
    /// Repository URL
    pub url: String,
}

impl Repository {
    /// Parses `id;name;url`; anything other than exactly three parts is rejected.
    pub fn parse(entry: &str) -> Option<Self> {
        match entry.split(';').collect::<Vec<_>>().as_slice() {
            [id, name, url] => Some(Self {
                id: (*id).to_string(),
                name: (*name).to_string(),
                url: (*url).to_string(),
            }),
            _ => None,
        }
    }
}

/// Reads a list file: one entry per line, trimmed.
///
/// Blank lines and lines that do not contain `separator` are ignored.
pub async fn read_list_file(path: &Path, separator: char) -> Result<Vec<String>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .fs_context("reading list file", path)?;
    Ok(parse_list(&content, separator))
}

fn parse_list(content: &str, separator: char) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && line.contains(separator))
        .map(String::from)
        .collect()
}
