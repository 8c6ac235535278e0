//! XML blocks for the list-valued placeholders.
//!
//! The first line of each block carries no indentation since it replaces a
//! marker that already sits at the right column; continuation lines are
//! indented for a marker at depth one (two spaces).

use crate::bundler::settings::{BuildConfiguration, Dependency, Exclusion, Repository};
use std::{
    borrow::Cow,
    collections::HashSet,
    fmt::Write,
    path::Path,
};

/// groupId used for jars referenced by path.
const EXTERNAL_GROUP: &str = "bootstrapp.external";

/// Renders the `<dependencies>` element.
///
/// Coordinates that are not `group:artifact:version` are skipped with a
/// warning. Exclusions, if any, are attached to every dependency.
pub fn dependencies(config: &BuildConfiguration) -> String {
    if config.dependencies().is_empty() {
        log::warn!("No dependencies supplied!");
    }

    let exclusions = if config.exclusions().is_empty() {
        String::new()
    } else {
        exclusions(config.exclusions(), 6)
    };

    let mut out = String::from("<dependencies>\n");
    for coordinate in config.dependencies() {
        match Dependency::parse(coordinate) {
            Some(dep) => {
                out.push_str("    <dependency>\n");
                element(&mut out, 6, "groupId", &dep.group);
                element(&mut out, 6, "artifactId", &dep.artifact);
                element(&mut out, 6, "version", &dep.version);
                if !exclusions.is_empty() {
                    out.push_str("      ");
                    out.push_str(&exclusions);
                    out.push('\n');
                }
                out.push_str("    </dependency>\n");
            }
            None => log::warn!(
                "Skipping dependency as it does not conform to format 'group:artifact:version': {}",
                coordinate
            ),
        }
    }

    let mut taken = HashSet::new();
    for jar in config.external_jars() {
        let artifact = unique_artifact(&mut taken, jar, None);
        external(&mut out, jar, &artifact, config.version(), None);
    }
    for jar in config.external_sources() {
        let artifact = unique_artifact(&mut taken, jar, Some("sources"));
        external(&mut out, jar, &artifact, config.version(), Some("sources"));
    }

    out.push_str("  </dependencies>");
    out
}

/// Renders an `<exclusions>` element whose closing tag sits at `indent`.
///
/// Entries that are not `group:artifact` are skipped with a warning.
pub fn exclusions(entries: &[String], indent: usize) -> String {
    let pad = " ".repeat(indent);
    let mut out = String::from("<exclusions>\n");
    for entry in entries {
        match Exclusion::parse(entry) {
            Some(excl) => {
                let _ = writeln!(out, "{pad}  <exclusion>");
                element(&mut out, indent + 4, "groupId", &excl.group);
                element(&mut out, indent + 4, "artifactId", &excl.artifact);
                let _ = writeln!(out, "{pad}  </exclusion>");
            }
            None => log::warn!(
                "Skipping exclusion as it does not conform to format 'group:artifact': {}",
                entry
            ),
        }
    }
    let _ = write!(out, "{pad}</exclusions>");
    out
}

/// Renders the `<repositories>` element; empty when no repositories are configured.
///
/// Entries that are not `id;name;url` are dropped without output.
pub fn repositories(entries: &[String]) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let mut out = String::from("<repositories>\n");
    for repo in entries.iter().filter_map(|e| Repository::parse(e)) {
        out.push_str("    <repository>\n");
        element(&mut out, 6, "id", &repo.id);
        element(&mut out, 6, "name", &repo.name);
        element(&mut out, 6, "url", &repo.url);
        out.push_str("    </repository>\n");
    }
    out.push_str("  </repositories>");
    out
}

/// Escapes the characters that would break XML text content.
pub fn escape(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>']) {
        return Cow::Borrowed(value);
    }
    let mut out = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Returns the jar's file stem, suffixed with `-2`, `-3`, ... when another jar
/// with the same classifier already claimed it.
fn unique_artifact(
    taken: &mut HashSet<(String, Option<&'static str>)>,
    jar: &Path,
    classifier: Option<&'static str>,
) -> String {
    let stem = jar
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "external".to_string());

    let mut artifact = stem.clone();
    let mut n = 1;
    while !taken.insert((artifact.clone(), classifier)) {
        n += 1;
        artifact = format!("{stem}-{n}");
    }
    if n > 1 {
        log::warn!(
            "Renamed duplicate external jar {} to artifactId {}",
            jar.display(),
            artifact
        );
    }
    artifact
}

fn external(out: &mut String, jar: &Path, artifact: &str, version: &str, classifier: Option<&str>) {
    out.push_str("    <dependency>\n");
    element(out, 6, "groupId", EXTERNAL_GROUP);
    element(out, 6, "artifactId", artifact);
    element(out, 6, "version", version);
    if let Some(classifier) = classifier {
        element(out, 6, "classifier", classifier);
    }
    element(out, 6, "scope", "system");
    element(out, 6, "systemPath", &jar.display().to_string());
    out.push_str("    </dependency>\n");
}

fn element(out: &mut String, indent: usize, name: &str, value: &str) {
    let _ = writeln!(out, "{:indent$}<{name}>{}</{name}>", "", escape(value));
}
