//! Build descriptor rendering.
//!
//! Turns a `pom.xml` template into the descriptor Maven runs against by
//! substituting a fixed set of markers (see [`Placeholder`]).
//!
//! # Rules
//!
//! - Only lines containing `<!-- ` are candidates; everything else is copied
//!   byte for byte, line endings included.
//! - All markers on a line are replaced in one pass.
//! - Unknown markers stay as they are, and so does `<!-- mainclass -->` when no
//!   main class is configured.
//! - A template in which nothing was replaced is still written, with a warning.
//!
//! # Module Organization
//!
//! - [`placeholder`] - marker enumeration and single-pass substitution
//! - [`blocks`] - dependency, exclusion and repository XML
//! - [`snippets`] - handlebars templates for generated files

pub mod blocks;
pub mod placeholder;
pub mod snippets;

pub use placeholder::{Placeholder, RenderContext, Substitutions};

use crate::bundler::{
    error::{Error, ErrorExt, Result},
    platform::linux,
    resources::{self, POM_TEMPLATE},
    settings::BuildConfiguration,
};
use std::path::{Path, PathBuf};

/// File name of the rendered descriptor inside the project root.
pub const DESCRIPTOR_FILE: &str = "pom.xml";

/// A descriptor written to disk.
#[derive(Debug, Clone)]
pub struct RenderedDescriptor {
    /// Location of the rendered `pom.xml`
    pub path: PathBuf,
    /// Absolute build output directory the descriptor points Maven at
    pub output_dir: PathBuf,
    /// Whether any line of the template was changed
    pub modified: bool,
}

/// Renders the bundled template for `config`.
pub async fn render_bundled(config: &BuildConfiguration) -> Result<RenderedDescriptor> {
    let template = resources::materialize(POM_TEMPLATE, &std::env::temp_dir()).await?;
    render_descriptor(template.path(), config).await
}

/// Renders a user-supplied template after checking it is a readable file.
pub async fn render_custom(template: &Path, config: &BuildConfiguration) -> Result<RenderedDescriptor> {
    if !template.exists() {
        return Err(Error::GenericError(format!(
            "pom.xml template does not exist: {}",
            template.display()
        )));
    }
    if template.is_dir() {
        return Err(Error::GenericError(format!(
            "pom.xml template points to a directory: {}",
            template.display()
        )));
    }
    render_descriptor(template, config).await
}

/// Renders `template` into `<project_root>/pom.xml`, replacing any previous file.
pub async fn render_descriptor(
    template: &Path,
    config: &BuildConfiguration,
) -> Result<RenderedDescriptor> {
    let content = tokio::fs::read_to_string(template)
        .await
        .fs_context("reading template", template)?;

    let plugins = render_plugins(config).await?;
    let output_dir = config.build_output();
    let ctx = RenderContext {
        config,
        output_dir: &output_dir,
        plugins: &plugins,
    };
    let (rendered, modified) = render_str(&content, &ctx);

    if !modified {
        log::warn!(
            "Template file '{}' did not contain any placeholders, not modified!",
            template.display()
        );
    }

    let path = config.project_root().join(DESCRIPTOR_FILE);
    tokio::fs::write(&path, rendered)
        .await
        .fs_context("writing build descriptor", &path)?;
    log::info!("Wrote build descriptor {}", path.display());

    Ok(RenderedDescriptor {
        path,
        output_dir,
        modified,
    })
}

/// Substitutes all markers in `template`.
///
/// Returns the rendered text and whether any line changed.
pub fn render_str(template: &str, ctx: &RenderContext<'_>) -> (String, bool) {
    let substitutions = Substitutions::new(ctx);
    let mut out = String::with_capacity(template.len());
    let mut modified = false;

    for line in template.split_inclusive('\n') {
        let replaced = substitutions.apply(line);
        if replaced != line {
            modified = true;
        }
        out.push_str(&replaced);
    }

    (out, modified)
}

/// Builds the `<!-- plugins -->` value: one plugin declaration per requested OS package.
///
/// Custom snippet files are inserted verbatim.
async fn render_plugins(config: &BuildConfiguration) -> Result<String> {
    let mut fragments = Vec::new();

    if let Some(debian) = config.debian() {
        let fragment = match &debian.custom_snippet {
            Some(file) => read_snippet(file).await?,
            None => snippets::render("jdeb plugin", snippets::JDEB_PLUGIN, &plugin_data(config))?,
        };
        fragments.push(fragment);
    }

    if let Some(rpm) = config.rpm() {
        let fragment = match &rpm.custom_snippet {
            Some(file) => read_snippet(file).await?,
            None => snippets::render("rpm plugin", snippets::RPM_PLUGIN, &plugin_data(config))?,
        };
        fragments.push(fragment);
    }

    Ok(fragments.join("\n      "))
}

async fn read_snippet(file: &Path) -> Result<String> {
    let snippet = tokio::fs::read_to_string(file)
        .await
        .fs_context("reading plugin snippet", file)?;
    Ok(snippet.trim_end().to_string())
}

fn plugin_data(config: &BuildConfiguration) -> snippets::SnippetData {
    let mut data = snippets::SnippetData::new();
    let xml = |value: &str| blocks::escape(value).into_owned();
    data.insert("name", xml(config.name()));
    data.insert("version", xml(config.version()));
    data.insert("project_root", xml(&config.project_root().display().to_string()));
    data.insert("lib_dir", xml(&config.lib_dir().display().to_string()));
    data.insert("control_dir", xml(&linux::control_dir(config).display().to_string()));
    data.insert("script", xml(&linux::launch_script_path(config).display().to_string()));
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::settings::{BuildConfigurationBuilder, DebianSettings, PackageSettings};

    async fn config(root: &Path) -> BuildConfiguration {
        BuildConfigurationBuilder::new()
            .project_root(root)
            .package_settings(PackageSettings {
                name: "demo".into(),
                version: "1.2".into(),
            })
            .dependencies(vec!["org.foo:bar:1.0".into(), "org.baz:qux:2.0".into()])
            .build()
            .await
            .unwrap()
    }

    fn render_with(config: &BuildConfiguration, template: &str) -> (String, bool) {
        let output_dir = config.build_output();
        let ctx = RenderContext {
            config,
            output_dir: &output_dir,
            plugins: "",
        };
        render_str(template, &ctx)
    }

    #[tokio::test]
    async fn replaces_multiple_markers_on_one_line() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path()).await;
        let (out, modified) =
            render_with(&config, "  <id><!-- name -->-<!-- version --></id>\n");
        assert!(modified);
        assert_eq!(out, "  <id>demo-1.2</id>\n");
    }

    #[tokio::test]
    async fn leaves_unknown_markers_and_plain_lines_alone() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path()).await;
        let template = "<a>\r\n<!-- custom --> <!-- name -->\r\nno newline";
        let (out, _) = render_with(&config, template);
        assert_eq!(out, "<a>\r\n<!-- custom --> demo\r\nno newline");
    }

    #[tokio::test]
    async fn boolean_flags_and_packaging() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path()).await;
        let (out, _) = render_with(
            &config,
            "<!-- nosources -->|<!-- nospringboot -->|<!-- packaging -->",
        );
        assert_eq!(out, "true|true|pom");
    }

    #[tokio::test]
    async fn main_class_marker_stays_when_unset() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path()).await;
        let (out, modified) = render_with(&config, "<mainClass><!-- mainclass --></mainClass>\n");
        assert!(!modified);
        assert_eq!(out, "<mainClass><!-- mainclass --></mainClass>\n");
    }

    #[tokio::test]
    async fn inserted_values_are_not_rescanned() {
        let dir = tempfile::tempdir().unwrap();
        let config = BuildConfigurationBuilder::new()
            .project_root(dir.path())
            .package_settings(PackageSettings {
                name: "<!-- version -->".into(),
                version: "9".into(),
            })
            .build()
            .await
            .unwrap();
        let (out, _) = render_with(&config, "<!-- name --> <!-- version -->");
        assert_eq!(out, "<!-- version --> 9");
    }

    #[tokio::test]
    async fn writes_descriptor_into_project_root() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path()).await;
        let template = dir.path().join("custom.xml");
        tokio::fs::write(&template, "<x><!-- outputdir --></x>\n").await.unwrap();

        let rendered = render_custom(&template, &config).await.unwrap();
        assert_eq!(rendered.path, config.project_root().join("pom.xml"));
        assert_eq!(rendered.output_dir, config.build_output());
        let written = tokio::fs::read_to_string(&rendered.path).await.unwrap();
        assert_eq!(
            written,
            format!("<x>{}</x>\n", config.build_output().display())
        );
    }

    #[tokio::test]
    async fn custom_template_must_be_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path()).await;
        let err = render_custom(dir.path(), &config).await.unwrap_err();
        assert!(err.to_string().contains("points to a directory"));
        let err = render_custom(&dir.path().join("missing.xml"), &config)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[tokio::test]
    async fn debian_plugin_is_injected() {
        let dir = tempfile::tempdir().unwrap();
        let config = BuildConfigurationBuilder::new()
            .project_root(dir.path())
            .package_settings(PackageSettings {
                name: "demo".into(),
                version: "1.2".into(),
            })
            .debian(DebianSettings::default())
            .build()
            .await
            .unwrap();
        let plugins = render_plugins(&config).await.unwrap();
        assert!(plugins.contains("<artifactId>jdeb</artifactId>"));
        assert!(plugins.contains("<prefix>/usr/lib/demo</prefix>"));
        assert!(!plugins.contains("rpm-maven-plugin"));
    }

    #[tokio::test]
    async fn custom_plugin_snippet_is_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let snippet = dir.path().join("rpm.xml");
        tokio::fs::write(&snippet, "<plugin><!-- keep --></plugin>\n\n").await.unwrap();
        let config = BuildConfigurationBuilder::new()
            .project_root(dir.path())
            .rpm(crate::bundler::settings::RpmSettings {
                custom_snippet: Some(snippet),
            })
            .build()
            .await
            .unwrap();
        assert_eq!(
            render_plugins(&config).await.unwrap(),
            "<plugin><!-- keep --></plugin>"
        );
    }
}
