//! The closed set of descriptor placeholders.

use super::blocks;
use crate::bundler::settings::BuildConfiguration;
use std::{borrow::Cow, path::Path};

/// Prefix shared by all markers; lines without it are never touched.
pub const MARKER: &str = "<!-- ";

/// Placeholders understood by the descriptor renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// Full `<dependencies>` element
    Dependencies,
    /// `<exclusions>` element for templates that place it themselves
    Exclusions,
    /// `<repositories>` element, empty when none are configured
    Repositories,
    /// Absolute build output directory
    OutputDir,
    /// Project name
    Name,
    /// Project version
    Version,
    /// Main class, left untouched when unset
    MainClass,
    /// `jar`, or `pom` when no single jar is built
    Packaging,
    /// Whether source jars are skipped
    NoSources,
    /// Whether the single jar is skipped
    NoSpringBoot,
    /// Extra `<plugin>` fragments for OS packages
    Plugins,
}

impl Placeholder {
    /// Every placeholder, in no particular order; substitution does not depend on it.
    pub const ALL: [Placeholder; 11] = [
        Placeholder::Dependencies,
        Placeholder::Exclusions,
        Placeholder::Repositories,
        Placeholder::OutputDir,
        Placeholder::Name,
        Placeholder::Version,
        Placeholder::MainClass,
        Placeholder::Packaging,
        Placeholder::NoSources,
        Placeholder::NoSpringBoot,
        Placeholder::Plugins,
    ];

    /// Returns the literal marker in the template.
    pub fn token(self) -> &'static str {
        match self {
            Placeholder::Dependencies => "<!-- dependencies -->",
            Placeholder::Exclusions => "<!-- exclusions -->",
            Placeholder::Repositories => "<!-- repositories -->",
            Placeholder::OutputDir => "<!-- outputdir -->",
            Placeholder::Name => "<!-- name -->",
            Placeholder::Version => "<!-- version -->",
            Placeholder::MainClass => "<!-- mainclass -->",
            Placeholder::Packaging => "<!-- packaging -->",
            Placeholder::NoSources => "<!-- nosources -->",
            Placeholder::NoSpringBoot => "<!-- nospringboot -->",
            Placeholder::Plugins => "<!-- plugins -->",
        }
    }

    /// Renders the replacement text, or `None` to leave the marker in place.
    pub fn render(self, ctx: &RenderContext<'_>) -> Option<String> {
        let config = ctx.config;
        match self {
            Placeholder::Dependencies => Some(blocks::dependencies(config)),
            Placeholder::Exclusions => Some(blocks::exclusions(config.exclusions(), 0)),
            Placeholder::Repositories => Some(blocks::repositories(config.repositories())),
            Placeholder::OutputDir => {
                Some(blocks::escape(&ctx.output_dir.display().to_string()).into_owned())
            }
            Placeholder::Name => Some(blocks::escape(config.name()).into_owned()),
            Placeholder::Version => Some(blocks::escape(config.version()).into_owned()),
            Placeholder::MainClass => config.main_class().map(|c| blocks::escape(c).into_owned()),
            Placeholder::Packaging => Some(
                if config.skip_single_jar() { "pom" } else { "jar" }.to_string(),
            ),
            Placeholder::NoSources => Some(config.skip_sources().to_string()),
            Placeholder::NoSpringBoot => Some(config.skip_single_jar().to_string()),
            Placeholder::Plugins => Some(ctx.plugins.to_string()),
        }
    }
}

/// Inputs available to the rendering functions.
pub struct RenderContext<'a> {
    /// Configuration of this run
    pub config: &'a BuildConfiguration,
    /// Absolute build output directory
    pub output_dir: &'a Path,
    /// Pre-rendered plugin fragments
    pub plugins: &'a str,
}

/// Token/value pairs for every placeholder that resolves under `ctx`.
pub struct Substitutions {
    pairs: Vec<(&'static str, String)>,
}

impl Substitutions {
    /// Renders every placeholder once.
    pub fn new(ctx: &RenderContext<'_>) -> Self {
        let pairs = Placeholder::ALL
            .iter()
            .filter_map(|p| p.render(ctx).map(|value| (p.token(), value)))
            .collect();
        Self { pairs }
    }

    /// Replaces every resolvable marker in `line` in a single left-to-right pass.
    ///
    /// Inserted values are never rescanned, so a value that happens to contain a
    /// marker is emitted verbatim.
    pub fn apply<'l>(&self, line: &'l str) -> Cow<'l, str> {
        if !line.contains(MARKER) {
            return Cow::Borrowed(line);
        }

        let mut out = String::with_capacity(line.len());
        let mut rest = line;
        let mut changed = false;

        while let Some(pos) = rest.find(MARKER) {
            out.push_str(&rest[..pos]);
            let candidate = &rest[pos..];
            match self.pairs.iter().find(|(token, _)| candidate.starts_with(token)) {
                Some((token, value)) => {
                    out.push_str(value);
                    rest = &candidate[token.len()..];
                    changed = true;
                }
                None => {
                    out.push_str(MARKER);
                    rest = &candidate[MARKER.len()..];
                }
            }
        }
        out.push_str(rest);

        if changed {
            Cow::Owned(out)
        } else {
            Cow::Borrowed(line)
        }
    }
}
