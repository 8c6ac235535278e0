//! Linux package settings.

use std::path::PathBuf;

/// Debian package (.deb) configuration.
///
/// When present, the build runs the `jdeb:jdeb` goal after `package`. The
/// jdeb plugin declaration is injected into the descriptor, either the
/// generated default or the verbatim contents of `custom_snippet`.
///
/// # See Also
///
/// - [`RpmSettings`] - RPM package configuration
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DebianSettings {
    /// File with a custom `<plugin>` XML fragment for the jdeb plugin.
    ///
    /// Default: None (generated)
    pub custom_snippet: Option<PathBuf>,
}

/// RPM package (.rpm) configuration.
///
/// When present, the build runs the `rpm:rpm` goal after `package`, with the
/// rpm-maven-plugin declaration injected into the descriptor.
///
/// # See Also
///
/// - [`DebianSettings`] - Debian package configuration
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RpmSettings {
    /// File with a custom `<plugin>` XML fragment for the rpm-maven-plugin.
    ///
    /// Default: None (generated)
    pub custom_snippet: Option<PathBuf>,
}
