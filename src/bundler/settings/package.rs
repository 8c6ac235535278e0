//! Project metadata.

/// Name and version of the bootstrapped application.
///
/// Both end up in the rendered `pom.xml` and name the generated launch
/// scripts, OS packages and container image.
///
/// # Examples
///
/// ```
/// use bootstrapp::bundler::PackageSettings;
///
/// let package = PackageSettings {
///     name: "weka".into(),
///     version: "3.9.4".into(),
/// };
/// assert_eq!(package.name, "weka");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSettings {
    /// Project name.
    ///
    /// Used as Maven artifactId, launch script name and install directory
    /// (`/usr/lib/<name>`).
    pub name: String,

    /// Project version.
    ///
    /// Example: "0.0.1", "3.9.4"
    pub version: String,
}

impl Default for PackageSettings {
    fn default() -> Self {
        Self {
            name: "bootstrapp".into(),
            version: "0.0.1".into(),
        }
    }
}
