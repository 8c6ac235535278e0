//! Handlebars templates for generated files.
//!
//! These cover the files the pipeline writes on its own: plugin fragments for
//! the OS package goals, the Debian control file, launch scripts and the
//! Dockerfile. User-facing descriptor templates never go through handlebars.

use crate::bundler::error::{Error, Result};
use handlebars::Handlebars;
use std::collections::BTreeMap;

/// Template data: flat string values keyed by name.
pub type SnippetData = BTreeMap<&'static str, String>;

/// jdeb plugin declaration.
pub const JDEB_PLUGIN: &str = r#"<plugin>
        <groupId>org.vafer</groupId>
        <artifactId>jdeb</artifactId>
        <version>1.8</version>
        <configuration>
          <deb>{{project_root}}/{{name}}_{{version}}_all.deb</deb>
          <controlDir>{{control_dir}}</controlDir>
          <skipPOMs>false</skipPOMs>
          <dataSet>
            <data>
              <src>{{lib_dir}}</src>
              <type>directory</type>
              <mapper>
                <type>perm</type>
                <prefix>/usr/lib/{{name}}</prefix>
              </mapper>
            </data>
            <data>
              <src>{{script}}</src>
              <type>file</type>
              <mapper>
                <type>perm</type>
                <prefix>/usr/bin</prefix>
                <filemode>755</filemode>
              </mapper>
            </data>
          </dataSet>
        </configuration>
      </plugin>"#;

/// rpm-maven-plugin declaration.
pub const RPM_PLUGIN: &str = r#"<plugin>
        <groupId>org.codehaus.mojo</groupId>
        <artifactId>rpm-maven-plugin</artifactId>
        <version>2.2.0</version>
        <configuration>
          <name>{{name}}</name>
          <group>Applications/Engineering</group>
          <workarea>{{project_root}}/rpm</workarea>
          <mappings>
            <mapping>
              <directory>/usr/lib/{{name}}</directory>
              <sources>
                <source>
                  <location>{{lib_dir}}</location>
                </source>
              </sources>
            </mapping>
            <mapping>
              <directory>/usr/bin</directory>
              <filemode>755</filemode>
              <directoryIncluded>false</directoryIncluded>
              <sources>
                <source>
                  <location>{{script}}</location>
                </source>
              </sources>
            </mapping>
          </mappings>
        </configuration>
      </plugin>"#;

/// Debian control file consumed by jdeb.
pub const DEB_CONTROL: &str = "Package: {{name}}
Version: {{version}}
Section: java
Priority: optional
Architecture: all
Maintainer: {{name}} maintainers <root@localhost>
Depends: default-jre-headless | java8-runtime-headless
Description: {{name}} {{version}}
";

/// Renders `template` with `data`, without HTML escaping.
pub fn render(name: &'static str, template: &str, data: &SnippetData) -> Result<String> {
    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(handlebars::no_escape);
    handlebars.set_strict_mode(true);

    handlebars
        .render_template(template, data)
        .map_err(|source| Error::Render { name, source })
}
