//! Pipeline scenarios against the library.
//!
//! Maven and Java are replaced by shell scripts where a run needs them.

use bootstrapp::bundler::{
    Bootstrapper, BuildConfiguration, BuildConfigurationBuilder, DebianSettings, DockerSettings,
    Error, PackageSettings, ToolchainSettings, template,
};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn demo_builder(root: &Path, dependencies: &[&str]) -> BuildConfigurationBuilder {
    BuildConfigurationBuilder::new()
        .project_root(root)
        .package_settings(PackageSettings {
            name: "demo".into(),
            version: "1.2".into(),
        })
        .dependencies(dependencies.iter().map(|d| d.to_string()).collect())
}

async fn demo_config(root: &Path, dependencies: &[&str]) -> BuildConfiguration {
    demo_builder(root, dependencies).build().await.unwrap()
}

async fn render_default(config: &BuildConfiguration) -> String {
    let rendered = template::render_bundled(config).await.unwrap();
    std::fs::read_to_string(rendered.path).unwrap()
}

#[tokio::test]
async fn single_dependency_against_default_template() {
    let dir = TempDir::new().unwrap();
    let config = demo_config(dir.path(), &["org.foo:bar:1.0"]).await;

    let rendered = template::render_bundled(&config).await.unwrap();
    assert_eq!(rendered.path, dir.path().join("pom.xml"));
    assert_eq!(rendered.output_dir, dir.path().join("output"));
    assert!(rendered.modified);

    let pom = std::fs::read_to_string(&rendered.path).unwrap();
    assert_eq!(pom.matches("<dependency>").count(), 1);
    assert!(pom.contains(
        "<dependency>\n      <groupId>org.foo</groupId>\n      <artifactId>bar</artifactId>\n      <version>1.0</version>\n    </dependency>"
    ));
    assert!(pom.contains("<artifactId>demo</artifactId>"));
    assert!(pom.contains("<version>1.2</version>"));
    assert!(pom.contains("<mainClass><!-- mainclass --></mainClass>"));
    assert!(!pom.contains("<!-- dependencies -->"));
    assert!(!pom.contains("<repositories>"));
}

#[tokio::test]
async fn one_entry_per_well_formed_dependency() {
    let dir = TempDir::new().unwrap();
    let coordinates = ["a:b:1", "c:d:2", "e:f:3", "g:h:4"];
    let config = demo_config(dir.path(), &coordinates).await;

    let pom = render_default(&config).await;
    assert_eq!(pom.matches("<dependency>").count(), coordinates.len());
    for coordinate in coordinates {
        let parts: Vec<_> = coordinate.split(':').collect();
        assert!(pom.contains(&format!("<groupId>{}</groupId>", parts[0])));
        assert!(pom.contains(&format!("<artifactId>{}</artifactId>", parts[1])));
    }
}

#[tokio::test]
async fn malformed_dependencies_are_dropped() {
    let dir = TempDir::new().unwrap();
    let config = demo_config(dir.path(), &["org.ok:ok:1", "too:few", "too:many:parts:here"]).await;

    let pom = render_default(&config).await;
    assert_eq!(pom.matches("<dependency>").count(), 1);
    assert!(pom.contains("<groupId>org.ok</groupId>"));
    assert!(!pom.contains("<groupId>too</groupId>"));
}

#[tokio::test]
async fn exclusions_are_attached_to_dependencies() {
    let dir = TempDir::new().unwrap();
    let config = demo_builder(dir.path(), &["a:b:1", "c:d:2"])
        .exclusions(vec!["log4j:log4j".into(), "broken".into()])
        .build()
        .await
        .unwrap();

    let pom = render_default(&config).await;
    assert_eq!(pom.matches("<exclusion>").count(), 2);
    assert!(!pom.contains("broken"));
}

#[tokio::test]
async fn xml_special_characters_are_escaped() {
    let dir = TempDir::new().unwrap();
    let config = BuildConfigurationBuilder::new()
        .project_root(dir.path())
        .package_settings(PackageSettings {
            name: "r&d".into(),
            version: "1<2".into(),
        })
        .dependencies(vec!["org.foo:bar:1.0".into()])
        .build()
        .await
        .unwrap();

    let pom = render_default(&config).await;
    assert!(pom.contains("<artifactId>r&amp;d</artifactId>"));
    assert!(pom.contains("<version>1&lt;2</version>"));
    assert!(!pom.contains("r&d"));
}

#[tokio::test]
async fn rerendering_the_output_is_stable() {
    let dir = TempDir::new().unwrap();
    let config = demo_builder(dir.path(), &["org.foo:bar:1.0"])
        .repositories(vec!["r;Repo;https://example.com/maven2".into()])
        .build()
        .await
        .unwrap();

    let first = render_default(&config).await;
    let template_copy = dir.path().join("again.xml");
    std::fs::write(&template_copy, &first).unwrap();

    let rendered = template::render_custom(&template_copy, &config).await.unwrap();
    let second = std::fs::read_to_string(rendered.path).unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn template_without_markers_is_copied_verbatim() {
    let dir = TempDir::new().unwrap();
    let config = demo_config(dir.path(), &["org.foo:bar:1.0"]).await;
    let content = "<project>\r\n  <!-- hand written -->\r\n</project>";
    let custom = dir.path().join("plain.xml");
    std::fs::write(&custom, content).unwrap();

    let rendered = template::render_custom(&custom, &config).await.unwrap();
    assert!(!rendered.modified);
    assert_eq!(std::fs::read_to_string(rendered.path).unwrap(), content);
}

#[tokio::test]
async fn custom_template_must_be_a_file() {
    let dir = TempDir::new().unwrap();
    let config = demo_config(dir.path(), &["org.foo:bar:1.0"]).await;

    assert!(template::render_custom(&dir.path().join("missing.xml"), &config).await.is_err());
    assert!(template::render_custom(dir.path(), &config).await.is_err());
}

#[tokio::test]
async fn container_without_base_image_fails_cleanly() {
    let dir = TempDir::new().unwrap();
    let config = demo_builder(dir.path(), &["org.foo:bar:1.0"])
        .main_class("demo.Main")
        .docker(DockerSettings::default())
        .build()
        .await
        .unwrap();

    let err = bootstrapp::bundler::platform::docker::generate(&config)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::MissingBaseImage));
    assert!(err.to_string().contains("no base image"));
    assert!(!dir.path().join("Dockerfile").exists());
    assert!(!dir.path().join("docker").exists());
}

#[tokio::test]
async fn main_class_stages_write_nothing_without_main_class() {
    use bootstrapp::bundler::platform::{linux, scripts};

    let dir = TempDir::new().unwrap();
    let config = demo_builder(dir.path(), &["org.foo:bar:1.0"])
        .debian(DebianSettings::default())
        .build()
        .await
        .unwrap();

    assert!(matches!(
        scripts::generate(&config).await,
        Err(Error::MissingMainClass { .. })
    ));
    assert!(matches!(
        linux::generate(&config).await,
        Err(Error::MissingMainClass { .. })
    ));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[cfg(unix)]
mod with_fake_toolchain {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    fn script(path: &Path, body: &str) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, format!("#!/bin/sh\n{body}\n")).unwrap();
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    /// Fake Maven that records its arguments and whether the OS package
    /// launch script already existed.
    fn toolchain(dir: &Path, exit_code: i32) -> ToolchainSettings {
        let maven = dir.join("maven");
        script(
            &maven.join("bin/mvn"),
            &format!(
                "echo \"$@\" > mvn-args.txt\n\
                 if [ -f linux/demo ]; then touch saw-launch-script; fi\n\
                 exit {exit_code}"
            ),
        );
        let java = dir.join("jdk");
        script(&java.join("bin/java"), "exit 0");

        ToolchainSettings {
            maven_home: Some(maven),
            java_home: Some(java),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn full_run_produces_all_artifacts() {
        let dir = TempDir::new().unwrap();
        let root: PathBuf = dir.path().join("app");
        let config = demo_builder(&root, &["org.foo:bar:1.0"])
            .toolchain(toolchain(dir.path(), 0))
            .main_class("demo.Main")
            .clean(true)
            .scripts(true)
            .launch(true)
            .debian(DebianSettings::default())
            .docker(DockerSettings {
                base_image: Some("openjdk:11".into()),
                instructions: None,
            })
            .build()
            .await
            .unwrap();

        let report = Bootstrapper::new(config).run().await.unwrap();

        assert_eq!(
            report.artifacts,
            vec![
                root.join("linux/demo"),
                root.join("linux/deb/control"),
                root.join("output/bin/start.sh"),
                root.join("output/bin/start.bat"),
                root.join("docker/demo"),
                root.join("Dockerfile"),
            ]
        );
        assert!(root.join("pom.xml").is_file());

        let pom = std::fs::read_to_string(root.join("pom.xml")).unwrap();
        assert!(pom.contains("<artifactId>jdeb</artifactId>"));
        assert!(pom.contains("<mainClass>demo.Main</mainClass>"));

        let args = std::fs::read_to_string(root.join("mvn-args.txt")).unwrap();
        assert!(args.starts_with("--batch-mode -f "));
        assert!(args.trim_end().ends_with("clean package jdeb:jdeb"));
        assert!(root.join("saw-launch-script").exists());
    }

    #[tokio::test]
    async fn failed_build_skips_packaging() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("app");
        let config = demo_builder(&root, &["org.foo:bar:1.0"])
            .toolchain(toolchain(dir.path(), 3))
            .main_class("demo.Main")
            .scripts(true)
            .build()
            .await
            .unwrap();

        let err = Bootstrapper::new(config).run().await.unwrap_err();
        assert!(matches!(err, Error::BuildFailed { code: Some(3), .. }));
        assert!(root.join("pom.xml").is_file());
        assert!(!root.join("output/bin").exists());
    }

    #[tokio::test]
    async fn misconfigured_stages_fail_before_the_build() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("app");
        let config = demo_builder(&root, &["org.foo:bar:1.0"])
            .toolchain(toolchain(dir.path(), 0))
            .scripts(true)
            .docker(DockerSettings::default())
            .build()
            .await
            .unwrap();

        let err = Bootstrapper::new(config).run().await.unwrap_err();
        assert!(matches!(err, Error::MissingMainClass { .. }));
        assert!(!root.join("mvn-args.txt").exists());
        assert!(!root.join("pom.xml").exists());

        let config = demo_builder(&root, &["org.foo:bar:1.0"])
            .toolchain(toolchain(dir.path(), 0))
            .main_class("demo.Main")
            .docker(DockerSettings::default())
            .build()
            .await
            .unwrap();

        let err = Bootstrapper::new(config).run().await.unwrap_err();
        assert!(matches!(err, Error::MissingBaseImage));
        assert!(!root.join("mvn-args.txt").exists());
    }

    #[tokio::test]
    async fn compressed_layout_puts_scripts_in_root() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("app");
        let config = demo_builder(&root, &["org.foo:bar:1.0"])
            .toolchain(toolchain(dir.path(), 0))
            .main_class("demo.Main")
            .scripts(true)
            .compress_output(true)
            .build()
            .await
            .unwrap();

        let report = Bootstrapper::new(config).run().await.unwrap();
        assert_eq!(report.descriptor.output_dir, root);
        assert!(root.join("bin/start.sh").is_file());

        let pom = std::fs::read_to_string(root.join("pom.xml")).unwrap();
        assert!(pom.contains(&format!(
            "<bootstrapp.outputdir>{}</bootstrapp.outputdir>",
            root.display()
        )));
    }
}
