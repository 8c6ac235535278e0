//! Command line argument parsing and validation.
//!
//! Flags map one to one onto [`BuildConfigurationBuilder`] setters.

use crate::bundler::{
    BuildConfiguration, BuildConfigurationBuilder, DebianSettings, DockerSettings,
    PackageSettings, Result as BundlerResult, RpmSettings, ToolchainSettings, ToolchainSource,
};
use clap::Parser;
use std::path::PathBuf;

/// Bootstraps Java applications from Maven coordinates
#[derive(Parser, Debug)]
#[command(
    name = "bootstrapp",
    version,
    about = "Bootstraps Java applications from Maven dependencies",
    long_about = "Generates a pom.xml from Maven coordinates, lets Maven download the jars \
and optionally creates start scripts, Debian/RPM packages and a Dockerfile.

Usage:
  bootstrapp -o ./weka -d nz.ac.waikato.cms.weka:weka-stable:3.8.4 -c weka.gui.GUIChooser -e
  bootstrapp -o ./app --dependency-file deps.txt -c org.example.Main --debian --redhat
  bootstrapp -o ./app -d org.example:app:1.0 -c org.example.Main --docker --docker-base-image openjdk:11

Exit codes: 0 success, 1 invalid arguments, 2 pipeline failure."
)]
pub struct Args {
    /// Local Maven installation to use instead of the cached one
    #[arg(short = 'm', long, value_name = "DIR")]
    pub maven_home: Option<PathBuf>,

    /// Java home for the Maven build and the launch
    #[arg(short = 'j', long, value_name = "DIR")]
    pub java_home: Option<PathBuf>,

    /// Root of the toolchain cache
    #[arg(long, value_name = "DIR", env = "BOOTSTRAPP_HOME")]
    pub toolchain_cache: Option<PathBuf>,

    /// Maven binary zip to install from instead of downloading it
    #[arg(long, value_name = "ZIP")]
    pub maven_archive: Option<PathBuf>,

    /// Maven settings.xml passed to the build
    #[arg(long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Directory to bootstrap the application in
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output_dir: PathBuf,

    /// Project name
    #[arg(short = 'n', long, default_value = "bootstrapp")]
    pub name: String,

    /// Project version
    #[arg(long = "app-version", value_name = "VERSION", default_value = "0.0.1")]
    pub app_version: String,

    /// Maven dependency (group:artifact:version), repeatable
    #[arg(short = 'd', long = "dependency", value_name = "COORDINATE")]
    pub dependencies: Vec<String>,

    /// File with one dependency per line, repeatable
    #[arg(long = "dependency-file", value_name = "FILE")]
    pub dependency_files: Vec<PathBuf>,

    /// Dependency to exclude (group:artifact), repeatable
    #[arg(short = 'x', long = "exclusion", value_name = "COORDINATE")]
    pub exclusions: Vec<String>,

    /// File with one exclusion per line, repeatable
    #[arg(long = "exclusion-file", value_name = "FILE")]
    pub exclusion_files: Vec<PathBuf>,

    /// Additional repository (id;name;url), repeatable
    #[arg(short = 'r', long = "repository", value_name = "REPOSITORY")]
    pub repositories: Vec<String>,

    /// File with one repository per line, repeatable
    #[arg(long = "repository-file", value_name = "FILE")]
    pub repository_files: Vec<PathBuf>,

    /// External jar, or a directory of jars, repeatable
    #[arg(long = "external-jar", value_name = "PATH")]
    pub external_jars: Vec<PathBuf>,

    /// External source jar, or a directory of them, repeatable
    #[arg(long = "external-sources", value_name = "PATH")]
    pub external_sources: Vec<PathBuf>,

    /// Alternative pom.xml template
    #[arg(short = 'p', long, value_name = "FILE")]
    pub pom_template: Option<PathBuf>,

    /// Main class for scripts, packages and launching
    #[arg(short = 'c', long, value_name = "CLASS")]
    pub main_class: Option<String>,

    /// JVM argument, repeatable
    #[arg(short = 'v', long = "jvm", value_name = "ARG", allow_hyphen_values = true)]
    pub jvm: Vec<String>,

    /// Run `clean` before `package`
    #[arg(long)]
    pub clean: bool,

    /// Download source jars as well
    #[arg(short = 's', long)]
    pub sources: bool,

    /// Generate bin/start.sh and bin/start.bat
    #[arg(short = 'e', long)]
    pub scripts: bool,

    /// Build a single executable jar with spring-boot
    #[arg(short = 'b', long)]
    pub spring_boot: bool,

    /// Build a Debian package
    #[arg(long)]
    pub debian: bool,

    /// Custom jdeb <plugin> snippet
    #[arg(long, value_name = "FILE")]
    pub debian_snippet: Option<PathBuf>,

    /// Build an RPM package
    #[arg(long)]
    pub redhat: bool,

    /// Custom rpm-maven-plugin <plugin> snippet
    #[arg(long, value_name = "FILE")]
    pub redhat_snippet: Option<PathBuf>,

    /// Generate a Dockerfile
    #[arg(long)]
    pub docker: bool,

    /// Base image for the Dockerfile
    #[arg(long, value_name = "IMAGE")]
    pub docker_base_image: Option<String>,

    /// File with instructions inserted after FROM
    #[arg(long, value_name = "FILE")]
    pub docker_instructions: Option<PathBuf>,

    /// Put lib/, src/ and bin/ directly into the output directory
    #[arg(short = 'z', long)]
    pub compress_dir_structure: bool,

    /// Launch the main class after bootstrapping
    #[arg(short = 'l', long)]
    pub launch: bool,

    /// Show debug output
    #[arg(long)]
    pub verbose: bool,
}

impl Args {
    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.dependencies.is_empty()
            && self.dependency_files.is_empty()
            && self.external_jars.is_empty()
        {
            return Err(
                "at least one --dependency, --dependency-file or --external-jar is required"
                    .to_string(),
            );
        }

        if self.name.trim().is_empty() {
            return Err("--name must not be empty".to_string());
        }

        let dangling = [
            ("--debian-snippet", self.debian_snippet.is_some(), "--debian", self.debian),
            ("--redhat-snippet", self.redhat_snippet.is_some(), "--redhat", self.redhat),
            ("--docker-base-image", self.docker_base_image.is_some(), "--docker", self.docker),
            ("--docker-instructions", self.docker_instructions.is_some(), "--docker", self.docker),
        ];
        for (option, given, switch, enabled) in dangling {
            if given && !enabled {
                return Err(format!("{} requires {}", option, switch));
            }
        }

        if self.maven_home.is_some() && self.maven_archive.is_some() {
            return Err("--maven-home and --maven-archive are mutually exclusive".to_string());
        }

        Ok(())
    }

    /// Converts the arguments into a configuration builder.
    pub fn to_builder(&self) -> BuildConfigurationBuilder {
        let source = match &self.maven_archive {
            Some(archive) => ToolchainSource::Archive(archive.clone()),
            None => ToolchainSource::default(),
        };

        let mut builder = BuildConfigurationBuilder::new()
            .project_root(&self.output_dir)
            .package_settings(PackageSettings {
                name: self.name.clone(),
                version: self.app_version.clone(),
            })
            .toolchain(ToolchainSettings {
                maven_home: self.maven_home.clone(),
                java_home: self.java_home.clone(),
                cache_root: self.toolchain_cache.clone(),
                source,
                user_settings: self.settings.clone(),
            })
            .compress_output(self.compress_dir_structure)
            .dependencies(self.dependencies.clone())
            .dependency_files(self.dependency_files.clone())
            .exclusions(self.exclusions.clone())
            .exclusion_files(self.exclusion_files.clone())
            .repositories(self.repositories.clone())
            .repository_files(self.repository_files.clone())
            .external_jars(self.external_jars.clone())
            .external_sources(self.external_sources.clone())
            .jvm_args(self.jvm.clone())
            .sources(self.sources)
            .single_jar(self.spring_boot)
            .clean(self.clean)
            .scripts(self.scripts)
            .launch(self.launch);

        if let Some(template) = &self.pom_template {
            builder = builder.pom_template(template);
        }
        if let Some(main_class) = &self.main_class {
            builder = builder.main_class(main_class.clone());
        }
        if self.debian {
            builder = builder.debian(DebianSettings {
                custom_snippet: self.debian_snippet.clone(),
            });
        }
        if self.redhat {
            builder = builder.rpm(RpmSettings {
                custom_snippet: self.redhat_snippet.clone(),
            });
        }
        if self.docker {
            builder = builder.docker(DockerSettings {
                base_image: self.docker_base_image.clone(),
                instructions: self.docker_instructions.clone(),
            });
        }

        builder
    }

    /// Builds the immutable configuration, reading coordinate files.
    pub async fn build_configuration(&self) -> BundlerResult<BuildConfiguration> {
        self.to_builder().build().await
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for colored terminal output
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self {
            output: super::OutputManager::new(args.verbose, false),
        }
    }
}

impl RuntimeConfig {
    /// Print verbose message if in verbose mode
    pub fn verbose_println(&self, message: &str) -> std::io::Result<()> {
        self.output.verbose(message)
    }

    /// Print success message
    pub fn success(&self, message: &str) -> std::io::Result<()> {
        self.output.success(message)
    }

    /// Print warning message
    pub fn warn(&self, message: &str) -> std::io::Result<()> {
        self.output.warn(message)
    }

    /// Print progress message
    pub fn progress(&self, message: &str) -> std::io::Result<()> {
        self.output.progress(message)
    }

    /// Print section header
    pub fn section(&self, title: &str) -> std::io::Result<()> {
        self.output.section(title)
    }

    /// Print indented text
    pub fn indent(&self, message: &str) -> std::io::Result<()> {
        self.output.indent(message)
    }
}
