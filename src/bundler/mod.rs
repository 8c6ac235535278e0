//! Maven-backed application bootstrapping.
//!
//! Turns a list of dependency coordinates into a runnable application tree:
//! renders a `pom.xml`, lets Maven resolve and copy the jars, then writes
//! start scripts and the inputs for OS packages and container images.
//!
//! # Example
//!
//! ```no_run
//! use bootstrapp::bundler::{Bootstrapper, BuildConfigurationBuilder, PackageSettings};
//!
//! # async fn example() -> bootstrapp::bundler::Result<()> {
//! let config = BuildConfigurationBuilder::new()
//!     .project_root("./weka")
//!     .package_settings(PackageSettings {
//!         name: "weka".into(),
//!         version: "3.8.4".into(),
//!     })
//!     .dependencies(vec!["nz.ac.waikato.cms.weka:weka-stable:3.8.4".into()])
//!     .main_class("weka.gui.GUIChooser")
//!     .scripts(true)
//!     .build()
//!     .await?;
//!
//! Bootstrapper::new(config).run().await?;
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod error;
pub mod platform;
pub mod resources;
pub mod settings;
pub mod template;
pub mod toolchain;
pub mod utils;

pub use builder::{Bootstrapper, PipelineReport};
pub use error::{Error, Result};
pub use settings::{
    BuildConfiguration, BuildConfigurationBuilder, DebianSettings, DockerSettings,
    PackageSettings, RpmSettings, ToolchainSettings, ToolchainSource,
};
pub use template::RenderedDescriptor;
pub use toolchain::ResolvedToolchain;
