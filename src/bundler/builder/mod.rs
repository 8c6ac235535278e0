//! Pipeline orchestration and the Maven build.
//!
//! # Module Organization
//!
//! - [`orchestrator`] - the [`Bootstrapper`] that sequences every stage
//! - [`invoker`] - goal list and Maven command construction

pub mod invoker;
mod orchestrator;

pub use orchestrator::{Bootstrapper, PipelineReport};
