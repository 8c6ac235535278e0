//! Command execution for the CLI.

mod bootstrap;

pub use bootstrap::execute;
