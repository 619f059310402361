// src/presentation/cli/mod.rs
pub mod args;
pub mod error;
pub mod handlers;
pub mod output;

pub use args::{Cli, Command};
pub use error::{CliError, CliResult};
pub use output::Output;
