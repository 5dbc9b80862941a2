//! Commentscope CLI library - command definitions and execution.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use error::{CliError, Result};
pub use output::Reporter;
