//! Command-line interface.
//!
//! This module provides:
//! - [`Cli`] and [`Commands`] - clap argument definitions
//! - [`CommandDispatcher`] - routing from parsed args to command
//!   implementations

pub mod args;
pub mod commands;

pub use args::{AnalyzeArgs, Cli, Commands, CompletionsArgs, InitArgs};
pub use commands::dispatcher::{Command, CommandDispatcher, CommandResult};
