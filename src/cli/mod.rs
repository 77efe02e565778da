//! Command-line interface for verstamp.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{BuildArgs, CheckArgs, Cli, Commands, ResolveArgs, ShowArgs, StampArgs};
pub use commands::{Command, CommandDispatcher, CommandResult, ConfigOverrides, ProjectContext};
