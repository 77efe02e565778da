//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`verstamp stamp`, `verstamp check`)
//! - Shared config loading through [`ProjectContext`]
//! - Injectable probes, so commands run in tests without git or Python

pub mod build;
pub mod check;
pub mod context;
pub mod dispatcher;
pub mod resolve;
pub mod show;
pub mod stamp;

pub use build::BuildCommand;
pub use check::CheckCommand;
pub use context::{ConfigOverrides, ProjectContext};
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use resolve::ResolveCommand;
pub use show::ShowCommand;
pub use stamp::StampCommand;
