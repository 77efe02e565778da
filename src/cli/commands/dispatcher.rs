//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::Path;

use super::context::{ConfigOverrides, ProjectContext};
use crate::cli::args::{BuildArgs, Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    context: ProjectContext,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project context.
    pub fn new(context: ProjectContext) -> Self {
        Self { context }
    }

    /// Create a dispatcher from parsed arguments.
    pub fn from_cli(project_root: &Path, cli: &Cli) -> Self {
        let context = ProjectContext::new(project_root)
            .with_config_path(cli.config.clone())
            .with_overrides(ConfigOverrides {
                dev_build: cli.dev_build.clone(),
                released: cli.released,
            });
        Self::new(context)
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        self.context.project_root()
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Build(args)) => {
                let cmd = super::build::BuildCommand::new(&self.context, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Stamp(args)) => {
                let cmd = super::stamp::StampCommand::new(&self.context, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Resolve(args)) => {
                let cmd = super::resolve::ResolveCommand::new(&self.context, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Show(args)) => {
                let cmd = super::show::ShowCommand::new(&self.context, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Check(args)) => {
                let cmd = super::check::CheckCommand::new(&self.context, args.clone());
                cmd.execute(ui)
            }
            None => {
                // Default to build with default args
                let cmd = super::build::BuildCommand::new(&self.context, BuildArgs::default());
                cmd.execute(ui)
            }
        }
    }
}
