//! Build command implementation.
//!
//! The default command: stamp the version files, then run the dependency
//! gate. Unmet dependencies only fail the build under `--strict`.

use super::check::check_dependencies;
use super::context::ProjectContext;
use super::dispatcher::{Command, CommandResult};
use super::stamp::stamp_project;
use crate::cli::args::BuildArgs;
use crate::deps::CapabilityProbe;
use crate::error::Result;
use crate::pipeline::BuildPipeline;
use crate::ui::UserInterface;
use crate::version::RevisionProbe;

/// The build command.
pub struct BuildCommand {
    context: ProjectContext,
    args: BuildArgs,
    revision_probe: Option<Box<dyn RevisionProbe>>,
    dependency_probe: Option<Box<dyn CapabilityProbe>>,
}

impl BuildCommand {
    /// Create a new build command.
    pub fn new(context: &ProjectContext, args: BuildArgs) -> Self {
        Self {
            context: context.clone(),
            args,
            revision_probe: None,
            dependency_probe: None,
        }
    }

    /// Use `probe` instead of asking git.
    pub fn with_revision_probe(mut self, probe: Box<dyn RevisionProbe>) -> Self {
        self.revision_probe = Some(probe);
        self
    }

    /// Use `probe` instead of the configured interpreter.
    pub fn with_dependency_probe(mut self, probe: Box<dyn CapabilityProbe>) -> Self {
        self.dependency_probe = Some(probe);
        self
    }
}

impl Command for BuildCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(config) = self.context.load_config_or_report(ui)? else {
            return Ok(CommandResult::failure(2));
        };

        let git = self.context.revision_probe(&config);
        let revision_probe: &dyn RevisionProbe = match &self.revision_probe {
            Some(probe) => probe.as_ref(),
            None => &git,
        };
        let python = self.context.dependency_probe(&config);
        let dependency_probe: &dyn CapabilityProbe = match &self.dependency_probe {
            Some(probe) => probe.as_ref(),
            None => &python,
        };

        let pipeline = BuildPipeline::new(&config, self.context.project_root(), revision_probe);
        stamp_project(&pipeline, !self.args.no_recipe, self.context.project_root(), ui)?;

        let satisfied = check_dependencies(dependency_probe, ui);
        if !satisfied && self.args.strict {
            return Ok(CommandResult::failure(1));
        }
        Ok(CommandResult::success())
    }
}
