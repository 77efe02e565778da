//! Resolve command implementation.

use super::context::ProjectContext;
use super::dispatcher::{Command, CommandResult};
use crate::cli::args::ResolveArgs;
use crate::error::Result;
use crate::pipeline::BuildPipeline;
use crate::ui::UserInterface;
use crate::version::RevisionProbe;

/// The resolve command: compute the version and print it, writing nothing.
pub struct ResolveCommand {
    context: ProjectContext,
    args: ResolveArgs,
    revision_probe: Option<Box<dyn RevisionProbe>>,
}

impl ResolveCommand {
    /// Create a new resolve command.
    pub fn new(context: &ProjectContext, args: ResolveArgs) -> Self {
        Self {
            context: context.clone(),
            args,
            revision_probe: None,
        }
    }

    /// Use `probe` instead of asking git.
    pub fn with_revision_probe(mut self, probe: Box<dyn RevisionProbe>) -> Self {
        self.revision_probe = Some(probe);
        self
    }
}

impl Command for ResolveCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(config) = self.context.load_config_or_report(ui)? else {
            return Ok(CommandResult::failure(2));
        };

        let git = self.context.revision_probe(&config);
        let probe: &dyn RevisionProbe = match &self.revision_probe {
            Some(probe) => probe.as_ref(),
            None => &git,
        };

        let (_, resolved) = BuildPipeline::new(&config, self.context.project_root(), probe).resolve()?;

        if self.args.json {
            let json = serde_json::to_string_pretty(&resolved).map_err(anyhow::Error::from)?;
            ui.message(&json);
        } else {
            ui.message(&format!("Version:      {}", resolved.short_version));
            ui.message(&format!("Full version: {}", resolved.full_version));
            ui.message(&format!("Revision:     {}", resolved.git_revision));
            ui.message(&format!(
                "Release:      {}",
                if resolved.released { "yes" } else { "no" }
            ));
        }

        Ok(CommandResult::success())
    }
}
