//! Show command implementation.

use super::context::ProjectContext;
use super::dispatcher::{Command, CommandResult};
use super::stamp::relative;
use crate::cli::args::ShowArgs;
use crate::error::Result;
use crate::metadata::read_version_file;
use crate::ui::UserInterface;

/// The show command: print the fields of the generated version file.
pub struct ShowCommand {
    context: ProjectContext,
    args: ShowArgs,
}

impl ShowCommand {
    /// Create a new show command.
    pub fn new(context: &ProjectContext, args: ShowArgs) -> Self {
        Self {
            context: context.clone(),
            args,
        }
    }
}

impl Command for ShowCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(config) = self.context.load_config_or_report(ui)? else {
            return Ok(CommandResult::failure(2));
        };

        let path = config.version_file_path(self.context.project_root());
        if !path.exists() {
            ui.error(&format!(
                "No version file at {}. Run `verstamp stamp` first.",
                relative(&path, self.context.project_root()).display()
            ));
            return Ok(CommandResult::failure(1));
        }

        let metadata = read_version_file(&path)?;

        if self.args.json {
            let json = serde_json::to_string_pretty(&metadata).map_err(anyhow::Error::from)?;
            ui.message(&json);
        } else {
            ui.message(&format!("short_version = {}", metadata.short_version));
            ui.message(&format!("build_number  = {}", metadata.build_number));
            ui.message(&format!("version       = {}", metadata.version));
            ui.message(&format!("full_version  = {}", metadata.full_version));
            ui.message(&format!("git_revision  = {}", metadata.git_revision));
            ui.message(&format!("release       = {}", metadata.release));
        }

        Ok(CommandResult::success())
    }
}
