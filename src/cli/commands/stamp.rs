//! Stamp command implementation.

use std::path::Path;

use super::context::ProjectContext;
use super::dispatcher::{Command, CommandResult};
use crate::cli::args::StampArgs;
use crate::error::Result;
use crate::pipeline::{BuildPipeline, StampOutcome};
use crate::ui::UserInterface;
use crate::version::{RevisionProbe, UNKNOWN_REVISION};

/// The stamp command: resolve the version and write the generated files.
pub struct StampCommand {
    context: ProjectContext,
    args: StampArgs,
    revision_probe: Option<Box<dyn RevisionProbe>>,
}

impl StampCommand {
    /// Create a new stamp command.
    pub fn new(context: &ProjectContext, args: StampArgs) -> Self {
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

impl Command for StampCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(config) = self.context.load_config_or_report(ui)? else {
            return Ok(CommandResult::failure(2));
        };

        let git = self.context.revision_probe(&config);
        let probe: &dyn RevisionProbe = match &self.revision_probe {
            Some(probe) => probe.as_ref(),
            None => &git,
        };

        let pipeline = BuildPipeline::new(&config, self.context.project_root(), probe);
        stamp_project(&pipeline, !self.args.no_recipe, self.context.project_root(), ui)?;

        Ok(CommandResult::success())
    }
}

/// Run the stamping steps and tell the user what was written.
pub(super) fn stamp_project(
    pipeline: &BuildPipeline<'_>,
    write_recipe: bool,
    project_root: &Path,
    ui: &mut dyn UserInterface,
) -> Result<StampOutcome> {
    let outcome = pipeline.stamp(write_recipe)?;

    if outcome.record.revision() == UNKNOWN_REVISION {
        ui.warning("Could not determine the git revision; recording 'Unknown'");
    }

    ui.success(&format!(
        "Wrote {} ({})",
        relative(&outcome.version_file, project_root).display(),
        outcome.resolved.full_version
    ));
    if let Some(recipe) = &outcome.recipe_file {
        ui.success(&format!(
            "Updated recipe header in {}",
            relative(recipe, project_root).display()
        ));
    }

    Ok(outcome)
}

pub(super) fn relative<'a>(path: &'a Path, root: &Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VerstampError;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    struct FixedRevision(&'static str);

    impl RevisionProbe for FixedRevision {
        fn probe(&self) -> String {
            self.0.to_string()
        }
    }

    fn project(config: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("verstamp.yml"), config).unwrap();
        temp
    }

    fn command(temp: &TempDir, args: StampArgs, revision: &'static str) -> StampCommand {
        StampCommand::new(&ProjectContext::new(temp.path()), args)
            .with_revision_probe(Box::new(FixedRevision(revision)))
    }

    #[test]
    fn stamp_writes_version_file() {
        let temp = project("base_version: 0.2.2\ndev_build: 1\n");
        let mut ui = MockUI::new();

        let result = command(&temp, StampArgs::default(), "abcdef0123456789")
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        let content = fs::read_to_string(temp.path().join("version.py")).unwrap();
        assert!(content.contains("full_version = '0.2.2.dev1-abcdef0'"));
        assert!(ui.successes()[0].contains("version.py (0.2.2.dev1-abcdef0)"));
        assert!(ui.warnings().is_empty());
    }

    #[test]
    fn stamp_updates_recipe_unless_disabled() {
        let temp = project("base_version: 0.2.2\nrecipe_file: meta.yaml\n");
        let recipe = "{% set short_version = 'x' %}\n{% set build_number = 'x' %}\nbody\n";
        fs::write(temp.path().join("meta.yaml"), recipe).unwrap();

        let mut ui = MockUI::new();
        let args = StampArgs { no_recipe: true };
        command(&temp, args, "abcdef0123456789").execute(&mut ui).unwrap();
        assert_eq!(fs::read_to_string(temp.path().join("meta.yaml")).unwrap(), recipe);

        command(&temp, StampArgs::default(), "abcdef0123456789")
            .execute(&mut ui)
            .unwrap();
        let updated = fs::read_to_string(temp.path().join("meta.yaml")).unwrap();
        assert!(updated.starts_with("{% set short_version = '0.2.2' %}\n"));
        assert!(ui.successes().iter().any(|s| s.contains("meta.yaml")));
    }

    #[test]
    fn stamp_warns_on_unknown_revision() {
        let temp = project("base_version: 0.2.2\n");
        let mut ui = MockUI::new();

        command(&temp, StampArgs::default(), UNKNOWN_REVISION)
            .execute(&mut ui)
            .unwrap();

        assert_eq!(ui.warnings().len(), 1);
        let content = fs::read_to_string(temp.path().join("version.py")).unwrap();
        assert!(content.contains("full_version = '0.2.2-Unknown'"));
    }

    #[test]
    fn stamp_without_config_fails() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let result = command(&temp, StampArgs::default(), "abc")
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 2);
        assert!(!temp.path().join("version.py").exists());
    }

    #[test]
    fn stamp_into_missing_directory_is_an_io_error() {
        let temp = project("base_version: 0.2.2\nversion_file: missing/version.py\n");
        let mut ui = MockUI::new();

        let err = command(&temp, StampArgs::default(), "abc")
            .execute(&mut ui)
            .unwrap_err();

        assert!(matches!(err, VerstampError::MetadataIo { .. }));
    }
}
