//! Check command implementation.

use super::context::ProjectContext;
use super::dispatcher::{Command, CommandResult};
use crate::cli::args::CheckArgs;
use crate::deps::{builtin_dependencies, format_report, CapabilityProbe, DependencyGate};
use crate::error::Result;
use crate::ui::UserInterface;

/// The check command: evaluate the runtime dependency gate.
pub struct CheckCommand {
    context: ProjectContext,
    args: CheckArgs,
    probe: Option<Box<dyn CapabilityProbe>>,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(context: &ProjectContext, args: CheckArgs) -> Self {
        Self {
            context: context.clone(),
            args,
            probe: None,
        }
    }

    /// Use `probe` instead of the configured interpreter.
    pub fn with_probe(mut self, probe: Box<dyn CapabilityProbe>) -> Self {
        self.probe = Some(probe);
        self
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(config) = self.context.load_config_or_report(ui)? else {
            return Ok(CommandResult::failure(2));
        };

        let python = self.context.dependency_probe(&config);
        let probe: &dyn CapabilityProbe = match &self.probe {
            Some(probe) => probe.as_ref(),
            None => &python,
        };

        let satisfied = check_dependencies(probe, ui);
        if !satisfied && self.args.strict {
            return Ok(CommandResult::failure(1));
        }
        Ok(CommandResult::success())
    }
}

/// Check the built-in dependencies and report the unmet ones.
///
/// Returns whether every dependency was satisfied.
pub(super) fn check_dependencies(probe: &dyn CapabilityProbe, ui: &mut dyn UserInterface) -> bool {
    let specs = builtin_dependencies();
    let results = DependencyGate::new(probe).check(&specs);

    if ui.output_mode().shows_details() {
        for result in results.iter().filter(|r| r.is_satisfied()) {
            let version = result.installed_version.as_deref().unwrap_or("version unknown");
            ui.message(&format!("  {} {}", result.spec.name, version));
        }
    }

    ui.report(&format_report(&results));

    let unmet = results.iter().filter(|r| !r.is_satisfied()).count();
    if unmet == 0 {
        ui.success("All runtime dependencies satisfied");
        true
    } else {
        ui.warning(&format!(
            "{} of {} runtime dependencies unmet",
            unmet,
            results.len()
        ));
        false
    }
}
