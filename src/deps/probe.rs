//! Capability probes.
//!
//! A [`CapabilityProbe`] answers one question for the gate: is this
//! dependency present, and if so what version does it report? The gate never
//! introspects anything itself, so tests substitute fake probes.

use crate::deps::spec::DependencySpec;
use crate::shell::{execute, CommandOptions};
use std::time::Duration;

/// Default time budget for one interpreter invocation.
pub const DEFAULT_PYTHON_TIMEOUT: Duration = Duration::from_secs(5);

/// What a probe learned about one dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The dependency could not be located.
    Missing,
    /// The dependency is present. `version` is whatever it reported, if anything.
    Found { version: Option<String> },
}

/// Locates dependencies in some runtime environment.
pub trait CapabilityProbe {
    /// Look up `spec`. Must not fail: problems mean [`ProbeOutcome::Missing`].
    fn locate(&self, spec: &DependencySpec) -> ProbeOutcome;
}

/// Imports modules with a Python interpreter and reads their version.
#[derive(Debug, Clone)]
pub struct PythonModuleProbe {
    interpreter: String,
    timeout: Duration,
}

impl PythonModuleProbe {
    /// Probe with the given interpreter (e.g., "python3").
    pub fn new(interpreter: &str) -> Self {
        Self {
            interpreter: interpreter.to_string(),
            timeout: DEFAULT_PYTHON_TIMEOUT,
        }
    }

    /// Override the per-dependency time budget.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn interpreter(&self) -> &str {
        &self.interpreter
    }

    // The interpreter must see the caller's PYTHONPATH, virtualenv and conda
    // settings, so the environment is inherited rather than rebuilt.
    fn command_options(&self) -> CommandOptions {
        CommandOptions::inherited(self.timeout)
    }
}

impl CapabilityProbe for PythonModuleProbe {
    fn locate(&self, spec: &DependencySpec) -> ProbeOutcome {
        let script = import_script(spec);
        let options = self.command_options();

        match execute(&self.interpreter, &["-c", &script], &options) {
            Ok(result) if result.success => {
                let version = parse_reported_version(&result.stdout);
                tracing::debug!("{} found, version {:?}", spec.name, version);
                ProbeOutcome::Found { version }
            }
            Ok(result) => {
                tracing::debug!(
                    "{} not importable (exit {:?}): {}",
                    spec.module,
                    result.exit_code,
                    result.stderr.trim()
                );
                ProbeOutcome::Missing
            }
            Err(e) => {
                tracing::warn!("Could not probe {} with {}: {}", spec.name, self.interpreter, e);
                ProbeOutcome::Missing
            }
        }
    }
}

/// Build the Python snippet that imports `spec.module` and prints its version.
///
/// An import failure exits non-zero; a version lookup failure prints an empty
/// line so the module still counts as found.
fn import_script(spec: &DependencySpec) -> String {
    let expr = spec
        .version_expr
        .clone()
        .unwrap_or_else(|| format!("getattr({}, '__version__', '')", spec.module));
    format!(
        "import {module}\ntry:\n    print({expr})\nexcept Exception:\n    print('')\n",
        module = spec.module,
        expr = expr
    )
}

/// The last non-empty line of the interpreter's output, if any.
fn parse_reported_version(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .rev()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .map(String::from)
}
