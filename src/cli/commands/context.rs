//! Project context shared by the commands.

use std::path::{Path, PathBuf};

use crate::config::{load_config, validate, VerstampConfig};
use crate::deps::PythonModuleProbe;
use crate::error::{Result, VerstampError};
use crate::ui::UserInterface;
use crate::version::GitRevisionProbe;

/// Values given on the command line that take precedence over `verstamp.yml`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Replaces the configured dev build counter.
    pub dev_build: Option<String>,
    /// Forces a release build when set.
    pub released: bool,
}

impl ConfigOverrides {
    /// Apply the overrides to a loaded config.
    pub fn apply(&self, config: &mut VerstampConfig) {
        if let Some(dev_build) = &self.dev_build {
            config.dev_build = Some(dev_build.clone());
        }
        if self.released {
            config.released = true;
        }
    }
}

/// Where the project lives and how its config is found.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    overrides: ConfigOverrides,
}

impl ProjectContext {
    /// Create a context for the project at `project_root`.
    pub fn new(project_root: &Path) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: None,
            overrides: ConfigOverrides::default(),
        }
    }

    /// Read the config from `path` instead of `<root>/verstamp.yml`.
    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// Set the command-line overrides.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Load, override, and validate the project config.
    pub fn load_config(&self) -> Result<VerstampConfig> {
        let mut config = load_config(&self.project_root, self.config_path.as_deref())?;
        self.overrides.apply(&mut config);
        validate(&config)?;
        Ok(config)
    }

    /// Load the config, reporting a missing file to the user.
    ///
    /// Returns `Ok(None)` when there is no config file; other errors propagate.
    pub fn load_config_or_report(&self, ui: &mut dyn UserInterface) -> Result<Option<VerstampConfig>> {
        match self.load_config() {
            Ok(config) => Ok(Some(config)),
            Err(VerstampError::ConfigNotFound { path }) => {
                ui.error(&format!(
                    "No configuration found at {}. Create a verstamp.yml with a base_version.",
                    path.display()
                ));
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// The git probe for this project, with the configured time budget.
    pub fn revision_probe(&self, config: &VerstampConfig) -> GitRevisionProbe {
        GitRevisionProbe::new(&self.project_root).with_timeout(config.probe_timeout())
    }

    /// The interpreter probe named by the config.
    pub fn dependency_probe(&self, config: &VerstampConfig) -> PythonModuleProbe {
        PythonModuleProbe::new(&config.python).with_timeout(config.probe_timeout())
    }
}
