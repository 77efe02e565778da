//! Build-step orchestration.
//!
//! [`BuildPipeline`] threads one explicit version value through the build:
//! probe the revision, resolve the version, then serialize it. The generated
//! files are outputs only; no step reads another step's result back from disk
//! except the recipe writer, whose contract is to derive the recipe header
//! from the version file it was handed.

use crate::config::VerstampConfig;
use crate::deps::{CapabilityProbe, DependencyCheckResult, DependencyGate, DependencySpec};
use crate::error::Result;
use crate::metadata::{write_recipe_file_with_header, write_version_file};
use crate::version::{ResolvedVersion, RevisionProbe, VersionRecord};
use std::path::{Path, PathBuf};

/// What a stamping run produced.
#[derive(Debug, Clone)]
pub struct StampOutcome {
    /// Inputs the version was computed from.
    pub record: VersionRecord,
    /// The computed version.
    pub resolved: ResolvedVersion,
    /// Where the version file was written.
    pub version_file: PathBuf,
    /// Where the recipe header was rewritten, if it was.
    pub recipe_file: Option<PathBuf>,
}

/// Runs the version steps of a build for one project.
pub struct BuildPipeline<'a> {
    config: &'a VerstampConfig,
    project_root: PathBuf,
    revision_probe: &'a dyn RevisionProbe,
}

impl<'a> BuildPipeline<'a> {
    /// Create a pipeline for the project at `project_root`.
    pub fn new(
        config: &'a VerstampConfig,
        project_root: &Path,
        revision_probe: &'a dyn RevisionProbe,
    ) -> Self {
        Self {
            config,
            project_root: project_root.to_path_buf(),
            revision_probe,
        }
    }

    /// Probe the revision and build the version record.
    ///
    /// Fails only if the configured base version is malformed.
    pub fn record(&self) -> Result<VersionRecord> {
        let revision = self.revision_probe.probe();
        tracing::debug!("Revision: {}", revision);
        VersionRecord::new(
            &self.config.base_version,
            self.config.dev_build(),
            self.config.released,
            revision,
        )
    }

    /// Compute the version without writing anything.
    pub fn resolve(&self) -> Result<(VersionRecord, ResolvedVersion)> {
        let record = self.record()?;
        let resolved = record.resolve();
        tracing::info!("Resolved version {}", resolved.full_version);
        Ok((record, resolved))
    }

    /// Compute the version and write the version file, then the recipe header
    /// when a recipe is configured and `write_recipe` is set.
    pub fn stamp(&self, write_recipe: bool) -> Result<StampOutcome> {
        let (record, resolved) = self.resolve()?;

        let version_file = self.config.version_file_path(&self.project_root);
        write_version_file(&version_file, &resolved, record.base(), record.dev_build())?;

        let recipe_file = match self.config.recipe_file_path(&self.project_root) {
            Some(recipe) if write_recipe => {
                write_recipe_file_with_header(
                    &recipe,
                    &version_file,
                    self.config.recipe_header_lines,
                )?;
                Some(recipe)
            }
            _ => None,
        };

        Ok(StampOutcome {
            record,
            resolved,
            version_file,
            recipe_file,
        })
    }

    /// Run the dependency gate. Advisory: the results are returned, never raised.
    pub fn check_dependencies(
        &self,
        probe: &dyn CapabilityProbe,
        specs: &[DependencySpec],
    ) -> Vec<DependencyCheckResult> {
        DependencyGate::new(probe).check(specs)
    }
}
