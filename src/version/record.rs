//! Version records and the resolution algorithm.

use crate::error::{Result, VerstampError};
use serde::Serialize;

/// Length of the revision suffix appended to unreleased versions.
pub const SHORT_REVISION_LEN: usize = 7;

/// Dev-build value that means "no dev build".
pub const DEV_BUILD_ABSENT: &str = "None";

/// The raw inputs of a version computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRecord {
    base: String,
    dev_build: Option<String>,
    released: bool,
    revision: String,
}

impl VersionRecord {
    /// Create a record, rejecting a base that isn't a plain `X.Y.Z` version.
    ///
    /// A dev build of `""` or `"None"` is stored as absent.
    pub fn new(
        base: &str,
        dev_build: Option<&str>,
        released: bool,
        revision: impl Into<String>,
    ) -> Result<Self> {
        validate_base_version(base)?;
        Ok(Self {
            base: base.to_string(),
            dev_build: normalize_dev_build(dev_build).map(String::from),
            released,
            revision: revision.into(),
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn dev_build(&self) -> Option<&str> {
        self.dev_build.as_deref()
    }

    pub fn released(&self) -> bool {
        self.released
    }

    pub fn revision(&self) -> &str {
        &self.revision
    }

    /// Resolve this record into its version strings.
    pub fn resolve(&self) -> ResolvedVersion {
        resolve(
            &self.base,
            self.dev_build.as_deref(),
            self.released,
            &self.revision,
        )
    }
}

/// The computed version of a build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedVersion {
    /// Base version, plus `.devN` for dev builds.
    pub short_version: String,
    /// Short version, plus `-<rev7>` unless released.
    pub full_version: String,
    /// The revision exactly as probed.
    pub git_revision: String,
    /// Whether this is a release cut.
    pub released: bool,
}

/// Treat an empty or `"None"` dev build as absent.
pub fn normalize_dev_build(dev_build: Option<&str>) -> Option<&str> {
    dev_build
        .map(str::trim)
        .filter(|d| !d.is_empty() && *d != DEV_BUILD_ABSENT)
}

/// Check that `base` is a three-component version with no pre-release or
/// build metadata.
pub fn validate_base_version(base: &str) -> Result<()> {
    let parsed = semver::Version::parse(base).map_err(|e| VerstampError::ConfigValidationError {
        message: format!("base version '{}' is not X.Y.Z: {}", base, e),
    })?;
    if !parsed.pre.is_empty() || !parsed.build.is_empty() {
        return Err(VerstampError::ConfigValidationError {
            message: format!(
                "base version '{}' must not carry pre-release or build metadata",
                base
            ),
        });
    }
    Ok(())
}

/// Compute the version strings for a build.
///
/// Pure and total: every input produces a version. Unreleased builds get the
/// first seven characters of `revision` appended after a `-`, or the whole
/// revision when it is shorter.
pub fn resolve(
    base: &str,
    dev_build: Option<&str>,
    released: bool,
    revision: &str,
) -> ResolvedVersion {
    let short_version = match normalize_dev_build(dev_build) {
        Some(dev) => format!("{}.dev{}", base, dev),
        None => base.to_string(),
    };

    let mut full_version = short_version.clone();
    if !released {
        let short_rev: String = revision.chars().take(SHORT_REVISION_LEN).collect();
        full_version.push('-');
        full_version.push_str(&short_rev);
    }

    ResolvedVersion {
        short_version,
        full_version,
        git_revision: revision.to_string(),
        released,
    }
}
