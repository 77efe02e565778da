//! Configuration schema for `verstamp.yml`.

use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Root configuration structure for verstamp.yml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VerstampConfig {
    /// Base `X.Y.Z` version of the distribution
    pub base_version: String,

    /// Dev build counter; absent, empty, or "None" for no dev build
    #[serde(
        default,
        deserialize_with = "scalar_as_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub dev_build: Option<String>,

    /// Whether this is a release cut
    #[serde(default)]
    pub released: bool,

    /// Generated version file (relative to project root)
    #[serde(default = "default_version_file")]
    pub version_file: PathBuf,

    /// Recipe whose header is regenerated (relative to project root)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_file: Option<PathBuf>,

    /// Number of generated lines at the top of the recipe
    #[serde(default = "default_recipe_header_lines")]
    pub recipe_header_lines: usize,

    /// Interpreter used to probe runtime dependencies
    #[serde(default = "default_python")]
    pub python: String,

    /// Time budget for each probe subprocess
    #[serde(default = "default_probe_timeout_secs")]
    pub probe_timeout_secs: u64,
}

impl VerstampConfig {
    /// A config with the given base version and every other field defaulted.
    pub fn new(base_version: &str) -> Self {
        Self {
            base_version: base_version.to_string(),
            dev_build: None,
            released: false,
            version_file: default_version_file(),
            recipe_file: None,
            recipe_header_lines: default_recipe_header_lines(),
            python: default_python(),
            probe_timeout_secs: default_probe_timeout_secs(),
        }
    }

    pub fn dev_build(&self) -> Option<&str> {
        self.dev_build.as_deref()
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }

    /// Absolute path of the version file.
    pub fn version_file_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.version_file)
    }

    /// Absolute path of the recipe file, if one is configured.
    pub fn recipe_file_path(&self, project_root: &Path) -> Option<PathBuf> {
        self.recipe_file.as_ref().map(|p| project_root.join(p))
    }
}

fn default_version_file() -> PathBuf {
    PathBuf::from("version.py")
}

fn default_recipe_header_lines() -> usize {
    crate::metadata::DEFAULT_HEADER_LINES
}

fn default_python() -> String {
    "python3".to_string()
}

fn default_probe_timeout_secs() -> u64 {
    5
}

/// Accept `dev_build: 1` as well as `dev_build: "1"`.
fn scalar_as_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Str(String),
        Int(u64),
    }

    Ok(Option::<Scalar>::deserialize(deserializer)?.map(|s| match s {
        Scalar::Str(s) => s,
        Scalar::Int(n) => n.to_string(),
    }))
}
