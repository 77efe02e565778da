//! Git revision probe.
//!
//! Asks git for the commit checked out in the project root. Any failure,
//! including git being absent, the directory not being a repository, or git
//! hanging past its time budget, degrades to [`UNKNOWN_REVISION`]. Callers
//! never see an error from this module.

use crate::shell::{execute, CommandOptions};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Revision reported when git can't be asked.
pub const UNKNOWN_REVISION: &str = "Unknown";

/// Default time budget for the git subprocess.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Source of the current version-control revision.
pub trait RevisionProbe {
    /// The current commit id, or [`UNKNOWN_REVISION`].
    fn probe(&self) -> String;
}

/// Reads `HEAD` through `git rev-parse`.
#[derive(Debug, Clone)]
pub struct GitRevisionProbe {
    repo_root: PathBuf,
    timeout: Duration,
    git: String,
}

impl GitRevisionProbe {
    /// Probe the repository containing `repo_root`.
    pub fn new(repo_root: &Path) -> Self {
        Self {
            repo_root: repo_root.to_path_buf(),
            timeout: DEFAULT_PROBE_TIMEOUT,
            git: "git".to_string(),
        }
    }

    /// Override the subprocess time budget.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use a different git executable.
    pub fn with_git(mut self, git: &str) -> Self {
        self.git = git.to_string();
        self
    }
}

impl RevisionProbe for GitRevisionProbe {
    fn probe(&self) -> String {
        let options = CommandOptions::minimal(self.timeout).with_cwd(&self.repo_root);
        let result = match execute(&self.git, &["rev-parse", "HEAD"], &options) {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!("Could not read git revision: {}", e);
                return UNKNOWN_REVISION.to_string();
            }
        };

        if !result.success {
            tracing::warn!(
                "git rev-parse exited with {:?} in {}; revision unknown",
                result.exit_code,
                self.repo_root.display()
            );
            return UNKNOWN_REVISION.to_string();
        }

        parse_revision(&result.stdout).unwrap_or_else(|| {
            tracing::warn!("git rev-parse printed an unusable revision; revision unknown");
            UNKNOWN_REVISION.to_string()
        })
    }
}

/// Extract a revision from `git rev-parse` output.
///
/// Output must be a single non-empty ASCII token.
fn parse_revision(stdout: &str) -> Option<String> {
    let trimmed = stdout.trim();
    if trimmed.is_empty() || !trimmed.is_ascii() || trimmed.contains(char::is_whitespace) {
        return None;
    }
    Some(trimmed.to_string())
}
