//! Configuration file discovery and loading.

use crate::config::schema::VerstampConfig;
use crate::error::{Result, VerstampError};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the project configuration file.
pub const CONFIG_FILE_NAME: &str = "verstamp.yml";

/// Find the project root by walking up from `start`.
///
/// Looks for:
/// 1. `verstamp.yml` (primary indicator)
/// 2. `.git` directory (fallback)
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(CONFIG_FILE_NAME).is_file() {
            return Some(current);
        }

        if current.join(".git").exists() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<VerstampConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            VerstampError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            VerstampError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a config.
///
/// `source_path` is used only for error reporting.
pub fn parse_config(content: &str, source_path: &Path) -> Result<VerstampConfig> {
    serde_yaml::from_str(content).map_err(|e| VerstampError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load the project config, or the file at `config_override` when given.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<VerstampConfig> {
    let path = match config_override {
        Some(path) => path.to_path_buf(),
        None => project_root.join(CONFIG_FILE_NAME),
    };
    tracing::debug!("Loading config from {}", path.display());
    load_config_file(&path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn find_project_root_prefers_config_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "base_version: 1.0.0").unwrap();
        let nested = temp.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_project_root(&nested), Some(temp.path().to_path_buf()));
    }

    #[test]
    fn find_project_root_falls_back_to_git() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(".git")).unwrap();
        let nested = temp.path().join("src");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_project_root(&nested), Some(temp.path().to_path_buf()));
    }

    #[test]
    fn load_missing_config_is_not_found() {
        let temp = TempDir::new().unwrap();
        let err = load_config(temp.path(), None).unwrap_err();
        assert!(matches!(err, VerstampError::ConfigNotFound { .. }));
        assert!(err.to_string().contains(CONFIG_FILE_NAME));
    }

    #[test]
    fn load_invalid_yaml_is_parse_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "base_version: [unclosed").unwrap();
        let err = load_config(temp.path(), None).unwrap_err();
        assert!(matches!(err, VerstampError::ConfigParseError { .. }));
    }

    #[test]
    fn load_uses_override_path() {
        let temp = TempDir::new().unwrap();
        let custom = temp.path().join("custom.yml");
        fs::write(&custom, "base_version: 3.2.1\nreleased: true").unwrap();

        let config = load_config(temp.path(), Some(&custom)).unwrap();
        assert_eq!(config.base_version, "3.2.1");
        assert!(config.released);
    }
}
