//! Configuration validation rules.
//!
//! - `base_version` must be a plain `X.Y.Z` version
//! - `probe_timeout_secs` must be positive
//! - `python` must not be empty
//! - `recipe_header_lines` must match the number of generated directives

use crate::config::schema::VerstampConfig;
use crate::error::{Result, VerstampError};
use crate::metadata::RECIPE_KEYS;
use crate::version::validate_base_version;

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

/// Validate a configuration and return all errors.
///
/// This function collects all validation errors rather than stopping
/// at the first one, allowing users to fix multiple issues at once.
pub fn validate_config(config: &VerstampConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if let Err(e) = validate_base_version(&config.base_version) {
        let message = match e {
            VerstampError::ConfigValidationError { message } => message,
            other => other.to_string(),
        };
        errors.push(ValidationError {
            rule: "base-version".to_string(),
            message,
        });
    }

    if config.probe_timeout_secs == 0 {
        errors.push(ValidationError {
            rule: "probe-timeout".to_string(),
            message: "probe_timeout_secs must be greater than zero".to_string(),
        });
    }

    if config.python.trim().is_empty() {
        errors.push(ValidationError {
            rule: "python".to_string(),
            message: "python must name an interpreter".to_string(),
        });
    }

    if config.recipe_header_lines != RECIPE_KEYS.len() {
        errors.push(ValidationError {
            rule: "recipe-header".to_string(),
            message: format!(
                "recipe_header_lines must be {} (one line per generated directive), got {}",
                RECIPE_KEYS.len(),
                config.recipe_header_lines
            ),
        });
    }

    errors
}

/// Validate a configuration, failing on the first batch of errors.
pub fn validate(config: &VerstampConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(VerstampError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&VerstampConfig::new("0.2.2")).is_ok());
    }

    #[test]
    fn rejects_two_component_base() {
        let errors = validate_config(&VerstampConfig::new("0.2"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule, "base-version");
        assert!(errors[0].message.contains("0.2"));
    }

    #[test]
    fn rejects_zero_timeout() {
        let mut config = VerstampConfig::new("0.2.2");
        config.probe_timeout_secs = 0;
        let errors = validate_config(&config);
        assert!(errors.iter().any(|e| e.rule == "probe-timeout"));
    }

    #[test]
    fn rejects_header_size_that_differs_from_directives() {
        for lines in [0, 1, 3] {
            let mut config = VerstampConfig::new("0.2.2");
            config.recipe_header_lines = lines;
            let errors = validate_config(&config);
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].rule, "recipe-header");
        }
    }

    #[test]
    fn collects_all_errors() {
        let mut config = VerstampConfig::new("latest");
        config.probe_timeout_secs = 0;
        config.python = " ".to_string();
        assert_eq!(validate_config(&config).len(), 3);

        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("; "));
    }
}
