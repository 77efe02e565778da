//! Configuration loading, parsing, and validation for verstamp.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use verstamp::config::{load_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("verstamp.yml"), "base_version: 0.2.2\ndev_build: 1").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.dev_build(), Some("1"));
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{find_project_root, load_config, load_config_file, parse_config, CONFIG_FILE_NAME};
pub use schema::VerstampConfig;
pub use validator::{validate, validate_config, ValidationError};
