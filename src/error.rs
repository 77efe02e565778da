//! Error types for verstamp operations.
//!
//! This module defines [`VerstampError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Revision and capability probes never surface errors; they degrade
//!   (to the `"Unknown"` revision or to a not-found capability)
//! - Metadata file failures are fatal and always name the offending path
//! - Unsatisfied dependencies are data, not errors (see [`crate::deps`])

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for verstamp operations.
#[derive(Debug, Error)]
pub enum VerstampError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A generated metadata or recipe file could not be read or written.
    #[error("Failed to access {path}: {source}")]
    MetadataIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A generated metadata file exists but does not follow the expected schema.
    #[error("Malformed metadata file {path}: {message}")]
    MetadataFormat { path: PathBuf, message: String },

    /// Subprocess could not be started or exited unsuccessfully.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// Subprocess exceeded its time budget and was killed.
    #[error("Command timed out after {seconds}s: {command}")]
    CommandTimedOut { command: String, seconds: u64 },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VerstampError {
    /// Wrap an IO error with the path it occurred on.
    pub fn metadata_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::MetadataIo {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for verstamp operations.
pub type Result<T> = std::result::Result<T, VerstampError>;
