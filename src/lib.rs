//! verstamp - Build-time version stamping and runtime dependency gate.
//!
//! verstamp computes a distribution's version string from a configured base
//! version, an optional dev build counter, a release flag, and the current
//! git commit. It writes that version into a generated metadata file and the
//! header of a packaging recipe, then checks that the runtime dependencies
//! the package needs are installed at acceptable versions.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`deps`] - Dependency specs, probes, gate, and report
//! - [`error`] - Error types and result aliases
//! - [`metadata`] - Version file and recipe header serialization
//! - [`pipeline`] - Build-step orchestration
//! - [`shell`] - Subprocess execution with a minimal environment
//! - [`ui`] - Terminal output
//! - [`version`] - Revision probing and version resolution
//!
//! # Example
//!
//! ```
//! use verstamp::version::resolve;
//!
//! let resolved = resolve("0.2.2", None, true, "Unknown");
//! assert_eq!(resolved.short_version, "0.2.2");
//! assert_eq!(resolved.full_version, "0.2.2");
//! ```
//!
//! For file-based stamping, see the integration tests.

pub mod cli;
pub mod config;
pub mod deps;
pub mod error;
pub mod metadata;
pub mod pipeline;
pub mod shell;
pub mod ui;
pub mod version;

pub use error::{Result, VerstampError};
