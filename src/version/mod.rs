//! Version resolution.
//!
//! A build's version is computed from four inputs: the static base version,
//! an optional development-build counter, the release flag, and the current
//! git revision. The result is a [`ResolvedVersion`], which the
//! [`metadata`](crate::metadata) module serializes.
//!
//! # Example
//!
//! ```
//! use verstamp::version::resolve;
//!
//! let v = resolve("1.2.3", Some("4"), false, "abcdef0123456");
//! assert_eq!(v.short_version, "1.2.3.dev4");
//! assert_eq!(v.full_version, "1.2.3.dev4-abcdef0");
//! ```

pub mod record;
pub mod revision;

pub use record::{
    normalize_dev_build, resolve, validate_base_version, ResolvedVersion, VersionRecord,
    DEV_BUILD_ABSENT, SHORT_REVISION_LEN,
};
pub use revision::{GitRevisionProbe, RevisionProbe, UNKNOWN_REVISION};
