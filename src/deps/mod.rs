//! Runtime dependency gate.
//!
//! Before packaging, the build checks that the scientific stack it depends
//! on is importable and recent enough. Checks are advisory: every dependency
//! is evaluated, failures are collected into one report, and the caller
//! decides whether an unmet dependency aborts the build.
//!
//! # Modules
//!
//! - [`spec`] - The compiled-in dependency table
//! - [`probe`] - [`CapabilityProbe`] and the Python module probe
//! - [`gate`] - Evaluation of specs into check results
//! - [`report`] - The consolidated human-readable report
//!
//! # Example
//!
//! ```
//! use verstamp::deps::{format_report, CapabilityProbe, DependencyGate, DependencySpec, ProbeOutcome};
//!
//! struct Nothing;
//! impl CapabilityProbe for Nothing {
//!     fn locate(&self, _spec: &DependencySpec) -> ProbeOutcome {
//!         ProbeOutcome::Missing
//!     }
//! }
//!
//! let specs = vec![DependencySpec::new("numpy", "numpy")];
//! let results = DependencyGate::new(&Nothing).check(&specs);
//! assert!(!results[0].found);
//! assert!(format_report(&results).contains("numpy"));
//! ```

pub mod gate;
pub mod probe;
pub mod report;
pub mod spec;

pub use gate::{parse_strict_version, satisfies_minimum, DependencyCheckResult, DependencyGate};
pub use probe::{CapabilityProbe, ProbeOutcome, PythonModuleProbe};
pub use report::{format_report, REPORT_WIDTH};
pub use spec::{builtin_dependencies, DependencySpec};
