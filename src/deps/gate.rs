//! Dependency evaluation.

use crate::deps::probe::{CapabilityProbe, ProbeOutcome};
use crate::deps::spec::DependencySpec;
use regex::Regex;
use semver::Version;
use serde::Serialize;
use std::sync::LazyLock;

static SHORT_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^v?(\d+)(?:\.(\d+))?(?:\.(\d+))?$").unwrap());

/// Outcome of checking one [`DependencySpec`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyCheckResult {
    /// The spec that was checked.
    pub spec: DependencySpec,
    /// Whether the probe located the dependency.
    pub found: bool,
    /// Version the dependency reported, if found and reported.
    pub installed_version: Option<String>,
    /// Whether the installed version meets the minimum. Always false when
    /// not found; always true when found and there is no minimum.
    pub satisfies_minimum: bool,
}

impl DependencyCheckResult {
    /// Whether this dependency is fully satisfied.
    pub fn is_satisfied(&self) -> bool {
        self.found && self.satisfies_minimum
    }
}

/// Evaluates dependency specs through a [`CapabilityProbe`].
pub struct DependencyGate<'a> {
    probe: &'a dyn CapabilityProbe,
}

impl<'a> DependencyGate<'a> {
    /// Create a gate backed by `probe`.
    pub fn new(probe: &'a dyn CapabilityProbe) -> Self {
        Self { probe }
    }

    /// Check every spec, in order, returning one result per spec.
    ///
    /// Never stops early: a missing dependency does not prevent the ones
    /// after it from being evaluated.
    pub fn check(&self, specs: &[DependencySpec]) -> Vec<DependencyCheckResult> {
        specs.iter().map(|spec| self.check_one(spec)).collect()
    }

    fn check_one(&self, spec: &DependencySpec) -> DependencyCheckResult {
        let result = match self.probe.locate(spec) {
            ProbeOutcome::Missing => DependencyCheckResult {
                spec: spec.clone(),
                found: false,
                installed_version: None,
                satisfies_minimum: false,
            },
            ProbeOutcome::Found { version } => DependencyCheckResult {
                spec: spec.clone(),
                found: true,
                satisfies_minimum: satisfies_minimum(
                    version.as_deref(),
                    spec.min_version.as_deref(),
                ),
                installed_version: version,
            },
        };

        if result.is_satisfied() {
            tracing::debug!("{} satisfied", spec.name);
        } else {
            tracing::info!(
                "{} unmet (found: {}, installed: {:?}, required: {:?})",
                spec.name,
                result.found,
                result.installed_version,
                spec.min_version
            );
        }
        result
    }
}

/// Whether `installed` meets `minimum`.
///
/// With no minimum, any installed version (even a missing or malformed one)
/// is accepted. Otherwise both must parse as strict versions and compare
/// `installed >= minimum`.
pub fn satisfies_minimum(installed: Option<&str>, minimum: Option<&str>) -> bool {
    let Some(minimum) = minimum else {
        return true;
    };

    let Some(required) = parse_strict_version(minimum) else {
        tracing::warn!("Minimum version '{}' is not a valid version", minimum);
        return false;
    };

    match installed.and_then(parse_strict_version) {
        Some(have) => have >= required,
        None => false,
    }
}

/// Parse a version in strict `N[.N[.N]]` or full semver form.
///
/// Missing minor/patch components are zero-padded (`7.1` → `7.1.0`). Anything
/// with trailing text outside semver syntax, such as `1.2.3.dev0`, is rejected.
pub fn parse_strict_version(raw: &str) -> Option<Version> {
    let raw = raw.trim();
    if let Ok(v) = Version::parse(raw) {
        return Some(v);
    }

    let caps = SHORT_VERSION.captures(raw)?;
    let component = |i: usize| -> Option<u64> {
        match caps.get(i) {
            Some(m) => m.as_str().parse().ok(),
            None => Some(0),
        }
    };
    Some(Version::new(component(1)?, component(2)?, component(3)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Probe answering from a fixed table and recording every lookup.
    struct FakeProbe {
        installed: HashMap<String, Option<String>>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeProbe {
        fn new(entries: &[(&str, Option<&str>)]) -> Self {
            Self {
                installed: entries
                    .iter()
                    .map(|(m, v)| (m.to_string(), v.map(String::from)))
                    .collect(),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl CapabilityProbe for FakeProbe {
        fn locate(&self, spec: &DependencySpec) -> ProbeOutcome {
            self.calls.borrow_mut().push(spec.module.clone());
            match self.installed.get(&spec.module) {
                Some(version) => ProbeOutcome::Found {
                    version: version.clone(),
                },
                None => ProbeOutcome::Missing,
            }
        }
    }

    #[test]
    fn missing_dependency_is_not_found_and_unsatisfied() {
        let probe = FakeProbe::new(&[]);
        let results = DependencyGate::new(&probe).check(&[DependencySpec::new("numpy", "numpy")]);
        assert_eq!(results.len(), 1);
        assert!(!results[0].found);
        assert!(!results[0].satisfies_minimum);
        assert!(results[0].installed_version.is_none());
    }

    #[test]
    fn failures_at_both_ends_do_not_short_circuit() {
        let specs: Vec<_> = ["first", "a", "b", "c", "last"]
            .iter()
            .map(|m| DependencySpec::new(m, m))
            .collect();
        let probe = FakeProbe::new(&[("a", Some("1.0")), ("b", None), ("c", Some("2.0.0"))]);

        let results = DependencyGate::new(&probe).check(&specs);

        assert_eq!(results.len(), specs.len());
        assert!(!results[0].found);
        assert!(!results[4].found);
        assert!(results[1..4].iter().all(DependencyCheckResult::is_satisfied));
        assert_eq!(
            *probe.calls.borrow(),
            vec!["first", "a", "b", "c", "last"]
        );
    }

    #[test]
    fn results_follow_spec_order() {
        let specs = vec![
            DependencySpec::new("z", "z"),
            DependencySpec::new("a", "a"),
        ];
        let probe = FakeProbe::new(&[("a", Some("1.0.0"))]);
        let results = DependencyGate::new(&probe).check(&specs);
        assert_eq!(results[0].spec.name, "z");
        assert_eq!(results[1].spec.name, "a");
    }

    #[test]
    fn no_minimum_accepts_malformed_version() {
        let probe = FakeProbe::new(&[("numpy", Some("not a version!"))]);
        let results = DependencyGate::new(&probe).check(&[DependencySpec::new("numpy", "numpy")]);
        assert!(results[0].is_satisfied());
        assert_eq!(results[0].installed_version.as_deref(), Some("not a version!"));
    }

    #[test]
    fn no_minimum_accepts_unreported_version() {
        let probe = FakeProbe::new(&[("numpy", None)]);
        let results = DependencyGate::new(&probe).check(&[DependencySpec::new("numpy", "numpy")]);
        assert!(results[0].is_satisfied());
    }

    #[test]
    fn old_version_is_found_but_unsatisfied() {
        let spec = DependencySpec::new("OpenMM", "simtk.openmm").with_min_version("7.1.1");
        let probe = FakeProbe::new(&[("simtk.openmm", Some("7.0"))]);
        let results = DependencyGate::new(&probe).check(&[spec]);
        assert!(results[0].found);
        assert!(!results[0].satisfies_minimum);
    }

    #[test]
    fn equal_and_newer_versions_satisfy() {
        assert!(satisfies_minimum(Some("7.1.1"), Some("7.1.1")));
        assert!(satisfies_minimum(Some("7.2"), Some("7.1.1")));
        assert!(satisfies_minimum(Some("8"), Some("7.1.1")));
        assert!(satisfies_minimum(Some("7.10.0"), Some("7.9.0")));
    }

    #[test]
    fn older_versions_do_not_satisfy() {
        assert!(!satisfies_minimum(Some("7.1.0"), Some("7.1.1")));
        assert!(!satisfies_minimum(Some("7.1"), Some("7.1.1")));
        assert!(!satisfies_minimum(Some("6.99.99"), Some("7.0.0")));
    }

    #[test]
    fn prerelease_sorts_before_release() {
        assert!(!satisfies_minimum(Some("7.1.1-beta.1"), Some("7.1.1")));
    }

    #[test]
    fn minimum_with_unparseable_installed_is_unsatisfied() {
        assert!(!satisfies_minimum(Some("7.1.1.dev-abc"), Some("7.1.1")));
        assert!(!satisfies_minimum(None, Some("7.1.1")));
    }

    #[test]
    fn invalid_minimum_is_unsatisfied() {
        assert!(!satisfies_minimum(Some("1.0.0"), Some("latest")));
    }

    #[test]
    fn parse_strict_version_pads_components() {
        assert_eq!(parse_strict_version("7"), Some(Version::new(7, 0, 0)));
        assert_eq!(parse_strict_version("7.1"), Some(Version::new(7, 1, 0)));
        assert_eq!(parse_strict_version(" v7.1.1 "), Some(Version::new(7, 1, 1)));
        assert_eq!(parse_strict_version("1.2.3.4"), None);
        assert_eq!(parse_strict_version(""), None);
    }
}
