//! Dependency specifications.
//!
//! The dependency table is build-time data: it is compiled in and not
//! configurable at runtime.

use serde::Serialize;

/// A named capability the build needs, with an optional minimum version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencySpec {
    /// Display name (e.g., "OpenMM").
    pub name: String,
    /// What the probe looks up (e.g., the importable module path).
    pub module: String,
    /// Expression yielding the installed version, evaluated after import.
    /// `None` means `<module>.__version__`.
    pub version_expr: Option<String>,
    /// Minimum acceptable version, if any.
    pub min_version: Option<String>,
    /// Remediation shown when the dependency is unmet.
    pub install_hint: Option<String>,
}

impl DependencySpec {
    /// A dependency with no minimum version.
    pub fn new(name: &str, module: &str) -> Self {
        Self {
            name: name.to_string(),
            module: module.to_string(),
            version_expr: None,
            min_version: None,
            install_hint: None,
        }
    }

    /// Require at least `version`.
    pub fn with_min_version(mut self, version: &str) -> Self {
        self.min_version = Some(version.to_string());
        self
    }

    /// Read the version through `expr` instead of `__version__`.
    pub fn with_version_expr(mut self, expr: &str) -> Self {
        self.version_expr = Some(expr.to_string());
        self
    }

    /// Set the remediation text.
    pub fn with_install_hint(mut self, hint: &str) -> Self {
        self.install_hint = Some(hint.to_string());
        self
    }
}

struct DependencyDef {
    name: &'static str,
    module: &'static str,
    version_expr: Option<&'static str>,
    min_version: Option<&'static str>,
    install_hint: &'static str,
}

const BUILTIN_DEPENDENCIES: &[DependencyDef] = &[
    DependencyDef {
        name: "OpenMM",
        module: "simtk.openmm",
        version_expr: Some("simtk.openmm.Platform.getOpenMMVersion()"),
        min_version: Some("7.1.1"),
        install_hint: "Please install with `conda install -c omnia openmm=7.1.1`",
    },
    DependencyDef {
        name: "numpy",
        module: "numpy",
        version_expr: None,
        min_version: None,
        install_hint: "Refer to <http://www.scipy.org/scipylib/download.html> for numpy installation instructions.",
    },
    DependencyDef {
        name: "openmmtools",
        module: "openmmtools",
        version_expr: None,
        min_version: None,
        install_hint: "Please install with `conda install -c omnia openmmtools=0.14.0`",
    },
];

/// The dependencies every build is checked against, in report order.
pub fn builtin_dependencies() -> Vec<DependencySpec> {
    BUILTIN_DEPENDENCIES
        .iter()
        .map(|def| DependencySpec {
            name: def.name.to_string(),
            module: def.module.to_string(),
            version_expr: def.version_expr.map(String::from),
            min_version: def.min_version.map(String::from),
            install_hint: Some(def.install_hint.to_string()),
        })
        .collect()
}
