//! Consolidated dependency report.

use crate::deps::gate::DependencyCheckResult;

/// Column width of the report.
pub const REPORT_WIDTH: usize = 70;

/// Render one framed, word-wrapped block per unmet dependency.
///
/// Returns an empty string when every dependency is satisfied.
pub fn format_report(results: &[DependencyCheckResult]) -> String {
    let bar = "-".repeat(REPORT_WIDTH);
    let mut out = String::new();

    for result in results.iter().filter(|r| !r.is_satisfied()) {
        for _ in 0..2 {
            out.push_str(&bar);
            out.push('\n');
        }
        for line in textwrap::wrap(&failure_message(result), REPORT_WIDTH) {
            out.push_str(&line);
            out.push('\n');
        }
        for _ in 0..2 {
            out.push_str(&bar);
            out.push('\n');
        }
    }

    out
}

fn failure_message(result: &DependencyCheckResult) -> String {
    let spec = &result.spec;
    let mut msg = String::from("[Unmet Dependency] ");

    match (&spec.min_version, result.found) {
        (Some(min), false) => msg.push_str(&format!(
            "This build requires the {} package, version {} or later.",
            spec.name, min
        )),
        (None, _) => msg.push_str(&format!("This build requires the {} package.", spec.name)),
        (Some(min), true) => {
            msg.push_str(&format!(
                "This build requires {} version {} or later.",
                spec.name, min
            ));
            match &result.installed_version {
                Some(have) => msg.push_str(&format!(" You have version {}.", have)),
                None => msg.push_str(" The installed version could not be determined."),
            }
        }
    }

    if let Some(hint) = &spec.install_hint {
        msg.push(' ');
        msg.push_str(hint);
    }
    msg
}
