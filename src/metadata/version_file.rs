//! The generated version file.

use crate::error::{Result, VerstampError};
use crate::version::{normalize_dev_build, ResolvedVersion};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// First line of every generated version file.
pub const GENERATED_BANNER: &str = "# This file is automatically generated by verstamp";

/// Build number written when there is no dev build.
pub const ABSENT_BUILD_NUMBER: &str = "0";

const KEY_SHORT_VERSION: &str = "short_version";
const KEY_BUILD_NUMBER: &str = "build_number";
const KEY_VERSION: &str = "version";
const KEY_FULL_VERSION: &str = "full_version";
const KEY_GIT_REVISION: &str = "git_revision";
const KEY_RELEASE: &str = "release";

const ALL_KEYS: &[&str] = &[
    KEY_SHORT_VERSION,
    KEY_BUILD_NUMBER,
    KEY_VERSION,
    KEY_FULL_VERSION,
    KEY_GIT_REVISION,
    KEY_RELEASE,
];

/// Contents of a version file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionMetadata {
    /// Base `X.Y.Z` version.
    pub short_version: String,
    /// Dev build counter, or [`ABSENT_BUILD_NUMBER`].
    pub build_number: String,
    /// Base version with any `.devN` suffix.
    pub version: String,
    /// Version with any revision suffix.
    pub full_version: String,
    /// Full git revision or `"Unknown"`.
    pub git_revision: String,
    /// Release flag.
    pub release: bool,
}

impl VersionMetadata {
    /// Assemble the file fields for a resolved version.
    pub fn from_resolved(resolved: &ResolvedVersion, base: &str, dev_build: Option<&str>) -> Self {
        Self {
            short_version: base.to_string(),
            build_number: normalize_dev_build(dev_build)
                .unwrap_or(ABSENT_BUILD_NUMBER)
                .to_string(),
            version: resolved.short_version.clone(),
            full_version: resolved.full_version.clone(),
            git_revision: resolved.git_revision.clone(),
            release: resolved.released,
        }
    }

    /// Render the file body.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(GENERATED_BANNER);
        out.push('\n');
        for (key, value) in [
            (KEY_SHORT_VERSION, &self.short_version),
            (KEY_BUILD_NUMBER, &self.build_number),
            (KEY_VERSION, &self.version),
            (KEY_FULL_VERSION, &self.full_version),
            (KEY_GIT_REVISION, &self.git_revision),
        ] {
            out.push_str(&format!("{} = '{}'\n", key, value));
        }
        out.push_str(&format!(
            "{} = {}\n",
            KEY_RELEASE,
            render_bool(self.release)
        ));
        out
    }

    /// Parse a version file body.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let fields = extract_fields(content, ALL_KEYS);
        let get = |key: &str| -> Result<String> {
            fields
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
                .ok_or_else(|| VerstampError::MetadataFormat {
                    path: path.to_path_buf(),
                    message: format!("missing '{}'", key),
                })
        };

        let short_version = get(KEY_SHORT_VERSION)?;
        let build_number = get(KEY_BUILD_NUMBER)?;
        let version = get(KEY_VERSION)?;
        let full_version = get(KEY_FULL_VERSION)?;
        let git_revision = get(KEY_GIT_REVISION)?;
        let release_raw = get(KEY_RELEASE)?;
        let release = parse_bool(&release_raw).ok_or_else(|| VerstampError::MetadataFormat {
            path: path.to_path_buf(),
            message: format!("'{}' is not a boolean: {}", KEY_RELEASE, release_raw),
        })?;

        Ok(Self {
            short_version,
            build_number,
            version,
            full_version,
            git_revision,
            release,
        })
    }
}

/// Overwrite `path` with the version record for `resolved`.
pub fn write_version_file(
    path: &Path,
    resolved: &ResolvedVersion,
    base: &str,
    dev_build: Option<&str>,
) -> Result<()> {
    let content = VersionMetadata::from_resolved(resolved, base, dev_build).render();
    fs::write(path, content).map_err(|e| VerstampError::metadata_io(path, e))?;
    tracing::debug!("Wrote version file {}", path.display());
    Ok(())
}

/// Read a previously generated version file.
pub fn read_version_file(path: &Path) -> Result<VersionMetadata> {
    let content = fs::read_to_string(path).map_err(|e| VerstampError::metadata_io(path, e))?;
    VersionMetadata::parse(&content, path)
}

/// Pull `key = value` assignments for the given keys out of `content`.
///
/// Each line is split at its first `=`; the left side must equal one of
/// `keys` exactly. Values are stripped of surrounding whitespace and quotes.
/// The first assignment of a key wins and results keep first-encounter order.
pub fn extract_fields(content: &str, keys: &[&str]) -> Vec<(String, String)> {
    let mut fields: Vec<(String, String)> = Vec::new();
    for line in content.lines() {
        let Some((raw_key, raw_value)) = line.split_once('=') else {
            continue;
        };
        let key = raw_key.trim();
        if !keys.contains(&key) || fields.iter().any(|(k, _)| k == key) {
            continue;
        }
        let value = raw_value
            .trim()
            .trim_matches(|c| c == '\'' || c == '"')
            .to_string();
        fields.push((key.to_string(), value));
    }
    fields
}

fn render_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "True" | "true" => Some(true),
        "False" | "false" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::resolve;
    use tempfile::TempDir;

    const REV: &str = "0123456789abcdef0123456789abcdef01234567";

    fn sample() -> VersionMetadata {
        let resolved = resolve("0.2.2", Some("1"), false, REV);
        VersionMetadata::from_resolved(&resolved, "0.2.2", Some("1"))
    }

    #[test]
    fn render_matches_fixed_schema() {
        let expected = "\
# This file is automatically generated by verstamp
short_version = '0.2.2'
build_number = '1'
version = '0.2.2.dev1'
full_version = '0.2.2.dev1-0123456'
git_revision = '0123456789abcdef0123456789abcdef01234567'
release = False
";
        assert_eq!(sample().render(), expected);
    }

    #[test]
    fn released_flag_renders_as_bare_token() {
        let resolved = resolve("1.0.0", None, true, REV);
        let body = VersionMetadata::from_resolved(&resolved, "1.0.0", None).render();
        assert!(body.contains("\nrelease = True\n"));
        assert!(body.contains("build_number = '0'"));
    }

    #[test]
    fn write_truncates_existing_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("version.py");
        fs::write(&path, "x".repeat(4096)).unwrap();

        let resolved = resolve("0.2.2", Some("1"), false, REV);
        write_version_file(&path, &resolved, "0.2.2", Some("1")).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, sample().render());
    }

    #[test]
    fn write_is_byte_identical_on_rerun() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("version.py");
        let resolved = resolve("0.2.2", Some("1"), false, REV);

        write_version_file(&path, &resolved, "0.2.2", Some("1")).unwrap();
        let first = fs::read(&path).unwrap();
        write_version_file(&path, &resolved, "0.2.2", Some("1")).unwrap();
        let second = fs::read(&path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn write_into_missing_directory_names_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("no-such-dir").join("version.py");
        let resolved = resolve("0.2.2", None, true, REV);

        let err = write_version_file(&path, &resolved, "0.2.2", None).unwrap_err();
        assert!(matches!(err, VerstampError::MetadataIo { .. }));
        assert!(err.to_string().contains("no-such-dir"));
    }

    #[test]
    fn read_back_round_trips() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("version.py");
        let resolved = resolve("0.2.2", Some("1"), false, REV);
        write_version_file(&path, &resolved, "0.2.2", Some("1")).unwrap();

        assert_eq!(read_version_file(&path).unwrap(), sample());
    }

    #[test]
    fn read_rejects_missing_key() {
        let path = Path::new("version.py");
        let err = VersionMetadata::parse("short_version = '1.0.0'\n", path).unwrap_err();
        assert!(matches!(err, VerstampError::MetadataFormat { .. }));
        assert!(err.to_string().contains("build_number"));
    }

    #[test]
    fn read_reports_first_missing_key_in_file_order() {
        let body = "short_version = '1.0.0'\nbuild_number = '0'\nversion = '1.0.0'\nrelease = True\n";
        let err = VersionMetadata::parse(body, Path::new("version.py")).unwrap_err();
        assert!(err.to_string().contains("full_version"));
        assert!(!err.to_string().contains("release"));
    }

    #[test]
    fn read_rejects_non_boolean_release() {
        let body = sample().render().replace("release = False", "release = maybe");
        let err = VersionMetadata::parse(&body, Path::new("version.py")).unwrap_err();
        assert!(err.to_string().contains("maybe"));
    }

    #[test]
    fn extract_fields_matches_keys_exactly() {
        // `version` must not match `short_version` or `full_version`.
        let fields = extract_fields(&sample().render(), &["version"]);
        assert_eq!(fields, vec![("version".to_string(), "0.2.2.dev1".to_string())]);
    }

    #[test]
    fn extract_fields_strips_quotes_and_whitespace() {
        let content = "  build_number   =   \"12\"  \nshort_version='3.4.5'\n";
        let fields = extract_fields(content, &["short_version", "build_number"]);
        assert_eq!(
            fields,
            vec![
                ("build_number".to_string(), "12".to_string()),
                ("short_version".to_string(), "3.4.5".to_string()),
            ]
        );
    }

    #[test]
    fn extract_fields_first_assignment_wins() {
        let content = "short_version = '1.0.0'\nshort_version = '9.9.9'\n";
        let fields = extract_fields(content, &["short_version"]);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].1, "1.0.0");
    }

    #[test]
    fn extract_fields_ignores_comments_and_blank_lines() {
        let content = "# short_version is generated\n\nshort_version = '1.0.0'\n";
        let fields = extract_fields(content, &["short_version"]);
        assert_eq!(fields, vec![("short_version".to_string(), "1.0.0".to_string())]);
    }
}
