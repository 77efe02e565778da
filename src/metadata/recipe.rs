//! Recipe header regeneration.
//!
//! The recipe is a packaging template whose first [`DEFAULT_HEADER_LINES`]
//! lines are generated `{% set key = 'value' %}` directives. Everything after
//! the header is owned by humans and passes through byte-for-byte.
//!
//! Precondition: the recipe's leading `header_lines` lines are the generated
//! header. The header size is a contract between this writer and the recipe
//! template, not something detected. It must equal the number of directives
//! written ([`RECIPE_KEYS`]), otherwise every rerun would eat or stack header
//! lines, so a mismatch is refused before the recipe is touched. When a
//! replaced line doesn't look like a directive a warning is logged.

use crate::error::{Result, VerstampError};
use crate::metadata::version_file::extract_fields;
use std::fs;
use std::path::Path;

/// Number of leading recipe lines owned by the generator.
pub const DEFAULT_HEADER_LINES: usize = 2;

/// Version file keys copied into the recipe header, in header order.
pub const RECIPE_KEYS: &[&str] = &["short_version", "build_number"];

const DIRECTIVE_PREFIX: &str = "{% set ";

/// Render one header directive.
pub fn render_directive(key: &str, value: &str) -> String {
    format!("{}{} = '{}' %}}\n", DIRECTIVE_PREFIX, key, value)
}

/// Replace the first `header_lines` lines of `original` with directives for
/// `fields`, keeping the remaining lines untouched.
pub fn rewrite_recipe(original: &str, fields: &[(String, String)], header_lines: usize) -> String {
    let mut out = String::new();
    for (key, value) in fields {
        out.push_str(&render_directive(key, value));
    }
    for line in original.split_inclusive('\n').skip(header_lines) {
        out.push_str(line);
    }
    out
}

/// Regenerate the header of the recipe at `path` from the version file at
/// `metadata_path`, using the default header size.
pub fn write_recipe_file(path: &Path, metadata_path: &Path) -> Result<()> {
    write_recipe_file_with_header(path, metadata_path, DEFAULT_HEADER_LINES)
}

/// Regenerate the header of the recipe at `path`, treating its first
/// `header_lines` lines as generated.
pub fn write_recipe_file_with_header(
    path: &Path,
    metadata_path: &Path,
    header_lines: usize,
) -> Result<()> {
    let metadata = fs::read_to_string(metadata_path)
        .map_err(|e| VerstampError::metadata_io(metadata_path, e))?;
    let fields = extract_fields(&metadata, RECIPE_KEYS);
    if fields.len() < RECIPE_KEYS.len() {
        let missing: Vec<_> = RECIPE_KEYS
            .iter()
            .filter(|key| !fields.iter().any(|(k, _)| k == *key))
            .copied()
            .collect();
        return Err(VerstampError::MetadataFormat {
            path: metadata_path.to_path_buf(),
            message: format!("missing recipe keys: {}", missing.join(", ")),
        });
    }
    if header_lines != fields.len() {
        return Err(VerstampError::MetadataFormat {
            path: path.to_path_buf(),
            message: format!(
                "header of {} lines does not match the {} generated directives",
                header_lines,
                fields.len()
            ),
        });
    }

    let original =
        fs::read_to_string(path).map_err(|e| VerstampError::metadata_io(path, e))?;
    warn_on_foreign_header(path, &original, header_lines);

    let rewritten = rewrite_recipe(&original, &fields, header_lines);
    fs::write(path, rewritten).map_err(|e| VerstampError::metadata_io(path, e))?;
    tracing::debug!("Rewrote recipe header in {}", path.display());
    Ok(())
}

fn warn_on_foreign_header(path: &Path, original: &str, header_lines: usize) {
    for (index, line) in original.lines().take(header_lines).enumerate() {
        if !line.trim_start().starts_with(DIRECTIVE_PREFIX) {
            tracing::warn!(
                "{} line {} is not a generated directive but will be replaced: {}",
                path.display(),
                index + 1,
                line
            );
        }
    }
}
