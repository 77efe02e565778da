//! Generated build artifacts.
//!
//! Two files carry the resolved version to downstream packaging:
//!
//! - the **version file**, a line-oriented `key = 'value'` record that is the
//!   single source of truth for "what version am I" ([`version_file`])
//! - the **recipe file**, a packaging template whose leading header lines are
//!   regenerated from the version file ([`recipe`])
//!
//! Both are rewritten in full on every run. Writes truncate first and are not
//! rolled back on failure; callers that need atomicity should write to a
//! temporary path and rename.

pub mod recipe;
pub mod version_file;

pub use recipe::{
    render_directive, rewrite_recipe, write_recipe_file, write_recipe_file_with_header,
    DEFAULT_HEADER_LINES, RECIPE_KEYS,
};
pub use version_file::{
    extract_fields, read_version_file, write_version_file, VersionMetadata, ABSENT_BUILD_NUMBER,
    GENERATED_BANNER,
};
