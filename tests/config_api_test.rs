//! Integration tests for config module public API.

use verstamp::config::{find_project_root, load_config, validate, VerstampConfig};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn public_api_is_accessible() {
    let config = VerstampConfig::new("1.0.0");
    assert_eq!(config.dev_build(), None);
    assert!(!config.released);
}

#[test]
fn full_config_workflow() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("verstamp.yml"),
        r#"
base_version: 0.2.2
dev_build: "None"
released: true
version_file: blues/version.py
recipe_file: devtools/conda-recipe/meta.yaml
"#,
    )
    .unwrap();
    let nested = temp.path().join("blues");
    fs::create_dir_all(&nested).unwrap();

    let root = find_project_root(&nested).unwrap();
    let config = load_config(&root, None).unwrap();
    validate(&config).unwrap();

    assert_eq!(config.dev_build(), Some("None"));
    assert_eq!(
        config.version_file_path(&root),
        temp.path().join("blues/version.py")
    );
    assert_eq!(
        config.recipe_file_path(&root),
        Some(temp.path().join("devtools/conda-recipe/meta.yaml"))
    );
    assert_eq!(config.recipe_header_lines, 2);
}

#[test]
fn unknown_fields_are_rejected() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("verstamp.yml"),
        "base_version: 0.2.2\nbuild_dir: out\n",
    )
    .unwrap();

    assert!(load_config(temp.path(), None).is_err());
}

#[test]
fn defaults_fill_optional_fields() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("verstamp.yml"), "base_version: 0.2.2\n").unwrap();

    let config = load_config(temp.path(), None).unwrap();
    assert_eq!(config.version_file, PathBuf::from("version.py"));
    assert_eq!(config.python, "python3");
    assert_eq!(config.probe_timeout_secs, 5);
    assert!(config.recipe_file.is_none());
}
