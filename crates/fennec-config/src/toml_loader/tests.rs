//! Tests for TOML config loading, creation, and path resolution.

use super::template::default_config_toml;
use super::*;
use crate::schema::{FennecConfig, LogLevel};
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_fennec_config.toml"));
    assert!(matches!(
        result.unwrap_err(),
        fennec_common::ConfigError::FileNotFound(_)
    ));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[startup]
default_uri = "https://start.example.org"

[logging]
level = "debug"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.startup.default_uri, "https://start.example.org");
    assert_eq!(config.logging.level, LogLevel::Debug);
    // Defaults preserved
    assert_eq!(config.gesture.click_threshold, 10.0);
    assert!(!config.bridge.report_document_scope);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, fennec_common::ConfigError::ParseError(_)));
}

#[test]
fn load_config_with_invalid_values_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[gesture]
click_threshold = -4.0

[bridge]
report_document_scope = true
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.gesture.click_threshold, 10.0);
    assert!(!config.bridge.report_document_scope);
}

#[test]
fn default_template_parses_to_default_config() {
    let parsed: FennecConfig = toml::from_str(&default_config_toml()).unwrap();
    let default = FennecConfig::default();
    assert_eq!(parsed.startup.default_uri, default.startup.default_uri);
    assert_eq!(parsed.gesture.click_threshold, default.gesture.click_threshold);
    assert_eq!(parsed.bridge.window_id, default.bridge.window_id);
    assert_eq!(parsed.logging.level, default.logging.level);
}

#[test]
fn create_default_config_makes_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    create_default_config(&path).unwrap();

    assert!(path.exists());
    let config = load_from_path(&path).unwrap();
    assert_eq!(config.startup.default_uri, "about:support");
}

#[test]
fn default_paths_end_with_app_dir() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("fennec/config.toml"));
    }
    if let Ok(path) = default_prefs_path() {
        assert!(path.ends_with("fennec/prefs.toml"));
    }
}
