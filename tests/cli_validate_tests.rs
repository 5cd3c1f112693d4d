//! End-to-end tests for `ultheme validate`.

mod fixtures;

use fixtures::*;
use serde_json::json;
use tempfile::TempDir;

#[test]
fn test_validate_clean_payload() {
    let config_dir = TempDir::new().unwrap();
    let (payload, _payload_dir) = write_payload(&full_payload());

    let output = ultheme_command(&["validate", payload.to_str().unwrap()], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Should succeed. stdout: {}",
        String::from_utf8_lossy(&output.stdout)
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("Validation passed"));
}

#[test]
fn test_validate_reports_wrong_types() {
    let config_dir = TempDir::new().unwrap();
    let (payload, _payload_dir) = write_payload(&mistyped_payload());

    let output = ultheme_command(
        &["validate", payload.to_str().unwrap(), "--json"],
        config_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));

    let result: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Should parse JSON output");
    assert_eq!(result["valid"], false);
    let errors = result["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 3);
    assert_eq!(errors[0]["path"], "branding.themes.default.colors.header");
    assert_eq!(errors[0]["expected"], "string");
    assert_eq!(errors[0]["found"], "number");
    assert_eq!(errors[0]["severity"], "error");
}

#[test]
fn test_validate_warnings_pass_unless_strict() {
    let config_dir = TempDir::new().unwrap();
    let (payload, _payload_dir) = write_payload(&json!({
        "branding": { "themes": { "default": { "colors": { "header": "blue-ish!" } } } }
    }));

    let output = ultheme_command(&["validate", payload.to_str().unwrap()], config_dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("1 warnings:"));

    let output = ultheme_command(
        &["validate", payload.to_str().unwrap(), "--strict"],
        config_dir.path(),
    )
    .output()
    .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_validate_malformed_json() {
    let config_dir = TempDir::new().unwrap();
    let (payload, _payload_dir) = write_raw_payload("not json");

    let output = ultheme_command(&["validate", payload.to_str().unwrap()], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
}
