//! End-to-end tests for `ultheme config` commands.

mod fixtures;

use fixtures::*;
use tempfile::TempDir;

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_config_show_defaults_json() {
    let config_dir = TempDir::new().unwrap();

    let output = ultheme_command(&["config", "show", "--json"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Show config should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let result: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Should parse JSON output");
    assert_eq!(result["output"]["format"], "css");
    assert_eq!(result["output"]["selector"], ":root");
    assert_eq!(result["captcha"]["theme"], "auto");
}

#[test]
fn test_config_show_human_readable() {
    let config_dir = TempDir::new().unwrap();

    let output = ultheme_command(&["config", "show"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("ultheme Configuration\n=====================\n"));
    assert!(stdout.contains("Output:"));
    assert!(stdout.contains("Selector: :root"));
    assert!(stdout.contains("Theme: auto"));
}

// ============================================================================
// Set Command Tests
// ============================================================================

#[test]
fn test_config_set_round_trip() {
    let config_dir = TempDir::new().unwrap();

    let output = ultheme_command(
        &[
            "config",
            "set",
            "--format",
            "json",
            "--selector",
            ".ulp-container",
            "--captcha-theme",
            "dark",
        ],
        config_dir.path(),
    )
    .output()
    .expect("Failed to execute command");
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(config_dir.path().join("config.toml").exists());

    let output = ultheme_command(&["config", "show", "--json"], config_dir.path())
        .output()
        .expect("Failed to execute command");
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["output"]["format"], "json");
    assert_eq!(result["output"]["selector"], ".ulp-container");
    assert_eq!(result["captcha"]["theme"], "dark");
}

#[test]
fn test_config_set_requires_an_option() {
    let config_dir = TempDir::new().unwrap();

    let output = ultheme_command(&["config", "set"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stderr).contains("At least one configuration option"));
}

#[test]
fn test_config_set_rejects_invalid_values() {
    let config_dir = TempDir::new().unwrap();

    for args in [
        ["config", "set", "--format", "yaml"],
        ["config", "set", "--selector", "}"],
        ["config", "set", "--captcha-theme", "sepia"],
    ] {
        let output = ultheme_command(&args, config_dir.path())
            .output()
            .expect("Failed to execute command");
        assert_eq!(output.status.code(), Some(3), "{args:?}");
    }

    assert!(!config_dir.path().join("config.toml").exists());
}

#[test]
fn test_config_malformed_file_is_io_error() {
    let config_dir = TempDir::new().unwrap();
    std::fs::write(config_dir.path().join("config.toml"), "[output").unwrap();

    let output = ultheme_command(&["config", "show"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
}
