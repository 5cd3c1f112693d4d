//! Shared test fixtures for engine and CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A payload exercising every tier and every theme section.
pub fn full_payload() -> Value {
    json!({
        "branding": {
            "settings": {
                "colors": { "primary": "#0059d6", "page_background": "#000000" },
                "logoUrl": "https://cdn.example.com/tenant.png"
            },
            "themes": { "default": {
                "colors": {
                    "primary_button": "#635dff",
                    "primary_button_label": "#ffffff",
                    "body_text": "#1e212a",
                    "error": "#d03c38",
                    "captcha_widget_theme": "auto"
                },
                "borders": {
                    "button_border_radius": 3,
                    "button_border_weight": 0,
                    "buttons_style": "rounded",
                    "show_widget_shadow": true
                },
                "fonts": {
                    "reference_text_size": 16,
                    "title": { "size": 150, "bold": true },
                    "body_text": { "size": 87.5, "bold": false },
                    "links_style": "normal"
                },
                "pageBackground": {
                    "background_image_url": "https://cdn.example.com/bg.jpg",
                    "page_layout": "left"
                },
                "widget": {
                    "logo_position": "center",
                    "logo_height": 52,
                    "header_text_alignment": "right",
                    "social_buttons_layout": "bottom"
                }
            } }
        },
        "organization": {
            "branding": { "colors": { "primary": "#ff0000" } }
        }
    })
}

/// The end-to-end payload with two colors and a bold title.
pub fn minimal_theme_payload() -> Value {
    json!({
        "branding": { "themes": { "default": {
            "colors": { "primary_button": "#000", "error": "#f00" },
            "fonts": { "title": { "size": 200, "bold": true } }
        } } }
    })
}

/// A payload with wrong-typed fields in several sections.
pub fn mistyped_payload() -> Value {
    json!({
        "branding": { "themes": { "default": {
            "colors": { "header": 42, "error": "#f00" },
            "borders": { "button_border_radius": "4px" },
            "widget": "big"
        } } }
    })
}

/// Writes a payload to a temp file and returns its path with the owning dir.
pub fn write_payload(value: &Value) -> (PathBuf, TempDir) {
    write_raw_payload(&serde_json::to_string_pretty(value).unwrap())
}

/// Writes arbitrary text as a payload file.
pub fn write_raw_payload(content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("screen.json");
    fs::write(&path, content).unwrap();
    (path, temp_dir)
}

/// Path to the ultheme binary
pub fn ultheme_bin() -> &'static str {
    env!("CARGO_BIN_EXE_ultheme")
}

/// Creates a Command with an isolated config directory.
pub fn ultheme_command(args: &[&str], config_dir: &std::path::Path) -> std::process::Command {
    let mut cmd = std::process::Command::new(ultheme_bin());
    cmd.env("ULTHEME_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}
