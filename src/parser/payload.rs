//! Loading screen payloads from JSON.

use anyhow::{Context, Result};
use serde_json::Value;
use std::io::Read;
use std::path::Path;
use tracing::warn;

use crate::models::field::json_type_name;
use crate::models::ScreenInstance;

/// Parses a screen instance from JSON text.
///
/// Only JSON syntax errors fail. A top-level value that isn't an object is
/// treated as a screen with no branding.
pub fn parse_screen_str(content: &str) -> Result<ScreenInstance> {
    let value: Value = serde_json::from_str(content).context("Payload is not valid JSON")?;
    Ok(parse_screen_value(value))
}

/// Converts an already-parsed JSON value into a screen instance.
#[must_use]
pub fn parse_screen_value(value: Value) -> ScreenInstance {
    if !value.is_object() {
        warn!(found = json_type_name(&value), "Screen payload is not an object");
        return ScreenInstance::default();
    }

    // Every field is a tolerant `Field`, so an object always deserializes
    serde_json::from_value(value).unwrap_or_default()
}

/// Reads a screen instance from a file, or from stdin when `path` is `-`.
pub fn load_screen(path: &Path) -> Result<ScreenInstance> {
    let content = read_payload(path)?;

    parse_screen_str(&content)
        .with_context(|| format!("Failed to parse payload: {}", path.display()))
}

fn read_payload(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read payload from stdin")?;
        return Ok(buffer);
    }

    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read payload file: {}", path.display()))
}
