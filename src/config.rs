//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving the CLI's defaults
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::constants::{CONFIG_DIR_ENV, CONFIG_DIR_NAME, DEFAULT_SELECTOR};
use crate::theme::ThemeMode;

/// How resolved properties are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// A CSS rule block of custom properties
    #[default]
    Css,
    /// A flat JSON object
    Json,
}

impl OutputFormat {
    /// Name as used in config files and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "css" => Ok(Self::Css),
            "json" => Ok(Self::Json),
            other => anyhow::bail!("Unknown output format '{other}' (expected css or json)"),
        }
    }
}

/// Output rendering defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format for `resolve`
    pub format: OutputFormat,
    /// Selector wrapping CSS output
    pub selector: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            selector: DEFAULT_SELECTOR.to_string(),
        }
    }
}

/// Captcha widget defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CaptchaConfig {
    /// Mode used when neither the command line nor the payload names one
    pub theme: ThemeMode,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/ultheme/config.toml`
/// - macOS: `~/Library/Application Support/ultheme/config.toml`
/// - Windows: `%APPDATA%\ultheme\config.toml`
///
/// `ULTHEME_CONFIG_DIR` replaces the directory on every platform.
///
/// # Validation
///
/// - `output.selector` must be non-empty and must not contain `{` or `}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Output rendering
    pub output: OutputConfig,
    /// Captcha theme selection
    pub captcha: CaptchaConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory, honoring `ULTHEME_CONFIG_DIR`.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_dir()?)
    }

    /// Loads configuration from `config.toml` inside `dir`.
    pub fn load_from(dir: &Path) -> Result<Self> {
        let config_path = dir.join("config.toml");

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate().context(format!(
            "Invalid config file: {}",
            config_path.display()
        ))?;

        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_dir()?)
    }

    /// Saves configuration into `dir`, creating it if needed.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, dir: &Path) -> Result<()> {
        self.validate()?;

        fs::create_dir_all(dir).context(format!(
            "Failed to create config directory: {}",
            dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = dir.join("config.toml");
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        validate_selector(&self.output.selector)
    }

    /// Sets the CSS selector with validation.
    pub fn set_selector(&mut self, selector: &str) -> Result<()> {
        validate_selector(selector)?;
        self.output.selector = selector.trim().to_string();
        Ok(())
    }
}

/// Checks that a selector can wrap a rule block.
pub fn validate_selector(selector: &str) -> Result<()> {
    if selector.trim().is_empty() {
        anyhow::bail!("Selector must not be empty");
    }
    if selector.contains(['{', '}']) {
        anyhow::bail!("Selector must not contain braces: {selector}");
    }
    Ok(())
}
