//! Captcha theme command.

use crate::cli::common::{load_config, read_screen, CliError, CliResult};
use crate::models::ScreenInstance;
use crate::theme::{captcha_theme, SystemColorScheme, ThemeMode};
use clap::Args;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Resolve the theme for the captcha widget
#[derive(Debug, Clone, Args)]
pub struct CaptchaThemeArgs {
    /// Requested mode (auto, light, or dark)
    #[arg(value_name = "MODE")]
    pub mode: Option<String>,

    /// Read the mode from a payload's `captcha_widget_theme` color when MODE is omitted
    #[arg(long, value_name = "FILE")]
    pub payload: Option<PathBuf>,
}

impl CaptchaThemeArgs {
    /// Execute the captcha-theme command
    pub fn execute(&self) -> CliResult<()> {
        let mode = match &self.mode {
            Some(mode) => mode
                .parse::<ThemeMode>()
                .map_err(|e| CliError::usage(e.to_string()))?,
            None => self.fallback_mode()?,
        };

        debug!(%mode, "Resolving captcha theme");
        println!("{}", captcha_theme(Some(mode), &SystemColorScheme));
        Ok(())
    }

    /// Payload mode if one is given and readable, else the configured default.
    fn fallback_mode(&self) -> CliResult<ThemeMode> {
        if let Some(path) = &self.payload {
            let screen = read_screen(path)?;
            if let Some(mode) = payload_mode(&screen) {
                return Ok(mode);
            }
        }

        Ok(load_config()?.captcha.theme)
    }
}

/// The mode named by `themes.default.colors.captcha_widget_theme`, if any.
fn payload_mode(screen: &ScreenInstance) -> Option<ThemeMode> {
    let raw = screen
        .default_theme()?
        .colors
        .value()?
        .captcha_widget_theme
        .value()?;

    match raw.parse() {
        Ok(mode) => Some(mode),
        Err(e) => {
            warn!(value = raw.as_str(), "Ignoring captcha_widget_theme: {e}");
            None
        }
    }
}
