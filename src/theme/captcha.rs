//! Captcha widget theme selection.

use anyhow::bail;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Requested color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Follow the OS color scheme
    #[default]
    Auto,
    /// Always light
    Light,
    /// Always dark
    Dark,
}

impl ThemeMode {
    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => bail!("Unknown theme mode '{other}' (expected auto, light or dark)"),
        }
    }
}

/// Theme handed to the captcha widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptchaTheme {
    /// Light widget
    Light,
    /// Dark widget
    Dark,
}

impl CaptchaTheme {
    /// Value passed to the widget's `theme` option.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for CaptchaTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Answers whether the environment prefers a dark color scheme.
pub trait ColorSchemeSignal {
    /// Returns true when a dark scheme is preferred.
    fn prefers_dark(&self) -> bool;
}

impl<F: Fn() -> bool> ColorSchemeSignal for F {
    fn prefers_dark(&self) -> bool {
        self()
    }
}

/// Reads the OS color scheme through `dark-light`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemColorScheme;

impl ColorSchemeSignal for SystemColorScheme {
    fn prefers_dark(&self) -> bool {
        match dark_light::detect() {
            Ok(dark_light::Mode::Dark) => true,
            // Unspecified or undetectable counts as light
            Ok(dark_light::Mode::Light | dark_light::Mode::Unspecified) | Err(_) => false,
        }
    }
}

/// Picks the captcha theme for a requested mode.
///
/// # Examples
/// ```
/// use ultheme::theme::{captcha_theme, CaptchaTheme, ThemeMode};
///
/// let always_dark = || true;
/// assert_eq!(captcha_theme(Some(ThemeMode::Auto), &always_dark), CaptchaTheme::Dark);
/// assert_eq!(captcha_theme(Some(ThemeMode::Light), &always_dark), CaptchaTheme::Light);
/// assert_eq!(captcha_theme(None, &always_dark), CaptchaTheme::Light);
/// ```
#[must_use]
pub fn captcha_theme<S: ColorSchemeSignal + ?Sized>(
    requested: Option<ThemeMode>,
    signal: &S,
) -> CaptchaTheme {
    match requested {
        Some(ThemeMode::Dark) => CaptchaTheme::Dark,
        Some(ThemeMode::Auto) if signal.prefers_dark() => CaptchaTheme::Dark,
        Some(ThemeMode::Auto | ThemeMode::Light) | None => CaptchaTheme::Light,
    }
}
