//! Payload diagnostics.
//!
//! The theme engine silently skips anything it can't use. This module walks
//! the same typed tree and reports what was skipped, plus values that parse
//! but are unlikely to render (malformed colors, unknown layout keywords).

// Allow format! appended to String - more readable for building messages
#![allow(clippy::format_push_string)]

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

use crate::models::field::json_type_name;
use crate::models::{
    BrandingOverrides, Field, PageBackground, ScreenInstance, TextStyle, Theme, ThemeBorders,
    ThemeColors, ThemeFonts, ThemeWidget,
};

/// Hex, functional notation (`rgb(...)`, `hsl(...)`, ...) or a bare keyword.
static CSS_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(#([0-9a-f]{3,4}|[0-9a-f]{6}|[0-9a-f]{8})|(rgba?|hsla?|hwb|lab|lch|oklab|oklch|color)\(\s*[^()]*\)|[a-z]+)$",
    )
    .unwrap()
});

const LAYOUT_KEYWORDS: [&str; 3] = ["center", "left", "right"];
const LOGO_POSITIONS: [&str; 4] = ["center", "left", "right", "none"];
const CAPTCHA_THEMES: [&str; 3] = ["auto", "light", "dark"];

/// How serious an issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The value is kept but probably won't render as intended.
    Warning,
    /// The value was dropped.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// One problem found in a payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayloadIssue {
    /// Dotted path from the screen root, e.g. `branding.themes.default.borders.button_border_radius`.
    pub path: String,
    /// What the engine expects there.
    pub expected: String,
    /// What was actually found.
    pub found: String,
    /// Whether the value was dropped or only looks suspicious.
    pub severity: Severity,
}

impl fmt::Display for PayloadIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: expected {}, found {}",
            self.path, self.expected, self.found
        )
    }
}

/// Validation result with errors and warnings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Values the engine drops
    pub errors: Vec<PayloadIssue>,
    /// Values the engine keeps but that look wrong
    pub warnings: Vec<PayloadIssue>,
}

impl ValidationReport {
    /// Creates an empty report.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Returns true if there are no errors (warnings are allowed).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns true if there are neither errors nor warnings.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// Files an issue under its severity.
    pub fn add(&mut self, issue: PayloadIssue) {
        match issue.severity {
            Severity::Error => self.errors.push(issue),
            Severity::Warning => self.warnings.push(issue),
        }
    }

    /// Formats the report as a user-friendly message.
    #[must_use]
    pub fn format_message(&self) -> String {
        let mut message = String::new();

        if !self.errors.is_empty() {
            message.push_str(&format!("{} validation errors:\n", self.errors.len()));
            for (idx, error) in self.errors.iter().enumerate() {
                message.push_str(&format!("  {}. {}\n", idx + 1, error));
            }
        }

        if !self.warnings.is_empty() {
            if !message.is_empty() {
                message.push('\n');
            }
            message.push_str(&format!("{} warnings:\n", self.warnings.len()));
            for (idx, warning) in self.warnings.iter().enumerate() {
                message.push_str(&format!("  {}. {}\n", idx + 1, warning));
            }
        }

        message
    }
}

/// Walks a screen's branding and reports every issue, in payload order.
#[must_use]
pub fn collect_issues(screen: &ScreenInstance) -> Vec<PayloadIssue> {
    let mut walker = Walker::default();

    if let Some(branding) = walker.object(&screen.branding, "branding") {
        if let Some(settings) = walker.object(&branding.settings, "branding.settings") {
            walker.overrides(settings, "branding.settings");
        }
        if let Some(themes) = walker.object(&branding.themes, "branding.themes") {
            if let Some(theme) = walker.object(&themes.default_theme, "branding.themes.default") {
                walker.theme(theme, "branding.themes.default");
            }
        }
    }

    if let Some(organization) = walker.object(&screen.organization, "organization") {
        if let Some(branding) = walker.object(&organization.branding, "organization.branding") {
            walker.overrides(branding, "organization.branding");
        }
    }

    walker.issues
}

/// Builds a [`ValidationReport`] for a screen.
#[must_use]
pub fn validate_screen(screen: &ScreenInstance) -> ValidationReport {
    let mut report = ValidationReport::new();
    for issue in collect_issues(screen) {
        report.add(issue);
    }
    report
}

/// Returns true if a value looks like a CSS color.
#[must_use]
pub fn looks_like_color(value: &str) -> bool {
    CSS_COLOR.is_match(value.trim())
}

#[derive(Default)]
struct Walker {
    issues: Vec<PayloadIssue>,
}

impl Walker {
    fn push(&mut self, path: String, expected: &str, found: String, severity: Severity) {
        self.issues.push(PayloadIssue {
            path,
            expected: expected.to_string(),
            found,
            severity,
        });
    }

    /// Reports a wrong-typed field and returns its value if it has one.
    fn check<'a, T>(&mut self, field: &'a Field<T>, path: &str, expected: &str) -> Option<&'a T> {
        if let Some(raw) = field.invalid_value() {
            self.push(
                path.to_string(),
                expected,
                json_type_name(raw).to_string(),
                Severity::Error,
            );
        }
        field.value()
    }

    fn object<'a, T>(&mut self, field: &'a Field<T>, path: &str) -> Option<&'a T> {
        self.check(field, path, "object")
    }

    fn string<'a>(&mut self, field: &'a Field<String>, path: &str) -> Option<&'a str> {
        self.check(field, path, "string").map(String::as_str)
    }

    fn color(&mut self, field: &Field<String>, path: &str) {
        if let Some(value) = self.string(field, path) {
            if !value.is_empty() && !looks_like_color(value) {
                self.push(
                    path.to_string(),
                    "CSS color",
                    format!("'{value}'"),
                    Severity::Warning,
                );
            }
        }
    }

    fn keyword(&mut self, field: &Field<String>, path: &str, allowed: &[&str]) {
        if let Some(value) = self.string(field, path) {
            if !value.is_empty() && !allowed.contains(&value) {
                self.push(
                    path.to_string(),
                    &format!("one of {}", allowed.join(", ")),
                    format!("'{value}'"),
                    Severity::Warning,
                );
            }
        }
    }

    fn number(&mut self, field: &Field<f64>, path: &str) {
        self.check(field, path, "number");
    }

    fn boolean(&mut self, field: &Field<bool>, path: &str) {
        self.check(field, path, "boolean");
    }

    fn overrides(&mut self, overrides: &BrandingOverrides, path: &str) {
        if let Some(colors) = self.object(&overrides.colors, &format!("{path}.colors")) {
            self.color(&colors.primary, &format!("{path}.colors.primary"));
            self.color(
                &colors.page_background,
                &format!("{path}.colors.page_background"),
            );
        }
        self.string(&overrides.logo_url, &format!("{path}.logoUrl"));
    }

    fn theme(&mut self, theme: &Theme, path: &str) {
        if let Some(colors) = self.object(&theme.colors, &format!("{path}.colors")) {
            self.colors(colors, &format!("{path}.colors"));
        }
        if let Some(borders) = self.object(&theme.borders, &format!("{path}.borders")) {
            self.borders(borders, &format!("{path}.borders"));
        }
        if let Some(fonts) = self.object(&theme.fonts, &format!("{path}.fonts")) {
            self.fonts(fonts, &format!("{path}.fonts"));
        }

        // Report both spellings; only one of them is used
        for (field, key) in [
            (&theme.page_background, "pageBackground"),
            (&theme.page_background_legacy, "page_background"),
        ] {
            let section_path = format!("{path}.{key}");
            if let Some(page_background) = self.object(field, &section_path) {
                self.page_background(page_background, &section_path);
            }
        }

        if let Some(widget) = self.object(&theme.widget, &format!("{path}.widget")) {
            self.widget(widget, &format!("{path}.widget"));
        }
    }

    fn colors(&mut self, colors: &ThemeColors, path: &str) {
        for (name, field) in colors.entries() {
            let field_path = format!("{path}.{name}");
            if name == "captcha_widget_theme" {
                self.keyword(field, &field_path, &CAPTCHA_THEMES);
            } else {
                self.color(field, &field_path);
            }
        }
    }

    fn borders(&mut self, borders: &ThemeBorders, path: &str) {
        for (name, field) in [
            ("button_border_radius", &borders.button_border_radius),
            ("input_border_radius", &borders.input_border_radius),
            ("widget_corner_radius", &borders.widget_corner_radius),
            ("button_border_weight", &borders.button_border_weight),
            ("input_border_weight", &borders.input_border_weight),
            ("widget_border_weight", &borders.widget_border_weight),
        ] {
            self.number(field, &format!("{path}.{name}"));
        }
        self.string(&borders.buttons_style, &format!("{path}.buttons_style"));
        self.string(&borders.inputs_style, &format!("{path}.inputs_style"));
        self.boolean(
            &borders.show_widget_shadow,
            &format!("{path}.show_widget_shadow"),
        );
    }

    fn fonts(&mut self, fonts: &ThemeFonts, path: &str) {
        self.number(
            &fonts.reference_text_size,
            &format!("{path}.reference_text_size"),
        );
        for (name, field) in fonts.text_styles() {
            let style_path = format!("{path}.{name}");
            if let Some(style) = self.object(field, &style_path) {
                self.text_style(style, &style_path);
            }
        }
        self.string(&fonts.links_style, &format!("{path}.links_style"));
    }

    fn text_style(&mut self, style: &TextStyle, path: &str) {
        self.number(&style.size, &format!("{path}.size"));
        self.boolean(&style.bold, &format!("{path}.bold"));
    }

    fn page_background(&mut self, page_background: &PageBackground, path: &str) {
        self.color(
            &page_background.background_color,
            &format!("{path}.background_color"),
        );
        self.string(
            &page_background.background_image_url,
            &format!("{path}.background_image_url"),
        );
        self.keyword(
            &page_background.page_layout,
            &format!("{path}.page_layout"),
            &LAYOUT_KEYWORDS,
        );
    }

    fn widget(&mut self, widget: &ThemeWidget, path: &str) {
        self.keyword(
            &widget.logo_position,
            &format!("{path}.logo_position"),
            &LOGO_POSITIONS,
        );
        self.string(&widget.logo_url, &format!("{path}.logo_url"));
        self.number(&widget.logo_height, &format!("{path}.logo_height"));
        self.keyword(
            &widget.header_text_alignment,
            &format!("{path}.header_text_alignment"),
            &LAYOUT_KEYWORDS,
        );
        self.string(
            &widget.social_buttons_layout,
            &format!("{path}.social_buttons_layout"),
        );
    }
}
