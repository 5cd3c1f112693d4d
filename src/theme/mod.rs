//! The branding theme engine.
//!
//! A screen's branding payload is flattened into CSS custom properties,
//! merged across tiers, diffed against what was last written, and pushed to a
//! [`StyleTarget`].

pub mod applier;
pub mod cache;
pub mod captcha;
pub mod converters;
pub mod overrides;
pub mod properties;
pub mod resolver;

pub use applier::{apply_theme, ApplyOutcome, StyleTarget};
pub use cache::ThemeCache;
pub use captcha::{captcha_theme, CaptchaTheme, ColorSchemeSignal, SystemColorScheme, ThemeMode};
pub use converters::{
    flatten_borders, flatten_colors, flatten_fonts, flatten_page_background, flatten_widget,
};
pub use overrides::{extract_overrides, OVERRIDE_MAPPING};
pub use resolver::{resolve, resolve_with_sources, ResolvedProperty, Tier, TierVariables};
