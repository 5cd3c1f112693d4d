//! Data models for branding payloads and resolved property maps.
//!
//! This module contains the typed boundary between the host SDK's loosely
//! typed screen object and the theme engine, plus the flat property map that
//! every engine stage produces or consumes.

pub mod field;
pub mod payload;
pub mod property_map;

// Re-export all model types
pub use field::Field;
pub use payload::{
    BrandingOverrides, BrandingPayload, OrganizationPayload, OverrideColors, PageBackground,
    ScreenInstance, TextStyle, Theme, ThemeBorders, ThemeColors, ThemeFonts, ThemeWidget, Themes,
};
pub use property_map::PropertyMap;
