//! Override extraction for the settings and organization tiers.
//!
//! Those tiers only get a small escape hatch over the full theme surface:
//! brand color, page background color and logo. Everything else they carry
//! is ignored.

use super::converters::{format_number, quoted};
use super::properties::{
    COLOR_PRIMARY_BUTTON, PAGE_BG_BACKGROUND_COLOR, WIDGET_LOGO_HEIGHT, WIDGET_LOGO_URL,
};
use crate::models::{BrandingOverrides, PropertyMap};

/// Dotted payload path → property it overrides.
pub const OVERRIDE_MAPPING: [(&str, &str); 3] = [
    ("colors.primary", COLOR_PRIMARY_BUTTON),
    ("colors.page_background", PAGE_BG_BACKGROUND_COLOR),
    ("logoUrl", WIDGET_LOGO_URL),
];

/// Extracts the override subset from a settings or organization branding object.
///
/// A missing source yields an empty map.
#[must_use]
pub fn extract_overrides(source: Option<&BrandingOverrides>) -> PropertyMap {
    let mut overrides = PropertyMap::new();

    let Some(source) = source else {
        return overrides;
    };

    for (path, property) in OVERRIDE_MAPPING {
        if let Some(value) = lookup(source, path).filter(|value| !value.is_empty()) {
            overrides.insert(property, format_override(property, value));
        }
    }

    overrides
}

/// Resolves a dotted path against an override object.
///
/// Any missing, null, or wrong-typed segment resolves to `None`, as does a
/// path outside the override surface.
#[must_use]
pub fn lookup<'a>(source: &'a BrandingOverrides, path: &str) -> Option<&'a str> {
    let mut segments = path.split('.');
    let value = match (segments.next(), segments.next(), segments.next()) {
        (Some("logoUrl"), None, None) => source.logo_url.value(),
        (Some("colors"), Some(leaf), None) => {
            let colors = source.colors.value()?;
            match leaf {
                "primary" => colors.primary.value(),
                "page_background" => colors.page_background.value(),
                _ => None,
            }
        }
        _ => None,
    };
    value.map(String::as_str)
}

/// Applies per-property formatting to an override value.
#[must_use]
pub fn format_override(property: &str, value: &str) -> String {
    match property {
        WIDGET_LOGO_URL => quoted(value),
        // Reserved: not in the mapping yet
        WIDGET_LOGO_HEIGHT => match value.trim().parse::<f64>() {
            Ok(height) if height.is_finite() => format!("{}px", format_number(height)),
            _ => value.to_string(),
        },
        _ => value.to_string(),
    }
}
