//! Unit converters: one typed theme section in, flat property map out.
//!
//! Each converter emits a key only for fields that are present and usable.
//! Text and most numbers follow truthiness (empty strings and `0` are
//! skipped); border weights and booleans only need to be present, so
//! `button_border_weight: 0` and `bold: false` still produce a value, and a
//! boolean set to `null` counts as off.
//! Wrong-typed fields are skipped and logged, never coerced.

use std::borrow::Cow;

use serde_json::Value;
use tracing::warn;

use super::properties::*;
use crate::models::field::json_type_name;
use crate::models::{
    Field, PageBackground, PropertyMap, ThemeBorders, ThemeColors, ThemeFonts, ThemeWidget,
};

/// Box shadow written when `show_widget_shadow` is on.
pub const WIDGET_SHADOW: &str = "0 4px 22px 0 rgba(0, 0, 0, 0.11)";

/// Value written when a visual feature is switched off.
pub const NONE: &str = "none";

/// Font weight for `bold: true`.
pub const FONT_WEIGHT_BOLD: &str = "700";

/// Font weight for `bold: false`.
pub const FONT_WEIGHT_NORMAL: &str = "400";

// ============================================================================
// Category converters
// ============================================================================

/// Flattens `colors`. All values pass through unchanged.
#[must_use]
pub fn flatten_colors(colors: &ThemeColors) -> PropertyMap {
    let fields = [
        (COLOR_PRIMARY_BUTTON, &colors.primary_button),
        (COLOR_PRIMARY_BUTTON_LABEL, &colors.primary_button_label),
        (COLOR_SECONDARY_BUTTON_BORDER, &colors.secondary_button_border),
        (COLOR_SECONDARY_BUTTON_LABEL, &colors.secondary_button_label),
        (COLOR_BASE_FOCUS_COLOR, &colors.base_focus_color),
        (COLOR_BASE_HOVER_COLOR, &colors.base_hover_color),
        (COLOR_LINKS_FOCUSED_COMPONENTS, &colors.links_focused_components),
        (COLOR_HEADER, &colors.header),
        (COLOR_BODY_TEXT, &colors.body_text),
        (COLOR_WIDGET_BACKGROUND, &colors.widget_background),
        (COLOR_WIDGET_BORDER, &colors.widget_border),
        (COLOR_INPUT_LABELS_PLACEHOLDERS, &colors.input_labels_placeholders),
        (COLOR_INPUT_FILLED_TEXT, &colors.input_filled_text),
        (COLOR_INPUT_BORDER, &colors.input_border),
        (COLOR_INPUT_BACKGROUND, &colors.input_background),
        (COLOR_ICONS, &colors.icons),
        (COLOR_ERROR, &colors.error),
        (COLOR_SUCCESS, &colors.success),
        (COLOR_CAPTCHA_WIDGET_THEME, &colors.captcha_widget_theme),
    ];

    fields
        .into_iter()
        .filter_map(|(property, field)| text(field, property).map(|value| (property, value)))
        .collect()
}

/// Flattens `borders` with pixel units and the shadow literal.
#[must_use]
pub fn flatten_borders(borders: &ThemeBorders) -> PropertyMap {
    let mut result = PropertyMap::new();

    // Border radius values need px units
    for (property, field) in [
        (BORDER_BUTTON_BORDER_RADIUS, &borders.button_border_radius),
        (BORDER_INPUT_BORDER_RADIUS, &borders.input_border_radius),
        (BORDER_WIDGET_CORNER_RADIUS, &borders.widget_corner_radius),
    ] {
        if let Some(radius) = number(field, property) {
            result.insert(property, px(radius));
        }
    }

    // Weights are written even when zero
    for (property, field) in [
        (BORDER_BUTTON_BORDER_WEIGHT, &borders.button_border_weight),
        (BORDER_INPUT_BORDER_WEIGHT, &borders.input_border_weight),
        (BORDER_WIDGET_BORDER_WEIGHT, &borders.widget_border_weight),
    ] {
        if let Some(weight) = measure(field, property) {
            result.insert(property, px(weight));
        }
    }

    for (property, field) in [
        (BORDER_BUTTONS_STYLE, &borders.buttons_style),
        (BORDER_INPUTS_STYLE, &borders.inputs_style),
    ] {
        if let Some(style) = text(field, property) {
            result.insert(property, style);
        }
    }

    if let Some(shadow) = flag(&borders.show_widget_shadow, BORDER_SHOW_WIDGET_SHADOW) {
        let value = if shadow { WIDGET_SHADOW } else { NONE };
        result.insert(BORDER_SHOW_WIDGET_SHADOW, value);
    }

    result
}

/// Flattens `fonts`: percentage sizes become `rem`, `bold` becomes a weight.
#[must_use]
pub fn flatten_fonts(fonts: &ThemeFonts) -> PropertyMap {
    let mut result = PropertyMap::new();

    if let Some(size) = number(&fonts.reference_text_size, FONT_REFERENCE_TEXT_SIZE) {
        result.insert(FONT_REFERENCE_TEXT_SIZE, px(size));
    }

    let roles = [
        ("fonts.title", FONT_TITLE_SIZE, FONT_TITLE_WEIGHT),
        ("fonts.subtitle", FONT_SUBTITLE_SIZE, FONT_SUBTITLE_WEIGHT),
        ("fonts.body_text", FONT_BODY_TEXT_SIZE, FONT_BODY_TEXT_WEIGHT),
        ("fonts.buttons_text", FONT_BUTTONS_TEXT_SIZE, FONT_BUTTONS_TEXT_WEIGHT),
        ("fonts.input_labels", FONT_INPUT_LABELS_SIZE, FONT_INPUT_LABELS_WEIGHT),
        ("fonts.links", FONT_LINKS_SIZE, FONT_LINKS_WEIGHT),
    ];

    for ((_, style), (path, size_property, weight_property)) in
        fonts.text_styles().into_iter().zip(roles)
    {
        let style = section(style, path);

        if let Some(percent) = number(&style.size, size_property) {
            result.insert(size_property, rem_from_percent(percent));
        }

        if let Some(bold) = flag(&style.bold, weight_property) {
            let weight = if bold { FONT_WEIGHT_BOLD } else { FONT_WEIGHT_NORMAL };
            result.insert(weight_property, weight);
        }
    }

    if let Some(style) = text(&fonts.links_style, FONT_LINKS_STYLE) {
        result.insert(FONT_LINKS_STYLE, style);
    }

    result
}

/// Flattens `pageBackground`, deriving `--justify-page-layout` from the layout.
#[must_use]
pub fn flatten_page_background(page_background: &PageBackground) -> PropertyMap {
    let mut result = PropertyMap::new();

    if let Some(color) = text(&page_background.background_color, PAGE_BG_BACKGROUND_COLOR) {
        result.insert(PAGE_BG_BACKGROUND_COLOR, color);
    }

    // An explicit null or empty string clears the image
    match &page_background.background_image_url {
        Field::Absent => {}
        Field::Null => {
            result.insert(PAGE_BG_BACKGROUND_IMAGE_URL, NONE);
        }
        Field::Value(url) if url.is_empty() => {
            result.insert(PAGE_BG_BACKGROUND_IMAGE_URL, NONE);
        }
        Field::Value(url) => {
            result.insert(PAGE_BG_BACKGROUND_IMAGE_URL, format!("url({})", quoted(url)));
        }
        Field::Invalid(raw) => skip_invalid(PAGE_BG_BACKGROUND_IMAGE_URL, raw),
    }

    if let Some(layout) = text(&page_background.page_layout, PAGE_BG_PAGE_LAYOUT) {
        result.insert(PAGE_BG_PAGE_LAYOUT, layout);
        result.insert(JUSTIFY_PAGE_LAYOUT, justify_page_layout(layout));
    }

    result
}

/// Flattens `widget`, deriving the logo and header alignment aliases.
#[must_use]
pub fn flatten_widget(widget: &ThemeWidget) -> PropertyMap {
    let mut result = PropertyMap::new();

    if let Some(position) = text(&widget.logo_position, WIDGET_LOGO_POSITION) {
        result.insert(WIDGET_LOGO_POSITION, position);
        result.insert(JUSTIFY_WIDGET_LOGO, justify_widget_logo(position));
    }

    if let Some(url) = text(&widget.logo_url, WIDGET_LOGO_URL) {
        result.insert(WIDGET_LOGO_URL, quoted(url));
    }

    if let Some(height) = number(&widget.logo_height, WIDGET_LOGO_HEIGHT) {
        result.insert(WIDGET_LOGO_HEIGHT, px(height));
    }

    if let Some(alignment) = text(&widget.header_text_alignment, WIDGET_HEADER_TEXT_ALIGNMENT) {
        result.insert(WIDGET_HEADER_TEXT_ALIGNMENT, alignment);
        result.insert(TEXT_ALIGN_HEADER, text_align_header(alignment));
    }

    if let Some(layout) = text(&widget.social_buttons_layout, WIDGET_SOCIAL_BUTTONS_LAYOUT) {
        result.insert(WIDGET_SOCIAL_BUTTONS_LAYOUT, layout);
    }

    result
}

// ============================================================================
// Semantic remaps
// ============================================================================

/// Maps `page_layout` onto a flexbox `justify-content` value.
#[must_use]
pub fn justify_page_layout(layout: &str) -> &'static str {
    match layout {
        "left" => "flex-start",
        "right" => "flex-end",
        _ => "center",
    }
}

/// Maps `logo_position` onto a flexbox `justify-content` value.
#[must_use]
pub fn justify_widget_logo(position: &str) -> &'static str {
    match position {
        "left" => "flex-start",
        "right" => "flex-end",
        "none" => "none",
        _ => "center",
    }
}

/// Maps `header_text_alignment` onto a `text-align` value.
#[must_use]
pub fn text_align_header(alignment: &str) -> &'static str {
    match alignment {
        "left" => "left",
        "right" => "right",
        _ => "center",
    }
}

// ============================================================================
// Value formatting
// ============================================================================

/// Formats a number the way the host's string templates do.
///
/// # Examples
///
/// ```
/// use ultheme::theme::converters::format_number;
///
/// assert_eq!(format_number(8.0), "8");
/// assert_eq!(format_number(1.5), "1.5");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(2.5e-7), "2.5e-7");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // Also normalizes -0
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        // Exponent form with an explicit sign, e.g. `1e+21`
        let formatted = format!("{value:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => formatted,
        };
    }

    value.to_string()
}

/// `8` → `"8px"`.
#[must_use]
pub fn px(value: f64) -> String {
    format!("{}px", format_number(value))
}

/// `150` (percent) → `"1.5rem"`.
#[must_use]
pub fn rem_from_percent(percent: f64) -> String {
    format!("{}rem", format_number(percent / 100.0))
}

/// Wraps a value in double quotes, escaping quotes and backslashes inside it.
#[must_use]
pub fn quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        if ch == '"' || ch == '\\' {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('"');
    out
}

// ============================================================================
// Field readers
// ============================================================================

/// A nested section, or an empty one if it is missing or malformed.
pub(crate) fn section<'a, T: Clone + Default>(field: &'a Field<T>, path: &str) -> Cow<'a, T> {
    if let Field::Invalid(raw) = field {
        skip_invalid(path, raw);
    }
    field.value_or_default()
}

/// Non-empty string.
fn text<'a>(field: &'a Field<String>, property: &str) -> Option<&'a str> {
    match field {
        Field::Value(value) if !value.is_empty() => Some(value.as_str()),
        Field::Invalid(raw) => {
            skip_invalid(property, raw);
            None
        }
        _ => None,
    }
}

/// Non-zero number.
fn number(field: &Field<f64>, property: &str) -> Option<f64> {
    measure(field, property).filter(|value| *value != 0.0)
}

/// Any number, zero included.
fn measure(field: &Field<f64>, property: &str) -> Option<f64> {
    match field {
        Field::Value(value) if value.is_finite() => Some(*value),
        Field::Invalid(raw) => {
            skip_invalid(property, raw);
            None
        }
        _ => None,
    }
}

/// Any present boolean; an explicit `null` reads as off.
fn flag(field: &Field<bool>, property: &str) -> Option<bool> {
    match field {
        Field::Value(value) => Some(*value),
        Field::Invalid(raw) => {
            skip_invalid(property, raw);
            None
        }
        Field::Null => Some(false),
        Field::Absent => None,
    }
}

fn skip_invalid(name: &str, raw: &Value) {
    warn!(
        field = name,
        found = json_type_name(raw),
        "Ignoring wrong-typed branding value"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn colors(value: Value) -> ThemeColors {
        serde_json::from_value(value).unwrap()
    }

    fn borders(value: Value) -> ThemeBorders {
        serde_json::from_value(value).unwrap()
    }

    fn fonts(value: Value) -> ThemeFonts {
        serde_json::from_value(value).unwrap()
    }

    fn page(value: Value) -> PageBackground {
        serde_json::from_value(value).unwrap()
    }

    fn widget(value: Value) -> ThemeWidget {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_empty_sections_produce_nothing() {
        assert!(flatten_colors(&ThemeColors::default()).is_empty());
        assert!(flatten_borders(&ThemeBorders::default()).is_empty());
        assert!(flatten_fonts(&ThemeFonts::default()).is_empty());
        assert!(flatten_page_background(&PageBackground::default()).is_empty());
        assert!(flatten_widget(&ThemeWidget::default()).is_empty());
    }

    #[test]
    fn test_colors_snake_to_kebab() {
        let result = flatten_colors(&colors(json!({
            "primary_button": "#635dff",
            "input_labels_placeholders": "#65676e",
            "captcha_widget_theme": "auto"
        })));
        assert_eq!(result.get(COLOR_PRIMARY_BUTTON), Some("#635dff"));
        assert_eq!(
            result.get("--ul-theme-color-input-labels-placeholders"),
            Some("#65676e")
        );
        assert_eq!(result.get(COLOR_CAPTCHA_WIDGET_THEME), Some("auto"));
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_colors_skip_empty_and_wrong_type() {
        let result = flatten_colors(&colors(json!({
            "header": "",
            "body_text": 42,
            "error": null,
            "success": "#13a688"
        })));
        assert_eq!(result.len(), 1);
        assert_eq!(result.get(COLOR_SUCCESS), Some("#13a688"));
    }

    #[test]
    fn test_border_radius_gets_px() {
        let result = flatten_borders(&borders(json!({
            "button_border_radius": 3,
            "input_border_radius": 3.5,
            "widget_corner_radius": 0
        })));
        assert_eq!(result.get(BORDER_BUTTON_BORDER_RADIUS), Some("3px"));
        assert_eq!(result.get(BORDER_INPUT_BORDER_RADIUS), Some("3.5px"));
        // Zero radius is falsy and skipped
        assert!(!result.contains(BORDER_WIDGET_CORNER_RADIUS));
    }

    #[test]
    fn test_zero_border_weight_is_kept() {
        let result = flatten_borders(&borders(json!({ "button_border_weight": 0 })));
        assert_eq!(result.get(BORDER_BUTTON_BORDER_WEIGHT), Some("0px"));
    }

    #[test]
    fn test_border_weight_null_is_skipped() {
        let result = flatten_borders(&borders(json!({ "input_border_weight": null })));
        assert!(result.is_empty());
    }

    #[test]
    fn test_shadow_literal() {
        let on = flatten_borders(&borders(json!({ "show_widget_shadow": true })));
        assert_eq!(on.get(BORDER_SHOW_WIDGET_SHADOW), Some(WIDGET_SHADOW));

        let off = flatten_borders(&borders(json!({ "show_widget_shadow": false })));
        assert_eq!(off.get(BORDER_SHOW_WIDGET_SHADOW), Some("none"));
    }

    #[test]
    fn test_null_flags_read_as_off() {
        let shadow = flatten_borders(&borders(json!({ "show_widget_shadow": null })));
        assert_eq!(shadow.get(BORDER_SHOW_WIDGET_SHADOW), Some("none"));

        let weights = flatten_fonts(&fonts(json!({
            "title": { "bold": null },
            "links": { "size": 100 }
        })));
        assert_eq!(weights.get(FONT_TITLE_WEIGHT), Some("400"));
        assert!(!weights.contains(FONT_LINKS_WEIGHT));
    }

    #[test]
    fn test_border_styles_pass_through() {
        let result = flatten_borders(&borders(json!({
            "buttons_style": "pill",
            "inputs_style": "rounded"
        })));
        assert_eq!(result.get(BORDER_BUTTONS_STYLE), Some("pill"));
        assert_eq!(result.get(BORDER_INPUTS_STYLE), Some("rounded"));
    }

    #[test]
    fn test_font_sizes_become_rem() {
        let result = flatten_fonts(&fonts(json!({
            "reference_text_size": 16,
            "title": { "size": 150 },
            "subtitle": { "size": 87.5 },
            "links": { "size": 100 }
        })));
        assert_eq!(result.get(FONT_REFERENCE_TEXT_SIZE), Some("16px"));
        assert_eq!(result.get(FONT_TITLE_SIZE), Some("1.5rem"));
        assert_eq!(result.get(FONT_SUBTITLE_SIZE), Some("0.875rem"));
        assert_eq!(result.get(FONT_LINKS_SIZE), Some("1rem"));
    }

    #[test]
    fn test_font_bold_becomes_weight() {
        let result = flatten_fonts(&fonts(json!({
            "title": { "bold": true },
            "body_text": { "bold": false }
        })));
        assert_eq!(result.get(FONT_TITLE_WEIGHT), Some("700"));
        assert_eq!(result.get(FONT_BODY_TEXT_WEIGHT), Some("400"));
        assert!(!result.contains(FONT_TITLE_SIZE));
    }

    #[test]
    fn test_font_malformed_role_is_skipped() {
        let result = flatten_fonts(&fonts(json!({
            "title": "big",
            "buttons_text": { "size": 110, "bold": "yes" },
            "links_style": "underlined"
        })));
        assert!(!result.contains(FONT_TITLE_SIZE));
        assert_eq!(result.get(FONT_BUTTONS_TEXT_SIZE), Some("1.1rem"));
        assert!(!result.contains(FONT_BUTTONS_TEXT_WEIGHT));
        assert_eq!(result.get(FONT_LINKS_STYLE), Some("underlined"));
    }

    #[test]
    fn test_background_image_url() {
        let set = flatten_page_background(&page(json!({
            "background_image_url": "https://cdn.example.com/bg.png"
        })));
        assert_eq!(
            set.get(PAGE_BG_BACKGROUND_IMAGE_URL),
            Some(r#"url("https://cdn.example.com/bg.png")"#)
        );

        let cleared = flatten_page_background(&page(json!({ "background_image_url": null })));
        assert_eq!(cleared.get(PAGE_BG_BACKGROUND_IMAGE_URL), Some("none"));

        let empty = flatten_page_background(&page(json!({ "background_image_url": "" })));
        assert_eq!(empty.get(PAGE_BG_BACKGROUND_IMAGE_URL), Some("none"));
    }

    #[test]
    fn test_page_layout_derives_justify() {
        for (layout, justify) in [
            ("center", "center"),
            ("left", "flex-start"),
            ("right", "flex-end"),
            ("diagonal", "center"),
        ] {
            let result = flatten_page_background(&page(json!({ "page_layout": layout })));
            assert_eq!(result.get(PAGE_BG_PAGE_LAYOUT), Some(layout));
            assert_eq!(result.get(JUSTIFY_PAGE_LAYOUT), Some(justify));
        }
    }

    #[test]
    fn test_widget_logo() {
        let result = flatten_widget(&widget(json!({
            "logo_position": "none",
            "logo_url": "https://cdn.example.com/logo.svg",
            "logo_height": 52
        })));
        assert_eq!(result.get(WIDGET_LOGO_POSITION), Some("none"));
        assert_eq!(result.get(JUSTIFY_WIDGET_LOGO), Some("none"));
        assert_eq!(
            result.get(WIDGET_LOGO_URL),
            Some(r#""https://cdn.example.com/logo.svg""#)
        );
        assert_eq!(result.get(WIDGET_LOGO_HEIGHT), Some("52px"));
    }

    #[test]
    fn test_widget_header_alignment() {
        let result = flatten_widget(&widget(json!({
            "header_text_alignment": "left",
            "social_buttons_layout": "bottom"
        })));
        assert_eq!(result.get(WIDGET_HEADER_TEXT_ALIGNMENT), Some("left"));
        assert_eq!(result.get(TEXT_ALIGN_HEADER), Some("left"));
        assert_eq!(result.get(WIDGET_SOCIAL_BUTTONS_LAYOUT), Some("bottom"));
    }

    #[test]
    fn test_remaps_default_to_center() {
        assert_eq!(justify_widget_logo("left"), "flex-start");
        assert_eq!(justify_widget_logo("right"), "flex-end");
        assert_eq!(justify_widget_logo("top"), "center");
        assert_eq!(text_align_header("right"), "right");
        assert_eq!(text_align_header("justify"), "center");
    }

    #[test]
    fn test_number_formatting() {
        assert_eq!(format_number(200.0 / 100.0), "2");
        assert_eq!(format_number(0.875), "0.875");
        assert_eq!(px(-0.0), "0px");
        assert_eq!(rem_from_percent(125.0), "1.25rem");
    }

    #[test]
    fn test_number_formatting_extremes() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-1.5e22), "-1.5e+22");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(px(1e21), "1e+21px");
    }

    #[test]
    fn test_quoted_escapes() {
        assert_eq!(quoted("a.png"), "\"a.png\"");
        assert_eq!(quoted(r#"a"b"#), r#""a\"b""#);
    }
}
