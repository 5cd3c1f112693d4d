//! CSS custom property names written by the theme engine.
//!
//! Presentation components reference these names directly, so renaming any
//! of them is a breaking change.

// Colors
/// From `colors.primary_button`.
pub const COLOR_PRIMARY_BUTTON: &str = "--ul-theme-color-primary-button";
/// From `colors.primary_button_label`.
pub const COLOR_PRIMARY_BUTTON_LABEL: &str = "--ul-theme-color-primary-button-label";
/// From `colors.secondary_button_border`.
pub const COLOR_SECONDARY_BUTTON_BORDER: &str = "--ul-theme-color-secondary-button-border";
/// From `colors.secondary_button_label`.
pub const COLOR_SECONDARY_BUTTON_LABEL: &str = "--ul-theme-color-secondary-button-label";
/// From `colors.base_focus_color`.
pub const COLOR_BASE_FOCUS_COLOR: &str = "--ul-theme-color-base-focus-color";
/// From `colors.base_hover_color`.
pub const COLOR_BASE_HOVER_COLOR: &str = "--ul-theme-color-base-hover-color";
/// From `colors.links_focused_components`.
pub const COLOR_LINKS_FOCUSED_COMPONENTS: &str = "--ul-theme-color-links-focused-components";
/// From `colors.header`.
pub const COLOR_HEADER: &str = "--ul-theme-color-header";
/// From `colors.body_text`.
pub const COLOR_BODY_TEXT: &str = "--ul-theme-color-body-text";
/// From `colors.widget_background`.
pub const COLOR_WIDGET_BACKGROUND: &str = "--ul-theme-color-widget-background";
/// From `colors.widget_border`.
pub const COLOR_WIDGET_BORDER: &str = "--ul-theme-color-widget-border";
/// From `colors.input_labels_placeholders`.
pub const COLOR_INPUT_LABELS_PLACEHOLDERS: &str = "--ul-theme-color-input-labels-placeholders";
/// From `colors.input_filled_text`.
pub const COLOR_INPUT_FILLED_TEXT: &str = "--ul-theme-color-input-filled-text";
/// From `colors.input_border`.
pub const COLOR_INPUT_BORDER: &str = "--ul-theme-color-input-border";
/// From `colors.input_background`.
pub const COLOR_INPUT_BACKGROUND: &str = "--ul-theme-color-input-background";
/// From `colors.icons`.
pub const COLOR_ICONS: &str = "--ul-theme-color-icons";
/// From `colors.error`.
pub const COLOR_ERROR: &str = "--ul-theme-color-error";
/// From `colors.success`.
pub const COLOR_SUCCESS: &str = "--ul-theme-color-success";
/// From `colors.captcha_widget_theme`.
pub const COLOR_CAPTCHA_WIDGET_THEME: &str = "--ul-theme-color-captcha-widget-theme";

// Borders
/// From `borders.button_border_radius`, in `px`.
pub const BORDER_BUTTON_BORDER_RADIUS: &str = "--ul-theme-border-button-border-radius";
/// From `borders.input_border_radius`, in `px`.
pub const BORDER_INPUT_BORDER_RADIUS: &str = "--ul-theme-border-input-border-radius";
/// From `borders.widget_corner_radius`, in `px`.
pub const BORDER_WIDGET_CORNER_RADIUS: &str = "--ul-theme-border-widget-corner-radius";
/// From `borders.button_border_weight`, in `px`.
pub const BORDER_BUTTON_BORDER_WEIGHT: &str = "--ul-theme-border-button-border-weight";
/// From `borders.input_border_weight`, in `px`.
pub const BORDER_INPUT_BORDER_WEIGHT: &str = "--ul-theme-border-input-border-weight";
/// From `borders.widget_border_weight`, in `px`.
pub const BORDER_WIDGET_BORDER_WEIGHT: &str = "--ul-theme-border-widget-border-weight";
/// From `borders.buttons_style`.
pub const BORDER_BUTTONS_STYLE: &str = "--ul-theme-border-buttons-style";
/// From `borders.inputs_style`.
pub const BORDER_INPUTS_STYLE: &str = "--ul-theme-border-inputs-style";
/// From `borders.show_widget_shadow`: the shadow literal or `none`.
pub const BORDER_SHOW_WIDGET_SHADOW: &str = "--ul-theme-border-show-widget-shadow";

// Fonts
/// From `fonts.reference_text_size`, in `px`.
pub const FONT_REFERENCE_TEXT_SIZE: &str = "--ul-theme-font-reference-text-size";
/// From `fonts.title.size`, in `rem`.
pub const FONT_TITLE_SIZE: &str = "--ul-theme-font-title-size";
/// From `fonts.subtitle.size`, in `rem`.
pub const FONT_SUBTITLE_SIZE: &str = "--ul-theme-font-subtitle-size";
/// From `fonts.body_text.size`, in `rem`.
pub const FONT_BODY_TEXT_SIZE: &str = "--ul-theme-font-body-text-size";
/// From `fonts.buttons_text.size`, in `rem`.
pub const FONT_BUTTONS_TEXT_SIZE: &str = "--ul-theme-font-buttons-text-size";
/// From `fonts.input_labels.size`, in `rem`.
pub const FONT_INPUT_LABELS_SIZE: &str = "--ul-theme-font-input-labels-size";
/// From `fonts.links.size`, in `rem`.
pub const FONT_LINKS_SIZE: &str = "--ul-theme-font-links-size";
/// From `fonts.title.bold`: `700` or `400`.
pub const FONT_TITLE_WEIGHT: &str = "--ul-theme-font-title-weight";
/// From `fonts.subtitle.bold`: `700` or `400`.
pub const FONT_SUBTITLE_WEIGHT: &str = "--ul-theme-font-subtitle-weight";
/// From `fonts.body_text.bold`: `700` or `400`.
pub const FONT_BODY_TEXT_WEIGHT: &str = "--ul-theme-font-body-text-weight";
/// From `fonts.buttons_text.bold`: `700` or `400`.
pub const FONT_BUTTONS_TEXT_WEIGHT: &str = "--ul-theme-font-buttons-text-weight";
/// From `fonts.input_labels.bold`: `700` or `400`.
pub const FONT_INPUT_LABELS_WEIGHT: &str = "--ul-theme-font-input-labels-weight";
/// From `fonts.links.bold`: `700` or `400`.
pub const FONT_LINKS_WEIGHT: &str = "--ul-theme-font-links-weight";
/// From `fonts.links_style`.
pub const FONT_LINKS_STYLE: &str = "--ul-theme-font-links-style";

// Page background
/// From `pageBackground.background_color`.
pub const PAGE_BG_BACKGROUND_COLOR: &str = "--ul-theme-page-bg-background-color";
/// From `pageBackground.background_image_url`: `url("...")` or `none`.
pub const PAGE_BG_BACKGROUND_IMAGE_URL: &str = "--ul-theme-page-bg-background-image-url";
/// From `pageBackground.page_layout`.
pub const PAGE_BG_PAGE_LAYOUT: &str = "--ul-theme-page-bg-page-layout";

// Widget
/// From `widget.logo_position`.
pub const WIDGET_LOGO_POSITION: &str = "--ul-theme-widget-logo-position";
/// From `widget.logo_url`, quoted.
pub const WIDGET_LOGO_URL: &str = "--ul-theme-widget-logo-url";
/// From `widget.logo_height`, in `px`.
pub const WIDGET_LOGO_HEIGHT: &str = "--ul-theme-widget-logo-height";
/// From `widget.header_text_alignment`.
pub const WIDGET_HEADER_TEXT_ALIGNMENT: &str = "--ul-theme-widget-header-text-alignment";
/// From `widget.social_buttons_layout`.
pub const WIDGET_SOCIAL_BUTTONS_LAYOUT: &str = "--ul-theme-widget-social-buttons-layout";

// Derived layout aliases
/// Flexbox alignment derived from `pageBackground.page_layout`.
pub const JUSTIFY_PAGE_LAYOUT: &str = "--justify-page-layout";
/// Flexbox alignment derived from `widget.logo_position`.
pub const JUSTIFY_WIDGET_LOGO: &str = "--justify-widget-logo";
/// `text-align` derived from `widget.header_text_alignment`.
pub const TEXT_ALIGN_HEADER: &str = "--text-align-header";

/// Every property the engine can emit.
pub const ALL: [&str; 53] = [
    COLOR_PRIMARY_BUTTON,
    COLOR_PRIMARY_BUTTON_LABEL,
    COLOR_SECONDARY_BUTTON_BORDER,
    COLOR_SECONDARY_BUTTON_LABEL,
    COLOR_BASE_FOCUS_COLOR,
    COLOR_BASE_HOVER_COLOR,
    COLOR_LINKS_FOCUSED_COMPONENTS,
    COLOR_HEADER,
    COLOR_BODY_TEXT,
    COLOR_WIDGET_BACKGROUND,
    COLOR_WIDGET_BORDER,
    COLOR_INPUT_LABELS_PLACEHOLDERS,
    COLOR_INPUT_FILLED_TEXT,
    COLOR_INPUT_BORDER,
    COLOR_INPUT_BACKGROUND,
    COLOR_ICONS,
    COLOR_ERROR,
    COLOR_SUCCESS,
    COLOR_CAPTCHA_WIDGET_THEME,
    BORDER_BUTTON_BORDER_RADIUS,
    BORDER_INPUT_BORDER_RADIUS,
    BORDER_WIDGET_CORNER_RADIUS,
    BORDER_BUTTON_BORDER_WEIGHT,
    BORDER_INPUT_BORDER_WEIGHT,
    BORDER_WIDGET_BORDER_WEIGHT,
    BORDER_BUTTONS_STYLE,
    BORDER_INPUTS_STYLE,
    BORDER_SHOW_WIDGET_SHADOW,
    FONT_REFERENCE_TEXT_SIZE,
    FONT_TITLE_SIZE,
    FONT_SUBTITLE_SIZE,
    FONT_BODY_TEXT_SIZE,
    FONT_BUTTONS_TEXT_SIZE,
    FONT_INPUT_LABELS_SIZE,
    FONT_LINKS_SIZE,
    FONT_TITLE_WEIGHT,
    FONT_SUBTITLE_WEIGHT,
    FONT_BODY_TEXT_WEIGHT,
    FONT_BUTTONS_TEXT_WEIGHT,
    FONT_INPUT_LABELS_WEIGHT,
    FONT_LINKS_WEIGHT,
    FONT_LINKS_STYLE,
    PAGE_BG_BACKGROUND_COLOR,
    PAGE_BG_BACKGROUND_IMAGE_URL,
    PAGE_BG_PAGE_LAYOUT,
    WIDGET_LOGO_POSITION,
    WIDGET_LOGO_URL,
    WIDGET_LOGO_HEIGHT,
    WIDGET_HEADER_TEXT_ALIGNMENT,
    WIDGET_SOCIAL_BUTTONS_LAYOUT,
    JUSTIFY_PAGE_LAYOUT,
    JUSTIFY_WIDGET_LOGO,
    TEXT_ALIGN_HEADER,
];
