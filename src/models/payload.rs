//! Typed view of the branding payload a host screen exposes.
//!
//! Every struct is `#[serde(default)]` and every leaf is a [`Field`], so parsing
//! never fails on shape: missing sections, `null`s, and wrong-typed values all
//! survive into the tree and are dealt with by the theme converters.

use serde::Deserialize;

use super::field::Field;

/// The screen object handed over by the host SDK.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ScreenInstance {
    /// Tenant branding (settings tier and default theme).
    pub branding: Field<BrandingPayload>,
    /// Organization data, present when the session is organization-scoped.
    pub organization: Field<OrganizationPayload>,
}

impl ScreenInstance {
    /// Returns the branding payload if the screen carries a usable one.
    #[must_use]
    pub const fn branding(&self) -> Option<&BrandingPayload> {
        self.branding.value()
    }

    /// Settings-tier overrides (`branding.settings`).
    #[must_use]
    pub fn settings(&self) -> Option<&BrandingOverrides> {
        self.branding().and_then(|branding| branding.settings.value())
    }

    /// The default theme (`branding.themes.default`).
    #[must_use]
    pub fn default_theme(&self) -> Option<&Theme> {
        self.branding()
            .and_then(|branding| branding.themes.value())
            .and_then(|themes| themes.default_theme.value())
    }

    /// Organization-tier overrides (`organization.branding`).
    #[must_use]
    pub fn organization_branding(&self) -> Option<&BrandingOverrides> {
        self.organization
            .value()
            .and_then(|organization| organization.branding.value())
    }
}

/// `screen.branding`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct BrandingPayload {
    /// Tenant-wide overrides.
    pub settings: Field<BrandingOverrides>,
    /// Theme collection; only `default` is used.
    pub themes: Field<Themes>,
}

/// `screen.branding.themes`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Themes {
    /// `themes.default`
    #[serde(rename = "default")]
    pub default_theme: Field<Theme>,
}

/// `screen.organization`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct OrganizationPayload {
    /// Organization branding overrides.
    pub branding: Field<BrandingOverrides>,
}

/// The small override surface shared by the settings and organization tiers.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct BrandingOverrides {
    /// Brand colors.
    pub colors: Field<OverrideColors>,
    /// Logo image URL.
    #[serde(rename = "logoUrl")]
    pub logo_url: Field<String>,
}

/// `colors` inside an override tier.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct OverrideColors {
    /// Primary brand color.
    pub primary: Field<String>,
    /// Page background color.
    pub page_background: Field<String>,
}

/// A structured theme (`themes.default`).
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Color palette.
    pub colors: Field<ThemeColors>,
    /// Radii, weights and button/input styles.
    pub borders: Field<ThemeBorders>,
    /// Reference size and per-role text styles.
    pub fonts: Field<ThemeFonts>,
    /// Page background, as sent by current payloads.
    #[serde(rename = "pageBackground")]
    pub page_background: Field<PageBackground>,
    /// Older payloads spell the page background section in snake case.
    #[serde(rename = "page_background")]
    pub page_background_legacy: Field<PageBackground>,
    /// Logo and header layout of the login box.
    pub widget: Field<ThemeWidget>,
}

impl Theme {
    /// The page background section, preferring `pageBackground` over `page_background`.
    #[must_use]
    pub const fn page_background(&self) -> &Field<PageBackground> {
        match self.page_background {
            Field::Value(_) => &self.page_background,
            _ => &self.page_background_legacy,
        }
    }
}

/// `themes.default.colors`. Every field is a CSS color (or, for
/// `captcha_widget_theme`, a theme keyword) passed through verbatim.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ThemeColors {
    /// Primary button fill.
    pub primary_button: Field<String>,
    /// Primary button text.
    pub primary_button_label: Field<String>,
    /// Secondary button outline.
    pub secondary_button_border: Field<String>,
    /// Secondary button text.
    pub secondary_button_label: Field<String>,
    /// Focus ring.
    pub base_focus_color: Field<String>,
    /// Hover tint.
    pub base_hover_color: Field<String>,
    /// Links and focused inputs.
    pub links_focused_components: Field<String>,
    /// Title text.
    pub header: Field<String>,
    /// Body copy.
    pub body_text: Field<String>,
    /// Login box fill.
    pub widget_background: Field<String>,
    /// Login box outline.
    pub widget_border: Field<String>,
    /// Input labels and placeholders.
    pub input_labels_placeholders: Field<String>,
    /// Text typed into inputs.
    pub input_filled_text: Field<String>,
    /// Input outline.
    pub input_border: Field<String>,
    /// Input fill.
    pub input_background: Field<String>,
    /// Icon tint.
    pub icons: Field<String>,
    /// Error messages and invalid inputs.
    pub error: Field<String>,
    /// Success messages.
    pub success: Field<String>,
    /// `auto`, `light` or `dark`.
    pub captcha_widget_theme: Field<String>,
}

impl ThemeColors {
    /// All fields keyed by their payload name.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, &Field<String>); 19] {
        [
            ("primary_button", &self.primary_button),
            ("primary_button_label", &self.primary_button_label),
            ("secondary_button_border", &self.secondary_button_border),
            ("secondary_button_label", &self.secondary_button_label),
            ("base_focus_color", &self.base_focus_color),
            ("base_hover_color", &self.base_hover_color),
            ("links_focused_components", &self.links_focused_components),
            ("header", &self.header),
            ("body_text", &self.body_text),
            ("widget_background", &self.widget_background),
            ("widget_border", &self.widget_border),
            ("input_labels_placeholders", &self.input_labels_placeholders),
            ("input_filled_text", &self.input_filled_text),
            ("input_border", &self.input_border),
            ("input_background", &self.input_background),
            ("icons", &self.icons),
            ("error", &self.error),
            ("success", &self.success),
            ("captcha_widget_theme", &self.captcha_widget_theme),
        ]
    }
}

/// `themes.default.borders`. Radii and weights are pixel counts.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ThemeBorders {
    /// Button corner radius.
    pub button_border_radius: Field<f64>,
    /// Input corner radius.
    pub input_border_radius: Field<f64>,
    /// Login box corner radius.
    pub widget_corner_radius: Field<f64>,
    /// Button border width; `0` is meaningful.
    pub button_border_weight: Field<f64>,
    /// Input border width; `0` is meaningful.
    pub input_border_weight: Field<f64>,
    /// Login box border width; `0` is meaningful.
    pub widget_border_weight: Field<f64>,
    /// `pill`, `rounded` or `sharp`.
    pub buttons_style: Field<String>,
    /// `pill`, `rounded` or `sharp`.
    pub inputs_style: Field<String>,
    /// Whether the login box casts a shadow.
    pub show_widget_shadow: Field<bool>,
}

/// Size and weight of one text role.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    /// Size as a percentage of the reference size (100 = 1rem).
    pub size: Field<f64>,
    /// Bold (`700`) vs. normal (`400`) weight.
    pub bold: Field<bool>,
}

/// `themes.default.fonts`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ThemeFonts {
    /// Reference text size in pixels.
    pub reference_text_size: Field<f64>,
    /// Page title.
    pub title: Field<TextStyle>,
    /// Text under the title.
    pub subtitle: Field<TextStyle>,
    /// Body copy.
    pub body_text: Field<TextStyle>,
    /// Button labels.
    pub buttons_text: Field<TextStyle>,
    /// Input labels and placeholders.
    pub input_labels: Field<TextStyle>,
    /// Inline links.
    pub links: Field<TextStyle>,
    /// `normal` or `italic`, passed through.
    pub links_style: Field<String>,
}

impl ThemeFonts {
    /// The six text roles keyed by their payload name.
    #[must_use]
    pub fn text_styles(&self) -> [(&'static str, &Field<TextStyle>); 6] {
        [
            ("title", &self.title),
            ("subtitle", &self.subtitle),
            ("body_text", &self.body_text),
            ("buttons_text", &self.buttons_text),
            ("input_labels", &self.input_labels),
            ("links", &self.links),
        ]
    }
}

/// `themes.default.pageBackground`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct PageBackground {
    /// Page background color.
    pub background_color: Field<String>,
    /// `null` or `""` explicitly clears the image.
    pub background_image_url: Field<String>,
    /// `center`, `left` or `right`.
    pub page_layout: Field<String>,
}

/// `themes.default.widget`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ThemeWidget {
    /// `center`, `left`, `right` or `none`.
    pub logo_position: Field<String>,
    /// Logo image URL.
    pub logo_url: Field<String>,
    /// Logo height in pixels.
    pub logo_height: Field<f64>,
    /// `center`, `left` or `right`.
    pub header_text_alignment: Field<String>,
    /// `top` or `bottom`, passed through.
    pub social_buttons_layout: Field<String>,
}
