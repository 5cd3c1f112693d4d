//! Precedence resolution across the three branding tiers.
//!
//! Tiers are merged lowest first: settings, then the default theme, then the
//! organization. A later tier overwrites an earlier one key by key, never
//! category by category.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

use super::converters::{
    flatten_borders, flatten_colors, flatten_fonts, flatten_page_background, flatten_widget,
    section,
};
use super::overrides::extract_overrides;
use crate::models::{PropertyMap, ScreenInstance, Theme};

/// One source of branding data, ordered by precedence (lowest first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// `branding.settings`
    Settings,
    /// `branding.themes.default`
    Theme,
    /// `organization.branding`
    Organization,
}

impl Tier {
    /// All tiers in merge order.
    pub const ALL: [Self; 3] = [Self::Settings, Self::Theme, Self::Organization];

    /// Lowercase display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Settings => "settings",
            Self::Theme => "theme",
            Self::Organization => "organization",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The per-tier maps before merging.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TierVariables {
    /// Overrides from `branding.settings`.
    pub settings: PropertyMap,
    /// Converted `branding.themes.default`.
    pub theme: PropertyMap,
    /// Overrides from `organization.branding`.
    pub organization: PropertyMap,
}

impl TierVariables {
    /// Computes each tier's contribution for a screen.
    #[must_use]
    pub fn from_screen(screen: &ScreenInstance) -> Self {
        let empty_theme = Theme::default();
        let theme = screen.default_theme().unwrap_or(&empty_theme);

        Self {
            settings: extract_overrides(screen.settings()),
            theme: theme_variables(theme),
            organization: extract_overrides(screen.organization_branding()),
        }
    }

    /// Returns a tier's map.
    #[must_use]
    pub const fn get(&self, tier: Tier) -> &PropertyMap {
        match tier {
            Tier::Settings => &self.settings,
            Tier::Theme => &self.theme,
            Tier::Organization => &self.organization,
        }
    }

    /// Merges the tiers in precedence order.
    #[must_use]
    pub fn merge(self) -> PropertyMap {
        self.settings.overlaid(self.theme).overlaid(self.organization)
    }
}

/// A merged property along with where its value came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedProperty {
    /// Custom property name.
    pub name: String,
    /// Winning value.
    pub value: String,
    /// The tier whose value won.
    pub tier: Tier,
    /// Lower tiers that also defined the property, lowest first.
    pub shadowed: Vec<Tier>,
}

/// Runs all five converters over a theme. Missing sections count as empty.
#[must_use]
pub fn theme_variables(theme: &Theme) -> PropertyMap {
    let mut variables = PropertyMap::new();
    variables.merge(flatten_colors(&section(&theme.colors, "colors")));
    variables.merge(flatten_borders(&section(&theme.borders, "borders")));
    variables.merge(flatten_fonts(&section(&theme.fonts, "fonts")));
    variables.merge(flatten_page_background(&section(
        theme.page_background(),
        "pageBackground",
    )));
    variables.merge(flatten_widget(&section(&theme.widget, "widget")));
    variables
}

/// Resolves the property map that should currently be applied for a screen.
#[must_use]
pub fn resolve(screen: &ScreenInstance) -> PropertyMap {
    let tiers = TierVariables::from_screen(screen);
    debug!(
        settings = tiers.settings.len(),
        theme = tiers.theme.len(),
        organization = tiers.organization.len(),
        "Resolved branding tiers"
    );
    tiers.merge()
}

/// Resolves like [`resolve`], recording the winning tier for every property.
#[must_use]
pub fn resolve_with_sources(screen: &ScreenInstance) -> Vec<ResolvedProperty> {
    let tiers = TierVariables::from_screen(screen);
    let mut resolved: BTreeMap<&str, ResolvedProperty> = BTreeMap::new();

    for tier in Tier::ALL {
        for (name, value) in tiers.get(tier).iter() {
            match resolved.get_mut(name) {
                Some(entry) => {
                    entry.shadowed.push(entry.tier);
                    entry.tier = tier;
                    entry.value = value.to_string();
                }
                None => {
                    resolved.insert(
                        name,
                        ResolvedProperty {
                            name: name.to_string(),
                            value: value.to_string(),
                            tier,
                            shadowed: Vec::new(),
                        },
                    );
                }
            }
        }
    }

    resolved.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::properties::*;
    use serde_json::json;

    fn screen(value: serde_json::Value) -> ScreenInstance {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_organization_beats_settings() {
        let screen = screen(json!({
            "branding": { "settings": { "colors": { "primary": "A" } } },
            "organization": { "branding": { "colors": { "primary": "B" } } }
        }));
        assert_eq!(resolve(&screen).get(COLOR_PRIMARY_BUTTON), Some("B"));
    }

    #[test]
    fn test_theme_beats_settings_on_same_key() {
        let screen = screen(json!({
            "branding": {
                "settings": { "colors": { "primary": "S", "page_background": "#eee" } },
                "themes": { "default": { "colors": { "primary_button": "T" } } }
            }
        }));
        let resolved = resolve(&screen);
        assert_eq!(resolved.get(COLOR_PRIMARY_BUTTON), Some("T"));
        // The theme doesn't define the background, so settings still supplies it
        assert_eq!(resolved.get(PAGE_BG_BACKGROUND_COLOR), Some("#eee"));
    }

    #[test]
    fn test_settings_survive_when_theme_is_silent() {
        let screen = screen(json!({
            "branding": {
                "settings": { "colors": { "primary": "S" } },
                "themes": { "default": { "colors": { "error": "#f00" } } }
            }
        }));
        let resolved = resolve(&screen);
        assert_eq!(resolved.get(COLOR_PRIMARY_BUTTON), Some("S"));
        assert_eq!(resolved.get(COLOR_ERROR), Some("#f00"));
    }

    #[test]
    fn test_organization_logo_beats_theme_logo() {
        let screen = screen(json!({
            "branding": { "themes": { "default": { "widget": { "logo_url": "theme.png" } } } },
            "organization": { "branding": { "logoUrl": "org.png" } }
        }));
        assert_eq!(resolve(&screen).get(WIDGET_LOGO_URL), Some("\"org.png\""));
    }

    #[test]
    fn test_end_to_end_exact_keys() {
        let screen = screen(json!({
            "branding": { "themes": { "default": {
                "colors": { "primary_button": "#000", "error": "#f00" },
                "fonts": { "title": { "size": 200, "bold": true } }
            } } }
        }));
        let expected: PropertyMap = [
            (COLOR_PRIMARY_BUTTON, "#000"),
            (COLOR_ERROR, "#f00"),
            (FONT_TITLE_SIZE, "2rem"),
            (FONT_TITLE_WEIGHT, "700"),
        ]
        .into_iter()
        .collect();
        assert_eq!(resolve(&screen), expected);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let screen = screen(json!({
            "branding": {
                "settings": { "logoUrl": "a.png" },
                "themes": { "default": { "borders": { "button_border_weight": 0 } } }
            }
        }));
        assert_eq!(resolve(&screen), resolve(&screen));
    }

    #[test]
    fn test_missing_sections_are_empty() {
        let screen = screen(json!({ "branding": { "themes": { "default": null } } }));
        assert!(resolve(&screen).is_empty());

        let screen = screen_with_bad_sections();
        assert!(resolve(&screen).is_empty());
    }

    fn screen_with_bad_sections() -> ScreenInstance {
        screen(json!({
            "branding": { "themes": { "default": {
                "colors": "nope",
                "borders": 3,
                "fonts": [],
                "pageBackground": true,
                "widget": null
            } } }
        }))
    }

    #[test]
    fn test_sources_track_winning_tier() {
        let screen = screen(json!({
            "branding": {
                "settings": { "colors": { "primary": "S", "page_background": "#eee" } },
                "themes": { "default": { "colors": { "primary_button": "T", "header": "#111" } } }
            },
            "organization": { "branding": { "colors": { "primary": "O" } } }
        }));

        let sources = resolve_with_sources(&screen);
        let primary = sources
            .iter()
            .find(|p| p.name == COLOR_PRIMARY_BUTTON)
            .unwrap();
        assert_eq!(primary.value, "O");
        assert_eq!(primary.tier, Tier::Organization);
        assert_eq!(primary.shadowed, vec![Tier::Settings, Tier::Theme]);

        let header = sources.iter().find(|p| p.name == COLOR_HEADER).unwrap();
        assert_eq!(header.tier, Tier::Theme);
        assert!(header.shadowed.is_empty());

        // Values always agree with the plain merge
        let merged = resolve(&screen);
        assert_eq!(sources.len(), merged.len());
        for property in &sources {
            assert_eq!(merged.get(&property.name), Some(property.value.as_str()));
        }
    }

    #[test]
    fn test_tier_order() {
        assert!(Tier::Settings < Tier::Theme);
        assert!(Tier::Theme < Tier::Organization);
        assert_eq!(Tier::Organization.to_string(), "organization");
    }
}
