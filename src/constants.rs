//! Application-wide constants.

/// The display name of the application.
pub const APP_NAME: &str = "ultheme";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "ultheme";

/// Name of the directory holding `config.toml` under the platform config dir.
pub const CONFIG_DIR_NAME: &str = "ultheme";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "ULTHEME_CONFIG_DIR";

/// Selector used when rendering CSS and none is configured.
pub const DEFAULT_SELECTOR: &str = ":root";
