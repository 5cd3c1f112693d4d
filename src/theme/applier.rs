//! Applying a screen's branding to a style target.
//!
//! # Usage
//!
//! ```
//! use ultheme::export::Stylesheet;
//! use ultheme::parser::parse_screen_str;
//! use ultheme::theme::{apply_theme, ApplyOutcome, ThemeCache};
//!
//! let screen = parse_screen_str(
//!     r##"{ "branding": { "themes": { "default": { "colors": { "error": "#f00" } } } } }"##,
//! )
//! .unwrap();
//!
//! let mut cache = ThemeCache::new();
//! let mut root = Stylesheet::new();
//! let outcome = apply_theme(&screen, &mut cache, &mut root);
//!
//! assert_eq!(outcome, ApplyOutcome::Applied { written: 1 });
//! assert_eq!(root.get("--ul-theme-color-error"), Some("#f00"));
//! ```

use tracing::debug;

use super::cache::ThemeCache;
use super::resolver::resolve;
use crate::models::{PropertyMap, ScreenInstance};

/// The surface theme properties are written to (e.g. the document root's style).
pub trait StyleTarget {
    /// Sets one custom property.
    fn set_property(&mut self, name: &str, value: &str);
}

impl StyleTarget for PropertyMap {
    fn set_property(&mut self, name: &str, value: &str) {
        self.insert(name, value);
    }
}

/// What an [`apply_theme`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The screen carried no branding; nothing was touched.
    NoBranding,
    /// Branding resolved to nothing new; the target was not touched.
    Unchanged,
    /// Properties were written to the target.
    Applied {
        /// Number of `set_property` calls made.
        written: usize,
    },
}

impl ApplyOutcome {
    /// Number of `set_property` calls made.
    #[must_use]
    pub const fn written(self) -> usize {
        match self {
            Self::Applied { written } => written,
            Self::NoBranding | Self::Unchanged => 0,
        }
    }
}

/// Applies a screen's branding to `target`, writing only what changed.
///
/// The cache is cleared first, so every call re-applies the full theme; the
/// cache only deduplicates writes within the call. A screen without a usable
/// `branding` object is a no-op that leaves the cache alone.
pub fn apply_theme<T: StyleTarget + ?Sized>(
    screen: &ScreenInstance,
    cache: &mut ThemeCache,
    target: &mut T,
) -> ApplyOutcome {
    if screen.branding().is_none() {
        debug!("Screen has no branding, skipping theme application");
        return ApplyOutcome::NoBranding;
    }

    cache.clear();
    let desired = resolve(screen);
    let changed = cache.diff_and_commit(&desired);

    if changed.is_empty() {
        return ApplyOutcome::Unchanged;
    }

    for (name, value) in changed.iter() {
        target.set_property(name, value);
    }

    debug!(written = changed.len(), "Applied theme properties");
    ApplyOutcome::Applied {
        written: changed.len(),
    }
}
