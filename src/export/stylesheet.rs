//! In-memory style target that renders as CSS or JSON.
//!
//! Stands in for a document root: the applier writes custom properties into
//! it, and the CLI prints the result as a rule block or a JSON object.

use anyhow::{Context, Result};
use std::fmt::Write as _;

use crate::models::PropertyMap;
use crate::theme::StyleTarget;

/// Collects custom property writes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    properties: PropertyMap,
    writes: Vec<(String, String)>,
}

impl Stylesheet {
    /// Creates an empty stylesheet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            properties: PropertyMap::new(),
            writes: Vec::new(),
        }
    }

    /// Current value of a property.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name)
    }

    /// Number of `set_property` calls received.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.len()
    }

    /// Every write, in the order received.
    #[must_use]
    pub fn writes(&self) -> &[(String, String)] {
        &self.writes
    }

    /// Current property values.
    #[must_use]
    pub const fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    /// Returns true if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Renders a single rule block with declarations sorted by name.
    ///
    /// ```
    /// use ultheme::export::Stylesheet;
    /// use ultheme::theme::StyleTarget;
    ///
    /// let mut sheet = Stylesheet::new();
    /// sheet.set_property("--b", "2");
    /// sheet.set_property("--a", "1");
    /// assert_eq!(sheet.to_css(":root"), ":root {\n  --a: 1;\n  --b: 2;\n}\n");
    /// ```
    #[must_use]
    pub fn to_css(&self, selector: &str) -> String {
        let mut output = String::new();
        let _ = writeln!(output, "{selector} {{");
        for (name, value) in self.properties.iter() {
            let _ = writeln!(output, "  {name}: {value};");
        }
        output.push_str("}\n");
        output
    }

    /// Renders the properties as a pretty-printed JSON object.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.properties).context("Failed to serialize properties")
    }
}

impl StyleTarget for Stylesheet {
    fn set_property(&mut self, name: &str, value: &str) {
        self.writes.push((name.to_string(), value.to_string()));
        self.properties.insert(name, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_writes_in_order() {
        let mut sheet = Stylesheet::new();
        sheet.set_property("--z", "1");
        sheet.set_property("--a", "2");
        sheet.set_property("--z", "3");

        assert_eq!(sheet.write_count(), 3);
        assert_eq!(sheet.writes()[0], ("--z".to_string(), "1".to_string()));
        assert_eq!(sheet.get("--z"), Some("3"));
        assert_eq!(sheet.properties().len(), 2);
    }

    #[test]
    fn test_empty_sheet_renders_empty_block() {
        let sheet = Stylesheet::new();
        assert!(sheet.is_empty());
        assert_eq!(sheet.to_css("body"), "body {\n}\n");
        assert_eq!(sheet.to_json().unwrap(), "{}");
    }

    #[test]
    fn test_values_are_written_verbatim() {
        let mut sheet = Stylesheet::new();
        sheet.set_property("--ul-theme-widget-logo-url", "\"https://a/b.png\"");
        let css = sheet.to_css(":root");
        assert!(css.contains("  --ul-theme-widget-logo-url: \"https://a/b.png\";\n"));
    }

    #[test]
    fn test_json_is_an_object() {
        let mut sheet = Stylesheet::new();
        sheet.set_property("--a", "1px");
        let parsed: serde_json::Value = serde_json::from_str(&sheet.to_json().unwrap()).unwrap();
        assert_eq!(parsed["--a"], "1px");
    }
}
