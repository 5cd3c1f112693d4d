//! Tri-state payload fields.
//!
//! Host payloads are loosely typed: any key may be missing, `null`, or hold a
//! value of the wrong JSON type. [`Field`] keeps those cases apart so the
//! theme converters can apply presence rules (`!== undefined` vs. truthiness)
//! without ever touching untyped JSON.

use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;
use std::borrow::Cow;

/// A single field read from a host payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Field<T> {
    /// The key was not present.
    Absent,
    /// The key was present with an explicit `null`.
    Null,
    /// The key held a value of the expected type.
    Value(T),
    /// The key held a value of some other type; the raw JSON is kept for diagnostics.
    Invalid(Value),
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> Field<T> {
    /// Returns the typed value, if the field held one.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Returns true unless the key was missing entirely.
    ///
    /// Mirrors the host's `!== undefined` check: `null` counts as present.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        !matches!(self, Self::Absent)
    }

    /// Returns true if the key held a value of the wrong type.
    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// Returns the raw JSON of a wrong-typed value.
    #[must_use]
    pub const fn invalid_value(&self) -> Option<&Value> {
        match self {
            Self::Invalid(raw) => Some(raw),
            _ => None,
        }
    }
}

impl<T: Clone + Default> Field<T> {
    /// Returns the value, or an empty default for missing, null, or wrong-typed sections.
    #[must_use]
    pub fn value_or_default(&self) -> Cow<'_, T> {
        match self {
            Self::Value(value) => Cow::Borrowed(value),
            _ => Cow::Owned(T::default()),
        }
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;

        if raw.is_null() {
            return Ok(Self::Null);
        }

        // Sections are objects and leaves are scalars; an array is never valid.
        // Rejecting it here stops serde from filling struct fields positionally.
        if raw.is_array() {
            return Ok(Self::Invalid(raw));
        }

        match T::deserialize(&raw) {
            Ok(value) => Ok(Self::Value(value)),
            Err(_) => Ok(Self::Invalid(raw)),
        }
    }
}

/// Short name of a JSON value's type, for diagnostics.
#[must_use]
pub const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
