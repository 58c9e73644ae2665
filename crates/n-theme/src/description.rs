//! Theme description — the design-token tree class names are derived from.
//!
//! Mirrors the shape of a utility framework's `theme` object. Every section
//! is optional: a missing (or `null`) section deserializes to an empty map
//! and contributes nothing downstream.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::config::ConfigError;

/// A theme section: token key → raw value. Only keys are interpreted.
pub type Section = BTreeMap<String, Value>;

// ---------------------------------------------------------------------------
// ColorValue
// ---------------------------------------------------------------------------

/// One entry of the `colors` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    /// A single color, e.g. `"#da373d"` or `"currentColor"`.
    Single(String),
    /// A shade scale, e.g. `{ "50": "#eff6ff", "500": "#3b82f6" }`.
    Shades(BTreeMap<String, Value>),
    /// Anything else (numbers, booleans, arrays, `null`). Yields no classes.
    Other(Value),
}

impl ColorValue {
    /// Build a shade scale from `(shade, color)` pairs.
    #[must_use]
    pub fn shades<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self::Shades(
            pairs
                .into_iter()
                .map(|(shade, color)| (shade.to_string(), Value::from(color)))
                .collect(),
        )
    }
}

impl From<&str> for ColorValue {
    fn from(color: &str) -> Self {
        Self::Single(color.to_string())
    }
}

// ---------------------------------------------------------------------------
// ThemeDescription
// ---------------------------------------------------------------------------

/// A fully resolved theme.
///
/// Section names follow the framework's camelCase spelling on the wire
/// (`fontSize`, `aspectRatio`). Unknown sections are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeDescription {
    #[serde(deserialize_with = "null_as_empty")]
    pub colors: BTreeMap<String, ColorValue>,
    #[serde(deserialize_with = "null_as_empty")]
    pub spacing: Section,
    #[serde(deserialize_with = "null_as_empty")]
    pub font_size: Section,
    #[serde(deserialize_with = "null_as_empty")]
    pub aspect_ratio: Section,
    #[serde(deserialize_with = "null_as_empty")]
    pub container: Section,
    #[serde(deserialize_with = "null_as_empty")]
    pub columns: Section,
}

impl ThemeDescription {
    /// An empty theme: every section absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a bare theme object (no `theme` wrapper, no `extend`).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not JSON or a section
    /// is not an object.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Like [`from_json`](Self::from_json), starting from an already parsed
    /// JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if a section has the wrong shape.
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Whether every section is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
            && self.spacing.is_empty()
            && self.font_size.is_empty()
            && self.aspect_ratio.is_empty()
            && self.container.is_empty()
            && self.columns.is_empty()
    }
}

/// `null` behaves like an absent section.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
