//! Theme config — user overrides layered over a base theme.
//!
//! The config file has the framework's familiar shape:
//!
//! ```json
//! {
//!   "theme": {
//!     "spacing": { "1": "4px" },
//!     "extend": {
//!       "colors": { "clifford": "#da373d" }
//!     }
//!   }
//! }
//! ```
//!
//! A section written directly under `theme` *replaces* the base section.
//! A section under `theme.extend` is *merged* into it key by key; color
//! shade scales are merged shade by shade.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::description::{ColorValue, Section, ThemeDescription};

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Why a theme config could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid theme config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// ---------------------------------------------------------------------------
// PartialTheme
// ---------------------------------------------------------------------------

/// A theme where every section may be absent.
///
/// `None` means "not mentioned"; `Some(empty)` is an explicit empty section
/// and still replaces the base section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialTheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<BTreeMap<String, ColorValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<Section>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<Section>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<Section>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<Section>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Section>,
}

impl PartialTheme {
    /// Replace each mentioned section of `theme` wholesale.
    fn replace_into(&self, theme: &mut ThemeDescription) {
        if let Some(colors) = &self.colors {
            theme.colors.clone_from(colors);
        }
        replace_section(&mut theme.spacing, self.spacing.as_ref());
        replace_section(&mut theme.font_size, self.font_size.as_ref());
        replace_section(&mut theme.aspect_ratio, self.aspect_ratio.as_ref());
        replace_section(&mut theme.container, self.container.as_ref());
        replace_section(&mut theme.columns, self.columns.as_ref());
    }

    /// Merge each mentioned section into `theme`.
    fn extend_into(&self, theme: &mut ThemeDescription) {
        if let Some(colors) = &self.colors {
            for (name, value) in colors {
                merge_color(&mut theme.colors, name, value);
            }
        }
        extend_section(&mut theme.spacing, self.spacing.as_ref());
        extend_section(&mut theme.font_size, self.font_size.as_ref());
        extend_section(&mut theme.aspect_ratio, self.aspect_ratio.as_ref());
        extend_section(&mut theme.container, self.container.as_ref());
        extend_section(&mut theme.columns, self.columns.as_ref());
    }
}

fn replace_section(target: &mut Section, source: Option<&Section>) {
    if let Some(source) = source {
        target.clone_from(source);
    }
}

fn extend_section(target: &mut Section, source: Option<&Section>) {
    if let Some(source) = source {
        target.extend(source.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
}

fn merge_color(colors: &mut BTreeMap<String, ColorValue>, name: &str, value: &ColorValue) {
    match (colors.get_mut(name), value) {
        (Some(ColorValue::Shades(existing)), ColorValue::Shades(incoming)) => {
            existing.extend(incoming.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        _ => {
            colors.insert(name.to_string(), value.clone());
        }
    }
}

// ---------------------------------------------------------------------------
// ThemeConfig
// ---------------------------------------------------------------------------

/// The `theme` object of a config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeOverrides {
    #[serde(flatten)]
    pub replace: PartialTheme,
    pub extend: PartialTheme,
}

/// A parsed theme config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub theme: ThemeOverrides,
}

impl ThemeConfig {
    /// Parse config text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for invalid JSON or mis-shaped sections.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if its contents are malformed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded theme config from {}", path.display());
        Self::from_json(&text)
    }

    /// Layer this config over `base`: replacements first, then extensions.
    #[must_use]
    pub fn resolve(&self, base: &ThemeDescription) -> ThemeDescription {
        let mut theme = base.clone();
        self.theme.replace.replace_into(&mut theme);
        self.theme.extend.extend_into(&mut theme);
        theme
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
