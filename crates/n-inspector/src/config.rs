//! Config store — the editable theme config text.
//!
//! Edits are validated before they are accepted. A malformed edit is logged
//! and rejected; the last valid config stays in effect.

use n_theme::{ConfigError, ThemeConfig};

/// Config text shown before the user edits anything.
pub const DEFAULT_CONFIG: &str = r##"{
  "theme": {
    "extend": {
      "colors": {
        "clifford": "#da373d"
      }
    }
  }
}"##;

/// The current config, as text and parsed.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    text: String,
    config: ThemeConfig,
}

impl ConfigStore {
    /// A store holding [`DEFAULT_CONFIG`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            text: DEFAULT_CONFIG.to_string(),
            config: ThemeConfig::from_json(DEFAULT_CONFIG).unwrap_or_default(),
        }
    }

    /// A store holding `text`.
    ///
    /// # Errors
    ///
    /// Returns the parse error if `text` is not a valid config.
    pub fn from_text(text: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            text: text.to_string(),
            config: ThemeConfig::from_json(text)?,
        })
    }

    /// The last accepted config text.
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The last accepted config.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &ThemeConfig {
        &self.config
    }

    /// Replace the config with `text` if it parses.
    ///
    /// # Errors
    ///
    /// Returns the parse error for a malformed edit; the store keeps its
    /// previous text and config.
    pub fn update(&mut self, text: &str) -> Result<(), ConfigError> {
        match ThemeConfig::from_json(text) {
            Ok(config) => {
                self.text = text.to_string();
                self.config = config;
                log::debug!("theme config updated");
                Ok(())
            }
            Err(e) => {
                log::error!("rejected theme config edit: {e}");
                Err(e)
            }
        }
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
