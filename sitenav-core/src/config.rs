//! Runtime configuration for the menu toggle.
//!
//! Defaults reproduce the page markup contract (`#site-nav-menu` and the
//! `shown` class), so most pages never configure anything.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{MENU_ELEMENT_ID, SHOWN_CLASS};

/// What the click handler does when the menu element is not in the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissingMenuPolicy {
    /// Leave the page untouched and log a warning.
    #[default]
    Warn,
    /// Leave the page untouched without logging.
    Ignore,
    /// Raise an error out of the handler, aborting that callback only.
    Throw,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("menu element id must not be empty")]
    EmptyElementId,
    #[error("invalid shown class {class:?}: must be non-empty and contain no whitespace")]
    InvalidClass { class: String },
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavMenuConfig {
    pub element_id: String,
    pub shown_class: String,
    pub on_missing: MissingMenuPolicy,
}

impl Default for NavMenuConfig {
    fn default() -> Self {
        Self {
            element_id: MENU_ELEMENT_ID.to_string(),
            shown_class: SHOWN_CLASS.to_string(),
            on_missing: MissingMenuPolicy::default(),
        }
    }
}

impl NavMenuConfig {
    /// Parse and validate a JSON configuration. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Json` on malformed input, or the validation error.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns `ConfigError` when the id is blank or the class could not be a
    /// single class-list token.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.element_id.trim().is_empty() {
            return Err(ConfigError::EmptyElementId);
        }
        if self.shown_class.is_empty() || self.shown_class.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidClass {
                class: self.shown_class.clone(),
            });
        }
        Ok(())
    }
}
