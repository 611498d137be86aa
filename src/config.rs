//! Selector registry and tunables for one page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every DOM lookup the adapter performs goes through [`Selectors`]. A page
//! can override any field with a JSON block; missing fields keep their
//! defaults, so `{}` is a valid config.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{REVEAL_THRESHOLD, SECTION_ROOT_MARGIN, SECTION_THRESHOLD, STORAGE_KEY};
use crate::error::UiError;

/// Logical element names mapped to CSS selectors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub theme_light: String,
    pub theme_dark: String,
    pub nav_toggle: String,
    pub nav_list: String,
    /// Looked up inside the nav toggle.
    pub nav_icon: String,
    pub nav_links: String,
    pub sections: String,
    pub reveal: String,
    pub print_button: String,
    pub focus_button: String,
    pub year: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            theme_light: "#theme-light".to_owned(),
            theme_dark: "#theme-dark".to_owned(),
            nav_toggle: "#nav-toggle".to_owned(),
            nav_list: "#nav-list".to_owned(),
            nav_icon: ".hamburger".to_owned(),
            nav_links: "#nav-list a".to_owned(),
            sections: "section[id]".to_owned(),
            reveal: ".reveal".to_owned(),
            print_button: "#print-btn".to_owned(),
            focus_button: "#focus-cv-btn".to_owned(),
            year: "#year".to_owned(),
        }
    }
}

/// Visibility-observer options.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObserverOptions {
    pub section_root_margin: String,
    pub section_threshold: f64,
    pub reveal_threshold: f64,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            section_root_margin: SECTION_ROOT_MARGIN.to_owned(),
            section_threshold: SECTION_THRESHOLD,
            reveal_threshold: REVEAL_THRESHOLD,
        }
    }
}

/// Full page configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub storage_key: String,
    pub selectors: Selectors,
    pub observers: ObserverOptions,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_owned(),
            selectors: Selectors::default(),
            observers: ObserverOptions::default(),
        }
    }
}

impl PageConfig {
    /// Parse and validate a JSON config.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Config`] for malformed JSON and
    /// [`UiError::InvalidConfig`] for an empty storage key or a threshold
    /// outside `0.0..=1.0`.
    pub fn from_json(raw: &str) -> Result<Self, UiError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// See [`PageConfig::from_json`].
    pub fn validate(&self) -> Result<(), UiError> {
        if self.storage_key.trim().is_empty() {
            return Err(UiError::InvalidConfig("storage_key is empty".to_owned()));
        }
        for (name, value) in [
            ("section_threshold", self.observers.section_threshold),
            ("reveal_threshold", self.observers.reveal_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(UiError::InvalidConfig(format!("{name} {value} outside 0..=1")));
            }
        }
        Ok(())
    }
}
