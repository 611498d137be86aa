//! Theme controller: light/dark preference, root marker, pressed states.
//!
//! DESIGN
//! ======
//! Storage sits behind [`PreferenceStore`] so the resolution policy and the
//! patch output can be tested without a browser. The browser implementation
//! lives in `dom::LocalStore`; persistence there is best-effort.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::cell::RefCell;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{ARIA_PRESSED, THEME_ATTR};
use crate::error::UiError;
use crate::patch::{Patch, Target, aria_bool};

/// Color theme of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Stored / attribute spelling.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UiError::UnknownTheme(other.to_owned())),
        }
    }
}

/// Where the theme preference is persisted.
///
/// Implementations never fail outward: an unreadable store reports `None`,
/// an unwritable one drops the write.
pub trait PreferenceStore {
    fn load(&self) -> Option<Theme>;
    fn save(&self, theme: Theme);
}

/// In-process store for tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: RefCell<Option<String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `raw` under the preference key.
    #[must_use]
    pub fn with_raw(raw: &str) -> Self {
        Self { value: RefCell::new(Some(raw.to_owned())) }
    }

    /// The raw stored string, if any.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Option<Theme> {
        self.value.borrow().as_deref().and_then(|raw| raw.parse().ok())
    }

    fn save(&self, theme: Theme) {
        *self.value.borrow_mut() = Some(theme.as_str().to_owned());
    }
}

/// Pick the startup theme.
///
/// A stored preference wins. Otherwise dark only when the platform reports a
/// dark color-scheme preference; an unavailable signal (`None`) means light.
#[must_use]
pub fn resolve_initial(stored: Option<Theme>, prefers_dark: Option<bool>) -> Theme {
    match stored {
        Some(theme) => theme,
        None if prefers_dark == Some(true) => Theme::Dark,
        None => Theme::Light,
    }
}

/// Patches that make `theme` the visible theme.
///
/// Dark sets the root marker, light removes it. Exactly one theme button
/// ends up pressed.
#[must_use]
pub fn apply_theme(theme: Theme) -> Vec<Patch> {
    let marker = match theme {
        Theme::Dark => Patch::set_attr(Target::Root, THEME_ATTR, Theme::Dark.as_str()),
        Theme::Light => Patch::RemoveAttr { target: Target::Root, name: THEME_ATTR },
    };
    vec![
        marker,
        Patch::set_attr(Target::ThemeButton(Theme::Light), ARIA_PRESSED, aria_bool(theme == Theme::Light)),
        Patch::set_attr(Target::ThemeButton(Theme::Dark), ARIA_PRESSED, aria_bool(theme == Theme::Dark)),
    ]
}

/// Patches for an explicit user choice: apply, then persist.
#[must_use]
pub fn choose_theme(theme: Theme) -> Vec<Patch> {
    let mut patches = apply_theme(theme);
    patches.push(Patch::Persist(theme));
    patches
}

/// Which theme button should take focus when `key` is pressed on `focused`.
///
/// Only the horizontal arrows move focus; with two buttons both directions
/// land on the other one.
#[must_use]
pub fn arrow_focus_target(key: &str, focused: Theme) -> Option<Theme> {
    match key {
        "ArrowLeft" | "ArrowRight" => Some(focused.other()),
        _ => None,
    }
}

/// Patches for a keydown on a theme button.
#[must_use]
pub fn theme_button_key(key: &str, focused: Theme) -> Vec<Patch> {
    match arrow_focus_target(key, focused) {
        Some(next) => vec![Patch::PreventDefault, Patch::Focus(Target::ThemeButton(next))],
        None => Vec::new(),
    }
}
