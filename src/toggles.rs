//! Print button, focus-CV mode, footer year and the tabbing marker.

#[cfg(test)]
#[path = "toggles_test.rs"]
mod toggles_test;

use crate::consts::{ARIA_PRESSED, FOCUS_MODE_CLASS, TABBING_CLASS};
use crate::patch::{Patch, Target, aria_bool};

#[must_use]
pub fn print() -> Vec<Patch> {
    vec![Patch::Print]
}

/// Patches mirroring focus mode onto the body class and button state.
#[must_use]
pub fn render_focus_mode(enabled: bool) -> Vec<Patch> {
    let class = if enabled {
        Patch::add_class(Target::Body, FOCUS_MODE_CLASS)
    } else {
        Patch::remove_class(Target::Body, FOCUS_MODE_CLASS)
    };
    vec![class, Patch::set_attr(Target::FocusButton, ARIA_PRESSED, aria_bool(enabled))]
}

/// Write `year` into the footer placeholder.
#[must_use]
pub fn year_patch(year: u32) -> Patch {
    Patch::SetText { target: Target::Year, text: year.to_string() }
}

/// Whether a keydown marks the user as navigating by keyboard.
#[must_use]
pub fn is_tab_key(key: &str) -> bool {
    key == "Tab"
}

#[must_use]
pub fn mark_tabbing() -> Vec<Patch> {
    vec![Patch::add_class(Target::Body, TABBING_CLASS)]
}
