//! Mobile navigation disclosure.
//!
//! The expanded flag lives in `UiState`; this module only renders it. The
//! toggle's `aria-expanded` carries the flag, the list's `aria-hidden` its
//! negation, and the hamburger glyph rotates while open.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::consts::{ARIA_EXPANDED, ARIA_HIDDEN, ICON_OPEN_BACKGROUND, ICON_OPEN_TRANSFORM};
use crate::patch::{Patch, Target, aria_bool};

/// Patches mirroring `expanded` onto the toggle, list and glyph.
#[must_use]
pub fn render(expanded: bool) -> Vec<Patch> {
    let mut patches = vec![
        Patch::set_attr(Target::NavToggle, ARIA_EXPANDED, aria_bool(expanded)),
        Patch::set_attr(Target::NavList, ARIA_HIDDEN, aria_bool(!expanded)),
    ];
    if expanded {
        patches.push(Patch::SetStyle { target: Target::NavIcon, property: "transform", value: ICON_OPEN_TRANSFORM });
        patches.push(Patch::SetStyle { target: Target::NavIcon, property: "background", value: ICON_OPEN_BACKGROUND });
    } else {
        patches.push(Patch::RemoveStyle { target: Target::NavIcon, property: "transform" });
        patches.push(Patch::RemoveStyle { target: Target::NavIcon, property: "background" });
    }
    patches
}

/// Whether a keydown should force the navigation closed.
#[must_use]
pub fn is_close_key(key: &str) -> bool {
    // Legacy Edge reports "Esc".
    matches!(key, "Escape" | "Esc")
}
