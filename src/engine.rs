//! Page engine: UI state plus the event entry points the adapter calls.
//!
//! `EngineCore` holds everything that does not depend on a live document so
//! it can be driven from native tests. Each `on_*` method updates state and
//! returns the patches to apply; the adapter never mutates state directly.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::patch::Patch;
use crate::reveal::RevealTracker;
use crate::sections::{SectionEntry, SectionTracker};
use crate::theme::{PreferenceStore, Theme};
use crate::{anchors, nav, theme, toggles};

/// Ephemeral UI state owned by the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
    pub nav_expanded: bool,
    pub focus_mode: bool,
    pub tabbing: bool,
}

/// Inputs sampled from the platform once at boot.
#[derive(Clone, Copy, Debug, Default)]
pub struct BootEnv {
    /// `Some(true)` when the platform prefers a dark color scheme,
    /// `None` when the signal is unavailable.
    pub prefers_dark: Option<bool>,
    pub year: u32,
}

/// Core engine state: all logic that doesn't need the document.
#[derive(Debug, Default)]
pub struct EngineCore {
    pub ui: UiState,
    pub sections: SectionTracker,
    pub reveal: RevealTracker,
}

impl EngineCore {
    #[must_use]
    pub fn new(sections: SectionTracker, reveal: RevealTracker) -> Self {
        Self { ui: UiState::default(), sections, reveal }
    }

    // --- Boot ---

    /// Resolve the startup theme and return the patches for it.
    pub fn boot_theme(&mut self, store: &dyn PreferenceStore, env: BootEnv) -> Vec<Patch> {
        let stored = store.load();
        let resolved = theme::resolve_initial(stored, env.prefers_dark);
        log::debug!("theme resolved to {resolved} (stored: {stored:?}, prefers_dark: {:?})", env.prefers_dark);
        self.apply_theme(resolved)
    }

    /// Patch for the footer year.
    #[must_use]
    pub fn boot_year(&self, env: BootEnv) -> Patch {
        toggles::year_patch(env.year)
    }

    // --- Theme ---

    /// Apply a theme without persisting it.
    pub fn apply_theme(&mut self, theme: Theme) -> Vec<Patch> {
        self.ui.theme = theme;
        theme::apply_theme(theme)
    }

    /// A theme button was clicked.
    pub fn on_theme_click(&mut self, theme: Theme) -> Vec<Patch> {
        self.ui.theme = theme;
        theme::choose_theme(theme)
    }

    /// A key was pressed while a theme button had focus.
    #[must_use]
    pub fn on_theme_key(&self, key: &str, focused: Theme) -> Vec<Patch> {
        theme::theme_button_key(key, focused)
    }

    // --- Navigation ---

    pub fn on_nav_toggle(&mut self) -> Vec<Patch> {
        self.ui.nav_expanded = !self.ui.nav_expanded;
        nav::render(self.ui.nav_expanded)
    }

    /// Force the navigation closed, whatever its current state.
    pub fn close_nav(&mut self) -> Vec<Patch> {
        self.ui.nav_expanded = false;
        nav::render(false)
    }

    /// A key was pressed anywhere in the document.
    pub fn on_document_key(&mut self, key: &str) -> Vec<Patch> {
        if nav::is_close_key(key) { self.close_nav() } else { Vec::new() }
    }

    /// A navigation link was clicked.
    pub fn on_link_click(&mut self, href: &str, exists: impl Fn(&str) -> bool) -> Vec<Patch> {
        let mut patches = anchors::on_click(href, exists);
        if !patches.is_empty() && self.ui.nav_expanded {
            patches.extend(self.close_nav());
        }
        patches
    }

    // --- Observers ---

    pub fn on_sections(&mut self, entries: &[SectionEntry]) -> Vec<Patch> {
        self.sections.on_batch(entries)
    }

    pub fn on_reveal(&mut self, index: usize, is_intersecting: bool) -> Vec<Patch> {
        self.reveal.on_entry(index, is_intersecting)
    }

    // --- Print / focus / tabbing ---

    #[must_use]
    pub fn on_print(&self) -> Vec<Patch> {
        toggles::print()
    }

    pub fn on_focus_toggle(&mut self) -> Vec<Patch> {
        self.ui.focus_mode = !self.ui.focus_mode;
        toggles::render_focus_mode(self.ui.focus_mode)
    }

    /// Returns `None` until the first Tab, then the marking patches once.
    pub fn on_first_tab(&mut self, key: &str) -> Option<Vec<Patch>> {
        if self.ui.tabbing || !toggles::is_tab_key(key) {
            return None;
        }
        self.ui.tabbing = true;
        Some(toggles::mark_tabbing())
    }
}
