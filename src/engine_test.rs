use super::*;
use crate::consts::{ARIA_EXPANDED, ARIA_PRESSED, STORAGE_KEY, TABBING_CLASS, THEME_ATTR, VISIBLE_CLASS};
use crate::patch::Target;
use crate::test_helpers::{PatchedDom, flush_persisted};
use crate::theme::MemoryStore;

// =============================================================
// Helpers
// =============================================================

fn page_core() -> EngineCore {
    let sections = SectionTracker::new(
        vec!["about".to_owned(), "work".to_owned()],
        &[Some("#about".to_owned()), Some("#work".to_owned())],
    );
    EngineCore::new(sections, RevealTracker::new(2))
}

fn env(prefers_dark: Option<bool>) -> BootEnv {
    BootEnv { prefers_dark, year: 2026 }
}

fn booted(store: &MemoryStore, prefers_dark: Option<bool>) -> (EngineCore, PatchedDom) {
    let mut core = page_core();
    let mut dom = PatchedDom::new();
    dom.apply(&core.boot_theme(store, env(prefers_dark)));
    dom.apply(&[core.boot_year(env(prefers_dark))]);
    (core, dom)
}

fn expanded(dom: &PatchedDom) -> Option<&str> {
    dom.attr(&Target::NavToggle, ARIA_EXPANDED)
}

fn page_has(id: &str) -> bool {
    matches!(id, "about" | "work")
}

// =============================================================
// Boot
// =============================================================

#[test]
fn stored_dark_boots_into_dark() {
    // Storage holds portfolio_theme = "dark".
    assert_eq!(STORAGE_KEY, "portfolio_theme");
    let store = MemoryStore::with_raw("dark");
    let (core, dom) = booted(&store, Some(false));
    assert_eq!(core.ui.theme, Theme::Dark);
    assert_eq!(dom.attr(&Target::Root, THEME_ATTR), Some("dark"));
    assert_eq!(dom.attr(&Target::ThemeButton(Theme::Dark), ARIA_PRESSED), Some("true"));
    assert_eq!(dom.attr(&Target::ThemeButton(Theme::Light), ARIA_PRESSED), Some("false"));
}

#[test]
fn no_preference_follows_platform_dark() {
    let (_, dom) = booted(&MemoryStore::new(), Some(true));
    assert_eq!(dom.attr(&Target::ThemeButton(Theme::Dark), ARIA_PRESSED), Some("true"));
}

#[test]
fn no_preference_and_no_signal_is_light() {
    for signal in [Some(false), None] {
        let (_, dom) = booted(&MemoryStore::new(), signal);
        assert_eq!(dom.attr(&Target::ThemeButton(Theme::Light), ARIA_PRESSED), Some("true"));
        assert_eq!(dom.attr(&Target::Root, THEME_ATTR), None);
    }
}

#[test]
fn boot_does_not_write_storage() {
    let store = MemoryStore::new();
    let (_, dom) = booted(&store, Some(true));
    assert!(dom.persisted.is_empty());
    assert_eq!(store.raw(), None);
}

#[test]
fn boot_stamps_year() {
    let (_, dom) = booted(&MemoryStore::new(), None);
    assert_eq!(dom.text(&Target::Year), Some("2026"));
}

// =============================================================
// Theme clicks
// =============================================================

#[test]
fn theme_click_applies_and_persists() {
    let store = MemoryStore::new();
    let (mut core, mut dom) = booted(&store, None);
    dom.apply(&core.on_theme_click(Theme::Dark));
    flush_persisted(&dom, &store);
    assert_eq!(core.ui.theme, Theme::Dark);
    assert_eq!(store.raw().as_deref(), Some("dark"));

    let (_, reloaded) = booted(&store, Some(false));
    assert_eq!(reloaded.attr(&Target::Root, THEME_ATTR), Some("dark"));
}

#[test]
fn external_apply_after_click_updates_state_without_persisting() {
    let store = MemoryStore::new();
    let (mut core, mut dom) = booted(&store, None);
    dom.apply(&core.on_theme_click(Theme::Dark));
    dom.apply(&core.apply_theme(Theme::Light));
    assert_eq!(core.ui.theme, Theme::Light);
    assert_eq!(dom.attr(&Target::ThemeButton(Theme::Light), ARIA_PRESSED), Some("true"));
    assert_eq!(dom.persisted, vec![Theme::Dark]);
}

#[test]
fn theme_key_on_button_moves_focus() {
    let core = page_core();
    let mut dom = PatchedDom::new();
    dom.apply(&core.on_theme_key("ArrowLeft", Theme::Dark));
    assert_eq!(dom.focused, Some(Target::ThemeButton(Theme::Light)));
    assert_eq!(dom.prevented, 1);
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn toggle_parity_controls_expanded() {
    for n in 1..=6 {
        let mut core = page_core();
        let mut dom = PatchedDom::new();
        dom.apply(&core.close_nav());
        for _ in 0..n {
            dom.apply(&core.on_nav_toggle());
        }
        let want = if n % 2 == 0 { "false" } else { "true" };
        assert_eq!(expanded(&dom), Some(want), "after {n} toggles");
        assert_eq!(core.ui.nav_expanded, n % 2 == 1);
    }
}

#[test]
fn escape_always_collapses() {
    for toggles in 0..3 {
        let mut core = page_core();
        let mut dom = PatchedDom::new();
        for _ in 0..toggles {
            dom.apply(&core.on_nav_toggle());
        }
        dom.apply(&core.on_document_key("Escape"));
        assert_eq!(expanded(&dom), Some("false"));
        assert!(!core.ui.nav_expanded);
    }
}

#[test]
fn other_document_keys_leave_nav_alone() {
    let mut core = page_core();
    core.on_nav_toggle();
    assert!(core.on_document_key("a").is_empty());
    assert!(core.ui.nav_expanded);
}

#[test]
fn fragment_click_scrolls_once_and_closes_open_nav() {
    let mut core = page_core();
    let mut dom = PatchedDom::new();
    dom.apply(&core.on_nav_toggle());
    dom.apply(&core.on_link_click("#work", page_has));
    assert_eq!(dom.prevented, 1);
    assert_eq!(dom.scrolls, vec![Target::Fragment("work".to_owned())]);
    assert_eq!(expanded(&dom), Some("false"));
    assert!(!core.ui.nav_expanded);
}

#[test]
fn fragment_click_with_closed_nav_does_not_touch_nav() {
    let mut core = page_core();
    let patches = core.on_link_click("#about", page_has);
    assert_eq!(patches.len(), 2);
    assert!(patches[0].is_prevent_default());
}

#[test]
fn external_click_keeps_nav_open() {
    let mut core = page_core();
    core.on_nav_toggle();
    assert!(core.on_link_click("https://example.com", page_has).is_empty());
    assert!(core.ui.nav_expanded);
}

// =============================================================
// Observers
// =============================================================

#[test]
fn section_batch_routes_to_tracker() {
    let mut core = page_core();
    let mut dom = PatchedDom::new();
    dom.apply(&core.on_sections(&[SectionEntry { index: 1, is_intersecting: true }]));
    assert!(dom.has_class(&Target::NavLink(1), "active"));
    assert_eq!(core.sections.active(), Some(1));
}

#[test]
fn reveal_is_one_shot_through_engine() {
    let mut core = page_core();
    let mut dom = PatchedDom::new();
    dom.apply(&core.on_reveal(0, true));
    dom.apply(&core.on_reveal(0, false));
    assert!(dom.has_class(&Target::Reveal(0), VISIBLE_CLASS));
}

// =============================================================
// Print / focus / tabbing
// =============================================================

#[test]
fn focus_toggle_flips_state() {
    let mut core = page_core();
    core.on_focus_toggle();
    assert!(core.ui.focus_mode);
    core.on_focus_toggle();
    assert!(!core.ui.focus_mode);
}

#[test]
fn print_is_stateless() {
    let core = page_core();
    assert_eq!(core.on_print(), vec![Patch::Print]);
    assert_eq!(core.ui, UiState::default());
}

#[test]
fn first_tab_marks_once() {
    let mut core = page_core();
    assert!(core.on_first_tab("Shift").is_none());
    let mut dom = PatchedDom::new();
    dom.apply(&core.on_first_tab("Tab").unwrap_or_default());
    assert!(dom.has_class(&Target::Body, TABBING_CLASS));
    assert!(core.on_first_tab("Tab").is_none());
}

#[test]
fn visible_state_ignores_side_effects() {
    let mut core = page_core();
    let mut a = PatchedDom::new();
    a.apply(&core.on_theme_click(Theme::Light));
    let mut b = PatchedDom::new();
    b.apply(&theme::apply_theme(Theme::Light));
    assert_ne!(a, b);
    assert_eq!(a.visible_state(), b.visible_state());
}
