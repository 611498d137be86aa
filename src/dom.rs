//! Browser adapter: element lookup, patch application, listeners, observers.
//!
//! ARCHITECTURE
//! ============
//! `Page` resolves every selector once at boot and keeps the elements. The
//! engine hands back symbolic [`Patch`] targets which are mapped onto those
//! elements here. A missing element turns its patches into no-ops; a rejected
//! DOM call is logged and the remaining patches still run.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Storage,
    Window,
};

use crate::config::PageConfig;
use crate::consts::{CONFIG_SCRIPT_ID, PREFERS_DARK_QUERY};
use crate::engine::BootEnv;
use crate::error::UiError;
use crate::patch::{Patch, Target};
use crate::sections::SectionTracker;
use crate::theme::{PreferenceStore, Theme};

// =============================================================
// Storage
// =============================================================

/// `localStorage`-backed theme preference.
pub struct LocalStore {
    storage: Option<Storage>,
    key: String,
}

impl LocalStore {
    /// Bind to the window's local storage. Sandboxed or disabled storage
    /// yields a store that never persists.
    #[must_use]
    pub fn new(window: &Window, key: &str) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::debug!("local storage unavailable: {err:?}");
                None
            }
        };
        Self { storage, key: key.to_owned() }
    }
}

impl PreferenceStore for LocalStore {
    fn load(&self) -> Option<Theme> {
        let storage = self.storage.as_ref()?;
        match storage.get_item(&self.key) {
            Ok(Some(raw)) => match raw.parse() {
                Ok(theme) => Some(theme),
                Err(err) => {
                    log::debug!("ignoring stored preference: {err}");
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                log::debug!("theme read failed: {err:?}");
                None
            }
        }
    }

    fn save(&self, theme: Theme) {
        let Some(storage) = self.storage.as_ref() else {
            return;
        };
        if let Err(err) = storage.set_item(&self.key, theme.as_str()) {
            log::debug!("theme not persisted: {err:?}");
        }
    }
}

// =============================================================
// Page
// =============================================================

/// Elements resolved from the selector registry.
pub struct Page {
    pub window: Window,
    pub document: Document,
    pub config: PageConfig,
    pub store: LocalStore,
    pub root: Option<Element>,
    pub body: Option<Element>,
    pub theme_light: Option<Element>,
    pub theme_dark: Option<Element>,
    pub nav_toggle: Option<Element>,
    pub nav_list: Option<Element>,
    pub nav_icon: Option<Element>,
    pub nav_links: Vec<Element>,
    pub sections: Vec<Element>,
    pub reveals: Vec<Element>,
    pub print_button: Option<Element>,
    pub focus_button: Option<Element>,
    pub year: Option<Element>,
}

impl Page {
    /// Resolve the page from the current window.
    ///
    /// # Errors
    ///
    /// Fails only when there is no window or document.
    pub fn load() -> Result<Self, UiError> {
        let window = web_sys::window().ok_or(UiError::NoWindow)?;
        let document = window.document().ok_or(UiError::NoDocument)?;
        let config = embedded_config(&document);
        Ok(Self::resolve(window, document, config))
    }

    /// Resolve every selector in `config` against `document`.
    #[must_use]
    pub fn resolve(window: Window, document: Document, config: PageConfig) -> Self {
        let sel = &config.selectors;
        let nav_toggle = query(&document, &sel.nav_toggle);
        let nav_icon = nav_toggle.as_ref().and_then(|toggle| query_in(toggle, &sel.nav_icon));
        Self {
            store: LocalStore::new(&window, &config.storage_key),
            root: document.document_element(),
            body: document.body().map(Element::from),
            theme_light: query(&document, &sel.theme_light),
            theme_dark: query(&document, &sel.theme_dark),
            nav_list: query(&document, &sel.nav_list),
            nav_links: query_all(&document, &sel.nav_links),
            sections: query_all(&document, &sel.sections),
            reveals: query_all(&document, &sel.reveal),
            print_button: query(&document, &sel.print_button),
            focus_button: query(&document, &sel.focus_button),
            year: query(&document, &sel.year),
            nav_toggle,
            nav_icon,
            window,
            document,
            config,
        }
    }

    /// Sample the platform inputs the engine needs at boot.
    #[must_use]
    pub fn boot_env(&self) -> BootEnv {
        let prefers_dark = match self.window.match_media(PREFERS_DARK_QUERY) {
            Ok(Some(query)) => Some(query.matches()),
            Ok(None) => None,
            Err(err) => {
                log::debug!("color-scheme query unavailable: {err:?}");
                None
            }
        };
        BootEnv { prefers_dark, year: js_sys::Date::new_0().get_full_year() }
    }

    /// Section ids and nav hrefs in document order.
    #[must_use]
    pub fn section_tracker(&self) -> SectionTracker {
        let ids = self.sections.iter().map(Element::id).collect();
        let hrefs: Vec<Option<String>> = self.nav_links.iter().map(|link| link.get_attribute("href")).collect();
        SectionTracker::new(ids, &hrefs)
    }

    #[must_use]
    pub fn theme_button(&self, theme: Theme) -> Option<&Element> {
        match theme {
            Theme::Light => self.theme_light.as_ref(),
            Theme::Dark => self.theme_dark.as_ref(),
        }
    }

    #[must_use]
    pub fn section_index(&self, element: &Element) -> Option<usize> {
        self.sections.iter().position(|section| section == element)
    }

    #[must_use]
    pub fn reveal_index(&self, element: &Element) -> Option<usize> {
        self.reveals.iter().position(|reveal| reveal == element)
    }

    #[must_use]
    pub fn has_id(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn resolve_target(&self, target: &Target) -> Option<Element> {
        match target {
            Target::Root => self.root.clone(),
            Target::Body => self.body.clone(),
            Target::ThemeButton(theme) => self.theme_button(*theme).cloned(),
            Target::NavToggle => self.nav_toggle.clone(),
            Target::NavList => self.nav_list.clone(),
            Target::NavIcon => self.nav_icon.clone(),
            Target::NavLink(i) => self.nav_links.get(*i).cloned(),
            Target::Reveal(i) => self.reveals.get(*i).cloned(),
            Target::Fragment(id) => self.document.get_element_by_id(id),
            Target::FocusButton => self.focus_button.clone(),
            Target::Year => self.year.clone(),
        }
    }

    /// Apply patches in order.
    ///
    /// `event` receives `PreventDefault`; `observer` receives `Unobserve`.
    pub fn apply(&self, patches: &[Patch], event: Option<&Event>, observer: Option<&IntersectionObserver>) {
        for patch in patches {
            if let Err(err) = self.apply_one(patch, event, observer) {
                log::warn!("patch {patch:?} failed: {err}");
            }
        }
    }

    fn apply_one(
        &self,
        patch: &Patch,
        event: Option<&Event>,
        observer: Option<&IntersectionObserver>,
    ) -> Result<(), UiError> {
        match patch {
            Patch::Print => self.window.print()?,
            Patch::PreventDefault => {
                if let Some(event) = event {
                    event.prevent_default();
                }
            }
            Patch::Persist(theme) => self.store.save(*theme),
            Patch::SetAttr { target, name, value } => {
                if let Some(el) = self.resolve_target(target) {
                    el.set_attribute(name, value)?;
                }
            }
            Patch::RemoveAttr { target, name } => {
                if let Some(el) = self.resolve_target(target) {
                    el.remove_attribute(name)?;
                }
            }
            Patch::AddClass { target, class } => {
                if let Some(el) = self.resolve_target(target) {
                    el.class_list().add_1(class)?;
                }
            }
            Patch::RemoveClass { target, class } => {
                if let Some(el) = self.resolve_target(target) {
                    el.class_list().remove_1(class)?;
                }
            }
            Patch::SetStyle { target, property, value } => {
                if let Some(el) = self.resolve_html(target) {
                    el.style().set_property(property, value)?;
                }
            }
            Patch::RemoveStyle { target, property } => {
                if let Some(el) = self.resolve_html(target) {
                    el.style().remove_property(property)?;
                }
            }
            Patch::SetText { target, text } => {
                if let Some(el) = self.resolve_target(target) {
                    el.set_text_content(Some(text));
                }
            }
            Patch::Focus(target) => {
                if let Some(el) = self.resolve_html(target) {
                    el.focus()?;
                }
            }
            Patch::ScrollIntoView(target) => {
                if let Some(el) = self.resolve_target(target) {
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    options.set_block(ScrollLogicalPosition::Start);
                    el.scroll_into_view_with_scroll_into_view_options(&options);
                }
            }
            Patch::Unobserve(target) => {
                if let (Some(observer), Some(el)) = (observer, self.resolve_target(target)) {
                    observer.unobserve(&el);
                }
            }
        }
        Ok(())
    }

    fn resolve_html(&self, target: &Target) -> Option<HtmlElement> {
        self.resolve_target(target)
            .and_then(|el| el.dyn_ref::<HtmlElement>().cloned())
    }
}

// =============================================================
// Lookup helpers
// =============================================================

/// Read the optional `<script type="application/json" id="portfolio-config">`.
///
/// A malformed block is logged and replaced by the defaults.
fn embedded_config(document: &Document) -> PageConfig {
    let Some(raw) = document
        .get_element_by_id(CONFIG_SCRIPT_ID)
        .and_then(|script| script.text_content())
    else {
        return PageConfig::default();
    };
    match PageConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring #{CONFIG_SCRIPT_ID}: {err}");
            PageConfig::default()
        }
    }
}

fn query(document: &Document, selector: &str) -> Option<Element> {
    match document.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("bad selector {selector:?}: {err:?}");
            None
        }
    }
}

fn query_in(parent: &Element, selector: &str) -> Option<Element> {
    match parent.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("bad selector {selector:?}: {err:?}");
            None
        }
    }
}

fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            log::warn!("bad selector {selector:?}: {err:?}");
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

// =============================================================
// Events and observers
// =============================================================

/// The `key` of a keyboard event, `None` for other events.
#[must_use]
pub fn key_of(event: &Event) -> Option<String> {
    event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key)
}

/// Register a listener for the lifetime of the page.
///
/// # Errors
///
/// Returns the browser's rejection of `addEventListener`.
pub fn listen(target: &EventTarget, kind: &str, mut handler: impl FnMut(&Event) + 'static) -> Result<(), UiError> {
    let cb = Closure::<dyn FnMut(Event)>::new(move |event: Event| handler(&event));
    target.add_event_listener_with_callback(kind, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Observe `elements` with a new visibility observer.
///
/// # Errors
///
/// Returns the browser's rejection of the observer options.
pub fn observe(
    elements: &[Element],
    root_margin: Option<&str>,
    threshold: f64,
    mut on_entries: impl FnMut(&[IntersectionObserverEntry], &IntersectionObserver) + 'static,
) -> Result<IntersectionObserver, UiError> {
    let cb = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let entries: Vec<IntersectionObserverEntry> = entries
                .iter()
                .filter_map(|entry| entry.dyn_ref::<IntersectionObserverEntry>().cloned())
                .collect();
            on_entries(&entries, &observer);
        },
    );
    let init = IntersectionObserverInit::new();
    if let Some(margin) = root_margin {
        init.set_root_margin(margin);
    }
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init)?;
    cb.forget();
    for element in elements {
        observer.observe(element);
    }
    Ok(observer)
}
