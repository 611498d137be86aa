//! Startup: logging, document-ready scheduling, and feature wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! Features are wired in a fixed order (theme, nav, anchors, active section,
//! reveal, print/focus, year, tabbing). Each step is independent: a failure
//! is logged and the next step still runs.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::AddEventListenerOptions;

use crate::dom::{self, Page};
use crate::engine::EngineCore;
use crate::error::UiError;
use crate::reveal::RevealTracker;
use crate::sections::SectionEntry;
use crate::theme::{Theme, apply_theme};

type Core = Rc<RefCell<EngineCore>>;

thread_local! {
    /// The page and engine wired by the last [`init`], for `applyTheme`.
    static LIVE: RefCell<Option<(Rc<Page>, Core)>> = const { RefCell::new(None) };
}

/// Route `log` records to the browser console and install the panic hook.
pub fn install_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("console logger already installed");
    }
}

/// Run [`init`] once the document is parsed.
///
/// # Errors
///
/// Fails when there is no window/document or the listener is rejected.
pub fn schedule() -> Result<(), UiError> {
    let document = web_sys::window()
        .ok_or(UiError::NoWindow)?
        .document()
        .ok_or(UiError::NoDocument)?;
    if document.ready_state() != "loading" {
        return init();
    }
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    let cb = Closure::once_into_js(move || {
        if let Err(err) = init() {
            log::warn!("portfolio init failed: {err}");
        }
    });
    document.add_event_listener_with_callback_and_add_event_listener_options(
        "DOMContentLoaded",
        cb.unchecked_ref(),
        &options,
    )?;
    Ok(())
}

/// Resolve the page and wire every feature.
///
/// Calling this twice registers every listener twice.
///
/// # Errors
///
/// Fails only when there is no window or document.
pub fn init() -> Result<(), UiError> {
    let page = Rc::new(Page::load()?);
    let core: Core = Rc::new(RefCell::new(EngineCore::new(
        page.section_tracker(),
        RevealTracker::new(page.reveals.len()),
    )));
    let env = page.boot_env();

    let patches = core.borrow_mut().boot_theme(&page.store, env);
    page.apply(&patches, None, None);

    step("theme", wire_theme(&page, &core));
    step("nav", wire_nav(&page, &core));
    step("anchors", wire_anchors(&page, &core));
    step("sections", wire_sections(&page, &core));
    step("reveal", wire_reveal(&page, &core));
    step("toggles", wire_toggles(&page, &core));
    page.apply(&[core.borrow().boot_year(env)], None, None);
    step("tabbing", wire_tabbing(&page, &core));

    log::info!(
        "portfolio ui ready ({} theme, {} sections, {} reveal targets)",
        core.borrow().ui.theme,
        page.sections.len(),
        page.reveals.len()
    );
    LIVE.with(|live| *live.borrow_mut() = Some((page, core)));
    Ok(())
}

/// Apply `theme` to the current document without persisting it.
///
/// Goes through the live engine when [`init`] has run, so its state stays
/// in step with the page; otherwise resolves the page just for this call.
///
/// # Errors
///
/// Fails only when there is no window or document.
pub fn apply_theme_now(theme: Theme) -> Result<(), UiError> {
    let live = LIVE.with(|live| live.borrow().clone());
    let Some((page, core)) = live else {
        let page = Page::load()?;
        page.apply(&apply_theme(theme), None, None);
        return Ok(());
    };
    let previous = core.borrow().ui.theme;
    let patches = core.borrow_mut().apply_theme(theme);
    log::debug!("applyTheme: {previous} -> {theme}");
    page.apply(&patches, None, None);
    Ok(())
}

fn step(name: &str, result: Result<(), UiError>) {
    if let Err(err) = result {
        log::warn!("{name} setup failed: {err}");
    }
}

fn wire_theme(page: &Rc<Page>, core: &Core) -> Result<(), UiError> {
    for theme in [Theme::Light, Theme::Dark] {
        let Some(button) = page.theme_button(theme) else {
            log::debug!("no {theme} theme button");
            continue;
        };

        let (p, c) = (Rc::clone(page), Rc::clone(core));
        dom::listen(button, "click", move |ev| {
            let patches = c.borrow_mut().on_theme_click(theme);
            p.apply(&patches, Some(ev), None);
        })?;

        let (p, c) = (Rc::clone(page), Rc::clone(core));
        dom::listen(button, "keydown", move |ev| {
            let Some(key) = dom::key_of(ev) else {
                return;
            };
            let patches = c.borrow().on_theme_key(&key, theme);
            p.apply(&patches, Some(ev), None);
        })?;
    }
    Ok(())
}

fn wire_nav(page: &Rc<Page>, core: &Core) -> Result<(), UiError> {
    let (Some(toggle), Some(_)) = (page.nav_toggle.as_ref(), page.nav_list.as_ref()) else {
        log::debug!("no nav toggle/list, skipping mobile nav");
        return Ok(());
    };

    let (p, c) = (Rc::clone(page), Rc::clone(core));
    dom::listen(toggle, "click", move |ev| {
        let patches = c.borrow_mut().on_nav_toggle();
        p.apply(&patches, Some(ev), None);
    })?;

    let (p, c) = (Rc::clone(page), Rc::clone(core));
    dom::listen(&page.document, "keydown", move |ev| {
        let Some(key) = dom::key_of(ev) else {
            return;
        };
        let patches = c.borrow_mut().on_document_key(&key);
        p.apply(&patches, Some(ev), None);
    })
}

fn wire_anchors(page: &Rc<Page>, core: &Core) -> Result<(), UiError> {
    for link in &page.nav_links {
        let Some(href) = link.get_attribute("href").filter(|href| href.starts_with('#')) else {
            continue;
        };
        let (p, c) = (Rc::clone(page), Rc::clone(core));
        dom::listen(link, "click", move |ev| {
            let patches = c.borrow_mut().on_link_click(&href, |id| p.has_id(id));
            p.apply(&patches, Some(ev), None);
        })?;
    }
    Ok(())
}

fn wire_sections(page: &Rc<Page>, core: &Core) -> Result<(), UiError> {
    if !core.borrow().sections.is_observable() {
        log::debug!("no sections or nav links, skipping active-section observer");
        return Ok(());
    }
    let observers = &page.config.observers;
    let (p, c) = (Rc::clone(page), Rc::clone(core));
    dom::observe(
        &page.sections,
        Some(observers.section_root_margin.as_str()),
        observers.section_threshold,
        move |entries, _observer| {
            let batch: Vec<SectionEntry> = entries
                .iter()
                .filter_map(|entry| {
                    p.section_index(&entry.target())
                        .map(|index| SectionEntry { index, is_intersecting: entry.is_intersecting() })
                })
                .collect();
            let patches = c.borrow_mut().on_sections(&batch);
            p.apply(&patches, None, None);
        },
    )?;
    Ok(())
}

fn wire_reveal(page: &Rc<Page>, core: &Core) -> Result<(), UiError> {
    if page.reveals.is_empty() {
        return Ok(());
    }
    let (p, c) = (Rc::clone(page), Rc::clone(core));
    dom::observe(&page.reveals, None, page.config.observers.reveal_threshold, move |entries, observer| {
        for entry in entries {
            let Some(index) = p.reveal_index(&entry.target()) else {
                continue;
            };
            let patches = c.borrow_mut().on_reveal(index, entry.is_intersecting());
            p.apply(&patches, None, Some(observer));
        }
    })?;
    Ok(())
}

fn wire_toggles(page: &Rc<Page>, core: &Core) -> Result<(), UiError> {
    if let Some(button) = page.print_button.as_ref() {
        let (p, c) = (Rc::clone(page), Rc::clone(core));
        dom::listen(button, "click", move |ev| {
            let patches = c.borrow().on_print();
            p.apply(&patches, Some(ev), None);
        })?;
    }
    if let Some(button) = page.focus_button.as_ref() {
        let (p, c) = (Rc::clone(page), Rc::clone(core));
        dom::listen(button, "click", move |ev| {
            let patches = c.borrow_mut().on_focus_toggle();
            p.apply(&patches, Some(ev), None);
        })?;
    }
    Ok(())
}

/// One-shot keydown listener: the first Tab marks the body, then the
/// listener removes itself.
fn wire_tabbing(page: &Rc<Page>, core: &Core) -> Result<(), UiError> {
    let holder: Rc<RefCell<Option<js_sys::Function>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let (p, c) = (Rc::clone(page), Rc::clone(core));
    let cb = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
        let Some(key) = dom::key_of(&ev) else {
            return;
        };
        let Some(patches) = c.borrow_mut().on_first_tab(&key) else {
            return;
        };
        p.apply(&patches, None, None);
        if let Some(func) = holder_for_cb.borrow_mut().take() {
            if let Err(err) = p.document.remove_event_listener_with_callback("keydown", &func) {
                log::debug!("tab listener not removed: {err:?}");
            }
        }
    });
    let func: js_sys::Function = cb.into_js_value().unchecked_into();
    page.document.add_event_listener_with_callback("keydown", &func)?;
    *holder.borrow_mut() = Some(func);
    Ok(())
}
