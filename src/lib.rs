//! Client-side behavior for a static portfolio page, compiled to WebAssembly.
//!
//! The page markup is plain HTML; this crate adds theme switching, the mobile
//! navigation disclosure, smooth fragment scrolling, active-link tracking,
//! reveal-on-scroll, print/focus toggles and the footer year.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | `EngineCore`: UI state and event entry points |
//! | [`patch`] | Symbolic DOM deltas returned by the core |
//! | [`theme`] | Theme enum, preference store, resolution policy |
//! | [`nav`] | Mobile navigation rendering |
//! | [`anchors`] | Fragment link handling |
//! | [`sections`] | Active-section tracking |
//! | [`reveal`] | One-shot reveal tracking |
//! | [`toggles`] | Print, focus mode, year, tabbing marker |
//! | [`config`] | Selector registry and observer options |
//! | [`consts`] | Markup contract defaults |
//! | `dom`, `boot` | Browser adapter (`hydrate` feature only) |
//!
//! Everything except `dom` and `boot` builds and tests on the host.

pub mod anchors;
pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod nav;
pub mod patch;
pub mod reveal;
pub mod sections;
pub mod theme;
pub mod toggles;

#[cfg(feature = "hydrate")]
pub mod boot;
#[cfg(feature = "hydrate")]
pub mod dom;

#[cfg(test)]
mod test_helpers;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::*;

/// Module start hook: install logging and wire the page once it is parsed.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(start)]
pub fn start() {
    boot::install_logging();
    if let Err(err) = boot::schedule() {
        log::warn!("portfolio init not scheduled: {err}");
    }
}

/// Wire the page immediately. Not idempotent.
///
/// # Errors
///
/// Fails when there is no window or document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen]
pub fn init() -> Result<(), JsValue> {
    boot::init().map_err(Into::into)
}

/// Apply `"light"` or `"dark"` to the page without persisting it.
///
/// # Errors
///
/// Fails for any other theme name.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(js_name = applyTheme)]
pub fn apply_theme(name: &str) -> Result<(), JsValue> {
    let theme: theme::Theme = name.parse()?;
    boot::apply_theme_now(theme).map_err(Into::into)
}
