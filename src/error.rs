//! Error type shared by the core and the browser adapter.
//!
//! Nothing here reaches the end user. Setup routines return these so the
//! bootstrap can log the failure and move on to the next feature.

/// Failure while configuring or wiring the page.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    /// `window` is not available (worker or non-browser host).
    #[error("no window available")]
    NoWindow,
    /// The window has no document.
    #[error("no document available")]
    NoDocument,
    /// A `web-sys` call was rejected by the browser.
    #[error("dom call failed: {0}")]
    Dom(String),
    /// The config JSON could not be parsed.
    #[error("invalid config json: {0}")]
    Config(#[from] serde_json::Error),
    /// The config parsed but holds an out-of-range value.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    /// A theme name other than `light` or `dark`.
    #[error("unknown theme: {0}")]
    UnknownTheme(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for UiError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(feature = "hydrate")]
impl From<UiError> for wasm_bindgen::JsValue {
    fn from(err: UiError) -> Self {
        Self::from_str(&err.to_string())
    }
}
