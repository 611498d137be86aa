//! DOM deltas produced by the pure core and applied by the browser adapter.
//!
//! Every handler in the core returns a `Vec<Patch>` rather than touching the
//! document. Targets are symbolic; `dom::Page` resolves them against the
//! elements it found at boot.

use crate::theme::Theme;

/// A symbolic reference to an element (or element group member) on the page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    /// The `<html>` element.
    Root,
    /// The `<body>` element.
    Body,
    /// The button that selects the given theme.
    ThemeButton(Theme),
    /// The hamburger toggle control.
    NavToggle,
    /// The collapsible navigation list.
    NavList,
    /// The glyph nested inside the toggle.
    NavIcon,
    /// The n-th navigation link in document order.
    NavLink(usize),
    /// The n-th reveal-marked element in document order.
    Reveal(usize),
    /// An element looked up by id at apply time.
    Fragment(String),
    /// The focus-CV button.
    FocusButton,
    /// The footer year placeholder.
    Year,
}

/// One DOM delta or side-effect request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch {
    SetAttr { target: Target, name: &'static str, value: String },
    RemoveAttr { target: Target, name: &'static str },
    AddClass { target: Target, class: String },
    RemoveClass { target: Target, class: String },
    SetStyle { target: Target, property: &'static str, value: &'static str },
    RemoveStyle { target: Target, property: &'static str },
    SetText { target: Target, text: String },
    /// Move keyboard focus to the target.
    Focus(Target),
    /// Smooth-scroll the target to the viewport's start edge.
    ScrollIntoView(Target),
    /// Stop observing the target with the observer that reported it.
    Unobserve(Target),
    /// Open the platform print dialog.
    Print,
    /// Cancel the default action of the event being handled.
    PreventDefault,
    /// Write the theme preference to storage.
    Persist(Theme),
}

impl Patch {
    #[must_use]
    pub fn set_attr(target: Target, name: &'static str, value: impl Into<String>) -> Self {
        Self::SetAttr { target, name, value: value.into() }
    }

    #[must_use]
    pub fn add_class(target: Target, class: &str) -> Self {
        Self::AddClass { target, class: class.to_owned() }
    }

    #[must_use]
    pub fn remove_class(target: Target, class: &str) -> Self {
        Self::RemoveClass { target, class: class.to_owned() }
    }

    /// Whether this patch cancels the event's default action.
    #[must_use]
    pub fn is_prevent_default(&self) -> bool {
        matches!(self, Self::PreventDefault)
    }
}

/// `"true"` / `"false"` for ARIA boolean attributes.
#[must_use]
pub fn aria_bool(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
