//! In-page fragment links.

#[cfg(test)]
#[path = "anchors_test.rs"]
mod anchors_test;

use crate::patch::{Patch, Target};

/// The fragment id of an in-page link, or `None` for any other href.
///
/// `"#"` yields `Some("")`: it is still an in-page link, just one with no
/// target.
#[must_use]
pub fn fragment_of(href: &str) -> Option<&str> {
    href.strip_prefix('#')
}

/// Patches for a click on a link with `href`.
///
/// Non-fragment hrefs return nothing so the browser navigates normally.
/// `exists` reports whether an element with the given id is on the page.
pub fn on_click(href: &str, exists: impl Fn(&str) -> bool) -> Vec<Patch> {
    let Some(id) = fragment_of(href) else {
        return Vec::new();
    };
    let mut patches = vec![Patch::PreventDefault];
    if !id.is_empty() && exists(id) {
        patches.push(Patch::ScrollIntoView(Target::Fragment(id.to_owned())));
    } else {
        log::debug!("anchor target #{id} not found");
    }
    patches
}
