//! Shared test utilities.
//!
//! [`PatchedDom`] folds patches into an observable snapshot of attributes,
//! classes and styles, and records the side-effect patches it saw. Tests
//! assert against the snapshot the way a browser test would assert against
//! the live document.

use std::collections::{BTreeMap, BTreeSet};

use crate::patch::{Patch, Target};
use crate::theme::{PreferenceStore, Theme};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PatchedDom {
    attrs: BTreeMap<(String, &'static str), String>,
    classes: BTreeSet<(String, String)>,
    styles: BTreeMap<(String, &'static str), &'static str>,
    texts: BTreeMap<String, String>,
    pub focused: Option<Target>,
    pub scrolls: Vec<Target>,
    pub unobserved: Vec<Target>,
    pub prints: usize,
    pub prevented: usize,
    pub persisted: Vec<Theme>,
}

fn key(target: &Target) -> String {
    format!("{target:?}")
}

impl PatchedDom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, patches: &[Patch]) {
        for patch in patches {
            match patch {
                Patch::SetAttr { target, name, value } => {
                    self.attrs.insert((key(target), *name), value.clone());
                }
                Patch::RemoveAttr { target, name } => {
                    self.attrs.remove(&(key(target), *name));
                }
                Patch::AddClass { target, class } => {
                    self.classes.insert((key(target), class.clone()));
                }
                Patch::RemoveClass { target, class } => {
                    self.classes.remove(&(key(target), class.clone()));
                }
                Patch::SetStyle { target, property, value } => {
                    self.styles.insert((key(target), *property), *value);
                }
                Patch::RemoveStyle { target, property } => {
                    self.styles.remove(&(key(target), *property));
                }
                Patch::SetText { target, text } => {
                    self.texts.insert(key(target), text.clone());
                }
                Patch::Focus(target) => self.focused = Some(target.clone()),
                Patch::ScrollIntoView(target) => self.scrolls.push(target.clone()),
                Patch::Unobserve(target) => self.unobserved.push(target.clone()),
                Patch::Print => self.prints += 1,
                Patch::PreventDefault => self.prevented += 1,
                Patch::Persist(theme) => self.persisted.push(*theme),
            }
        }
    }

    pub fn attr(&self, target: &Target, name: &'static str) -> Option<&str> {
        self.attrs.get(&(key(target), name)).map(String::as_str)
    }

    pub fn has_class(&self, target: &Target, class: &str) -> bool {
        self.classes.contains(&(key(target), class.to_owned()))
    }

    pub fn style(&self, target: &Target, property: &'static str) -> Option<&'static str> {
        self.styles.get(&(key(target), property)).copied()
    }

    pub fn text(&self, target: &Target) -> Option<&str> {
        self.texts.get(&key(target)).map(String::as_str)
    }

    /// Attribute/class/style/text state only, ignoring recorded side effects.
    pub fn visible_state(&self) -> Self {
        Self {
            attrs: self.attrs.clone(),
            classes: self.classes.clone(),
            styles: self.styles.clone(),
            texts: self.texts.clone(),
            ..Self::default()
        }
    }
}

/// Write the persisted themes a `PatchedDom` recorded into `store`.
pub fn flush_persisted(dom: &PatchedDom, store: &dyn PreferenceStore) {
    for theme in &dom.persisted {
        store.save(*theme);
    }
}
