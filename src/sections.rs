//! Scroll-driven active navigation link.
//!
//! DESIGN
//! ======
//! The visibility observer delivers batches of entries. When several
//! sections report intersecting in the same batch, the one that comes first
//! in document order wins. The tracker is rebuilt only at boot, so section
//! and link indices stay aligned with the elements the adapter holds.

#[cfg(test)]
#[path = "sections_test.rs"]
mod sections_test;

use crate::anchors::fragment_of;
use crate::consts::{ACTIVE_CLASS, ARIA_CURRENT, ARIA_CURRENT_VALUE};
use crate::patch::{Patch, Target};

/// One observer entry, reduced to what the tracker needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionEntry {
    /// Index of the section in document order.
    pub index: usize,
    pub is_intersecting: bool,
}

/// Maps sections to navigation links and tracks which one is active.
#[derive(Debug, Clone, Default)]
pub struct SectionTracker {
    section_ids: Vec<String>,
    /// Fragment of each nav link, `None` for non-fragment hrefs.
    link_fragments: Vec<Option<String>>,
    active: Option<usize>,
}

impl SectionTracker {
    /// Build a tracker from section ids and nav link hrefs, both in document order.
    #[must_use]
    pub fn new(section_ids: Vec<String>, link_hrefs: &[Option<String>]) -> Self {
        let link_fragments = link_hrefs
            .iter()
            .map(|href| href.as_deref().and_then(fragment_of).map(str::to_owned))
            .collect();
        Self { section_ids, link_fragments, active: None }
    }

    /// Whether there is anything to observe.
    #[must_use]
    pub fn is_observable(&self) -> bool {
        !self.section_ids.is_empty() && !self.link_fragments.is_empty()
    }

    /// Index of the currently active section, if any has been reported.
    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// The nav link pointing at section `index`, first match wins.
    #[must_use]
    pub fn link_for(&self, index: usize) -> Option<usize> {
        let id = self.section_ids.get(index)?;
        self.link_fragments
            .iter()
            .position(|fragment| fragment.as_deref() == Some(id.as_str()))
    }

    /// Apply one observer batch.
    ///
    /// Returns nothing when no entry is intersecting or the topmost
    /// intersecting section is already active. Otherwise clears every link
    /// and marks the link of that section.
    pub fn on_batch(&mut self, entries: &[SectionEntry]) -> Vec<Patch> {
        let Some(topmost) = entries
            .iter()
            .filter(|entry| entry.is_intersecting && entry.index < self.section_ids.len())
            .map(|entry| entry.index)
            .min()
        else {
            return Vec::new();
        };
        if self.active == Some(topmost) {
            return Vec::new();
        }
        self.active = Some(topmost);

        let mut patches = Vec::with_capacity(self.link_fragments.len() * 2 + 2);
        for i in 0..self.link_fragments.len() {
            patches.push(Patch::remove_class(Target::NavLink(i), ACTIVE_CLASS));
            patches.push(Patch::RemoveAttr { target: Target::NavLink(i), name: ARIA_CURRENT });
        }
        if let Some(link) = self.link_for(topmost) {
            patches.push(Patch::add_class(Target::NavLink(link), ACTIVE_CLASS));
            patches.push(Patch::set_attr(Target::NavLink(link), ARIA_CURRENT, ARIA_CURRENT_VALUE));
        }
        patches
    }
}
