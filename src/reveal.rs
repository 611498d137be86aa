//! Reveal-on-scroll: one-shot `is-visible` marking.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::consts::VISIBLE_CLASS;
use crate::patch::{Patch, Target};

/// Tracks which reveal-marked elements have already been shown.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self { revealed: vec![false; count] }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Handle one observer entry for element `index`.
    ///
    /// The first intersecting report adds the visible class and unobserves
    /// the element. Anything after that, including leaving the viewport, is
    /// ignored.
    pub fn on_entry(&mut self, index: usize, is_intersecting: bool) -> Vec<Patch> {
        if !is_intersecting {
            return Vec::new();
        }
        let Some(slot) = self.revealed.get_mut(index) else {
            return Vec::new();
        };
        if *slot {
            return Vec::new();
        }
        *slot = true;
        vec![
            Patch::add_class(Target::Reveal(index), VISIBLE_CLASS),
            Patch::Unobserve(Target::Reveal(index)),
        ]
    }
}
