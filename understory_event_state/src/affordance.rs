// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Affordance flags: which transient visual cues are currently shown.
//!
//! Each affordance is independent. [`AffordanceState::show`] and
//! [`AffordanceState::hide`] report whether the call changed anything, so a caller
//! can decide whether to touch the visual layer. Callers that prefer to re-issue
//! redundant shows may ignore the return value.

bitflags::bitflags! {
    /// Set of transient visual cues.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Affordances: u8 {
        /// Highlight shadow and resize handles around the hovered task-bar.
        const TASK_BAR_HOVER = 0b0000_0001;
        /// Highlight on the panel divider.
        const DIVIDER_HIGHLIGHT = 0b0000_0010;
        /// Revealed horizontal scrollbar.
        const HORIZONTAL_SCROLLBAR = 0b0000_0100;
        /// Revealed vertical scrollbar.
        const VERTICAL_SCROLLBAR = 0b0000_1000;
    }
}

/// Tracks which [`Affordances`] are shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AffordanceState {
    shown: Affordances,
}

impl AffordanceState {
    /// Creates a state with nothing shown.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            shown: Affordances::empty(),
        }
    }

    /// Mark `which` as shown. Returns `true` if any of them was hidden before.
    pub fn show(&mut self, which: Affordances) -> bool {
        let changed = !self.shown.contains(which);
        self.shown.insert(which);
        changed
    }

    /// Mark `which` as hidden. Returns `true` if any of them was shown before.
    pub fn hide(&mut self, which: Affordances) -> bool {
        let changed = self.shown.intersects(which);
        self.shown.remove(which);
        changed
    }

    /// Hide everything, returning what was shown.
    pub fn take(&mut self) -> Affordances {
        core::mem::take(&mut self.shown)
    }

    /// Returns `true` if every affordance in `which` is shown.
    #[must_use]
    pub fn is_shown(&self, which: Affordances) -> bool {
        self.shown.contains(which)
    }

    /// Returns the full set of shown affordances.
    #[must_use]
    pub const fn shown(&self) -> Affordances {
        self.shown
    }

    /// Returns `true` if nothing is shown.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.shown.is_empty()
    }
}
