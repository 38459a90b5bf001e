// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover detector: pointer-driven affordances.
//!
//! Affordances only change while no session is live. Starting a session hides
//! whatever is shown through [`HoverDetector::suppress`], so nothing is ever
//! shown while [`InteractionState::Grabbing`] holds. Whether the pointer is
//! inside the interactive region is tracked separately and keeps updating
//! during a session, so [`HoverDetector::restore`] can bring `focus`-mode
//! scrollbars back once the session ends.

use understory_drag_session::InteractionState;
use understory_event_state::affordance::{AffordanceState, Affordances};

use crate::config::{Axis, ScrollStyle, ScrollVisibility};
use crate::event::SceneEvent;
use crate::host::WidgetHost;

/// Tracks which hover affordances are shown and drives the host accordingly.
#[derive(Clone, Debug, Default)]
pub struct HoverDetector {
    shown: AffordanceState,
    inside_region: bool,
}

impl HoverDetector {
    /// Creates a detector with nothing shown.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Affordances currently shown.
    #[must_use]
    pub fn shown(&self) -> Affordances {
        self.shown.shown()
    }

    /// Whether the pointer is inside the interactive region.
    #[must_use]
    pub fn is_inside_region(&self) -> bool {
        self.inside_region
    }

    /// Show the task-bar hover when the pointer is over a task-bar, hide it otherwise.
    ///
    /// The show is re-issued on every move over a task-bar so the host can
    /// follow the pointer across adjacent task-bars. Returns whether the host
    /// was asked to show or hide anything.
    pub fn on_pointer_move<H: WidgetHost + ?Sized>(
        &mut self,
        state: InteractionState,
        event: &SceneEvent<'_>,
        host: &mut H,
    ) -> bool {
        if state == InteractionState::Grabbing {
            return false;
        }
        if let Some(bar) = event.path.task_bar() {
            self.shown.show(Affordances::TASK_BAR_HOVER);
            host.show_task_bar_hover(bar, event.position);
            true
        } else if self.shown.hide(Affordances::TASK_BAR_HOVER) {
            host.hide_task_bar_hover();
            true
        } else {
            false
        }
    }

    /// Reveal `focus`-mode scrollbars when the pointer enters the interactive region.
    pub fn on_region_enter<H: WidgetHost + ?Sized>(
        &mut self,
        state: InteractionState,
        style: &ScrollStyle,
        host: &mut H,
    ) -> bool {
        self.inside_region = true;
        if state == InteractionState::Grabbing {
            return false;
        }
        self.sync_scrollbars(style, host)
    }

    /// Hide `focus`-mode scrollbars when the pointer leaves the interactive region.
    pub fn on_region_leave<H: WidgetHost + ?Sized>(
        &mut self,
        state: InteractionState,
        style: &ScrollStyle,
        host: &mut H,
    ) -> bool {
        self.inside_region = false;
        if state == InteractionState::Grabbing {
            return false;
        }
        self.sync_scrollbars(style, host)
    }

    /// Highlight the divider while hovered.
    pub fn on_divider_over<H: WidgetHost + ?Sized>(
        &mut self,
        state: InteractionState,
        host: &mut H,
    ) -> bool {
        if state == InteractionState::Grabbing {
            return false;
        }
        let changed = self.shown.show(Affordances::DIVIDER_HIGHLIGHT);
        if changed {
            host.set_divider_highlight(true);
        }
        changed
    }

    /// Drop the divider highlight.
    pub fn on_divider_out<H: WidgetHost + ?Sized>(
        &mut self,
        state: InteractionState,
        host: &mut H,
    ) -> bool {
        if state == InteractionState::Grabbing {
            return false;
        }
        let changed = self.shown.hide(Affordances::DIVIDER_HIGHLIGHT);
        if changed {
            host.set_divider_highlight(false);
        }
        changed
    }

    /// Hide everything that is shown. Called right before a session starts.
    pub fn suppress<H: WidgetHost + ?Sized>(&mut self, host: &mut H) {
        let shown = self.shown.take();
        if shown.contains(Affordances::TASK_BAR_HOVER) {
            host.hide_task_bar_hover();
        }
        if shown.contains(Affordances::DIVIDER_HIGHLIGHT) {
            host.set_divider_highlight(false);
        }
        if shown.contains(Affordances::HORIZONTAL_SCROLLBAR) {
            host.set_scrollbar_visible(Axis::Horizontal, false);
        }
        if shown.contains(Affordances::VERTICAL_SCROLLBAR) {
            host.set_scrollbar_visible(Axis::Vertical, false);
        }
    }

    /// Bring `focus`-mode scrollbars back in line with the pointer once a
    /// session has ended.
    pub fn restore<H: WidgetHost + ?Sized>(
        &mut self,
        style: &ScrollStyle,
        host: &mut H,
    ) -> bool {
        self.sync_scrollbars(style, host)
    }

    /// Hide everything and forget the pointer. Called on teardown.
    pub fn clear<H: WidgetHost + ?Sized>(&mut self, host: &mut H) {
        self.suppress(host);
        self.inside_region = false;
    }

    fn sync_scrollbars<H: WidgetHost + ?Sized>(
        &mut self,
        style: &ScrollStyle,
        host: &mut H,
    ) -> bool {
        let visible = self.inside_region;
        let mut changed = false;
        for (axis, flag) in [
            (Axis::Horizontal, Affordances::HORIZONTAL_SCROLLBAR),
            (Axis::Vertical, Affordances::VERTICAL_SCROLLBAR),
        ] {
            if style.resolve(axis) != ScrollVisibility::Focus {
                continue;
            }
            let toggled = if visible {
                self.shown.show(flag)
            } else {
                self.shown.hide(flag)
            };
            if toggled {
                host.set_scrollbar_visible(axis, visible);
                changed = true;
            }
        }
        changed
    }
}
