// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use understory_drag_session::TaskBarRef;

use crate::config::Axis;
use crate::event::WheelEvent;

/// Widget collaborators the router drives besides layout state.
///
/// Implementations are expected to tolerate redundant calls, such as showing a
/// task-bar hover that is already shown.
pub trait WidgetHost {
    /// Handle a wheel event (scroll the timeline).
    fn scroll(&mut self, event: &WheelEvent);

    /// Show or hide the scrollbar on `axis`.
    fn set_scrollbar_visible(&mut self, axis: Axis, visible: bool);

    /// Show the hover affordance (shadow and resize handles) for `bar`.
    fn show_task_bar_hover(&mut self, bar: TaskBarRef, pointer: Point);

    /// Hide the task-bar hover affordance.
    fn hide_task_bar_hover(&mut self);

    /// Toggle the divider highlight.
    fn set_divider_highlight(&mut self, highlighted: bool);

    /// Current device pixel ratio as reported by the platform.
    fn detect_pixel_ratio(&self) -> f64;

    /// Apply a device pixel ratio.
    fn set_pixel_ratio(&mut self, ratio: f64);

    /// Recompute the widget's full layout after a container size change.
    fn relayout(&mut self);
}
