// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Router configuration.
//!
//! With the `serde` feature, these types deserialize from the widget's usual
//! option shape:
//!
//! ```json
//! {
//!   "scrollStyle": { "visible": "focus", "verticalVisible": "always" },
//!   "dividerMoveable": true,
//!   "taskBarMoveable": false,
//!   "pixelRatio": 2.0
//! }
//! ```

use understory_drag_session::Capabilities;

/// A scroll axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The horizontal (timeline) axis.
    Horizontal,
    /// The vertical (row) axis.
    Vertical,
}

/// When a scrollbar is visible.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ScrollVisibility {
    /// Always shown; pointer enter/leave does nothing.
    #[default]
    Always,
    /// Shown while the pointer is over the interactive region.
    Focus,
    /// Never shown; pointer enter/leave does nothing.
    Never,
}

/// Scrollbar visibility, with optional per-axis overrides.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ScrollStyle {
    /// Shared default for both axes.
    pub visible: ScrollVisibility,
    /// Override for the horizontal scrollbar.
    pub horizontal_visible: Option<ScrollVisibility>,
    /// Override for the vertical scrollbar.
    pub vertical_visible: Option<ScrollVisibility>,
}

impl ScrollStyle {
    /// Visibility for `axis`: the axis override if set, else the shared default.
    #[must_use]
    pub fn resolve(&self, axis: Axis) -> ScrollVisibility {
        let over = match axis {
            Axis::Horizontal => self.horizontal_visible,
            Axis::Vertical => self.vertical_visible,
        };
        over.unwrap_or(self.visible)
    }
}

/// Configuration consumed by [`GestureRouter`](crate::GestureRouter).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct GestureConfig {
    /// Scrollbar visibility modes.
    pub scroll_style: ScrollStyle,
    /// The panel divider can be dragged.
    pub divider_moveable: bool,
    /// Task-bars can be dragged by their body.
    pub task_bar_moveable: bool,
    /// Fixed device pixel ratio. `None` re-detects it on every container resize.
    pub pixel_ratio: Option<f64>,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            scroll_style: ScrollStyle::default(),
            divider_moveable: true,
            task_bar_moveable: true,
            pixel_ratio: None,
        }
    }
}

impl GestureConfig {
    /// Replace the scroll style.
    #[must_use]
    pub fn with_scroll_style(mut self, scroll_style: ScrollStyle) -> Self {
        self.scroll_style = scroll_style;
        self
    }

    /// Set whether the divider can be dragged.
    #[must_use]
    pub fn with_divider_moveable(mut self, moveable: bool) -> Self {
        self.divider_moveable = moveable;
        self
    }

    /// Set whether task-bars can be moved.
    #[must_use]
    pub fn with_task_bar_moveable(mut self, moveable: bool) -> Self {
        self.task_bar_moveable = moveable;
        self
    }

    /// Fix the device pixel ratio.
    #[must_use]
    pub fn with_pixel_ratio(mut self, ratio: f64) -> Self {
        self.pixel_ratio = Some(ratio);
        self
    }

    /// Capability flags for the session machine.
    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        Capabilities {
            task_bar_moveable: self.task_bar_moveable,
            divider_moveable: self.divider_moveable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_override_wins() {
        let style = ScrollStyle {
            visible: ScrollVisibility::Focus,
            horizontal_visible: Some(ScrollVisibility::Never),
            vertical_visible: None,
        };
        assert_eq!(style.resolve(Axis::Horizontal), ScrollVisibility::Never);
        assert_eq!(style.resolve(Axis::Vertical), ScrollVisibility::Focus);
    }

    #[test]
    fn defaults() {
        let config = GestureConfig::default();
        assert!(config.divider_moveable);
        assert!(config.task_bar_moveable);
        assert_eq!(config.pixel_ratio, None);
        assert_eq!(
            config.scroll_style.resolve(Axis::Vertical),
            ScrollVisibility::Always
        );
    }

    #[test]
    fn builder_feeds_capabilities() {
        let config = GestureConfig::default()
            .with_task_bar_moveable(false)
            .with_divider_moveable(false)
            .with_pixel_ratio(2.0);
        assert_eq!(
            config.capabilities(),
            Capabilities {
                task_bar_moveable: false,
                divider_moveable: false,
            }
        );
        assert_eq!(config.pixel_ratio, Some(2.0));
    }
}
