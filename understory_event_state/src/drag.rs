// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag tracker: remember the last accepted pointer position and gate moves on a threshold.
//!
//! ## Usage
//!
//! 1) Seed the tracker with [`DragTracker::start`] when a drag begins (or whenever the
//!    pointer goes down anywhere, if the host wants the press point remembered).
//! 2) On each move, call [`DragTracker::advance`]. It returns the delta from the last
//!    accepted point only when the Manhattan distance reaches the threshold, and only
//!    then updates the last point.
//! 3) Use [`DragTracker::total_offset`] for the offset from the start position.
//! 4) Call [`DragTracker::end`] when the drag is over.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_event_state::drag::DragTracker;
//!
//! let mut drag = DragTracker::new();
//! drag.start(Point::new(0.0, 0.0));
//!
//! // Sub-unit jitter is swallowed and does not move the last point.
//! assert_eq!(drag.advance(Point::new(0.25, 0.5)), None);
//! assert_eq!(drag.last(), Some(Point::new(0.0, 0.0)));
//!
//! // The jitter accumulates against the last *accepted* point.
//! assert_eq!(drag.advance(Point::new(0.5, 0.5)), Some(Vec2::new(0.5, 0.5)));
//! assert_eq!(drag.total_offset(Point::new(3.0, 4.0)), Some(Vec2::new(3.0, 4.0)));
//! ```

use kurbo::{Point, Vec2};

/// Minimum Manhattan distance, in device units, for a move to be accepted.
pub const DEFAULT_MOVE_THRESHOLD: f64 = 1.0;

/// Tracks the start and last accepted pointer positions of a drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragTracker {
    start: Option<Point>,
    last: Option<Point>,
    threshold: f64,
}

impl Default for DragTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl DragTracker {
    /// Creates an idle tracker using [`DEFAULT_MOVE_THRESHOLD`].
    #[must_use]
    pub const fn new() -> Self {
        Self::with_threshold(DEFAULT_MOVE_THRESHOLD)
    }

    /// Creates an idle tracker with a custom movement threshold.
    #[must_use]
    pub const fn with_threshold(threshold: f64) -> Self {
        Self {
            start: None,
            last: None,
            threshold,
        }
    }

    /// Returns the movement threshold.
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Begin tracking from `pos`, discarding anything recorded before.
    pub fn start(&mut self, pos: Point) {
        self.start = Some(pos);
        self.last = Some(pos);
    }

    /// Offer a new pointer position.
    ///
    /// Returns the delta from the last accepted point when the Manhattan
    /// distance is at least the threshold, and records `pos` as the new last
    /// point. Otherwise returns `None` and leaves the last point untouched.
    ///
    /// With no last point recorded yet, `pos` becomes the last point and
    /// `None` is returned, since a point is at distance zero from itself.
    pub fn advance(&mut self, pos: Point) -> Option<Vec2> {
        let Some(last) = self.last else {
            self.last = Some(pos);
            return None;
        };
        let delta = pos - last;
        if manhattan(delta) >= self.threshold {
            self.last = Some(pos);
            Some(delta)
        } else {
            None
        }
    }

    /// Returns the last accepted pointer position, if any.
    #[must_use]
    pub const fn last(&self) -> Option<Point> {
        self.last
    }

    /// Returns the position the drag started from, if any.
    #[must_use]
    pub const fn start_pos(&self) -> Option<Point> {
        self.start
    }

    /// Offset from the start position to `current`.
    #[must_use]
    pub fn total_offset(&self, current: Point) -> Option<Vec2> {
        self.start.map(|start| current - start)
    }

    /// Forget the start and last positions.
    pub fn end(&mut self) {
        self.start = None;
        self.last = None;
    }

    /// Returns `true` while a start position is recorded.
    #[must_use]
    pub const fn is_tracking(&self) -> bool {
        self.start.is_some()
    }
}

/// `|x| + |y|`, written with `max` so it does not need `libm`.
fn manhattan(v: Vec2) -> f64 {
    v.x.max(-v.x) + v.y.max(-v.y)
}
