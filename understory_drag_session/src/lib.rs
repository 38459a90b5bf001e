// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Drag Session: one direct-manipulation gesture at a time.
//!
//! ## Overview
//!
//! A timeline widget supports three pointer gestures that each span many events:
//! dragging the panel divider to resize the fixed panel, dragging a task-bar to
//! move it, and dragging a task-bar's edge handle to resize it. This crate owns
//! the single live [`Session`] for those gestures and enforces that
//!
//! - at most one session is live at a time, and a start request while one is
//!   live is rejected without touching the live session;
//! - [`InteractionState::Grabbing`] holds exactly when a session is live;
//! - updates and commits reach layout state only through a [`LayoutHolder`].
//!
//! It does not route events, hit-test, or decide when a move is large enough to
//! forward. Pair it with `understory_event_state::drag::DragTracker` and a
//! router such as `understory_gesture`.
//!
//! ## Lifecycle
//!
//! 1) A `start_*` call moves [`SessionMachine`] from idle to active.
//! 2) Zero or more `deal_*` calls forward [`DragStep`]s for the matching session
//!    kind to the [`LayoutHolder`].
//! 3) The matching `end_*` call commits final geometry and returns to idle.
//!
//! `deal_*`/`end_*` calls that do not match the live session are no-ops that
//! report [`SessionUpdate::NoSession`].
//!
//! ## Stale task-bars
//!
//! Task-bars are referred to by [`TaskBarRef`], a generational identity. If the
//! layout holder no longer knows a session's task-bar (a data update removed it
//! mid-drag), the next `deal_*`/`end_*` drops the session without touching
//! layout state and reports [`SessionUpdate::Stale`].
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_drag_session::{
//!     Capabilities, DragStep, InteractionState, LayoutHolder, ResizeEdge, SessionMachine,
//!     SessionUpdate, TaskBarRef,
//! };
//!
//! #[derive(Default)]
//! struct Panel { width: f64 }
//!
//! impl LayoutHolder for Panel {
//!     fn contains_task_bar(&self, _bar: TaskBarRef) -> bool { false }
//!     fn resize_panel_width(&mut self, step: &DragStep) { self.width += step.delta.x; }
//!     fn finish_panel_width(&mut self) {}
//!     fn move_task_bar(&mut self, _bar: TaskBarRef, _step: &DragStep) {}
//!     fn finish_task_bar_move(&mut self, _bar: TaskBarRef, _final_x: f64) {}
//!     fn resize_task_bar(&mut self, _bar: TaskBarRef, _edge: ResizeEdge, _step: &DragStep) {}
//!     fn finish_task_bar_resize(&mut self, _bar: TaskBarRef, _edge: ResizeEdge, _final_x: f64) {}
//! }
//!
//! let mut panel = Panel { width: 200.0 };
//! let mut sessions = SessionMachine::new(Capabilities::default());
//!
//! sessions.start_resize_panel_width(Point::new(200.0, 10.0)).unwrap();
//! assert_eq!(sessions.interaction_state(), InteractionState::Grabbing);
//!
//! let update = sessions.deal_resize_panel_width(&mut panel, Point::new(230.0, 10.0), Vec2::new(30.0, 0.0));
//! assert_eq!(update, SessionUpdate::Applied);
//! assert_eq!(panel.width, 230.0);
//!
//! sessions.end_resize_panel_width(&mut panel);
//! assert_eq!(sessions.interaction_state(), InteractionState::Default);
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events at session boundaries and on rejected starts.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

mod error;
mod layout;
mod machine;
mod types;

pub use error::StartError;
pub use layout::LayoutHolder;
pub use machine::{Capabilities, SessionMachine};
pub use types::{
    DragStep, InteractionState, ResizeEdge, Session, SessionKind, SessionUpdate, TaskBarRef,
};
