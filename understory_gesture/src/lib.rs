// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Gesture: pointer gesture routing for timeline widgets.
//!
//! ## Overview
//!
//! A timeline (Gantt-style) widget receives pointer input from two places: the
//! scene graph, which hit-tests and synthesizes pointer events over its retained
//! nodes, and native listeners on the widget's elements and on the process-wide
//! pointer surface. [`GestureRouter`] reconciles both into a small number of
//! mutually exclusive drag sessions (see `understory_drag_session`) and keeps
//! hover affordances consistent with them.
//!
//! The router does not hit-test, render, or store layout. It consumes:
//!
//! - [`SceneEvent`]s with a deepest-first [`HitPath`] of classified [`HitNode`]s;
//! - [`NativeEvent`]s tagged with the [`EventTarget`] they were delivered to;
//! - a [`LayoutHolder`](understory_drag_session::LayoutHolder) that owns task-bar
//!   geometry and panel width;
//! - a [`WidgetHost`] for scrolling, scrollbars, hover visuals, pixel ratio and
//!   re-layout.
//!
//! ## Listener lifecycle
//!
//! [`GestureRouter::bind_event`] registers every native listener through an
//! [`EventSource`](listeners::EventSource); [`GestureRouter::release`] removes
//! them all exactly once and hides any affordance still shown. Both are
//! idempotent. Events delivered to a target the
//! router is not listening on (never bound, or released) are ignored, so a
//! released router never mutates state.
//!
//! ## Invariants
//!
//! - At most one drag session is live.
//! - [`InteractionState::Grabbing`](understory_drag_session::InteractionState::Grabbing)
//!   holds exactly while a session is live.
//! - No hover affordance is shown while grabbing.
//!
//! ## Example
//!
//! ```
//! use kurbo::Point;
//! use understory_drag_session::{DragStep, LayoutHolder, ResizeEdge, SessionKind, TaskBarRef};
//! use understory_gesture::listeners::{EventSource, ListenerId};
//! use understory_gesture::{
//!     Axis, EventKind, EventTarget, GestureConfig, GestureRouter, HitNode, MouseEvent,
//!     NativeEvent, Response, SceneEvent, SceneEventKind, WheelEvent, WidgetHost,
//! };
//!
//! # #[derive(Default)] struct Dom { next: u64 }
//! # impl EventSource for Dom {
//! #     fn add_listener(&mut self, _: EventTarget, _: EventKind) -> ListenerId { self.next += 1; ListenerId(self.next) }
//! #     fn remove_listener(&mut self, _: ListenerId) {}
//! # }
//! # #[derive(Default)] struct Chart { x: f64 }
//! # impl LayoutHolder for Chart {
//! #     fn contains_task_bar(&self, _: TaskBarRef) -> bool { true }
//! #     fn resize_panel_width(&mut self, _: &DragStep) {}
//! #     fn finish_panel_width(&mut self) {}
//! #     fn move_task_bar(&mut self, _: TaskBarRef, step: &DragStep) { self.x += step.delta.x; }
//! #     fn finish_task_bar_move(&mut self, _: TaskBarRef, _: f64) {}
//! #     fn resize_task_bar(&mut self, _: TaskBarRef, _: ResizeEdge, _: &DragStep) {}
//! #     fn finish_task_bar_resize(&mut self, _: TaskBarRef, _: ResizeEdge, _: f64) {}
//! # }
//! # struct Host;
//! # impl WidgetHost for Host {
//! #     fn scroll(&mut self, _: &WheelEvent) {}
//! #     fn set_scrollbar_visible(&mut self, _: Axis, _: bool) {}
//! #     fn show_task_bar_hover(&mut self, _: TaskBarRef, _: Point) {}
//! #     fn hide_task_bar_hover(&mut self) {}
//! #     fn set_divider_highlight(&mut self, _: bool) {}
//! #     fn detect_pixel_ratio(&self) -> f64 { 1.0 }
//! #     fn set_pixel_ratio(&mut self, _: f64) {}
//! #     fn relayout(&mut self) {}
//! # }
//! let (mut dom, mut chart, mut host) = (Dom::default(), Chart::default(), Host);
//! let mut router = GestureRouter::new(GestureConfig::default());
//! router.bind_event(&mut dom);
//!
//! // Press on a task-bar body starts a move.
//! let bar = TaskBarRef::new(0, 1);
//! let path = [HitNode::other(), HitNode::task_bar(bar)];
//! let down = SceneEvent::new(SceneEventKind::PointerDown, Point::new(10.0, 10.0), &path);
//! assert_eq!(
//!     router.handle_scene(&down, &mut chart, &mut host),
//!     Response::Started(SessionKind::MoveTaskBar)
//! );
//!
//! // Moves and the release arrive on the global pointer surface.
//! let moved = NativeEvent::MouseMove(MouseEvent::at(Point::new(25.0, 10.0)));
//! router.handle_native(EventTarget::GlobalPointer, &moved, &mut chart, &mut host);
//! assert_eq!(chart.x, 15.0);
//!
//! let up = NativeEvent::MouseUp(MouseEvent::at(Point::new(25.0, 10.0)));
//! assert_eq!(
//!     router.handle_native(EventTarget::GlobalPointer, &up, &mut chart, &mut host),
//!     Response::Ended(SessionKind::MoveTaskBar)
//! );
//! ```
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for [`GestureConfig`] and friends.
//! - `tracing`: emit `tracing` events for listener lifecycle, ignored resizes and
//!   session boundaries.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

mod config;
mod event;
mod host;
pub mod hover;
pub mod listeners;
mod router;

pub use config::{Axis, GestureConfig, ScrollStyle, ScrollVisibility};
pub use event::{
    EventKind, EventTarget, HitNode, HitPath, MouseEvent, NativeEvent, NodeRole, PointerButton,
    ResizeEvent, SceneEvent, SceneEventKind, WheelEvent,
};
pub use host::WidgetHost;
pub use router::{GestureRouter, Response};
