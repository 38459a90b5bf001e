// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture router: classify incoming events and drive the session machine.
//!
//! ## Pointer-down classification
//!
//! Scene-graph `pointerdown` events are classified in priority order, and at
//! most one rule fires:
//!
//! 1. Non-primary buttons are ignored.
//! 2. Paths without a task-bar are ignored.
//! 3. A press on the left resize handle starts a left-edge resize.
//! 4. A press on the right resize handle starts a right-edge resize.
//! 5. Otherwise, if task-bar moves are enabled, a move starts.
//!
//! ## Global pointer surface
//!
//! Moves and releases are observed on the process-wide pointer surface so that
//! a drag keeps tracking after the pointer leaves the widget, and a release
//! anywhere ends it. Moves are forwarded only when the Manhattan distance from
//! the last accepted point reaches one device unit.

use kurbo::Point;
use smallvec::SmallVec;
use understory_drag_session::{
    InteractionState, LayoutHolder, ResizeEdge, SessionKind, SessionMachine, SessionUpdate,
    StartError, TaskBarRef,
};
use understory_event_state::drag::DragTracker;

use crate::config::GestureConfig;
use crate::event::{
    EventKind, EventTarget, NativeEvent, NodeRole, PointerButton, ResizeEvent, SceneEvent,
    SceneEventKind,
};
use crate::host::WidgetHost;
use crate::hover::HoverDetector;
use crate::listeners::{EventSource, ListenerRegistry};

/// What the router did with an event.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Response {
    /// Nothing happened.
    Ignored,
    /// A session of this kind started.
    Started(SessionKind),
    /// A start request was rejected; the live session (if any) is untouched.
    Rejected(StartError),
    /// A step was forwarded to the live session of this kind.
    Updated(SessionKind),
    /// The live session of this kind was committed and ended.
    Ended(SessionKind),
    /// The live session of this kind referenced a vanished task-bar and was dropped.
    Dropped(SessionKind),
    /// A hover affordance was re-evaluated.
    Affordance,
    /// A wheel event was passed to the scroll handler.
    Scrolled,
    /// A container resize was applied.
    Resized {
        /// A full re-layout was requested.
        relayout: bool,
    },
    /// The pointer position was recorded as the last drag point.
    Tracked,
}

/// Routes scene-graph and native events for one widget instance.
#[derive(Clone, Debug)]
pub struct GestureRouter {
    config: GestureConfig,
    sessions: SessionMachine,
    last_drag: DragTracker,
    hover: HoverDetector,
    listeners: ListenerRegistry,
}

impl GestureRouter {
    /// Creates a router. Nothing is delivered until [`bind_event`](Self::bind_event).
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            sessions: SessionMachine::new(config.capabilities()),
            config,
            last_drag: DragTracker::new(),
            hover: HoverDetector::new(),
            listeners: ListenerRegistry::new(),
        }
    }

    /// The configuration this router was built with.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// The session machine.
    #[must_use]
    pub fn sessions(&self) -> &SessionMachine {
        &self.sessions
    }

    /// Shorthand for `self.sessions().interaction_state()`.
    #[must_use]
    pub fn interaction_state(&self) -> InteractionState {
        self.sessions.interaction_state()
    }

    /// Last accepted drag pointer position, if any.
    #[must_use]
    pub fn last_drag_pointer(&self) -> Option<Point> {
        self.last_drag.last()
    }

    /// The hover detector.
    #[must_use]
    pub fn hover(&self) -> &HoverDetector {
        &self.hover
    }

    /// The listener registry.
    #[must_use]
    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    /// Register every listener this router needs. Idempotent.
    ///
    /// Returns the number of listeners added.
    pub fn bind_event<S: EventSource + ?Sized>(&mut self, source: &mut S) -> usize {
        let added = self.listeners.bind(source, bindings(&self.config));
        #[cfg(feature = "tracing")]
        if added > 0 {
            tracing::debug!(listeners = added, "gesture listeners bound");
        }
        added
    }

    /// Remove every listener, drop any live session without committing it and
    /// hide every affordance still shown. Idempotent; a released router ignores
    /// all further events.
    ///
    /// Returns the number of listeners removed.
    pub fn release<S, H>(&mut self, source: &mut S, host: &mut H) -> usize
    where
        S: EventSource + ?Sized,
        H: WidgetHost + ?Sized,
    {
        let removed = self.listeners.release(source);
        self.sessions.abandon();
        self.last_drag.end();
        self.hover.clear(host);
        #[cfg(feature = "tracing")]
        if removed > 0 {
            tracing::debug!(listeners = removed, "gesture listeners released");
        }
        removed
    }

    /// Handle an event synthesized by the scene graph over the interactive region.
    pub fn handle_scene<L, H>(
        &mut self,
        event: &SceneEvent<'_>,
        layout: &mut L,
        host: &mut H,
    ) -> Response
    where
        L: LayoutHolder + ?Sized,
        H: WidgetHost + ?Sized,
    {
        if !self
            .listeners
            .is_listening(EventTarget::InteractiveRegion, event.kind.into())
        {
            return Response::Ignored;
        }
        let state = self.sessions.interaction_state();
        let touched = match event.kind {
            SceneEventKind::PointerDown => return self.on_pointer_down(event, layout, host),
            SceneEventKind::PointerMove => self.hover.on_pointer_move(state, event, host),
            SceneEventKind::PointerEnter => {
                self.hover
                    .on_region_enter(state, &self.config.scroll_style, host)
            }
            SceneEventKind::PointerLeave => {
                self.hover
                    .on_region_leave(state, &self.config.scroll_style, host)
            }
        };
        if touched {
            Response::Affordance
        } else {
            Response::Ignored
        }
    }

    /// Handle an event delivered by a native listener on `target`.
    pub fn handle_native<L, H>(
        &mut self,
        target: EventTarget,
        event: &NativeEvent,
        layout: &mut L,
        host: &mut H,
    ) -> Response
    where
        L: LayoutHolder + ?Sized,
        H: WidgetHost + ?Sized,
    {
        if !self.listeners.is_listening(target, event.kind()) {
            return Response::Ignored;
        }
        let state = self.sessions.interaction_state();
        match (target, event) {
            (EventTarget::Root, NativeEvent::Wheel(wheel)) => {
                host.scroll(wheel);
                Response::Scrolled
            }
            (EventTarget::Container, NativeEvent::Resize(resize)) => {
                self.on_container_resize(resize, host)
            }
            (EventTarget::GlobalPointer, NativeEvent::MouseDown(mouse)) => {
                self.last_drag.start(mouse.position);
                Response::Tracked
            }
            (EventTarget::GlobalPointer, NativeEvent::MouseMove(mouse)) => {
                self.on_global_move(mouse.position, layout, host)
            }
            (EventTarget::GlobalPointer, NativeEvent::MouseUp(mouse)) => {
                self.on_global_up(mouse.position, layout, host)
            }
            (EventTarget::Divider, NativeEvent::MouseDown(mouse)) => {
                if mouse.button != PointerButton::Primary {
                    return Response::Ignored;
                }
                let started = self.sessions.start_resize_panel_width(mouse.position);
                self.started(started, SessionKind::ResizePanelWidth, mouse.position, host)
            }
            (EventTarget::Divider, NativeEvent::MouseOver(_)) => {
                affordance(self.hover.on_divider_over(state, host))
            }
            (EventTarget::Divider, NativeEvent::MouseOut(_)) => {
                affordance(self.hover.on_divider_out(state, host))
            }
            _ => Response::Ignored,
        }
    }

    fn on_pointer_down<L, H>(
        &mut self,
        event: &SceneEvent<'_>,
        layout: &L,
        host: &mut H,
    ) -> Response
    where
        L: LayoutHolder + ?Sized,
        H: WidgetHost + ?Sized,
    {
        if event.button != PointerButton::Primary {
            return Response::Ignored;
        }
        let Some(bar) = event.path.task_bar() else {
            return Response::Ignored;
        };
        let role = event.path.target().map(|n| n.role);
        match role.and_then(NodeRole::resize_edge) {
            Some(edge) => self.start_task_bar_resize(layout, bar, event.position, edge, host),
            None if self.config.task_bar_moveable => {
                let started = self
                    .sessions
                    .start_move_task_bar(layout, bar, event.position);
                self.started(started, SessionKind::MoveTaskBar, event.position, host)
            }
            None => Response::Ignored,
        }
    }

    fn start_task_bar_resize<L, H>(
        &mut self,
        layout: &L,
        bar: TaskBarRef,
        pointer: Point,
        edge: ResizeEdge,
        host: &mut H,
    ) -> Response
    where
        L: LayoutHolder + ?Sized,
        H: WidgetHost + ?Sized,
    {
        let started = self
            .sessions
            .start_resize_task_bar(layout, bar, pointer, edge);
        self.started(started, SessionKind::ResizeTaskBar, pointer, host)
    }

    fn started<H: WidgetHost + ?Sized>(
        &mut self,
        result: Result<(), StartError>,
        kind: SessionKind,
        pointer: Point,
        host: &mut H,
    ) -> Response {
        match result {
            Ok(()) => {
                self.hover.suppress(host);
                self.last_drag.start(pointer);
                Response::Started(kind)
            }
            Err(err) => Response::Rejected(err),
        }
    }

    fn on_global_move<L, H>(&mut self, pointer: Point, layout: &mut L, host: &mut H) -> Response
    where
        L: LayoutHolder + ?Sized,
        H: WidgetHost + ?Sized,
    {
        if self.sessions.interaction_state() != InteractionState::Grabbing {
            return Response::Ignored;
        }
        let Some(delta) = self.last_drag.advance(pointer) else {
            return Response::Ignored;
        };
        let (kind, update) = if self.sessions.is_resizing_panel_width() {
            (
                SessionKind::ResizePanelWidth,
                self.sessions.deal_resize_panel_width(layout, pointer, delta),
            )
        } else if self.sessions.is_moving_task_bar() {
            (
                SessionKind::MoveTaskBar,
                self.sessions.deal_task_bar_move(layout, pointer, delta),
            )
        } else if self.sessions.is_resizing_task_bar() {
            (
                SessionKind::ResizeTaskBar,
                self.sessions.deal_task_bar_resize(layout, pointer, delta),
            )
        } else {
            return Response::Ignored;
        };
        self.settle(kind, update, Response::Updated(kind), host)
    }

    fn on_global_up<L, H>(&mut self, pointer: Point, layout: &mut L, host: &mut H) -> Response
    where
        L: LayoutHolder + ?Sized,
        H: WidgetHost + ?Sized,
    {
        if self.sessions.interaction_state() != InteractionState::Grabbing {
            return Response::Ignored;
        }
        let (kind, update) = if self.sessions.is_resizing_panel_width() {
            (
                SessionKind::ResizePanelWidth,
                self.sessions.end_resize_panel_width(layout),
            )
        } else if self.sessions.is_moving_task_bar() {
            (
                SessionKind::MoveTaskBar,
                self.sessions.end_move_task_bar(layout, pointer.x),
            )
        } else if self.sessions.is_resizing_task_bar() {
            (
                SessionKind::ResizeTaskBar,
                self.sessions.end_resize_task_bar(layout, pointer.x),
            )
        } else {
            return Response::Ignored;
        };
        self.last_drag.end();
        self.hover.restore(&self.config.scroll_style, host);
        self.settle(kind, update, Response::Ended(kind), host)
    }

    fn settle<H: WidgetHost + ?Sized>(
        &mut self,
        kind: SessionKind,
        update: SessionUpdate,
        applied: Response,
        host: &mut H,
    ) -> Response {
        match update {
            SessionUpdate::Applied => applied,
            SessionUpdate::Stale => {
                self.last_drag.end();
                self.hover.restore(&self.config.scroll_style, host);
                Response::Dropped(kind)
            }
            SessionUpdate::NoSession => Response::Ignored,
        }
    }

    fn on_container_resize<H: WidgetHost + ?Sized>(
        &mut self,
        resize: &ResizeEvent,
        host: &mut H,
    ) -> Response {
        if resize.is_spurious() {
            #[cfg(feature = "tracing")]
            tracing::trace!("ignoring zero-size container resize");
            return Response::Ignored;
        }
        if self.config.pixel_ratio.is_none() {
            let ratio = host.detect_pixel_ratio();
            host.set_pixel_ratio(ratio);
        }
        let relayout = !resize.window_size_unchanged;
        if relayout {
            host.relayout();
        }
        Response::Resized { relayout }
    }
}

fn affordance(touched: bool) -> Response {
    if touched {
        Response::Affordance
    } else {
        Response::Ignored
    }
}

/// Every `(target, kind)` pair the router listens to under `config`.
fn bindings(config: &GestureConfig) -> SmallVec<[(EventTarget, EventKind); 16]> {
    let mut pairs: SmallVec<[(EventTarget, EventKind); 16]> = SmallVec::new();
    pairs.extend(
        [
            EventKind::PointerDown,
            EventKind::PointerMove,
            EventKind::PointerEnter,
            EventKind::PointerLeave,
        ]
        .map(|kind| (EventTarget::InteractiveRegion, kind)),
    );
    pairs.push((EventTarget::Root, EventKind::Wheel));
    pairs.push((EventTarget::Container, EventKind::Resize));
    if config.divider_moveable {
        pairs.extend(
            [EventKind::MouseDown, EventKind::MouseOver, EventKind::MouseOut]
                .map(|kind| (EventTarget::Divider, kind)),
        );
    }
    pairs.extend(
        [EventKind::MouseDown, EventKind::MouseMove, EventKind::MouseUp]
            .map(|kind| (EventTarget::GlobalPointer, kind)),
    );
    pairs
}
