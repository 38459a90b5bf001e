// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The session state machine: idle → active(session) → idle.

use kurbo::{Point, Vec2};

use crate::error::StartError;
use crate::layout::LayoutHolder;
use crate::types::{
    DragStep, InteractionState, ResizeEdge, Session, SessionKind, SessionUpdate, TaskBarRef,
};

/// Capability flags consulted by `start_*` requests.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Capabilities {
    /// Task-bars may be moved by dragging their body.
    pub task_bar_moveable: bool,
    /// The panel divider may be dragged.
    pub divider_moveable: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            task_bar_moveable: true,
            divider_moveable: true,
        }
    }
}

/// Owns the single live [`Session`] of a widget instance.
///
/// [`InteractionState`] is derived from whether a session is live, so it can
/// never disagree with the session slot.
#[derive(Clone, Debug, Default)]
pub struct SessionMachine {
    session: Option<Session>,
    capabilities: Capabilities,
}

impl SessionMachine {
    /// Creates an idle machine.
    #[must_use]
    pub fn new(capabilities: Capabilities) -> Self {
        Self {
            session: None,
            capabilities,
        }
    }

    /// Returns the capability flags.
    #[must_use]
    pub const fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Replace the capability flags. A live session is not affected.
    pub fn set_capabilities(&mut self, capabilities: Capabilities) {
        self.capabilities = capabilities;
    }

    /// Returns the live session, if any.
    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// [`InteractionState::Grabbing`] while a session is live.
    #[must_use]
    pub const fn interaction_state(&self) -> InteractionState {
        if self.session.is_some() {
            InteractionState::Grabbing
        } else {
            InteractionState::Default
        }
    }

    /// Returns `true` while a divider drag is live.
    #[must_use]
    pub fn is_resizing_panel_width(&self) -> bool {
        self.is_live(SessionKind::ResizePanelWidth)
    }

    /// Returns `true` while a task-bar move is live.
    #[must_use]
    pub fn is_moving_task_bar(&self) -> bool {
        self.is_live(SessionKind::MoveTaskBar)
    }

    /// Returns `true` while a task-bar edge resize is live.
    #[must_use]
    pub fn is_resizing_task_bar(&self) -> bool {
        self.is_live(SessionKind::ResizeTaskBar)
    }

    fn is_live(&self, kind: SessionKind) -> bool {
        self.session.is_some_and(|s| s.kind() == kind)
    }

    /// Start a divider drag at `pointer`.
    ///
    /// # Errors
    ///
    /// - [`StartError::SessionActive`] if any session is live.
    /// - [`StartError::DividerLocked`] if the divider is not moveable.
    pub fn start_resize_panel_width(&mut self, pointer: Point) -> Result<(), StartError> {
        self.ensure_idle()?;
        if !self.capabilities.divider_moveable {
            return Err(reject(StartError::DividerLocked));
        }
        self.begin(Session::ResizePanelWidth { start: pointer });
        Ok(())
    }

    /// Start moving `target` from `pointer`.
    ///
    /// # Errors
    ///
    /// - [`StartError::SessionActive`] if any session is live.
    /// - [`StartError::MoveDisabled`] if task-bar moves are disabled.
    /// - [`StartError::StaleTarget`] if `layout` does not know `target`.
    pub fn start_move_task_bar<L: LayoutHolder + ?Sized>(
        &mut self,
        layout: &L,
        target: TaskBarRef,
        pointer: Point,
    ) -> Result<(), StartError> {
        self.ensure_idle()?;
        if !self.capabilities.task_bar_moveable {
            return Err(reject(StartError::MoveDisabled));
        }
        if !layout.contains_task_bar(target) {
            return Err(reject(StartError::StaleTarget(target)));
        }
        self.begin(Session::MoveTaskBar {
            target,
            start: pointer,
        });
        Ok(())
    }

    /// Start resizing `target` from `edge` at `pointer`.
    ///
    /// Edge resizes are gated by the pointer being over a resize handle, which
    /// the caller has already established; the move capability does not apply.
    ///
    /// # Errors
    ///
    /// - [`StartError::SessionActive`] if any session is live.
    /// - [`StartError::StaleTarget`] if `layout` does not know `target`.
    pub fn start_resize_task_bar<L: LayoutHolder + ?Sized>(
        &mut self,
        layout: &L,
        target: TaskBarRef,
        pointer: Point,
        edge: ResizeEdge,
    ) -> Result<(), StartError> {
        self.ensure_idle()?;
        if !layout.contains_task_bar(target) {
            return Err(reject(StartError::StaleTarget(target)));
        }
        self.begin(Session::ResizeTaskBar {
            target,
            start: pointer,
            edge,
        });
        Ok(())
    }

    /// Forward a divider drag step.
    pub fn deal_resize_panel_width<L: LayoutHolder + ?Sized>(
        &mut self,
        layout: &mut L,
        pointer: Point,
        delta: Vec2,
    ) -> SessionUpdate {
        let Some(Session::ResizePanelWidth { start }) = self.session else {
            return SessionUpdate::NoSession;
        };
        layout.resize_panel_width(&step(start, pointer, delta));
        layout.request_render();
        SessionUpdate::Applied
    }

    /// Forward a task-bar move step.
    pub fn deal_task_bar_move<L: LayoutHolder + ?Sized>(
        &mut self,
        layout: &mut L,
        pointer: Point,
        delta: Vec2,
    ) -> SessionUpdate {
        let Some(Session::MoveTaskBar { target, start }) = self.session else {
            return SessionUpdate::NoSession;
        };
        if !layout.contains_task_bar(target) {
            return self.drop_stale(target);
        }
        layout.move_task_bar(target, &step(start, pointer, delta));
        layout.request_render();
        SessionUpdate::Applied
    }

    /// Forward a task-bar edge resize step.
    pub fn deal_task_bar_resize<L: LayoutHolder + ?Sized>(
        &mut self,
        layout: &mut L,
        pointer: Point,
        delta: Vec2,
    ) -> SessionUpdate {
        let Some(Session::ResizeTaskBar {
            target,
            start,
            edge,
        }) = self.session
        else {
            return SessionUpdate::NoSession;
        };
        if !layout.contains_task_bar(target) {
            return self.drop_stale(target);
        }
        layout.resize_task_bar(target, edge, &step(start, pointer, delta));
        layout.request_render();
        SessionUpdate::Applied
    }

    /// Commit and end a divider drag.
    pub fn end_resize_panel_width<L: LayoutHolder + ?Sized>(
        &mut self,
        layout: &mut L,
    ) -> SessionUpdate {
        if !self.is_resizing_panel_width() {
            return SessionUpdate::NoSession;
        }
        self.finish();
        layout.finish_panel_width();
        layout.request_render();
        SessionUpdate::Applied
    }

    /// Commit and end a task-bar move at window-space `final_x`.
    pub fn end_move_task_bar<L: LayoutHolder + ?Sized>(
        &mut self,
        layout: &mut L,
        final_x: f64,
    ) -> SessionUpdate {
        let Some(Session::MoveTaskBar { target, .. }) = self.session else {
            return SessionUpdate::NoSession;
        };
        if !layout.contains_task_bar(target) {
            return self.drop_stale(target);
        }
        self.finish();
        layout.finish_task_bar_move(target, final_x);
        layout.request_render();
        SessionUpdate::Applied
    }

    /// Commit and end a task-bar edge resize at window-space `final_x`.
    pub fn end_resize_task_bar<L: LayoutHolder + ?Sized>(
        &mut self,
        layout: &mut L,
        final_x: f64,
    ) -> SessionUpdate {
        let Some(Session::ResizeTaskBar { target, edge, .. }) = self.session else {
            return SessionUpdate::NoSession;
        };
        if !layout.contains_task_bar(target) {
            return self.drop_stale(target);
        }
        self.finish();
        layout.finish_task_bar_resize(target, edge, final_x);
        layout.request_render();
        SessionUpdate::Applied
    }

    /// Drop the live session without committing anything.
    ///
    /// Used on teardown, when the layout holder may already be gone.
    pub fn abandon(&mut self) -> Option<Session> {
        let session = self.session.take();
        #[cfg(feature = "tracing")]
        if let Some(s) = &session {
            tracing::debug!(kind = ?s.kind(), "session abandoned");
        }
        session
    }

    fn ensure_idle(&self) -> Result<(), StartError> {
        match self.session {
            Some(live) => Err(reject(StartError::SessionActive(live.kind()))),
            None => Ok(()),
        }
    }

    fn begin(&mut self, session: Session) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            kind = ?session.kind(),
            x = session.start().x,
            y = session.start().y,
            "session started"
        );
        self.session = Some(session);
    }

    fn finish(&mut self) {
        #[cfg(feature = "tracing")]
        if let Some(s) = &self.session {
            tracing::debug!(kind = ?s.kind(), "session ended");
        }
        self.session = None;
    }

    fn drop_stale(&mut self, target: TaskBarRef) -> SessionUpdate {
        #[cfg(feature = "tracing")]
        tracing::debug!(?target, "task-bar vanished mid-session; dropping session");
        #[cfg(not(feature = "tracing"))]
        let _ = target;
        self.session = None;
        SessionUpdate::Stale
    }
}

fn step(start: Point, pointer: Point, delta: Vec2) -> DragStep {
    DragStep {
        pointer,
        delta,
        total: pointer - start,
    }
}

fn reject(err: StartError) -> StartError {
    #[cfg(feature = "tracing")]
    tracing::debug!(reason = %err, "session start rejected");
    err
}
