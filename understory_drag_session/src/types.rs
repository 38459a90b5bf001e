// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types: interaction state, task-bar identities, sessions and drag steps.

use kurbo::{Point, Vec2};

/// Whether a direct-manipulation gesture is in progress.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum InteractionState {
    /// No session is live; hover affordances may be shown.
    #[default]
    Default,
    /// A session is live.
    Grabbing,
}

/// Which edge of a task-bar a resize session drags.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ResizeEdge {
    /// The start (left) edge.
    Left,
    /// The end (right) edge.
    Right,
}

/// Identity of a task-bar node owned by the scene graph.
///
/// This is a small, copyable handle: a slot index plus a generation counter.
/// The session machine never owns task-bar nodes; it only carries this handle
/// and asks the [`LayoutHolder`](crate::LayoutHolder) whether it is still
/// present.
///
/// ### Liveness
///
/// When the scene graph removes a task-bar and later reuses its slot, it must
/// bump the generation. A stale `TaskBarRef` then never aliases the new
/// task-bar, because the generation no longer matches.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TaskBarRef(u32, u32);

impl TaskBarRef {
    /// Creates a handle from a slot index and generation.
    #[must_use]
    pub const fn new(index: u32, generation: u32) -> Self {
        Self(index, generation)
    }

    /// Slot index in the scene graph's task-bar collection.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }

    /// Generation of the slot when this handle was issued.
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.1
    }
}

/// Discriminant of a [`Session`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SessionKind {
    /// Dragging the panel divider.
    ResizePanelWidth,
    /// Dragging a task-bar body.
    MoveTaskBar,
    /// Dragging a task-bar edge handle.
    ResizeTaskBar,
}

/// One in-progress direct-manipulation gesture.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Session {
    /// Resizing the fixed panel by dragging the divider.
    ResizePanelWidth {
        /// Window-space pointer position at pointer-down.
        start: Point,
    },
    /// Moving a task-bar along the timeline.
    MoveTaskBar {
        /// Task-bar being moved.
        target: TaskBarRef,
        /// Window-space pointer position at pointer-down.
        start: Point,
    },
    /// Resizing a task-bar from one edge.
    ResizeTaskBar {
        /// Task-bar being resized.
        target: TaskBarRef,
        /// Window-space pointer position at pointer-down.
        start: Point,
        /// Edge being dragged.
        edge: ResizeEdge,
    },
}

impl Session {
    /// Returns this session's kind.
    #[must_use]
    pub const fn kind(&self) -> SessionKind {
        match self {
            Self::ResizePanelWidth { .. } => SessionKind::ResizePanelWidth,
            Self::MoveTaskBar { .. } => SessionKind::MoveTaskBar,
            Self::ResizeTaskBar { .. } => SessionKind::ResizeTaskBar,
        }
    }

    /// Window-space pointer position the session started from.
    #[must_use]
    pub const fn start(&self) -> Point {
        match self {
            Self::ResizePanelWidth { start }
            | Self::MoveTaskBar { start, .. }
            | Self::ResizeTaskBar { start, .. } => *start,
        }
    }

    /// Task-bar the session refers to, if any.
    #[must_use]
    pub const fn target(&self) -> Option<TaskBarRef> {
        match self {
            Self::ResizePanelWidth { .. } => None,
            Self::MoveTaskBar { target, .. } | Self::ResizeTaskBar { target, .. } => Some(*target),
        }
    }
}

/// A pointer move forwarded to the layout holder.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragStep {
    /// Current window-space pointer position.
    pub pointer: Point,
    /// Offset from the last forwarded pointer position.
    pub delta: Vec2,
    /// Offset from the session's start position.
    pub total: Vec2,
}

/// Result of a `deal_*` or `end_*` call.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SessionUpdate {
    /// The live session matched and the layout holder was updated.
    Applied,
    /// No live session of the requested kind; nothing changed.
    NoSession,
    /// The session's task-bar is gone; the session was dropped without
    /// touching layout state.
    Stale,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interaction_state_defaults_to_default() {
        assert_eq!(InteractionState::default(), InteractionState::Default);
    }

    #[test]
    fn task_bar_ref_generations_distinguish_reused_slots() {
        let old = TaskBarRef::new(3, 1);
        let reused = TaskBarRef::new(3, 2);
        assert_ne!(old, reused);
        assert_eq!(old.index(), reused.index());
        assert_eq!(reused.generation(), 2);
    }

    #[test]
    fn session_accessors() {
        let bar = TaskBarRef::new(0, 1);
        let start = Point::new(4.0, 5.0);

        let panel = Session::ResizePanelWidth { start };
        assert_eq!(panel.kind(), SessionKind::ResizePanelWidth);
        assert_eq!(panel.target(), None);
        assert_eq!(panel.start(), start);

        let resize = Session::ResizeTaskBar {
            target: bar,
            start,
            edge: ResizeEdge::Left,
        };
        assert_eq!(resize.kind(), SessionKind::ResizeTaskBar);
        assert_eq!(resize.target(), Some(bar));
    }
}
