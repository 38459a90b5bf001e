// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event records, one shape per source.
//!
//! Scene-graph pointer events carry a [`HitPath`] resolved by the rendering
//! engine. Native events (wheel, container resize, mouse on the global pointer
//! surface or the divider) carry window-space coordinates only.

use kurbo::{Point, Vec2};
use understory_drag_session::{ResizeEdge, TaskBarRef};

/// Something a listener can be attached to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventTarget {
    /// The scene-graph group holding the timeline's interactive content.
    InteractiveRegion,
    /// The widget's root element.
    Root,
    /// The widget's container element.
    Container,
    /// The process-wide pointer surface. Outlives the widget.
    GlobalPointer,
    /// The draggable divider between the fixed panel and the timeline.
    Divider,
}

impl EventTarget {
    /// Returns `true` for surfaces shared beyond this widget's lifetime.
    #[must_use]
    pub const fn is_global(self) -> bool {
        matches!(self, Self::GlobalPointer)
    }
}

/// Event type a listener subscribes to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Scene-graph pointer press.
    PointerDown,
    /// Scene-graph pointer move.
    PointerMove,
    /// Scene-graph pointer entering the target.
    PointerEnter,
    /// Scene-graph pointer leaving the target.
    PointerLeave,
    /// Native wheel.
    Wheel,
    /// Native container resize.
    Resize,
    /// Native mouse press.
    MouseDown,
    /// Native mouse move.
    MouseMove,
    /// Native mouse release.
    MouseUp,
    /// Native mouse entering an element.
    MouseOver,
    /// Native mouse leaving an element.
    MouseOut,
}

/// Mouse button that triggered an event.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Usually the left button.
    #[default]
    Primary,
    /// Usually the wheel button.
    Auxiliary,
    /// Usually the right button.
    Secondary,
    /// Any other button index.
    Other(u16),
}

impl PointerButton {
    /// Maps a DOM-style button index (`0` primary, `1` auxiliary, `2` secondary).
    #[must_use]
    pub const fn from_index(index: u16) -> Self {
        match index {
            0 => Self::Primary,
            1 => Self::Auxiliary,
            2 => Self::Secondary,
            n => Self::Other(n),
        }
    }
}

/// Role of a named scene-graph node on a hit-path.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeRole {
    /// A task-bar group.
    TaskBar,
    /// The left resize-handle icon on a hovered task-bar.
    ResizeHandleLeft,
    /// The right resize-handle icon on a hovered task-bar.
    ResizeHandleRight,
    /// Anything else.
    Other,
}

impl NodeRole {
    /// Scene-graph name of task-bar groups.
    pub const TASK_BAR_NAME: &'static str = "task-bar";
    /// Scene-graph name of the left resize-handle icon.
    pub const LEFT_HANDLE_NAME: &'static str = "task-bar-hover-shadow-left-icon";
    /// Scene-graph name of the right resize-handle icon.
    pub const RIGHT_HANDLE_NAME: &'static str = "task-bar-hover-shadow-right-icon";

    /// Classify a scene-graph node name.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            Self::TASK_BAR_NAME => Self::TaskBar,
            Self::LEFT_HANDLE_NAME => Self::ResizeHandleLeft,
            Self::RIGHT_HANDLE_NAME => Self::ResizeHandleRight,
            _ => Self::Other,
        }
    }

    /// Edge dragged when pressing this node, for resize handles.
    #[must_use]
    pub const fn resize_edge(self) -> Option<ResizeEdge> {
        match self {
            Self::ResizeHandleLeft => Some(ResizeEdge::Left),
            Self::ResizeHandleRight => Some(ResizeEdge::Right),
            Self::TaskBar | Self::Other => None,
        }
    }
}

/// One node on a hit-path.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct HitNode {
    /// What the node is.
    pub role: NodeRole,
    /// Task-bar identity, set on [`NodeRole::TaskBar`] nodes.
    pub task_bar: Option<TaskBarRef>,
}

impl HitNode {
    /// A task-bar group node.
    #[must_use]
    pub const fn task_bar(bar: TaskBarRef) -> Self {
        Self {
            role: NodeRole::TaskBar,
            task_bar: Some(bar),
        }
    }

    /// A resize-handle icon for `edge`.
    #[must_use]
    pub const fn handle(edge: ResizeEdge) -> Self {
        let role = match edge {
            ResizeEdge::Left => NodeRole::ResizeHandleLeft,
            ResizeEdge::Right => NodeRole::ResizeHandleRight,
        };
        Self {
            role,
            task_bar: None,
        }
    }

    /// A node the router does not care about.
    #[must_use]
    pub const fn other() -> Self {
        Self {
            role: NodeRole::Other,
            task_bar: None,
        }
    }

    /// Build a node from its scene-graph name.
    ///
    /// `task_bar` is only kept when the name classifies as a task-bar.
    #[must_use]
    pub fn named(name: &str, task_bar: Option<TaskBarRef>) -> Self {
        let role = NodeRole::from_name(name);
        Self {
            role,
            task_bar: if role == NodeRole::TaskBar {
                task_bar
            } else {
                None
            },
        }
    }
}

/// Nodes under the pointer, deepest first.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct HitPath<'a>(&'a [HitNode]);

impl<'a> HitPath<'a> {
    /// Wrap a deepest-first node slice.
    #[must_use]
    pub const fn new(nodes: &'a [HitNode]) -> Self {
        Self(nodes)
    }

    /// The deepest node, i.e. the event target.
    #[must_use]
    pub fn target(&self) -> Option<&'a HitNode> {
        self.0.first()
    }

    /// The nearest task-bar on the path, if any.
    #[must_use]
    pub fn task_bar(&self) -> Option<TaskBarRef> {
        self.0
            .iter()
            .filter(|n| n.role == NodeRole::TaskBar)
            .find_map(|n| n.task_bar)
    }

    /// Returns `true` if nothing was hit.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The raw nodes, deepest first.
    #[must_use]
    pub const fn nodes(&self) -> &'a [HitNode] {
        self.0
    }
}

/// Kind of a scene-graph pointer event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SceneEventKind {
    /// Pointer pressed.
    PointerDown,
    /// Pointer moved.
    PointerMove,
    /// Pointer entered the interactive region.
    PointerEnter,
    /// Pointer left the interactive region.
    PointerLeave,
}

impl From<SceneEventKind> for EventKind {
    fn from(kind: SceneEventKind) -> Self {
        match kind {
            SceneEventKind::PointerDown => Self::PointerDown,
            SceneEventKind::PointerMove => Self::PointerMove,
            SceneEventKind::PointerEnter => Self::PointerEnter,
            SceneEventKind::PointerLeave => Self::PointerLeave,
        }
    }
}

/// A pointer event synthesized by the scene graph.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SceneEvent<'a> {
    /// Event kind.
    pub kind: SceneEventKind,
    /// Button that triggered the event.
    pub button: PointerButton,
    /// Window-space pointer position.
    pub position: Point,
    /// Nodes under the pointer, deepest first.
    pub path: HitPath<'a>,
}

impl<'a> SceneEvent<'a> {
    /// A primary-button event of `kind` at `position` over `nodes`.
    #[must_use]
    pub const fn new(kind: SceneEventKind, position: Point, nodes: &'a [HitNode]) -> Self {
        Self {
            kind,
            button: PointerButton::Primary,
            position,
            path: HitPath::new(nodes),
        }
    }

    /// Replace the button.
    #[must_use]
    pub const fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }
}

/// Native mouse event payload.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MouseEvent {
    /// Window-space pointer position.
    pub position: Point,
    /// Button that triggered the event.
    pub button: PointerButton,
}

impl MouseEvent {
    /// A primary-button mouse event at `position`.
    #[must_use]
    pub const fn at(position: Point) -> Self {
        Self {
            position,
            button: PointerButton::Primary,
        }
    }
}

/// Native wheel event payload.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WheelEvent {
    /// Window-space pointer position.
    pub position: Point,
    /// Scroll amount.
    pub delta: Vec2,
}

/// Native container resize payload.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ResizeEvent {
    /// New container width.
    pub width: f64,
    /// New container height.
    pub height: f64,
    /// Set when the window itself kept its size.
    pub window_size_unchanged: bool,
}

impl ResizeEvent {
    /// A zero-by-zero report, as produced when the container is hidden.
    #[must_use]
    pub fn is_spurious(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}

/// An event delivered through a native listener.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum NativeEvent {
    /// Wheel on the root element.
    Wheel(WheelEvent),
    /// Container resize.
    Resize(ResizeEvent),
    /// Mouse press.
    MouseDown(MouseEvent),
    /// Mouse move.
    MouseMove(MouseEvent),
    /// Mouse release.
    MouseUp(MouseEvent),
    /// Mouse entered an element.
    MouseOver(MouseEvent),
    /// Mouse left an element.
    MouseOut(MouseEvent),
}

impl NativeEvent {
    /// Listener kind this event is delivered to.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::Wheel(_) => EventKind::Wheel,
            Self::Resize(_) => EventKind::Resize,
            Self::MouseDown(_) => EventKind::MouseDown,
            Self::MouseMove(_) => EventKind::MouseMove,
            Self::MouseUp(_) => EventKind::MouseUp,
            Self::MouseOver(_) => EventKind::MouseOver,
            Self::MouseOut(_) => EventKind::MouseOut,
        }
    }
}
