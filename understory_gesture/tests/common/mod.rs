// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording fakes shared by the router tests.

#![allow(dead_code, reason = "Not every test binary uses every helper")]

use kurbo::Point;
use understory_drag_session::{DragStep, LayoutHolder, ResizeEdge, TaskBarRef};
use understory_gesture::listeners::{EventSource, ListenerId};
use understory_gesture::{
    Axis, EventKind, EventTarget, GestureConfig, GestureRouter, HitNode, MouseEvent, NativeEvent,
    ResizeEvent, Response, SceneEvent, SceneEventKind, WheelEvent, WidgetHost,
};

/// Event source that hands out sequential ids and tracks live listeners.
#[derive(Debug, Default)]
pub struct Dom {
    next: u64,
    pub live: Vec<(ListenerId, EventTarget, EventKind)>,
    pub removals: Vec<ListenerId>,
}

impl Dom {
    pub fn has(&self, target: EventTarget, kind: EventKind) -> bool {
        self.live.iter().any(|(_, t, k)| *t == target && *k == kind)
    }
}

impl EventSource for Dom {
    fn add_listener(&mut self, target: EventTarget, kind: EventKind) -> ListenerId {
        self.next += 1;
        let id = ListenerId(self.next);
        self.live.push((id, target, kind));
        id
    }

    fn remove_listener(&mut self, id: ListenerId) {
        self.live.retain(|(l, _, _)| *l != id);
        self.removals.push(id);
    }
}

/// Every mutation the router asked of the layout holder.
#[derive(Clone, Debug, PartialEq)]
pub enum LayoutCall {
    Panel(DragStep),
    PanelDone,
    Move(TaskBarRef, DragStep),
    MoveDone(TaskBarRef, f64),
    Resize(TaskBarRef, ResizeEdge, DragStep),
    ResizeDone(TaskBarRef, ResizeEdge, f64),
}

/// Layout holder that records calls instead of moving anything.
#[derive(Debug, Default)]
pub struct Chart {
    pub bars: Vec<TaskBarRef>,
    pub calls: Vec<LayoutCall>,
    pub renders: usize,
}

impl Chart {
    pub fn with_bars(bars: &[TaskBarRef]) -> Self {
        Self {
            bars: bars.to_vec(),
            ..Self::default()
        }
    }
}

impl LayoutHolder for Chart {
    fn contains_task_bar(&self, bar: TaskBarRef) -> bool {
        self.bars.contains(&bar)
    }
    fn resize_panel_width(&mut self, step: &DragStep) {
        self.calls.push(LayoutCall::Panel(*step));
    }
    fn finish_panel_width(&mut self) {
        self.calls.push(LayoutCall::PanelDone);
    }
    fn move_task_bar(&mut self, bar: TaskBarRef, step: &DragStep) {
        self.calls.push(LayoutCall::Move(bar, *step));
    }
    fn finish_task_bar_move(&mut self, bar: TaskBarRef, final_x: f64) {
        self.calls.push(LayoutCall::MoveDone(bar, final_x));
    }
    fn resize_task_bar(&mut self, bar: TaskBarRef, edge: ResizeEdge, step: &DragStep) {
        self.calls.push(LayoutCall::Resize(bar, edge, *step));
    }
    fn finish_task_bar_resize(&mut self, bar: TaskBarRef, edge: ResizeEdge, final_x: f64) {
        self.calls.push(LayoutCall::ResizeDone(bar, edge, final_x));
    }
    fn request_render(&mut self) {
        self.renders += 1;
    }
}

/// Everything the router asked of the widget host.
#[derive(Clone, Debug, PartialEq)]
pub enum HostCall {
    Scroll(WheelEvent),
    Scrollbar(Axis, bool),
    Hover(TaskBarRef),
    Unhover,
    Divider(bool),
    PixelRatio(f64),
    Relayout,
}

/// Widget host that records calls and keeps the visible hover state.
#[derive(Debug)]
pub struct Host {
    pub calls: Vec<HostCall>,
    pub detected_ratio: f64,
    pub hover_visible: bool,
}

impl Default for Host {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            detected_ratio: 2.0,
            hover_visible: false,
        }
    }
}

impl WidgetHost for Host {
    fn scroll(&mut self, event: &WheelEvent) {
        self.calls.push(HostCall::Scroll(*event));
    }
    fn set_scrollbar_visible(&mut self, axis: Axis, visible: bool) {
        self.calls.push(HostCall::Scrollbar(axis, visible));
    }
    fn show_task_bar_hover(&mut self, bar: TaskBarRef, _pointer: Point) {
        self.hover_visible = true;
        self.calls.push(HostCall::Hover(bar));
    }
    fn hide_task_bar_hover(&mut self) {
        self.hover_visible = false;
        self.calls.push(HostCall::Unhover);
    }
    fn set_divider_highlight(&mut self, highlighted: bool) {
        self.calls.push(HostCall::Divider(highlighted));
    }
    fn detect_pixel_ratio(&self) -> f64 {
        self.detected_ratio
    }
    fn set_pixel_ratio(&mut self, ratio: f64) {
        self.calls.push(HostCall::PixelRatio(ratio));
    }
    fn relayout(&mut self) {
        self.calls.push(HostCall::Relayout);
    }
}

pub const BAR: TaskBarRef = TaskBarRef::new(0, 1);
pub const OTHER_BAR: TaskBarRef = TaskBarRef::new(1, 1);

/// Router, event source, layout holder and host wired together.
#[derive(Debug)]
pub struct Harness {
    pub router: GestureRouter,
    pub dom: Dom,
    pub chart: Chart,
    pub host: Host,
}

impl Harness {
    pub fn new(config: GestureConfig) -> Self {
        let mut dom = Dom::default();
        let mut router = GestureRouter::new(config);
        router.bind_event(&mut dom);
        Self {
            router,
            dom,
            chart: Chart::with_bars(&[BAR, OTHER_BAR]),
            host: Host::default(),
        }
    }

    pub fn scene(&mut self, kind: SceneEventKind, at: (f64, f64), path: &[HitNode]) -> Response {
        let event = SceneEvent::new(kind, Point::new(at.0, at.1), path);
        self.router
            .handle_scene(&event, &mut self.chart, &mut self.host)
    }

    pub fn native(&mut self, target: EventTarget, event: NativeEvent) -> Response {
        self.router
            .handle_native(target, &event, &mut self.chart, &mut self.host)
    }

    pub fn press(&mut self, at: (f64, f64), path: &[HitNode]) -> Response {
        self.scene(SceneEventKind::PointerDown, at, path)
    }

    pub fn hover(&mut self, at: (f64, f64), path: &[HitNode]) -> Response {
        self.scene(SceneEventKind::PointerMove, at, path)
    }

    pub fn global_down(&mut self, at: (f64, f64)) -> Response {
        self.native(
            EventTarget::GlobalPointer,
            NativeEvent::MouseDown(MouseEvent::at(Point::new(at.0, at.1))),
        )
    }

    pub fn global_move(&mut self, at: (f64, f64)) -> Response {
        self.native(
            EventTarget::GlobalPointer,
            NativeEvent::MouseMove(MouseEvent::at(Point::new(at.0, at.1))),
        )
    }

    pub fn global_up(&mut self, at: (f64, f64)) -> Response {
        self.native(
            EventTarget::GlobalPointer,
            NativeEvent::MouseUp(MouseEvent::at(Point::new(at.0, at.1))),
        )
    }

    pub fn divider_down(&mut self, at: (f64, f64)) -> Response {
        self.native(
            EventTarget::Divider,
            NativeEvent::MouseDown(MouseEvent::at(Point::new(at.0, at.1))),
        )
    }

    pub fn resize(&mut self, width: f64, height: f64, window_size_unchanged: bool) -> Response {
        self.native(
            EventTarget::Container,
            NativeEvent::Resize(ResizeEvent {
                width,
                height,
                window_size_unchanged,
            }),
        )
    }

    pub fn release(&mut self) -> usize {
        self.router.release(&mut self.dom, &mut self.host)
    }
}
