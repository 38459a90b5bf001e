// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::types::{DragStep, ResizeEdge, TaskBarRef};

/// The layout/state holder a [`SessionMachine`](crate::SessionMachine) drives.
///
/// The holder owns task-bar positions, column widths and scroll offsets. The
/// session machine never writes scene-graph geometry itself: every change goes
/// through these accessors.
///
/// Collision and bounds checks are the holder's responsibility. The session
/// machine forwards steps as-is.
pub trait LayoutHolder {
    /// Returns `true` if `bar` still refers to a live task-bar.
    fn contains_task_bar(&self, bar: TaskBarRef) -> bool;

    /// Apply a divider drag step to the panel width.
    fn resize_panel_width(&mut self, step: &DragStep);

    /// Commit the panel width at the end of a divider drag.
    fn finish_panel_width(&mut self);

    /// Apply a move step to `bar`.
    fn move_task_bar(&mut self, bar: TaskBarRef, step: &DragStep);

    /// Commit a task-bar move; `final_x` is the window-space x of pointer-up.
    fn finish_task_bar_move(&mut self, bar: TaskBarRef, final_x: f64);

    /// Apply an edge resize step to `bar`.
    fn resize_task_bar(&mut self, bar: TaskBarRef, edge: ResizeEdge, step: &DragStep);

    /// Commit a task-bar resize; `final_x` is the window-space x of pointer-up.
    fn finish_task_bar_resize(&mut self, bar: TaskBarRef, edge: ResizeEdge, final_x: f64);

    /// Ask for a re-render after layout state changed.
    fn request_render(&mut self) {}
}
