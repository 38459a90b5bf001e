// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::types::{SessionKind, TaskBarRef};

/// Reason a `start_*` request was rejected.
///
/// A rejected start never changes the machine's state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StartError {
    /// Another session is already live.
    #[error("a {0:?} session is already live")]
    SessionActive(SessionKind),
    /// The panel divider is not configured as moveable.
    #[error("the panel divider is not moveable")]
    DividerLocked,
    /// Task-bar moves are disabled for this widget.
    #[error("task-bar moves are disabled")]
    MoveDisabled,
    /// The layout holder does not know the requested task-bar.
    #[error("task-bar {0:?} is no longer present")]
    StaleTarget(TaskBarRef),
}
