// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Event State: small state managers for direct-manipulation UI.
//!
//! This crate provides the leaf pieces of a pointer interaction stack. Each
//! module tracks just enough state to answer one question across a stream of
//! events:
//!
//! - [`drag`]: where was the pointer last accepted during a drag, and is a new
//!   position far enough away to be worth forwarding?
//! - [`affordance`]: which transient visual cues (hover highlight, divider
//!   highlight, scrollbar reveal) are currently shown?
//!
//! ## Design Philosophy
//!
//! Each state manager is designed to be:
//!
//! - **Minimal and focused**: Each handles one specific interaction pattern
//! - **Stateful but simple**: Track just enough state to compute transitions
//! - **Integration-friendly**: Work with any event routing or scene graph
//!
//! Neither manager decides *when* it should be consulted. Higher layers (for
//! example `understory_gesture`) own that policy, such as suppressing hover
//! affordances while a drag session is live.
//!
//! ## Usage Patterns
//!
//! ### Threshold-gated drag deltas
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use understory_event_state::drag::DragTracker;
//!
//! let mut drag = DragTracker::new();
//! drag.start(Point::new(10.0, 10.0));
//!
//! // Same point: nothing to forward.
//! assert_eq!(drag.advance(Point::new(10.0, 10.0)), None);
//!
//! // One unit away: forwarded, and the last point moves.
//! assert_eq!(drag.advance(Point::new(10.0, 11.0)), Some(Vec2::new(0.0, 1.0)));
//! assert_eq!(drag.last(), Some(Point::new(10.0, 11.0)));
//! ```
//!
//! ### Affordance flags
//!
//! ```rust
//! use understory_event_state::affordance::{AffordanceState, Affordances};
//!
//! let mut shown = AffordanceState::new();
//! assert!(shown.show(Affordances::TASK_BAR_HOVER));
//! // Redundant shows report no transition.
//! assert!(!shown.show(Affordances::TASK_BAR_HOVER));
//! assert!(shown.hide(Affordances::TASK_BAR_HOVER));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod affordance;
pub mod drag;
