// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scoped native listeners.
//!
//! A [`ListenerRegistry`] records every listener it adds through an
//! [`EventSource`] and removes all of them, exactly once, on
//! [`ListenerRegistry::release`]. Listeners on surfaces that outlive the widget
//! (see [`EventTarget::is_global`]) are tracked like any other, so they are
//! removed with the widget rather than left behind on the shared surface.
//!
//! ## Lifecycle
//!
//! - `Unbound` → [`bind`](ListenerRegistry::bind) → `Bound`
//! - `Bound` → [`release`](ListenerRegistry::release) → `Released`
//!
//! Binding twice, or releasing twice, is a no-op. Release is terminal: a
//! released registry never binds again.
//!
//! ```
//! use understory_gesture::listeners::{EventSource, ListenerId, ListenerRegistry};
//! use understory_gesture::{EventKind, EventTarget};
//!
//! #[derive(Default)]
//! struct Surface { next: u64, live: Vec<ListenerId> }
//!
//! impl EventSource for Surface {
//!     fn add_listener(&mut self, _target: EventTarget, _kind: EventKind) -> ListenerId {
//!         self.next += 1;
//!         self.live.push(ListenerId(self.next));
//!         ListenerId(self.next)
//!     }
//!     fn remove_listener(&mut self, id: ListenerId) {
//!         self.live.retain(|l| *l != id);
//!     }
//! }
//!
//! let mut surface = Surface::default();
//! let mut registry = ListenerRegistry::new();
//! registry.bind(&mut surface, [(EventTarget::GlobalPointer, EventKind::MouseUp)]);
//! assert!(registry.is_listening(EventTarget::GlobalPointer, EventKind::MouseUp));
//!
//! assert_eq!(registry.release(&mut surface), 1);
//! assert_eq!(registry.release(&mut surface), 0);
//! assert!(surface.live.is_empty());
//! ```

use smallvec::SmallVec;

use crate::event::{EventKind, EventTarget};

/// Opaque listener handle issued by an [`EventSource`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Abstract event-subscription interface of the host platform.
pub trait EventSource {
    /// Attach a listener for `kind` events on `target`.
    fn add_listener(&mut self, target: EventTarget, kind: EventKind) -> ListenerId;

    /// Detach a listener previously returned by [`add_listener`](Self::add_listener).
    fn remove_listener(&mut self, id: ListenerId);
}

/// A registered listener.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Listener {
    /// Handle issued by the event source.
    pub id: ListenerId,
    /// Target the listener is attached to.
    pub target: EventTarget,
    /// Event kind it receives.
    pub kind: EventKind,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
enum Lifecycle {
    #[default]
    Unbound,
    Bound,
    Released,
}

/// Owns every native listener registered on behalf of one widget.
#[derive(Clone, Debug, Default)]
pub struct ListenerRegistry {
    listeners: SmallVec<[Listener; 16]>,
    lifecycle: Lifecycle,
}

impl ListenerRegistry {
    /// Creates an unbound registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every `(target, kind)` pair through `source`.
    ///
    /// Duplicate pairs are registered once. Returns how many listeners were
    /// added; `0` if the registry is already bound or released.
    pub fn bind<S, I>(&mut self, source: &mut S, bindings: I) -> usize
    where
        S: EventSource + ?Sized,
        I: IntoIterator<Item = (EventTarget, EventKind)>,
    {
        if self.lifecycle != Lifecycle::Unbound {
            return 0;
        }
        self.lifecycle = Lifecycle::Bound;
        let before = self.listeners.len();
        for (target, kind) in bindings {
            if self.is_listening(target, kind) {
                continue;
            }
            let id = source.add_listener(target, kind);
            self.listeners.push(Listener { id, target, kind });
        }
        self.listeners.len() - before
    }

    /// Remove every registered listener through `source`.
    ///
    /// Returns how many listeners were removed; `0` on repeated calls.
    pub fn release<S: EventSource + ?Sized>(&mut self, source: &mut S) -> usize {
        if self.lifecycle == Lifecycle::Released {
            return 0;
        }
        self.lifecycle = Lifecycle::Released;
        let removed = self.listeners.len();
        for listener in self.listeners.drain(..) {
            source.remove_listener(listener.id);
        }
        removed
    }

    /// Returns `true` if a live listener exists for `kind` on `target`.
    #[must_use]
    pub fn is_listening(&self, target: EventTarget, kind: EventKind) -> bool {
        self.listeners
            .iter()
            .any(|l| l.target == target && l.kind == kind)
    }

    /// Returns `true` once [`bind`](Self::bind) has run and before release.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.lifecycle == Lifecycle::Bound
    }

    /// Returns `true` after [`release`](Self::release).
    #[must_use]
    pub fn is_released(&self) -> bool {
        self.lifecycle == Lifecycle::Released
    }

    /// Live listeners, in registration order.
    #[must_use]
    pub fn listeners(&self) -> &[Listener] {
        &self.listeners
    }

    /// Live listeners attached to surfaces that outlive the widget.
    pub fn global_listeners(&self) -> impl Iterator<Item = &Listener> + '_ {
        self.listeners.iter().filter(|l| l.target.is_global())
    }
}
