//! Event routing.
//!
//! Input goes to the capture holder, else the focused window, else the root.
//! Hooks never run nested: anything a hook raises is queued and delivered after
//! it returns, oldest first, each delivery re-checking that its target is
//! still alive.

use std::collections::VecDeque;

use super::Screen;
use crate::constants::MAX_EVENTS_PER_DISPATCH;
use crate::display::Display;
use crate::event::WindowEvent;
use crate::sound::Sound;
use crate::window::{Window, WindowId};

/// FIFO of events waiting for delivery.
#[derive(Debug, Default)]
pub struct EventQueue {
    pending: VecDeque<(WindowId, WindowEvent)>,
}

impl EventQueue {
    pub fn push(&mut self, id: WindowId, event: WindowEvent) {
        self.pending.push_back((id, event));
    }

    pub fn pop(&mut self) -> Option<(WindowId, WindowEvent)> {
        self.pending.pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

impl<D: Display, S: Sound> Screen<D, S> {
    /// Route an input event to the capture holder, the focused window or the
    /// root, in that order, then deliver every follow-up it causes.
    ///
    /// Returns false when the screen has no window to take it.
    pub fn dispatch(&mut self, event: WindowEvent) -> bool {
        let Some(target) = self.input_target() else {
            tracing::trace!(%event, "no window to receive input");
            return false;
        };
        tracing::trace!(%event, input = event.is_input(), window_id = ?target, "dispatch");
        self.queue.push(target, event);
        self.pump();
        true
    }

    /// Deliver `event` straight to `id`, then any follow-ups.
    pub fn send(&mut self, id: WindowId, event: WindowEvent) {
        self.queue.push(id, event);
        self.pump();
    }

    /// Pick the input target, discarding capture/focus references to windows
    /// that no longer exist.
    fn input_target(&mut self) -> Option<WindowId> {
        if let Some(id) = self.focus.captured_id() {
            if self.registry.contains(id) {
                return Some(id);
            }
            tracing::warn!(window_id = ?id, "capture held by closed window, releasing");
            self.focus.replace_capture(None);
        }
        if let Some(id) = self.focus.focused_id() {
            if self.registry.contains(id) {
                return Some(id);
            }
            tracing::warn!(window_id = ?id, "focus held by closed window, clearing");
            self.focus.replace_focus(None);
        }
        self.registry.root()
    }

    /// Drain the queue, one hook call at a time.
    pub(crate) fn pump(&mut self) {
        let mut delivered = 0usize;
        while let Some((id, event)) = self.queue.pop() {
            if delivered == MAX_EVENTS_PER_DISPATCH {
                tracing::warn!(
                    dropped = self.queue.len() + 1,
                    "event queue overflow, dropping pending events"
                );
                self.queue.clear();
                break;
            }
            delivered += 1;
            self.deliver(id, event);
        }
    }

    fn deliver(&mut self, id: WindowId, event: WindowEvent) {
        let Some(class) = self.registry.get(id).map(Window::class) else {
            tracing::debug!(%event, window_id = ?id, "dropping event for closed window");
            if self.focus.forget(id) {
                tracing::warn!(window_id = ?id, "stale focus/capture reference reset");
            }
            return;
        };
        tracing::trace!(%event, window_id = ?id, "deliver");
        let mut cx = self.event_context();
        class.event(&mut cx, id, event);
    }
}
