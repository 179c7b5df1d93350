//! Contexts handed to `WindowClass` hooks.
//!
//! `DrawContext` and `EventContext` carry exactly the shared state a hook may
//! touch during one call, borrowed from the `Screen` for the duration of that
//! call. Hooks never hold on to windows; they go through the registry by id.

use ratatui::layout::Rect;
use ratatui::style::Color;

use crate::display::Display;
use crate::event::WindowEvent;
use crate::focus::FocusTracker;
use crate::screen::dispatch::EventQueue;
use crate::sound::{Sound, SoundCue};
use crate::window::registry::WindowRegistry;
use crate::window::{Window, WindowId};

/// Context passed to `WindowClass::draw`.
pub struct DrawContext<'a> {
    registry: &'a mut WindowRegistry,
    display: &'a mut dyn Display,
}

impl<'a> DrawContext<'a> {
    pub(crate) fn new(registry: &'a mut WindowRegistry, display: &'a mut dyn Display) -> Self {
        Self { registry, display }
    }

    pub fn registry(&self) -> &WindowRegistry {
        self.registry
    }

    pub fn registry_mut(&mut self) -> &mut WindowRegistry {
        self.registry
    }

    pub fn window(&self, id: WindowId) -> Option<&Window> {
        self.registry.get(id)
    }

    pub fn window_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.registry.get_mut(id)
    }

    pub fn display(&mut self) -> &mut dyn Display {
        self.display
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.display.fill_rect(rect, color);
    }

    /// Run the draw hook of `id`, if it is still alive.
    pub fn draw_window(&mut self, id: WindowId) {
        let Some(class) = self.registry.get(id).map(Window::class) else {
            return;
        };
        class.draw(self, id);
    }

    /// Draw the direct children of `id` in sibling order.
    ///
    /// The child list is copied first; a child closed while its earlier
    /// siblings draw is skipped.
    pub fn draw_children(&mut self, id: WindowId) {
        let children = self.registry.children_of(id).to_vec();
        for child in children {
            self.draw_window(child);
        }
    }
}

/// Context passed to `WindowClass::event`.
///
/// Follow-up events (proxied clicks, focus and capture notifications) are
/// queued here and delivered once the running hook has returned.
pub struct EventContext<'a> {
    registry: &'a mut WindowRegistry,
    focus: &'a mut FocusTracker,
    queue: &'a mut EventQueue,
    sound: &'a mut dyn Sound,
}

impl<'a> EventContext<'a> {
    pub(crate) fn new(
        registry: &'a mut WindowRegistry,
        focus: &'a mut FocusTracker,
        queue: &'a mut EventQueue,
        sound: &'a mut dyn Sound,
    ) -> Self {
        Self {
            registry,
            focus,
            queue,
            sound,
        }
    }

    pub fn registry(&self) -> &WindowRegistry {
        self.registry
    }

    pub fn registry_mut(&mut self) -> &mut WindowRegistry {
        self.registry
    }

    pub fn window(&self, id: WindowId) -> Option<&Window> {
        self.registry.get(id)
    }

    pub fn window_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.registry.get_mut(id)
    }

    pub fn focused_id(&self) -> Option<WindowId> {
        self.focus.focused_id()
    }

    pub fn captured_id(&self) -> Option<WindowId> {
        self.focus.captured_id()
    }

    /// Queue `event` for `id`, behind everything already queued.
    pub fn post(&mut self, id: WindowId, event: WindowEvent) {
        self.queue.push(id, event);
    }

    pub fn play(&mut self, cue: SoundCue) {
        self.sound.play(cue);
    }

    /// Move focus to `id`.
    ///
    /// Ignored for closed or disabled windows and when `id` already has focus.
    /// The old holder is repainted and told `FocusLost`, the new one is
    /// repainted and told `FocusGained`. Returns true when focus moved.
    pub fn set_focus(&mut self, id: WindowId) -> bool {
        if !self.registry.is_enabled(id) {
            tracing::trace!(window_id = ?id, "focus refused: window closed or disabled");
            return false;
        }
        if self.focus.focused_id() == Some(id) {
            return false;
        }
        let old = self.focus.replace_focus(Some(id));
        if let Some(old) = old {
            self.notify_focus(old, false);
        }
        self.notify_focus(id, true);
        tracing::debug!(from = ?old, to = ?id, "focus moved");
        true
    }

    /// Leave nothing focused. Returns true if something lost focus.
    pub fn clear_focus(&mut self) -> bool {
        let Some(old) = self.focus.replace_focus(None) else {
            return false;
        };
        self.notify_focus(old, false);
        tracing::debug!(from = ?old, "focus cleared");
        true
    }

    /// Enable or disable `id`.
    ///
    /// Disabling the focused window moves focus to its next enabled sibling,
    /// else the previous one, else nowhere.
    pub fn set_enabled(&mut self, id: WindowId, enabled: bool) {
        if self.registry.set_enabled(id, enabled) && !enabled {
            self.relocate_focus(id);
        }
    }

    /// Show or hide `id`. Hiding the focused window moves focus the same way
    /// disabling it does.
    pub fn set_visible(&mut self, id: WindowId, visible: bool) {
        if self.registry.set_visible(id, visible) && !visible {
            self.relocate_focus(id);
        }
    }

    fn relocate_focus(&mut self, id: WindowId) {
        if self.focus.focused_id() != Some(id) {
            return;
        }
        let fallback = self
            .registry
            .next_enabled(id)
            .or_else(|| self.registry.prev_enabled(id));
        match fallback {
            Some(next) => self.set_focus(next),
            None => self.clear_focus(),
        };
    }

    fn notify_focus(&mut self, id: WindowId, gained: bool) {
        if let Some(window) = self.registry.get_mut(id) {
            window.focused = gained;
            window.invalid = true;
            let event = if gained {
                WindowEvent::FocusGained
            } else {
                WindowEvent::FocusLost
            };
            self.queue.push(id, event);
        }
    }

    /// Hand input capture to `target` (`None` releases it).
    ///
    /// Ignored when nothing changes or `target` is closed. The old holder is
    /// told `CaptureReleased` before the new one is told `CaptureGranted`.
    /// Returns true when capture moved.
    pub fn set_capture(&mut self, target: Option<WindowId>) -> bool {
        if target == self.focus.captured_id() {
            return false;
        }
        if let Some(id) = target
            && !self.registry.contains(id)
        {
            tracing::trace!(window_id = ?id, "capture refused: window closed");
            return false;
        }
        let old = self.focus.replace_capture(target);
        if let Some(old) = old {
            self.queue.push(old, WindowEvent::CaptureReleased);
        }
        if let Some(id) = target {
            self.queue.push(id, WindowEvent::CaptureGranted);
        }
        tracing::debug!(from = ?old, to = ?target, "capture moved");
        true
    }
}
