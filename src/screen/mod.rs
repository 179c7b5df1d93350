//! The active screen: one window tree plus its focus, capture and event queue.
//!
//! `Screen` owns the registry and the display/sound collaborators. Input is
//! routed by [`Screen::dispatch`] (see `dispatch.rs`) and painted by
//! [`Screen::redraw`] (see `redraw.rs`).

pub(crate) mod dispatch;
mod redraw;

use ratatui::layout::Rect;

use crate::context::EventContext;
use crate::display::Display;
use crate::error::Result;
use crate::focus::FocusTracker;
use crate::sound::Sound;
use crate::window::registry::WindowRegistry;
use crate::window::{Window, WindowClass, WindowId};

use dispatch::EventQueue;

pub struct Screen<D, S> {
    registry: WindowRegistry,
    focus: FocusTracker,
    queue: EventQueue,
    display: D,
    sound: S,
}

impl<D: Display, S: Sound> Screen<D, S> {
    pub fn new(display: D, sound: S) -> Self {
        Self {
            registry: WindowRegistry::new(),
            focus: FocusTracker::new(),
            queue: EventQueue::default(),
            display,
            sound,
        }
    }

    /// Create a window of `class` under `parent` (`None` for the root) and run
    /// the class `init` hook on it.
    ///
    /// An empty `rect` lets the class choose its default area.
    pub fn create_window(
        &mut self,
        class: &'static dyn WindowClass,
        parent: Option<WindowId>,
        rect: Rect,
    ) -> Result<WindowId> {
        let id = self.registry.insert(class, parent, rect)?;
        if let Some(window) = self.registry.get_mut(id) {
            class.init(window, &self.display);
        }
        Ok(id)
    }

    /// Close `id` and everything below it.
    ///
    /// `done` hooks run child-first. Focus or capture resting inside the
    /// subtree is dropped without notification, and the parent is repainted
    /// over the vacated area.
    pub fn destroy_window(&mut self, id: WindowId) {
        let parent = self.registry.parent_of(id);
        for mut window in self.registry.remove(id) {
            window.class().done(&mut window);
            if self.focus.forget(window.id()) {
                tracing::debug!(window_id = ?window.id(), "dropped focus/capture of closed window");
            }
        }
        if let Some(parent) = parent {
            self.registry.mark_invalid(parent);
        }
    }

    /// Tear the whole tree down and reset focus and capture to none.
    pub fn clear(&mut self) {
        if let Some(root) = self.registry.root() {
            self.destroy_window(root);
        }
        self.focus.reset();
        self.queue.clear();
    }

    pub fn registry(&self) -> &WindowRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut WindowRegistry {
        &mut self.registry
    }

    pub fn window(&self, id: WindowId) -> Option<&Window> {
        self.registry.get(id)
    }

    pub fn root(&self) -> Option<WindowId> {
        self.registry.root()
    }

    pub fn focused(&self) -> Option<WindowId> {
        self.focus.focused_id()
    }

    pub fn captured(&self) -> Option<WindowId> {
        self.focus.captured_id()
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn sound(&self) -> &S {
        &self.sound
    }

    pub fn sound_mut(&mut self) -> &mut S {
        &mut self.sound
    }

    fn event_context(&mut self) -> EventContext<'_> {
        EventContext::new(
            &mut self.registry,
            &mut self.focus,
            &mut self.queue,
            &mut self.sound,
        )
    }

    /// Move focus to `id` and deliver the resulting notifications.
    pub fn set_focus(&mut self, id: WindowId) -> bool {
        let moved = self.event_context().set_focus(id);
        self.pump();
        moved
    }

    /// Hand capture to `target` and deliver the resulting notifications.
    pub fn set_capture(&mut self, target: Option<WindowId>) -> bool {
        let moved = self.event_context().set_capture(target);
        self.pump();
        moved
    }

    /// Enable or disable `id`.
    ///
    /// Disabling the focused window moves focus to its next enabled sibling,
    /// else the previous one, else nowhere.
    pub fn set_enabled(&mut self, id: WindowId, enabled: bool) {
        self.event_context().set_enabled(id, enabled);
        self.pump();
    }

    /// Show or hide `id`. Hiding the focused window moves focus like
    /// disabling it does.
    pub fn set_visible(&mut self, id: WindowId, visible: bool) {
        self.event_context().set_visible(id, visible);
        self.pump();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::BufferDisplay;
    use crate::error::Error;
    use crate::context::DrawContext;
    use crate::event::WindowEvent;
    use crate::sound::SilentSound;
    use crate::window::ClassKind;
    use crate::window::frame::FRAME;

    /// Leaf that switches itself off when clicked.
    #[derive(Debug)]
    struct OneShot;

    static ONE_SHOT: OneShot = OneShot;

    impl WindowClass for OneShot {
        fn kind(&self) -> ClassKind {
            ClassKind::Leaf("one-shot")
        }

        fn init(&self, window: &mut Window, _display: &dyn Display) {
            window.enabled = true;
        }

        fn draw(&self, _cx: &mut DrawContext<'_>, _id: WindowId) {}

        fn event(&self, cx: &mut EventContext<'_>, id: WindowId, event: WindowEvent) {
            if let WindowEvent::Click(_) = event {
                cx.set_enabled(id, false);
            }
        }
    }

    fn screen() -> Screen<BufferDisplay, SilentSound> {
        Screen::new(BufferDisplay::new(16, 8), SilentSound)
    }

    #[test]
    fn create_window_runs_init() {
        let mut s = screen();
        let root = s.create_window(&FRAME, None, Rect::ZERO).unwrap();
        let w = s.window(root).unwrap();
        assert_eq!(w.rect, Rect::new(0, 0, 16, 8));
        assert!(w.enabled);
    }

    #[test]
    fn create_under_closed_parent_fails() {
        let mut s = screen();
        let root = s.create_window(&FRAME, None, Rect::ZERO).unwrap();
        let child = s.create_window(&FRAME, Some(root), Rect::ZERO).unwrap();
        s.destroy_window(child);
        assert_eq!(
            s.create_window(&FRAME, Some(child), Rect::ZERO),
            Err(Error::NoSuchWindow(child))
        );
    }

    #[test]
    fn destroy_forgets_focus_and_capture() {
        let mut s = screen();
        let root = s.create_window(&FRAME, None, Rect::ZERO).unwrap();
        let child = s.create_window(&FRAME, Some(root), Rect::ZERO).unwrap();
        s.set_focus(child);
        s.set_capture(Some(child));
        s.destroy_window(child);
        assert_eq!(s.focused(), None);
        assert_eq!(s.captured(), None);
        assert!(s.registry().is_invalid(root));
    }

    #[test]
    fn disabling_the_focused_window_moves_focus() {
        let mut s = screen();
        let root = s.create_window(&FRAME, None, Rect::ZERO).unwrap();
        let a = s.create_window(&FRAME, Some(root), Rect::ZERO).unwrap();
        let b = s.create_window(&FRAME, Some(root), Rect::ZERO).unwrap();
        s.set_focus(b);
        s.set_enabled(b, false);
        assert_eq!(s.focused(), Some(a));
        s.set_enabled(a, false);
        assert_eq!(s.focused(), None);
        assert!(!s.window(a).unwrap().focused);
    }

    #[test]
    fn window_disabling_itself_gives_up_focus() {
        let mut s = screen();
        let root = s.create_window(&FRAME, None, Rect::ZERO).unwrap();
        let a = s.create_window(&ONE_SHOT, Some(root), Rect::ZERO).unwrap();
        let b = s.create_window(&ONE_SHOT, Some(root), Rect::ZERO).unwrap();
        s.registry_mut().set_tag(a, 5);
        s.registry_mut().set_tag(b, 5);
        s.set_focus(a);
        s.set_capture(Some(root));

        s.dispatch(WindowEvent::BtnDown);
        assert!(!s.window(a).unwrap().enabled);
        assert_eq!(s.focused(), Some(b));
        assert!(s.window(b).unwrap().focused);

        // Last enabled sibling: nothing is left to take focus.
        s.set_capture(Some(root));
        s.dispatch(WindowEvent::BtnDown);
        assert!(!s.window(b).unwrap().enabled);
        assert_eq!(s.focused(), None);
    }

    #[test]
    fn hiding_the_focused_window_moves_focus() {
        let mut s = screen();
        let root = s.create_window(&FRAME, None, Rect::ZERO).unwrap();
        let a = s.create_window(&FRAME, Some(root), Rect::ZERO).unwrap();
        let b = s.create_window(&FRAME, Some(root), Rect::ZERO).unwrap();
        s.set_focus(a);
        s.set_visible(b, false);
        assert_eq!(s.focused(), Some(a));
        s.set_visible(a, false);
        assert_eq!(s.focused(), Some(b));
        assert!(!s.window(a).unwrap().focused);
    }

    #[test]
    fn clear_resets_the_screen() {
        let mut s = screen();
        let root = s.create_window(&FRAME, None, Rect::ZERO).unwrap();
        s.set_capture(Some(root));
        s.clear();
        assert!(s.registry().is_empty());
        assert_eq!(s.root(), None);
        assert_eq!(s.captured(), None);
        assert_eq!(s.focused(), None);
    }
}
