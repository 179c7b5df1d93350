use crate::window::WindowId;

/// Who has focus and who holds input capture on the active screen.
///
/// Plain state: the screen and `EventContext` apply the policy (enabled
/// checks, notification events) around it. Focus and capture are independent;
/// the same window may hold both.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FocusTracker {
    focused: Option<WindowId>,
    captured: Option<WindowId>,
}

impl FocusTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused_id(&self) -> Option<WindowId> {
        self.focused
    }

    pub fn captured_id(&self) -> Option<WindowId> {
        self.captured
    }

    /// Store the new focus and hand back the previous one.
    pub fn replace_focus(&mut self, focus: Option<WindowId>) -> Option<WindowId> {
        std::mem::replace(&mut self.focused, focus)
    }

    /// Store the new capture holder and hand back the previous one.
    pub fn replace_capture(&mut self, capture: Option<WindowId>) -> Option<WindowId> {
        std::mem::replace(&mut self.captured, capture)
    }

    /// Drop any reference to `id`. Returns true if something was dropped.
    pub fn forget(&mut self, id: WindowId) -> bool {
        let mut dropped = false;
        if self.focused == Some(id) {
            self.focused = None;
            dropped = true;
        }
        if self.captured == Some(id) {
            self.captured = None;
            dropped = true;
        }
        dropped
    }

    pub fn reset(&mut self) {
        self.focused = None;
        self.captured = None;
    }
}
