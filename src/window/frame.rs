//! Frame: the container window.
//!
//! A frame paints its background, forces its children to repaint on top of it,
//! and turns encoder/button input into focus navigation among its children.
//! Created with an empty rectangle it covers the whole display, which makes it
//! the natural root of a screen.

use crate::constants::NO_TAG;
use crate::context::{DrawContext, EventContext};
use crate::display::Display;
use crate::event::WindowEvent;
use crate::geometry;
use crate::sound::SoundCue;
use crate::theme;
use crate::window::{ClassKind, Window, WindowClass, WindowId};

#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClass;

pub static FRAME: FrameClass = FrameClass;

/// Which way the encoder walks the sibling list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Prev,
    Next,
}

impl WindowClass for FrameClass {
    fn kind(&self) -> ClassKind {
        ClassKind::Frame
    }

    fn init(&self, window: &mut Window, display: &dyn Display) {
        if geometry::is_empty(window.rect) {
            window.rect = display.area();
        }
        window.enabled = true;
        window.parent_role = true;
        window.color_back = theme::frame_back();
    }

    fn draw(&self, cx: &mut DrawContext<'_>, id: WindowId) {
        let Some(window) = cx.window_mut(id) else {
            return;
        };
        if !window.visible {
            return;
        }
        if window.invalid {
            window.invalid = false;
            let (rect, color) = (window.rect, window.color_back);
            cx.fill_rect(rect, color);
            cx.registry_mut().invalidate_children(id);
        }
        cx.draw_children(id);
    }

    fn event(&self, cx: &mut EventContext<'_>, id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::BtnDown => click_focused(cx),
            WindowEvent::EncDown(steps) => navigate(cx, Step::Prev, steps),
            WindowEvent::EncUp(steps) => navigate(cx, Step::Next, steps),
            WindowEvent::CaptureReleased => {}
            WindowEvent::CaptureGranted => reenter(cx, id),
            _ => {}
        }
    }
}

/// Proxy a click to the focused window when it carries a tag, then hand it
/// input capture.
fn click_focused(cx: &mut EventContext<'_>) {
    let Some(focused) = cx.focused_id() else {
        return;
    };
    let tag = cx.window(focused).map_or(NO_TAG, |window| window.tag);
    if tag != NO_TAG {
        cx.post(focused, WindowEvent::Click(tag));
    }
    cx.set_capture(Some(focused));
}

/// Walk `steps` enabled siblings away from the focused window.
///
/// Running off either end of the list leaves focus where it was and sounds the
/// boundary cue once.
fn navigate(cx: &mut EventContext<'_>, step: Step, steps: u16) {
    let mut target = cx.focused_id();
    for _ in 0..steps {
        let Some(current) = target else {
            break;
        };
        target = match step {
            Step::Prev => cx.registry().prev_enabled(current),
            Step::Next => cx.registry().next_enabled(current),
        };
    }
    match target {
        Some(next) => {
            cx.set_focus(next);
        }
        None => {
            tracing::debug!(?step, steps, "navigation hit the end of the list");
            cx.play(SoundCue::BlindAlert);
        }
    }
}

/// Capture came back to this frame: if focus sits outside its children, move
/// it to the first enabled child. No enabled child leaves focus alone.
fn reenter(cx: &mut EventContext<'_>, id: WindowId) {
    let focused_parent = cx
        .focused_id()
        .and_then(|focused| cx.registry().parent_of(focused));
    if focused_parent == Some(id) {
        return;
    }
    if let Some(first) = cx.registry().first_enabled_child(id) {
        cx.set_focus(first);
    }
}
