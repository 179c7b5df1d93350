pub mod frame;
pub mod registry;

use std::fmt;

use ratatui::layout::Rect;
use ratatui::style::Color;

use crate::constants::NO_TAG;
use crate::context::{DrawContext, EventContext};
use crate::display::Display;
use crate::event::WindowEvent;

slotmap::new_key_type! {
    /// Stable window handle: slot index plus generation.
    ///
    /// A handle to a destroyed window never resolves again, even after its slot
    /// has been reused by a newer window.
    pub struct WindowId;
}

/// Identifies which widget variant a class implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassKind {
    Frame,
    Leaf(&'static str),
}

/// Hook table of a widget variant.
///
/// Every window carries a `&'static dyn WindowClass`; the registry, dispatcher
/// and redraw scheduler only ever talk to a window through these four hooks.
/// Classes are stateless: per-window state lives in the `Window` record.
pub trait WindowClass: fmt::Debug + Sync {
    fn kind(&self) -> ClassKind;

    /// Establish the class defaults on a freshly allocated record.
    fn init(&self, window: &mut Window, display: &dyn Display);

    /// Release whatever `init` set up. Runs child-first during destruction.
    fn done(&self, _window: &mut Window) {}

    fn draw(&self, cx: &mut DrawContext<'_>, id: WindowId);

    fn event(&self, _cx: &mut EventContext<'_>, _id: WindowId, _event: WindowEvent) {}
}

/// One window record. Owned by the `WindowRegistry`; everything else refers to
/// it by `WindowId`.
#[derive(Debug, Clone)]
pub struct Window {
    id: WindowId,
    class: &'static dyn WindowClass,
    parent: Option<WindowId>,
    children: Vec<WindowId>,
    pub rect: Rect,
    pub enabled: bool,
    pub visible: bool,
    /// Needs a repaint.
    pub invalid: bool,
    /// Container semantics: draws and navigates its children.
    pub parent_role: bool,
    /// Mirrors the focus tracker so draw hooks can highlight without it.
    pub focused: bool,
    pub tag: u16,
    pub color_back: Color,
    pub color_text: Color,
}

impl Window {
    pub(crate) fn new(
        id: WindowId,
        class: &'static dyn WindowClass,
        parent: Option<WindowId>,
        rect: Rect,
    ) -> Self {
        Self {
            id,
            class,
            parent,
            children: Vec::new(),
            rect,
            enabled: false,
            visible: true,
            invalid: true,
            parent_role: false,
            focused: false,
            tag: NO_TAG,
            color_back: Color::Black,
            color_text: Color::White,
        }
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn class(&self) -> &'static dyn WindowClass {
        self.class
    }

    pub fn kind(&self) -> ClassKind {
        self.class.kind()
    }

    pub fn parent(&self) -> Option<WindowId> {
        self.parent
    }

    pub fn children(&self) -> &[WindowId] {
        &self.children
    }
}
