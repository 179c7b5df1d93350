use std::fmt;

/// Abstract window events.
///
/// Physical input arrives as `BtnDown`/`BtnUp`/`Hold`/`EncUp`/`EncDown`; the
/// rest are raised by the core itself (focus and capture notifications, proxied
/// clicks) or by the application (`Changed`, `Tick`). Handlers ignore kinds
/// they do not care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum WindowEvent {
    BtnDown,
    BtnUp,
    Hold,
    /// Encoder turned towards the previous item, by this many detents.
    EncDown(u16),
    /// Encoder turned towards the next item, by this many detents.
    EncUp(u16),
    FocusLost,
    FocusGained,
    CaptureReleased,
    CaptureGranted,
    /// Click proxied by a container, carrying the clicked window's tag.
    Click(u16),
    Changed,
    Tick,
}

impl WindowEvent {
    /// Whether the event comes from the physical controls rather than the core.
    pub fn is_input(&self) -> bool {
        matches!(
            self,
            WindowEvent::BtnDown
                | WindowEvent::BtnUp
                | WindowEvent::Hold
                | WindowEvent::EncDown(_)
                | WindowEvent::EncUp(_)
        )
    }
}

impl fmt::Display for WindowEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowEvent::BtnDown => write!(f, "btn-down"),
            WindowEvent::BtnUp => write!(f, "btn-up"),
            WindowEvent::Hold => write!(f, "hold"),
            WindowEvent::EncDown(n) => write!(f, "enc-down({n})"),
            WindowEvent::EncUp(n) => write!(f, "enc-up({n})"),
            WindowEvent::FocusLost => write!(f, "focus-0"),
            WindowEvent::FocusGained => write!(f, "focus-1"),
            WindowEvent::CaptureReleased => write!(f, "capt-0"),
            WindowEvent::CaptureGranted => write!(f, "capt-1"),
            WindowEvent::Click(tag) => write!(f, "click({tag})"),
            WindowEvent::Changed => write!(f, "changed"),
            WindowEvent::Tick => write!(f, "tick"),
        }
    }
}
