use std::io;

use crate::display::BufferDisplay;

/// Where finished frames go.
pub trait OutputDriver {
    fn enter(&mut self) -> io::Result<()>;
    fn exit(&mut self) -> io::Result<()>;

    /// Current panel size in pixels.
    fn size(&mut self) -> io::Result<(u16, u16)>;

    /// Push the painted display contents out.
    fn present(&mut self, display: &BufferDisplay) -> io::Result<()>;
}
