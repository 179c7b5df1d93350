//! Display surface the windows paint onto.
//!
//! The core only ever needs the panel size and a rectangle fill. Real targets
//! drive an LCD controller; this crate ships `BufferDisplay`, which paints into
//! a `ratatui` buffer where one cell stands for one pixel. The console driver
//! presents that buffer in a terminal.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;

use crate::geometry;

pub trait Display {
    fn width(&self) -> u16;
    fn height(&self) -> u16;
    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn area(&self) -> Rect {
        geometry::full(self.width(), self.height())
    }
}

impl<T: Display + ?Sized> Display for &mut T {
    fn width(&self) -> u16 {
        (**self).width()
    }

    fn height(&self) -> u16 {
        (**self).height()
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        (**self).fill_rect(rect, color)
    }
}

/// In-memory display backed by a `ratatui::buffer::Buffer`.
#[derive(Debug, Clone)]
pub struct BufferDisplay {
    buffer: Buffer,
    fills: u64,
}

impl BufferDisplay {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            buffer: Buffer::empty(geometry::full(width, height)),
            fills: 0,
        }
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// Background color of the pixel at `(x, y)`, if it lies on the display.
    pub fn pixel(&self, x: u16, y: u16) -> Option<Color> {
        self.buffer.cell((x, y)).map(|cell| cell.bg)
    }

    /// Number of `fill_rect` calls that touched at least one pixel.
    pub fn fill_count(&self) -> u64 {
        self.fills
    }

    /// Match a new panel size. Contents are discarded, so callers must
    /// invalidate the window tree afterwards.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.buffer = Buffer::empty(geometry::full(width, height));
    }
}

impl Display for BufferDisplay {
    fn width(&self) -> u16 {
        self.buffer.area.width
    }

    fn height(&self) -> u16 {
        self.buffer.area.height
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some(clipped) = geometry::clip(rect, self.buffer.area) else {
            return;
        };
        for y in clipped.top()..clipped.bottom() {
            for x in clipped.left()..clipped.right() {
                if let Some(cell) = self.buffer.cell_mut((x, y)) {
                    cell.set_symbol(" ");
                    cell.set_bg(color);
                }
            }
        }
        self.fills = self.fills.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_rect_paints_only_inside_the_rect() {
        let mut d = BufferDisplay::new(6, 4);
        d.fill_rect(Rect::new(1, 1, 2, 2), Color::Red);
        assert_eq!(d.pixel(1, 1), Some(Color::Red));
        assert_eq!(d.pixel(2, 2), Some(Color::Red));
        assert_eq!(d.pixel(3, 3), Some(Color::Reset));
        assert_eq!(d.pixel(0, 0), Some(Color::Reset));
        assert_eq!(d.fill_count(), 1);
    }

    #[test]
    fn fill_rect_clips_to_the_panel() {
        let mut d = BufferDisplay::new(4, 4);
        d.fill_rect(Rect::new(2, 2, 10, 10), Color::Blue);
        assert_eq!(d.pixel(3, 3), Some(Color::Blue));
        assert_eq!(d.pixel(4, 4), None);

        d.fill_rect(Rect::new(9, 9, 2, 2), Color::Green);
        assert_eq!(d.fill_count(), 1);
    }

    #[test]
    fn blanket_impl_for_mut_ref_works() {
        let mut d = BufferDisplay::new(3, 2);
        let mut r = &mut d;
        assert_eq!(Display::width(&r), 3);
        Display::fill_rect(&mut r, Rect::new(0, 0, 1, 1), Color::White);
        assert_eq!(d.pixel(0, 0), Some(Color::White));
    }
}
