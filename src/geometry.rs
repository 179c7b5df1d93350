//! Geometry helpers over `ratatui::layout::Rect`.
//!
//! Window rectangles are plain `Rect`s in display pixels. A rectangle with zero
//! width or height is the "empty" sentinel, which classes read as "use the
//! whole display".

use ratatui::layout::Rect;

/// The empty rectangle. Passing it to `create_window` asks the class to pick
/// its own default area.
pub const EMPTY: Rect = Rect::ZERO;

/// Whether `rect` is the empty sentinel (zero width or zero height).
pub fn is_empty(rect: Rect) -> bool {
    rect.width == 0 || rect.height == 0
}

/// Full-display rectangle anchored at the origin.
pub fn full(width: u16, height: u16) -> Rect {
    Rect::new(0, 0, width, height)
}

/// Clip `rect` to `bounds`, returning `None` when nothing is left.
pub fn clip(rect: Rect, bounds: Rect) -> Option<Rect> {
    let clipped = rect.intersection(bounds);
    if is_empty(clipped) {
        None
    } else {
        Some(clipped)
    }
}

/// Shrink `rect` by `margin` on every side, saturating at an empty rectangle.
pub fn inset(rect: Rect, margin: u16) -> Rect {
    let twice = margin.saturating_mul(2);
    if rect.width <= twice || rect.height <= twice {
        return Rect::new(rect.x, rect.y, 0, 0);
    }
    Rect::new(
        rect.x.saturating_add(margin),
        rect.y.saturating_add(margin),
        rect.width - twice,
        rect.height - twice,
    )
}
