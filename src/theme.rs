use ratatui::style::Color;

// Centralized palette. Embedded panels run in a fixed RGB space, so colors
// are plain `Color::Rgb` values except where a named color is the contract
// (frames clear to black).

pub const ACCENT_RGB: (u8, u8, u8) = (200, 100, 0);
pub const ACCENT_ALT_RGB: (u8, u8, u8) = (255, 165, 0);

pub fn rgb_to_color(rgb: (u8, u8, u8)) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

pub fn accent() -> Color {
    rgb_to_color(ACCENT_RGB)
}

pub fn accent_alt() -> Color {
    rgb_to_color(ACCENT_ALT_RGB)
}

// Frame
pub fn frame_back() -> Color {
    Color::Black
}
pub fn panel_back() -> Color {
    Color::Rgb(20, 24, 40)
}

// Leaf windows
pub fn item_back() -> Color {
    Color::DarkGray
}
pub fn item_focused_back() -> Color {
    accent()
}
pub fn item_captured_back() -> Color {
    accent_alt()
}
pub fn item_disabled_back() -> Color {
    Color::Rgb(40, 40, 40)
}
pub fn item_fg() -> Color {
    Color::White
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_colors_are_rgb() {
        assert_eq!(accent(), Color::Rgb(200, 100, 0));
        assert_eq!(accent_alt(), Color::Rgb(255, 165, 0));
    }

    #[test]
    fn frames_clear_to_black() {
        assert_eq!(frame_back(), Color::Black);
    }
}
