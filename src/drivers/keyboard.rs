//! Keyboard stand-in for the physical controls.
//!
//! The simulator has no encoder, so keys play its part: arrows (or `j`/`k`)
//! turn it one detent, PageUp/PageDown turn it several, Enter/Space is the push
//! button.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::InputEvent;
use crate::constants::FAST_ENCODER_STEPS;
use crate::event::WindowEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Control {
    Button,
    Encoder { up: bool, steps: u16 },
    Hold,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub mods: KeyModifiers,
}

impl KeyCombo {
    pub const fn plain(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::NONE,
        }
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::CONTROL,
        }
    }

    fn matches(&self, key: &KeyEvent) -> bool {
        self.code == key.code && key.modifiers.contains(self.mods)
    }
}

/// Maps terminal key events to control input.
#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: Vec<(KeyCombo, Control)>,
    button_down: bool,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyMap {
    pub fn new() -> Self {
        let up = |steps| Control::Encoder { up: true, steps };
        let down = |steps| Control::Encoder { up: false, steps };
        let bindings = vec![
            (KeyCombo::plain(KeyCode::Up), up(1)),
            (KeyCombo::plain(KeyCode::Char('k')), up(1)),
            (KeyCombo::plain(KeyCode::Right), up(1)),
            (KeyCombo::plain(KeyCode::PageUp), up(FAST_ENCODER_STEPS)),
            (KeyCombo::plain(KeyCode::Down), down(1)),
            (KeyCombo::plain(KeyCode::Char('j')), down(1)),
            (KeyCombo::plain(KeyCode::Left), down(1)),
            (KeyCombo::plain(KeyCode::PageDown), down(FAST_ENCODER_STEPS)),
            (KeyCombo::plain(KeyCode::Enter), Control::Button),
            (KeyCombo::plain(KeyCode::Char(' ')), Control::Button),
            (KeyCombo::plain(KeyCode::Char('h')), Control::Hold),
            (KeyCombo::plain(KeyCode::Char('q')), Control::Quit),
            (KeyCombo::plain(KeyCode::Esc), Control::Quit),
            (KeyCombo::ctrl(KeyCode::Char('c')), Control::Quit),
        ];
        Self {
            bindings,
            button_down: false,
        }
    }

    fn lookup(&self, key: &KeyEvent) -> Option<Control> {
        self.bindings
            .iter()
            .find(|(combo, _)| combo.matches(key))
            .map(|(_, control)| *control)
    }

    /// Translate one terminal event. Unbound keys and mouse input yield nothing.
    ///
    /// Terminals that report key releases get a matching `BtnUp`; the rest see
    /// `BtnUp` synthesized right before the next `BtnDown` so the two always
    /// alternate.
    pub fn map(&mut self, evt: Event) -> Vec<InputEvent> {
        match evt {
            Event::Key(key) => self.map_key(key),
            Event::Resize(width, height) => vec![InputEvent::Resize(width, height)],
            _ => Vec::new(),
        }
    }

    fn map_key(&mut self, key: KeyEvent) -> Vec<InputEvent> {
        let Some(control) = self.lookup(&key) else {
            return Vec::new();
        };
        let window = InputEvent::Window;
        match (control, key.kind) {
            (Control::Button, KeyEventKind::Press) => {
                let mut out = Vec::with_capacity(2);
                if self.button_down {
                    out.push(window(WindowEvent::BtnUp));
                }
                self.button_down = true;
                out.push(window(WindowEvent::BtnDown));
                out
            }
            (Control::Button, KeyEventKind::Repeat) => vec![window(WindowEvent::Hold)],
            (Control::Button, KeyEventKind::Release) => {
                if std::mem::take(&mut self.button_down) {
                    vec![window(WindowEvent::BtnUp)]
                } else {
                    Vec::new()
                }
            }
            (_, KeyEventKind::Release) => Vec::new(),
            (Control::Encoder { up: true, steps }, _) => vec![window(WindowEvent::EncUp(steps))],
            (Control::Encoder { up: false, steps }, _) => {
                vec![window(WindowEvent::EncDown(steps))]
            }
            (Control::Hold, _) => vec![window(WindowEvent::Hold)],
            (Control::Quit, _) => vec![InputEvent::Quit],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn with_kind(code: KeyCode, kind: KeyEventKind) -> Event {
        let mut key = KeyEvent::new(code, KeyModifiers::NONE);
        key.kind = kind;
        Event::Key(key)
    }

    #[test]
    fn arrows_turn_the_encoder() {
        let mut map = KeyMap::new();
        assert_eq!(
            map.map(press(KeyCode::Up)),
            vec![InputEvent::Window(WindowEvent::EncUp(1))]
        );
        assert_eq!(
            map.map(press(KeyCode::PageDown)),
            vec![InputEvent::Window(WindowEvent::EncDown(FAST_ENCODER_STEPS))]
        );
    }

    #[test]
    fn button_press_and_release_alternate() {
        let mut map = KeyMap::new();
        assert_eq!(
            map.map(press(KeyCode::Enter)),
            vec![InputEvent::Window(WindowEvent::BtnDown)]
        );
        // No release reported: the next press closes the previous one.
        assert_eq!(
            map.map(press(KeyCode::Char(' '))),
            vec![
                InputEvent::Window(WindowEvent::BtnUp),
                InputEvent::Window(WindowEvent::BtnDown)
            ]
        );
        assert_eq!(
            map.map(with_kind(KeyCode::Enter, KeyEventKind::Release)),
            vec![InputEvent::Window(WindowEvent::BtnUp)]
        );
        assert!(
            map.map(with_kind(KeyCode::Enter, KeyEventKind::Release))
                .is_empty()
        );
    }

    #[test]
    fn release_of_other_keys_is_ignored() {
        let mut map = KeyMap::new();
        assert!(
            map.map(with_kind(KeyCode::Up, KeyEventKind::Release))
                .is_empty()
        );
    }

    #[test]
    fn ctrl_c_and_q_quit() {
        let mut map = KeyMap::new();
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(map.map(ctrl_c), vec![InputEvent::Quit]);
        assert_eq!(map.map(press(KeyCode::Char('q'))), vec![InputEvent::Quit]);
        assert!(map.map(press(KeyCode::Char('c'))).is_empty());
    }

    #[test]
    fn resize_passes_through() {
        let mut map = KeyMap::new();
        assert_eq!(
            map.map(Event::Resize(80, 24)),
            vec![InputEvent::Resize(80, 24)]
        );
    }
}
