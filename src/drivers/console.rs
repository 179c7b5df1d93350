use std::collections::VecDeque;
use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use super::keyboard::KeyMap;
use super::{InputDriver, InputEvent, OutputDriver};
use crate::display::BufferDisplay;
use crate::sound::{Sound, SoundCue};

/// Reads the keyboard as encoder and button input.
pub struct ConsoleInputDriver {
    keymap: KeyMap,
    event_queue: VecDeque<InputEvent>,
}

impl Default for ConsoleInputDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleInputDriver {
    pub fn new() -> Self {
        Self {
            keymap: KeyMap::new(),
            event_queue: VecDeque::new(),
        }
    }

    fn read_internal(&mut self) -> io::Result<()> {
        let evt = crossterm::event::read()?;
        self.event_queue.extend(self.keymap.map(evt));
        Ok(())
    }
}

impl InputDriver for ConsoleInputDriver {
    /// Terminal events that map to nothing are consumed here, so a `true`
    /// result always means `read` has something queued.
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        let mut timeout = timeout;
        while self.event_queue.is_empty() && crossterm::event::poll(timeout)? {
            self.read_internal()?;
            timeout = Duration::ZERO;
        }
        Ok(!self.event_queue.is_empty())
    }

    fn read(&mut self) -> io::Result<InputEvent> {
        loop {
            if let Some(evt) = self.event_queue.pop_front() {
                return Ok(evt);
            }
            self.read_internal()?;
        }
    }
}

/// Presents a `BufferDisplay` in the terminal, one cell per pixel.
pub struct ConsoleOutputDriver {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    entered: bool,
}

impl ConsoleOutputDriver {
    pub fn new() -> io::Result<Self> {
        let stdout = io::stdout();
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self {
            terminal,
            entered: false,
        })
    }
}

impl OutputDriver for ConsoleOutputDriver {
    fn enter(&mut self) -> io::Result<()> {
        if self.entered {
            return Ok(());
        }
        execute!(self.terminal.backend_mut(), EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        self.terminal.hide_cursor()?;
        self.terminal.clear()?;
        self.entered = true;
        Ok(())
    }

    fn exit(&mut self) -> io::Result<()> {
        if !self.entered {
            return Ok(());
        }
        terminal::disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        self.entered = false;
        Ok(())
    }

    fn size(&mut self) -> io::Result<(u16, u16)> {
        let size = self
            .terminal
            .size()
            .map_err(|err| io::Error::other(err.to_string()))?;
        Ok((size.width, size.height))
    }

    fn present(&mut self, display: &BufferDisplay) -> io::Result<()> {
        let src = display.buffer();
        self.terminal
            .draw(|frame| {
                let area = src.area.intersection(frame.area());
                let dst = frame.buffer_mut();
                for y in area.top()..area.bottom() {
                    for x in area.left()..area.right() {
                        if let (Some(src_cell), Some(dst_cell)) =
                            (src.cell((x, y)), dst.cell_mut((x, y)))
                        {
                            *dst_cell = src_cell.clone();
                        }
                    }
                }
            })
            .map(|_| ())
            .map_err(|err| io::Error::other(err.to_string()))
    }
}

impl Drop for ConsoleOutputDriver {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

/// Plays every cue as the terminal bell.
#[derive(Debug, Default, Clone, Copy)]
pub struct BellSound;

impl Sound for BellSound {
    fn play(&mut self, cue: SoundCue) {
        tracing::trace!(%cue, "sound cue (bell)");
        let mut stdout = io::stdout();
        let _ = stdout.write_all(b"\x07").and_then(|_| stdout.flush());
    }
}
