use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use super::{InputDriver, InputEvent};

/// Replays a fixed list of input events; used for headless runs and tests.
///
/// After the last scripted event one poll reports "nothing pending" so the
/// consumer gets an idle pass; from then on every read yields `Quit`, so a
/// loop driven by it always terminates.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInputDriver {
    events: VecDeque<InputEvent>,
    idle_polls: usize,
    drained: bool,
}

impl ScriptedInputDriver {
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
            idle_polls: 0,
            drained: false,
        }
    }

    /// Report "nothing pending" for the next `polls` polls before replaying,
    /// to exercise idle ticks.
    pub fn with_idle_polls(mut self, polls: usize) -> Self {
        self.idle_polls = polls;
        self
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl InputDriver for ScriptedInputDriver {
    fn poll(&mut self, _timeout: Duration) -> io::Result<bool> {
        if self.idle_polls > 0 {
            self.idle_polls -= 1;
            return Ok(false);
        }
        if self.events.is_empty() && !self.drained {
            self.drained = true;
            return Ok(false);
        }
        Ok(true)
    }

    fn read(&mut self) -> io::Result<InputEvent> {
        Ok(self.events.pop_front().unwrap_or(InputEvent::Quit))
    }
}
