pub mod console;
pub mod keyboard;
pub mod output_driver;
pub mod script;

pub use output_driver::OutputDriver;

use std::io;
use std::time::Duration;

use crate::event::WindowEvent;

/// What an input driver produces: control input for the window tree, or a
/// host-level request the runner handles itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Window(WindowEvent),
    /// The panel changed size (simulator only).
    Resize(u16, u16),
    Quit,
}

pub trait InputDriver {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;
    fn read(&mut self) -> io::Result<InputEvent>;
}

impl<T: InputDriver + ?Sized> InputDriver for &mut T {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        (**self).poll(timeout)
    }

    fn read(&mut self) -> io::Result<InputEvent> {
        (**self).read()
    }
}
