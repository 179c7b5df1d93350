//! Window tree, focus and capture core for encoder-driven embedded displays.
//!
//! A [`Screen`] owns one tree of windows. Input from a push button and a rotary
//! encoder is routed by [`Screen::dispatch`] to the window holding capture (or
//! the focused window), and [`Screen::redraw`] repaints the windows marked
//! invalid, top-down, onto a [`Display`].

pub mod constants;
pub mod context;
pub mod display;
pub mod drivers;
pub mod error;
pub mod event;
pub mod event_loop;
pub mod focus;
pub mod geometry;
pub mod runner;
pub mod screen;
pub mod sound;
pub mod theme;
pub mod tracing_sub;
pub mod window;

pub use context::{DrawContext, EventContext};
pub use display::{BufferDisplay, Display};
pub use error::{Error, Result};
pub use event::WindowEvent;
pub use focus::FocusTracker;
pub use screen::Screen;
pub use sound::{SilentSound, Sound, SoundCue};
pub use window::frame::FRAME;
pub use window::registry::WindowRegistry;
pub use window::{ClassKind, Window, WindowClass, WindowId};
