//! Shared crate-wide constants.

use std::time::Duration;

/// Upper bound on events delivered by a single `Screen::dispatch` call,
/// including the follow-up events queued by hooks.
///
/// Two windows that keep handing capture back and forth would otherwise
/// ping-pong forever inside one tick. Anything past this bound is dropped and
/// logged.
pub const MAX_EVENTS_PER_DISPATCH: usize = 64;

/// Default period of the input poll / dispatch / redraw tick.
///
/// Units: milliseconds. Matches a 50 Hz refresh, which is what the encoder
/// hardware can realistically produce.
pub const DEFAULT_TICK: Duration = Duration::from_millis(20);

/// Encoder steps produced by a single PageUp/PageDown in the console key map.
pub const FAST_ENCODER_STEPS: u16 = 5;

/// Tag value meaning "no tag": windows carrying it never receive a proxied click.
pub const NO_TAG: u16 = 0;
