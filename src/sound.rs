//! Audible feedback cues.
//!
//! Playback is fire-and-forget: the core never waits on or inspects the sound
//! subsystem.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// Encoder navigation ran into either end of the sibling list.
    BlindAlert,
    /// Button press acknowledged.
    Click,
    /// Screen brought up.
    Start,
}

impl fmt::Display for SoundCue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SoundCue::BlindAlert => "blind alert",
            SoundCue::Click => "click",
            SoundCue::Start => "start",
        };
        write!(f, "{}", s)
    }
}

pub trait Sound {
    fn play(&mut self, cue: SoundCue);
}

impl<T: Sound + ?Sized> Sound for &mut T {
    fn play(&mut self, cue: SoundCue) {
        (**self).play(cue)
    }
}

impl<T: Sound + ?Sized> Sound for Box<T> {
    fn play(&mut self, cue: SoundCue) {
        (**self).play(cue)
    }
}

/// Sound sink for targets without a speaker; cues only show up in the trace log.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSound;

impl Sound for SilentSound {
    fn play(&mut self, cue: SoundCue) {
        tracing::trace!(%cue, "sound cue (silent)");
    }
}
