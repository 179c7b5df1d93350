//! Glue between a driver pair and a [`Screen`]: input goes in, frames come out.

use std::io;
use std::time::Duration;

use tracing::{debug, info};

use crate::display::BufferDisplay;
use crate::drivers::{InputDriver, InputEvent, OutputDriver};
use crate::event::WindowEvent;
use crate::event_loop::{ControlFlow, EventLoop};
use crate::geometry;
use crate::screen::Screen;
use crate::sound::Sound;

/// Counters reported when a run ends.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    /// Input events handed to the window tree.
    pub events: u64,
    /// Idle ticks dispatched.
    pub ticks: u64,
    /// Frames pushed to the output driver.
    pub frames: u64,
}

/// Drive `screen` until the input side asks to quit.
///
/// Each idle iteration dispatches one `Tick`, then repaints and presents if
/// anything was dirty. A resize rebuilds the panel and repaints everything.
pub fn run_screen<I, O, S>(
    input: I,
    output: &mut O,
    screen: &mut Screen<BufferDisplay, S>,
    tick: Duration,
) -> io::Result<RunStats>
where
    I: InputDriver,
    O: OutputDriver + ?Sized,
    S: Sound,
{
    let mut stats = RunStats::default();
    let mut event_loop = EventLoop::new(input, tick);

    output.enter()?;

    let result = event_loop.run(|_, event| {
        match event {
            None => {
                screen.dispatch(WindowEvent::Tick);
                stats.ticks += 1;
                if screen.redraw() {
                    output.present(screen.display())?;
                    stats.frames += 1;
                }
            }
            Some(InputEvent::Quit) => {
                debug!("quit requested");
                return Ok(ControlFlow::Quit);
            }
            Some(InputEvent::Resize(width, height)) => resize(screen, width, height),
            Some(InputEvent::Window(event)) => {
                screen.dispatch(event);
                stats.events += 1;
            }
        }
        Ok(ControlFlow::Continue)
    });

    let exited = output.exit();
    result?;
    exited?;
    info!(
        events = stats.events,
        ticks = stats.ticks,
        frames = stats.frames,
        "run finished"
    );
    Ok(stats)
}

fn resize<S: Sound>(screen: &mut Screen<BufferDisplay, S>, width: u16, height: u16) {
    if screen.display().buffer().area == geometry::full(width, height) {
        return;
    }
    debug!(width, height, "panel resized");
    screen.display_mut().resize(width, height);
    if let Some(root) = screen.root() {
        screen
            .registry_mut()
            .set_rect(root, geometry::full(width, height));
    }
    screen.invalidate_all();
}
