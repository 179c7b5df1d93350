use std::io;
use std::time::{Duration, Instant};

use clap::Parser;
use dial_wm::{BufferDisplay, FRAME, Screen, SilentSound, WindowEvent, WindowId};
use ratatui::layout::Rect;

#[derive(Parser, Debug)]
#[command(
    name = "dial-bench",
    version = env!("CARGO_PKG_VERSION"),
    about = "Headless dispatch and redraw benchmark for the window tree"
)]
struct BenchCli {
    /// Child windows under the root frame.
    #[arg(short = 'w', long = "windows", value_name = "COUNT", default_value_t = 64)]
    windows: u16,

    /// Encoder events to dispatch.
    #[arg(short = 'e', long = "events", value_name = "COUNT", default_value_t = 100_000)]
    events: u64,

    /// Panel size as WIDTHxHEIGHT.
    #[arg(short = 's', long = "size", value_name = "WxH", default_value = "320x240")]
    size: String,
}

struct BenchConfig {
    windows: u16,
    events: u64,
    width: u16,
    height: u16,
}

impl TryFrom<&BenchCli> for BenchConfig {
    type Error = String;

    fn try_from(cli: &BenchCli) -> Result<Self, Self::Error> {
        if !(1..=4096).contains(&cli.windows) {
            return Err("windows must be between 1 and 4096".to_string());
        }
        if cli.events == 0 {
            return Err("events must be at least 1".to_string());
        }
        let (width, height) = cli
            .size
            .split_once('x')
            .and_then(|(w, h)| Some((w.parse::<u16>().ok()?, h.parse::<u16>().ok()?)))
            .ok_or_else(|| format!("size '{}' is not WIDTHxHEIGHT", cli.size))?;
        if width == 0 || height == 0 {
            return Err("size must be non-zero".to_string());
        }
        Ok(Self {
            windows: cli.windows,
            events: cli.events,
            width,
            height,
        })
    }
}

struct BenchStats {
    dispatch: Duration,
    redraw: Duration,
    frames: u64,
    fills: u64,
}

impl BenchStats {
    fn final_report(&self, config: &BenchConfig) -> String {
        let per = |d: Duration| d.as_nanos() as f64 / config.events as f64;
        format!(
            "{} windows, {} events on {}x{}\n\
             dispatch: {:.1?} total, {:.0} ns/event\n\
             redraw:   {:.1?} total, {:.0} ns/event\n\
             frames: {}, fills: {}",
            config.windows,
            config.events,
            config.width,
            config.height,
            self.dispatch,
            per(self.dispatch),
            self.redraw,
            per(self.redraw),
            self.frames,
            self.fills,
        )
    }
}

fn main() -> io::Result<()> {
    let args = BenchCli::parse();
    let config = BenchConfig::try_from(&args)
        .map_err(|msg| io::Error::new(io::ErrorKind::InvalidInput, msg))?;

    let mut screen = Screen::new(BufferDisplay::new(config.width, config.height), SilentSound);
    build_grid(&mut screen, &config).map_err(io::Error::other)?;
    let stats = run_benchmark(&mut screen, &config);
    println!("{}", stats.final_report(&config));
    Ok(())
}

type BenchScreen = Screen<BufferDisplay, SilentSound>;

/// Root frame plus `windows` child frames laid out in a grid.
fn build_grid(screen: &mut BenchScreen, config: &BenchConfig) -> dial_wm::Result<()> {
    let root = screen.create_window(&FRAME, None, Rect::ZERO)?;
    let cols = (config.windows as f64).sqrt().ceil() as u16;
    let rows = config.windows.div_ceil(cols);
    let cell_w = (config.width / cols).max(1);
    let cell_h = (config.height / rows).max(1);
    let mut first: Option<WindowId> = None;
    for i in 0..config.windows {
        let rect = Rect::new((i % cols) * cell_w, (i / cols) * cell_h, cell_w, cell_h);
        let id = screen.create_window(&FRAME, Some(root), rect)?;
        first.get_or_insert(id);
    }
    if let Some(first) = first {
        screen.set_focus(first);
    }
    screen.set_capture(Some(root));
    screen.redraw();
    Ok(())
}

/// Sweep the encoder back and forth across the children, repainting after
/// every event.
fn run_benchmark(screen: &mut BenchScreen, config: &BenchConfig) -> BenchStats {
    let span = u64::from(config.windows.max(2) - 1);
    let fills_before = screen.display().fill_count();
    let mut stats = BenchStats {
        dispatch: Duration::ZERO,
        redraw: Duration::ZERO,
        frames: 0,
        fills: 0,
    };

    for i in 0..config.events {
        let event = if (i / span) % 2 == 0 {
            WindowEvent::EncUp(1)
        } else {
            WindowEvent::EncDown(1)
        };

        let start = Instant::now();
        screen.dispatch(event);
        stats.dispatch += start.elapsed();

        let start = Instant::now();
        if screen.redraw() {
            stats.frames += 1;
        }
        stats.redraw += start.elapsed();
    }

    stats.fills = screen.display().fill_count() - fills_before;
    stats
}
