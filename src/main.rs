use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use indoc::indoc;
use ratatui::layout::Rect;
use ratatui::style::Color;
use tracing::{Level, info};

use dial_wm::constants::DEFAULT_TICK;
use dial_wm::drivers::OutputDriver;
use dial_wm::drivers::console::{BellSound, ConsoleInputDriver, ConsoleOutputDriver};
use dial_wm::runner::run_screen;
use dial_wm::{
    BufferDisplay, ClassKind, Display, DrawContext, EventContext, FRAME, Screen, SilentSound,
    Sound, SoundCue, Window, WindowClass, WindowEvent, WindowId, geometry, theme, tracing_sub,
};

const KEY_HELP: &str = indoc! {"
    Keys:
      Up / k / Right      encoder one step forward
      Down / j / Left     encoder one step back
      PageUp / PageDown   encoder five steps
      Enter / Space       push button
      h                   hold
      q / Esc / Ctrl-C    quit
"};

const MIN_PANEL: (u16, u16) = (16, 12);

/// Tag of the tile that flips its colour when clicked.
const TOGGLE_TAG: u16 = 7;
/// Tag of the tile that leaves the sub-frame.
const BACK_TAG: u16 = 9;

const PALETTE: [Color; 6] = [
    Color::Rgb(0, 110, 160),
    Color::Rgb(40, 140, 60),
    Color::Rgb(160, 40, 40),
    Color::Rgb(120, 60, 160),
    Color::Rgb(170, 150, 30),
    Color::Rgb(90, 90, 90),
];

#[derive(Parser, Debug)]
#[command(
    name = "dial-sim",
    version = env!("CARGO_PKG_VERSION"),
    about = "Terminal simulator for an encoder-driven window tree",
    after_help = KEY_HELP
)]
struct Cli {
    /// Panel width in pixels (one terminal cell each). Defaults to the terminal width.
    #[arg(long, value_name = "PIXELS")]
    width: Option<u16>,

    /// Panel height in pixels. Defaults to the terminal height.
    #[arg(long, value_name = "PIXELS")]
    height: Option<u16>,

    /// Idle tick interval.
    #[arg(long = "tick-ms", value_name = "MS", default_value_t = DEFAULT_TICK.as_millis() as u64)]
    tick_ms: u64,

    /// Append trace output to this file. Without it nothing is logged.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// One of error, warn, info, debug, trace.
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    log_level: String,

    /// Ring the terminal bell for sound cues.
    #[arg(long)]
    bell: bool,
}

struct SimConfig {
    width: Option<u16>,
    height: Option<u16>,
    tick: Duration,
    log_file: Option<PathBuf>,
    log_level: Level,
    bell: bool,
}

impl TryFrom<&Cli> for SimConfig {
    type Error = String;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        if cli.width.is_some_and(|w| w < MIN_PANEL.0) {
            return Err(format!("width must be at least {}", MIN_PANEL.0));
        }
        if cli.height.is_some_and(|h| h < MIN_PANEL.1) {
            return Err(format!("height must be at least {}", MIN_PANEL.1));
        }
        if !(1..=1000).contains(&cli.tick_ms) {
            return Err("tick-ms must be between 1 and 1000".to_string());
        }
        let log_level = cli
            .log_level
            .parse::<Level>()
            .map_err(|_| format!("unknown log level '{}'", cli.log_level))?;
        Ok(Self {
            width: cli.width,
            height: cli.height,
            tick: Duration::from_millis(cli.tick_ms),
            log_file: cli.log_file.clone(),
            log_level,
            bell: cli.bell,
        })
    }
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let config =
        SimConfig::try_from(&cli).map_err(|msg| io::Error::new(io::ErrorKind::InvalidInput, msg))?;
    tracing_sub::init(config.log_level, config.log_file.as_deref())?;

    let mut output = ConsoleOutputDriver::new()?;
    let (term_width, term_height) = output.size()?;
    let width = config.width.unwrap_or(term_width).max(MIN_PANEL.0);
    let height = config.height.unwrap_or(term_height).max(MIN_PANEL.1);

    let sound: Box<dyn Sound> = if config.bell {
        Box::new(BellSound)
    } else {
        Box::new(SilentSound)
    };
    let mut screen = Screen::new(BufferDisplay::new(width, height), sound);
    build_demo(&mut screen).map_err(io::Error::other)?;
    screen.sound_mut().play(SoundCue::Start);

    let stats = run_screen(
        ConsoleInputDriver::new(),
        &mut output,
        &mut screen,
        config.tick,
    )?;
    drop(output);

    println!(
        "{} input events, {} ticks, {} frames",
        stats.events, stats.ticks, stats.frames
    );
    Ok(())
}

/// Root frame with a column of tiles on the left and a sub-frame on the right.
fn build_demo<S: Sound>(screen: &mut Screen<BufferDisplay, S>) -> dial_wm::Result<()> {
    let area = screen.display().area();
    let root = screen.create_window(&FRAME, None, geometry::EMPTY)?;

    let half = area.width / 2;
    let column = Rect::new(1, 1, half.saturating_sub(2), area.height.saturating_sub(2));
    let tiles = tile_rects(column, 4);
    let mut first = None;
    for (i, rect) in tiles.into_iter().enumerate() {
        let id = screen.create_window(&TILE, Some(root), rect)?;
        screen.registry_mut().set_color_back(id, PALETTE[i % PALETTE.len()]);
        first.get_or_insert(id);
        match i {
            1 => screen.set_enabled(id, false),
            2 => screen.registry_mut().set_tag(id, TOGGLE_TAG),
            _ => {}
        }
    }

    let sub_rect = Rect::new(half, 1, area.width - half - 1, area.height.saturating_sub(2));
    let sub = screen.create_window(&FRAME, Some(root), sub_rect)?;
    screen.registry_mut().set_color_back(sub, theme::panel_back());
    for (i, rect) in tile_rects(geometry::inset(sub_rect, 1), 3)
        .into_iter()
        .enumerate()
    {
        let id = screen.create_window(&TILE, Some(sub), rect)?;
        screen.registry_mut().set_color_back(id, PALETTE[(i + 3) % PALETTE.len()]);
        if i == 2 {
            screen.registry_mut().set_tag(id, BACK_TAG);
        }
    }

    if let Some(first) = first {
        screen.set_focus(first);
    }
    screen.set_capture(Some(root));
    Ok(())
}

/// Split `area` into `count` stacked tiles with a one-pixel gap.
fn tile_rects(area: Rect, count: u16) -> Vec<Rect> {
    let pitch = area.height / count.max(1);
    (0..count)
        .map(|i| {
            Rect::new(
                area.x,
                area.y + i * pitch,
                area.width,
                pitch.saturating_sub(1),
            )
        })
        .collect()
}

/// Demo leaf: a coloured block with a focus border and an edit indicator.
///
/// While it holds capture the encoder cycles its colour and the button hands
/// capture back to the parent frame.
#[derive(Debug)]
struct TileClass;

static TILE: TileClass = TileClass;

impl WindowClass for TileClass {
    fn kind(&self) -> ClassKind {
        ClassKind::Leaf("tile")
    }

    fn init(&self, window: &mut Window, _display: &dyn Display) {
        window.enabled = true;
        window.color_back = PALETTE[0];
        window.color_text = theme::item_fg();
    }

    fn draw(&self, cx: &mut DrawContext<'_>, id: WindowId) {
        let Some(window) = cx.window_mut(id) else {
            return;
        };
        if !window.visible || !window.invalid {
            return;
        }
        window.invalid = false;
        let border = if !window.enabled {
            theme::item_disabled_back()
        } else if window.focused {
            theme::item_focused_back()
        } else {
            theme::item_back()
        };
        let (rect, fill, marker) = (window.rect, window.color_back, window.color_text);
        cx.fill_rect(rect, border);
        let inner = geometry::inset(rect, 1);
        cx.fill_rect(inner, fill);
        if !geometry::is_empty(inner) {
            cx.fill_rect(Rect::new(inner.x, inner.y, 2.min(inner.width), 1), marker);
        }
    }

    fn event(&self, cx: &mut EventContext<'_>, id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CaptureGranted if cx.captured_id() == Some(id) => {
                set_marker(cx, id, theme::item_captured_back());
            }
            WindowEvent::CaptureReleased => set_marker(cx, id, theme::item_fg()),
            WindowEvent::EncUp(steps) => cycle_color(cx, id, steps as usize),
            WindowEvent::EncDown(steps) => {
                cycle_color(cx, id, PALETTE.len() - steps as usize % PALETTE.len())
            }
            WindowEvent::BtnDown => {
                let parent = cx.registry().parent_of(id);
                cx.play(SoundCue::Click);
                cx.set_capture(parent);
            }
            WindowEvent::Click(TOGGLE_TAG) => {
                let next = match cx.window(id).map(|w| w.color_back) {
                    Some(Color::White) => PALETTE[0],
                    _ => Color::White,
                };
                info!(tag = TOGGLE_TAG, "toggle tile clicked");
                if let Some(window) = cx.window_mut(id) {
                    window.color_back = next;
                    window.invalid = true;
                }
            }
            WindowEvent::Click(BACK_TAG) => leave_sub_frame(cx, id),
            _ => {}
        }
    }
}

fn set_marker(cx: &mut EventContext<'_>, id: WindowId, color: Color) {
    if let Some(window) = cx.window_mut(id) {
        window.color_text = color;
        window.invalid = true;
    }
}

fn cycle_color(cx: &mut EventContext<'_>, id: WindowId, steps: usize) {
    let Some(window) = cx.window_mut(id) else {
        return;
    };
    let current = PALETTE
        .iter()
        .position(|c| *c == window.color_back)
        .unwrap_or(0);
    window.color_back = PALETTE[(current + steps) % PALETTE.len()];
    window.invalid = true;
}

/// Focus the sub-frame itself and give capture back to the root.
fn leave_sub_frame(cx: &mut EventContext<'_>, id: WindowId) {
    let Some(sub) = cx.registry().parent_of(id) else {
        return;
    };
    let root = cx.registry().parent_of(sub);
    cx.play(SoundCue::Click);
    cx.set_focus(sub);
    cx.set_capture(root);
}
