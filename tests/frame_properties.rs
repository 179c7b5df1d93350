use std::cell::RefCell;

use dial_wm::geometry;
use dial_wm::{
    BufferDisplay, ClassKind, Display, DrawContext, EventContext, FRAME, Screen, Sound, SoundCue,
    Window, WindowClass, WindowEvent, WindowId,
};
use ratatui::layout::Rect;
use ratatui::style::Color;

#[derive(Debug, Default)]
struct Cues(Vec<SoundCue>);

impl Sound for Cues {
    fn play(&mut self, cue: SoundCue) {
        self.0.push(cue);
    }
}

thread_local! {
    static RECEIVED: RefCell<Vec<(WindowId, WindowEvent)>> = const { RefCell::new(Vec::new()) };
}

/// Leaf that logs every event it gets and paints itself white.
#[derive(Debug)]
struct Tracer;

static TRACER: Tracer = Tracer;

impl WindowClass for Tracer {
    fn kind(&self) -> ClassKind {
        ClassKind::Leaf("tracer")
    }

    fn init(&self, window: &mut Window, _display: &dyn Display) {
        window.enabled = true;
        window.color_back = Color::White;
    }

    fn draw(&self, cx: &mut DrawContext<'_>, id: WindowId) {
        let Some(window) = cx.window_mut(id) else {
            return;
        };
        if window.invalid {
            window.invalid = false;
            let (rect, color) = (window.rect, window.color_back);
            cx.fill_rect(rect, color);
        }
    }

    fn event(&self, _cx: &mut EventContext<'_>, id: WindowId, event: WindowEvent) {
        RECEIVED.with(|log| log.borrow_mut().push((id, event)));
    }
}

fn received() -> Vec<(WindowId, WindowEvent)> {
    RECEIVED.with(|log| log.borrow_mut().drain(..).collect())
}

type TestScreen = Screen<BufferDisplay, Cues>;

fn screen() -> TestScreen {
    Screen::new(BufferDisplay::new(320, 240), Cues::default())
}

/// Root frame with one tracer per entry, enabled as given.
fn tracers(s: &mut TestScreen, enabled: &[bool]) -> (WindowId, Vec<WindowId>) {
    let root = s.create_window(&FRAME, None, geometry::EMPTY).unwrap();
    let kids = enabled
        .iter()
        .enumerate()
        .map(|(i, &on)| {
            let rect = Rect::new(i as u16 * 10, 0, 10, 10);
            let id = s.create_window(&TRACER, Some(root), rect).unwrap();
            s.set_enabled(id, on);
            id
        })
        .collect();
    (root, kids)
}

#[test]
fn frame_with_empty_rect_covers_the_display() {
    let mut s = screen();
    let root = s.create_window(&FRAME, None, geometry::EMPTY).unwrap();
    let w = s.window(root).unwrap();
    assert_eq!(w.rect, Rect::new(0, 0, 320, 240));
    assert!(w.enabled);
    assert!(w.parent_role);
    assert_eq!(w.color_back, Color::Black);
    assert_eq!(w.kind(), ClassKind::Frame);
}

#[test]
fn frame_keeps_an_explicit_rect() {
    let mut s = screen();
    let root = s.create_window(&FRAME, None, geometry::EMPTY).unwrap();
    let sub = s
        .create_window(&FRAME, Some(root), Rect::new(10, 20, 100, 50))
        .unwrap();
    assert_eq!(s.window(sub).unwrap().rect, Rect::new(10, 20, 100, 50));
}

#[test]
fn clean_frame_draws_nothing() {
    let mut s = screen();
    s.create_window(&FRAME, None, geometry::EMPTY).unwrap();
    assert!(s.redraw());
    let fills = s.display().fill_count();
    assert!(!s.redraw());
    assert_eq!(s.display().fill_count(), fills);
}

#[test]
fn repainting_a_frame_dirties_every_child() {
    let mut s = screen();
    let (root, kids) = tracers(&mut s, &[true, true, true]);
    s.redraw();
    assert!(kids.iter().all(|&k| !s.registry().is_invalid(k)));

    s.registry_mut().get_mut(root).unwrap().invalid = true;
    let before = s.display().fill_count();
    s.redraw();
    // Root fill plus one fill per child.
    assert_eq!(s.display().fill_count() - before, 4);
    assert_eq!(s.display().pixel(5, 5), Some(Color::White));
    assert_eq!(s.display().pixel(100, 100), Some(Color::Black));
}

#[test]
fn encoder_skips_disabled_siblings() {
    let mut s = screen();
    let (root, kids) = tracers(&mut s, &[true, false, false, true, true]);
    s.set_focus(kids[0]);
    s.set_capture(Some(root));
    received();

    s.dispatch(WindowEvent::EncUp(1));
    assert_eq!(s.focused(), Some(kids[3]));
    assert!(s.sound().0.is_empty());
    assert_eq!(
        received(),
        vec![
            (kids[0], WindowEvent::FocusLost),
            (kids[3], WindowEvent::FocusGained)
        ]
    );
}

#[test]
fn encoder_stops_at_the_end_with_one_cue() {
    let mut s = screen();
    let (root, kids) = tracers(&mut s, &[true, false, false, true, true]);
    s.set_focus(kids[4]);
    s.set_capture(Some(root));

    s.dispatch(WindowEvent::EncUp(3));
    assert_eq!(s.focused(), Some(kids[4]));
    assert_eq!(s.sound().0, vec![SoundCue::BlindAlert]);
}

#[test]
fn encoder_stops_at_the_start_with_one_cue() {
    let mut s = screen();
    let (root, kids) = tracers(&mut s, &[true, false, false, true, true]);
    s.set_focus(kids[0]);
    s.set_capture(Some(root));

    s.dispatch(WindowEvent::EncDown(1));
    assert_eq!(s.focused(), Some(kids[0]));
    assert_eq!(s.sound().0, vec![SoundCue::BlindAlert]);

    s.set_focus(kids[4]);
    s.dispatch(WindowEvent::EncDown(3));
    assert_eq!(s.focused(), Some(kids[4]));
    assert_eq!(s.sound().0, vec![SoundCue::BlindAlert, SoundCue::BlindAlert]);
}

#[test]
fn regained_capture_pulls_focus_inside() {
    let mut s = screen();
    let root = s.create_window(&FRAME, None, geometry::EMPTY).unwrap();
    let outside = s.create_window(&TRACER, Some(root), geometry::EMPTY).unwrap();
    let sub = s
        .create_window(&FRAME, Some(root), Rect::new(0, 0, 50, 50))
        .unwrap();
    let first = s.create_window(&TRACER, Some(sub), geometry::EMPTY).unwrap();
    let second = s.create_window(&TRACER, Some(sub), geometry::EMPTY).unwrap();
    s.set_enabled(first, false);
    s.set_focus(outside);

    s.set_capture(Some(sub));
    assert_eq!(s.captured(), Some(sub));
    assert_eq!(s.focused(), Some(second));
}

#[test]
fn click_reaches_the_tagged_window_and_it_takes_capture() {
    let mut s = screen();
    let (root, kids) = tracers(&mut s, &[true, true]);
    s.registry_mut().set_tag(kids[1], 7);
    s.set_focus(kids[1]);
    s.set_capture(Some(root));
    received();

    s.dispatch(WindowEvent::BtnDown);
    assert_eq!(s.captured(), Some(kids[1]));
    assert_eq!(
        received(),
        vec![
            (kids[1], WindowEvent::Click(7)),
            (kids[1], WindowEvent::CaptureGranted)
        ]
    );

    // Input now goes to the capture holder, not the frame.
    s.dispatch(WindowEvent::EncUp(1));
    assert_eq!(s.focused(), Some(kids[1]));
    assert_eq!(received(), vec![(kids[1], WindowEvent::EncUp(1))]);
}

#[test]
fn untagged_window_takes_capture_without_click() {
    let mut s = screen();
    let (root, kids) = tracers(&mut s, &[true]);
    s.set_focus(kids[0]);
    s.set_capture(Some(root));
    received();

    s.dispatch(WindowEvent::BtnDown);
    assert_eq!(s.captured(), Some(kids[0]));
    assert_eq!(received(), vec![(kids[0], WindowEvent::CaptureGranted)]);
}

#[test]
fn destroyed_capture_holder_falls_back_to_focus() {
    let mut s = screen();
    let (_root, kids) = tracers(&mut s, &[true, true]);
    s.set_focus(kids[0]);
    s.set_capture(Some(kids[1]));
    s.destroy_window(kids[1]);
    received();

    assert!(s.dispatch(WindowEvent::Hold));
    assert_eq!(received(), vec![(kids[0], WindowEvent::Hold)]);
    assert!(s.window(kids[1]).is_none());
}
