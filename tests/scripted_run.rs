use std::io;
use std::time::Duration;

use dial_wm::drivers::script::ScriptedInputDriver;
use dial_wm::drivers::{InputEvent, OutputDriver};
use dial_wm::runner::run_screen;
use dial_wm::{BufferDisplay, FRAME, Screen, SilentSound, WindowEvent, geometry};
use ratatui::layout::Rect;

#[derive(Default)]
struct Frames(Vec<BufferDisplay>);

impl OutputDriver for Frames {
    fn enter(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn exit(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn size(&mut self) -> io::Result<(u16, u16)> {
        Ok((40, 20))
    }

    fn present(&mut self, display: &BufferDisplay) -> io::Result<()> {
        self.0.push(display.clone());
        Ok(())
    }
}

#[test]
fn scripted_session_walks_into_a_sub_frame_and_back() {
    let mut s = Screen::new(BufferDisplay::new(40, 20), SilentSound);
    let root = s.create_window(&FRAME, None, geometry::EMPTY).unwrap();
    let left = s
        .create_window(&FRAME, Some(root), Rect::new(0, 0, 20, 20))
        .unwrap();
    let sub = s
        .create_window(&FRAME, Some(root), Rect::new(20, 0, 20, 20))
        .unwrap();
    let inner = s
        .create_window(&FRAME, Some(sub), Rect::new(21, 1, 8, 8))
        .unwrap();
    s.set_focus(left);
    s.set_capture(Some(root));

    let script = [
        WindowEvent::EncUp(1),
        WindowEvent::BtnDown,
        WindowEvent::EncUp(1),
    ]
    .map(InputEvent::Window);
    let mut out = Frames::default();
    let stats = run_screen(
        ScriptedInputDriver::new(script),
        &mut out,
        &mut s,
        Duration::ZERO,
    )
    .unwrap();

    // The button handed capture to the sub-frame, which focused its child;
    // the last turn hit the end of the sub-frame's list.
    assert_eq!(s.captured(), Some(sub));
    assert_eq!(s.focused(), Some(inner));
    assert_eq!(stats.events, 3);
    assert_eq!(stats.frames, 2);
    assert_eq!(out.0.len(), 2);
}
