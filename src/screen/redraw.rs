use super::Screen;
use crate::context::DrawContext;
use crate::display::Display;
use crate::sound::Sound;

impl<D: Display, S: Sound> Screen<D, S> {
    /// Paint one frame: run the root's draw hook, which walks the tree
    /// top-down and repaints whatever is marked invalid.
    ///
    /// Returns true if anything was dirty before the pass.
    pub fn redraw(&mut self) -> bool {
        let Some(root) = self.registry.root() else {
            return false;
        };
        let dirty = self.registry.needs_redraw(root);
        let mut cx = DrawContext::new(&mut self.registry, &mut self.display);
        cx.draw_window(root);
        dirty
    }

    /// Force a full repaint on the next `redraw`, e.g. after the panel contents
    /// were lost.
    pub fn invalidate_all(&mut self) {
        if let Some(root) = self.registry.root() {
            self.registry.mark_invalid(root);
        }
    }
}
