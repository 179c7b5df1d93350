use ratatui::layout::Rect;
use ratatui::style::Color;
use slotmap::SlotMap;

use super::{Window, WindowClass, WindowId};
use crate::error::{Error, Result};

/// Arena owning every window record of one screen.
///
/// Parent/child links are id-valued, so a window destroyed mid-traversal leaves
/// behind ids that simply stop resolving instead of dangling references.
/// Sibling order is insertion order.
#[derive(Debug, Default)]
pub struct WindowRegistry {
    windows: SlotMap<WindowId, Window>,
    root: Option<WindowId>,
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a record with registry defaults and link it as the last child
    /// of `parent`. The class `init` hook is not run here.
    pub fn insert(
        &mut self,
        class: &'static dyn WindowClass,
        parent: Option<WindowId>,
        rect: Rect,
    ) -> Result<WindowId> {
        match parent {
            Some(parent_id) if !self.contains(parent_id) => {
                return Err(Error::NoSuchWindow(parent_id));
            }
            None if self.root.is_some() => return Err(Error::RootExists),
            _ => {}
        }
        let id = self
            .windows
            .insert_with_key(|id| Window::new(id, class, parent, rect));
        match parent.and_then(|parent_id| self.windows.get_mut(parent_id)) {
            Some(parent_window) => parent_window.children.push(id),
            None => self.root = Some(id),
        }
        tracing::debug!(window_id = ?id, parent = ?parent, kind = ?class.kind(), "opened window");
        Ok(id)
    }

    /// Unlink and drop the subtree rooted at `id`.
    ///
    /// Returns the removed records with every child ahead of its parent, so the
    /// caller can run `done` hooks bottom-up. A dead id removes nothing.
    pub fn remove(&mut self, id: WindowId) -> Vec<Window> {
        if !self.contains(id) {
            return Vec::new();
        }
        if let Some(parent_id) = self.parent_of(id)
            && let Some(parent) = self.windows.get_mut(parent_id)
        {
            parent.children.retain(|child| *child != id);
        }
        if self.root == Some(id) {
            self.root = None;
        }
        let mut order = self.subtree(id);
        order.reverse();
        let removed: Vec<Window> = order
            .into_iter()
            .filter_map(|victim| self.windows.remove(victim))
            .collect();
        tracing::debug!(window_id = ?id, count = removed.len(), "closed window subtree");
        removed
    }

    pub fn get(&self, id: WindowId) -> Option<&Window> {
        self.windows.get(id)
    }

    pub fn get_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.windows.get_mut(id)
    }

    pub fn contains(&self, id: WindowId) -> bool {
        self.windows.contains_key(id)
    }

    pub fn root(&self) -> Option<WindowId> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Ids of the subtree rooted at `id` in pre-order (parent before children,
    /// siblings in order). Empty for a dead id.
    pub fn subtree(&self, id: WindowId) -> Vec<WindowId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            let Some(window) = self.windows.get(next) else {
                continue;
            };
            out.push(next);
            stack.extend(window.children.iter().rev().copied());
        }
        out
    }

    /// Every live id, pre-order from the root.
    pub fn iter_ids(&self) -> Vec<WindowId> {
        self.root.map(|root| self.subtree(root)).unwrap_or_default()
    }

    pub fn children_of(&self, id: WindowId) -> &[WindowId] {
        self.windows
            .get(id)
            .map(|window| window.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn parent_of(&self, id: WindowId) -> Option<WindowId> {
        self.windows.get(id).and_then(|window| window.parent)
    }

    pub fn first_child(&self, id: WindowId) -> Option<WindowId> {
        self.children_of(id).first().copied()
    }

    pub fn is_enabled(&self, id: WindowId) -> bool {
        self.windows.get(id).is_some_and(|window| window.enabled)
    }

    pub fn is_visible(&self, id: WindowId) -> bool {
        self.windows.get(id).is_some_and(|window| window.visible)
    }

    pub fn is_invalid(&self, id: WindowId) -> bool {
        self.windows.get(id).is_some_and(|window| window.invalid)
    }

    /// The sibling list `id` lives in, and its position there.
    fn sibling_slot(&self, id: WindowId) -> Option<(&[WindowId], usize)> {
        let parent = self.parent_of(id)?;
        let siblings = self.children_of(parent);
        let index = siblings.iter().position(|sibling| *sibling == id)?;
        Some((siblings, index))
    }

    pub fn next_sibling(&self, id: WindowId) -> Option<WindowId> {
        let (siblings, index) = self.sibling_slot(id)?;
        siblings.get(index + 1).copied()
    }

    pub fn prev_sibling(&self, id: WindowId) -> Option<WindowId> {
        let (siblings, index) = self.sibling_slot(id)?;
        index.checked_sub(1).map(|prev| siblings[prev])
    }

    /// Closest enabled sibling after `id`, skipping any run of disabled ones.
    /// `None` past the end of the list; never wraps.
    pub fn next_enabled(&self, id: WindowId) -> Option<WindowId> {
        let (siblings, index) = self.sibling_slot(id)?;
        siblings[index + 1..]
            .iter()
            .copied()
            .find(|sibling| self.is_enabled(*sibling))
    }

    /// Closest enabled sibling before `id`. `None` past the start of the list.
    pub fn prev_enabled(&self, id: WindowId) -> Option<WindowId> {
        let (siblings, index) = self.sibling_slot(id)?;
        siblings[..index]
            .iter()
            .rev()
            .copied()
            .find(|sibling| self.is_enabled(*sibling))
    }

    /// First enabled child of `id`, if any.
    pub fn first_enabled_child(&self, id: WindowId) -> Option<WindowId> {
        let first = self.first_child(id)?;
        if self.is_enabled(first) {
            Some(first)
        } else {
            self.next_enabled(first)
        }
    }

    /// Mark `id` and its whole subtree for repaint.
    pub fn mark_invalid(&mut self, id: WindowId) {
        for victim in self.subtree(id) {
            if let Some(window) = self.windows.get_mut(victim) {
                window.invalid = true;
            }
        }
    }

    /// Mark the direct children of `id` for repaint.
    pub fn invalidate_children(&mut self, id: WindowId) {
        let children = self.children_of(id).to_vec();
        for child in children {
            if let Some(window) = self.windows.get_mut(child) {
                window.invalid = true;
            }
        }
    }

    /// Whether `id` or anything below it still has to be painted.
    ///
    /// Hidden subtrees never paint, so their stale flags do not count.
    pub fn needs_redraw(&self, id: WindowId) -> bool {
        let Some(window) = self.windows.get(id) else {
            return false;
        };
        if !window.visible {
            return false;
        }
        window.invalid
            || window
                .children
                .iter()
                .any(|&child| self.needs_redraw(child))
    }

    /// Returns true when the flag actually changed.
    ///
    /// Focus is left alone; `EventContext::set_enabled` and
    /// `Screen::set_enabled` also move focus off a disabled window.
    pub fn set_enabled(&mut self, id: WindowId, enabled: bool) -> bool {
        self.update(id, |window| {
            let changed = window.enabled != enabled;
            window.enabled = enabled;
            changed
        })
    }

    /// Hiding or showing a window repaints it and its subtree; a hidden
    /// container leaves its area to whoever paints underneath, so the parent is
    /// dirtied too.
    pub fn set_visible(&mut self, id: WindowId, visible: bool) -> bool {
        let changed = self.update(id, |window| {
            let changed = window.visible != visible;
            window.visible = visible;
            changed
        });
        if changed {
            match self.parent_of(id) {
                Some(parent) if !visible => self.mark_invalid(parent),
                _ => self.mark_invalid(id),
            }
        }
        changed
    }

    pub fn set_tag(&mut self, id: WindowId, tag: u16) {
        if let Some(window) = self.windows.get_mut(id) {
            window.tag = tag;
        }
    }

    pub fn set_rect(&mut self, id: WindowId, rect: Rect) {
        if self.update(id, |window| {
            let changed = window.rect != rect;
            window.rect = rect;
            changed
        }) {
            match self.parent_of(id) {
                Some(parent) => self.mark_invalid(parent),
                None => self.mark_invalid(id),
            }
        }
    }

    pub fn set_color_back(&mut self, id: WindowId, color: Color) {
        self.update(id, |window| {
            let changed = window.color_back != color;
            window.color_back = color;
            changed
        });
    }

    /// Apply `f` to a live window; invalidates it when `f` reports a change.
    fn update(&mut self, id: WindowId, f: impl FnOnce(&mut Window) -> bool) -> bool {
        let Some(window) = self.windows.get_mut(id) else {
            return false;
        };
        let changed = f(window);
        if changed {
            window.invalid = true;
        }
        changed
    }
}
