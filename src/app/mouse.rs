//! Hover hit testing and pointer enter/exit dispatch.

use iced::Point;

use super::app::App;

impl App {
    pub(super) fn handle_mouse_move(&mut self, pos: Point) {
        self.mouse_position = Some(pos);
        let new_hovered = self.hit_test(pos);
        if new_hovered == self.hovered {
            return;
        }

        // Exit fires before enter so the overlay's follow flag always
        // matches the element the pointer ends up on.
        let old_hovered = self.hovered;
        self.hovered = new_hovered;
        if let Some(old) = old_hovered
            && let Some(trigger) = self.triggers.get(old)
        {
            trigger.pointer_exit(&mut self.overlay);
        }
        if let Some(new) = new_hovered
            && let Some(trigger) = self.triggers.get(new)
        {
            trigger.pointer_enter(&mut self.overlay, &mut self.fonts);
        }
        self.invalidate();
    }

    pub(super) fn handle_cursor_left(&mut self) {
        self.mouse_position = None;
        if let Some(old) = self.hovered.take()
            && let Some(trigger) = self.triggers.get(old)
        {
            trigger.pointer_exit(&mut self.overlay);
            self.invalidate();
        }
    }

    /// Top-most trigger under the pointer. The tooltip panel itself only
    /// participates if it ever enables mouse input, which `show` never does.
    fn hit_test(&self, pos: Point) -> Option<usize> {
        if let Some(view) = self.overlay.view()
            && view.is_visible()
            && view.is_mouse_enabled()
            && view.panel_rect().contains(pos)
        {
            return None;
        }
        // Demo regions never overlap, so first hit wins.
        self.triggers.iter().position(|t| t.contains(pos))
    }
}
