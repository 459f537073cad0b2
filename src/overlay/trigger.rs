//! Hover trigger attached to an interactive UI element.

use iced::{Point, Rectangle};

use super::manager::TooltipOverlay;
use super::MeasureText;

/// Shows a tooltip for its element while the pointer hovers it.
///
/// One trigger per hoverable element; stateless across hovers. The host's
/// hit testing decides when the pointer enters or leaves `rect` and calls
/// the two handlers.
#[derive(Debug, Clone)]
pub struct TooltipTrigger {
    text: String,
    slot_positioning: bool,
    rect: Rectangle,
    scale: f32,
}

impl TooltipTrigger {
    pub fn new(text: impl Into<String>, rect: Rectangle) -> Self {
        Self {
            text: text.into(),
            slot_positioning: false,
            rect,
            scale: 1.0,
        }
    }

    /// Anchor the tooltip beside the element instead of following the mouse.
    pub fn with_slot_positioning(mut self, slot_positioning: bool) -> Self {
        self.slot_positioning = slot_positioning;
        self
    }

    /// Scale factor applied to the element's on-screen rect.
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn rect(&self) -> Rectangle {
        self.rect
    }

    pub fn set_rect(&mut self, rect: Rectangle) {
        self.rect = rect;
    }

    pub fn uses_slot_positioning(&self) -> bool {
        self.slot_positioning
    }

    pub fn contains(&self, point: Point) -> bool {
        self.rect.contains(point)
    }

    /// Pointer entered the element: show the tooltip, unless there is
    /// nothing to show.
    pub fn pointer_enter(&self, overlay: &mut TooltipOverlay, measure: &mut impl MeasureText) {
        if self.text.is_empty() {
            return;
        }
        if self.slot_positioning {
            overlay.show_at_slot(&self.text, self.rect, self.scale, measure);
        } else {
            overlay.show_at_mouse(&self.text, measure);
        }
    }

    /// Pointer left the element: hide the tooltip.
    pub fn pointer_exit(&self, overlay: &mut TooltipOverlay) {
        overlay.hide();
    }
}
