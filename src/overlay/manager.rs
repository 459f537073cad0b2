//! Tooltip overlay service: show/hide, placement, and mouse-follow.

use iced::{Point, Rectangle, Size, Vector};

use super::placement::{clamp_to_screen, slot_anchor, slot_x_offset};
use super::view::TooltipView;
use super::MeasureText;

/// Overlay service owning the single tooltip panel.
///
/// Constructed by the application's UI root and handed to whatever needs to
/// trigger tooltips. The view lives in an optional slot the host can take
/// back during teardown; every operation checks the slot and silently
/// no-ops when it is empty — the tooltip is decorative UI and must never
/// disrupt the host's control flow.
#[derive(Debug)]
pub struct TooltipOverlay {
    view: Option<TooltipView>,
    offset: Vector,
    following_mouse: bool,
    screen: Size,
}

impl TooltipOverlay {
    /// Create an overlay with the given mouse-follow offset and screen size.
    pub fn new(offset: Vector, screen: Size) -> Self {
        Self {
            view: None,
            offset,
            following_mouse: false,
            screen,
        }
    }

    /// Put a view into the overlay's slot, replacing any previous one.
    pub fn bind_view(&mut self, view: TooltipView) {
        self.view = Some(view);
    }

    /// Take the view back out, e.g. ahead of UI teardown.
    pub fn take_view(&mut self) -> Option<TooltipView> {
        self.following_mouse = false;
        self.view.take()
    }

    pub fn has_view(&self) -> bool {
        self.view.is_some()
    }

    pub fn view(&self) -> Option<&TooltipView> {
        self.view.as_ref()
    }

    /// Whether the panel is repositioned from the pointer on every tick.
    pub fn is_following_mouse(&self) -> bool {
        self.following_mouse
    }

    pub fn offset(&self) -> Vector {
        self.offset
    }

    /// Host pushes viewport dimensions here on resize.
    pub fn set_screen_size(&mut self, screen: Size) {
        self.screen = screen;
    }

    pub fn screen_size(&self) -> Size {
        self.screen
    }

    /// Show the tooltip at the pointer, following it until the next
    /// `hide`/`show_at_position`/`show_at_slot`.
    ///
    /// Positioning happens on every `tick`, not at call time, so the panel
    /// appears at the freshest pointer sample before the next render.
    pub fn show_at_mouse(&mut self, text: &str, measure: &mut impl MeasureText) {
        let Some(view) = self.view.as_mut() else { return };
        view.set_text(text, measure);
        view.show();
        self.following_mouse = true;
    }

    /// Show the tooltip at a fixed screen position, clamped on-screen.
    pub fn show_at_position(&mut self, text: &str, position: Point, measure: &mut impl MeasureText) {
        let Some(view) = self.view.as_mut() else { return };
        view.set_text(text, measure);
        view.show();
        let clamped = clamp_to_screen(position, view.size(), view.pivot(), self.screen);
        view.set_position(clamped);
        self.following_mouse = false;
    }

    /// Show the tooltip beside a slot rectangle, flipped to whichever side
    /// faces the screen center.
    ///
    /// `slot_scale` is the scale factor applied to the slot's on-screen
    /// rect, so half-widths come out in actual screen units. Vertical
    /// placement is pinned to the screen's vertical center.
    pub fn show_at_slot(
        &mut self,
        text: &str,
        slot_rect: Rectangle,
        slot_scale: f32,
        measure: &mut impl MeasureText,
    ) {
        let Some(view) = self.view.as_mut() else { return };
        view.set_text(text, measure);
        view.show();
        self.following_mouse = false;

        let anchor = slot_anchor(slot_rect);
        // Sizes measured after set_text, so half-widths are never stale
        let tooltip_half_width = view.size().width / 2.0;
        let slot_half_width = slot_rect.width * slot_scale / 2.0;
        let x_offset = slot_x_offset(
            anchor.x,
            self.screen.width,
            tooltip_half_width,
            slot_half_width,
        );

        let position = Point::new(anchor.x + x_offset, self.screen.height / 2.0);
        tracing::debug!(
            "slot tooltip at x={} (offset {x_offset}), screen {}x{}",
            position.x, self.screen.width, self.screen.height,
        );
        let clamped = clamp_to_screen(position, view.size(), view.pivot(), self.screen);
        view.set_position(clamped);
    }

    /// Hide the tooltip and stop following the mouse. Always safe to call.
    pub fn hide(&mut self) {
        if let Some(view) = self.view.as_mut() {
            view.hide();
        }
        self.following_mouse = false;
    }

    /// Per-tick follow update. Call with the most recent pointer sample
    /// before each render; a no-op outside follow mode.
    pub fn tick(&mut self, mouse_position: Point) {
        if !self.following_mouse {
            return;
        }
        let Some(view) = self.view.as_mut() else { return };
        let target = mouse_position + self.offset;
        let clamped = clamp_to_screen(target, view.size(), view.pivot(), self.screen);
        view.set_position(clamped);
    }

    /// Focus-change notification from the host. Losing focus force-hides
    /// the panel so no stale tooltip lingers after switching applications.
    pub fn handle_focus(&mut self, focused: bool) {
        if !focused {
            self.hide();
        }
    }
}
