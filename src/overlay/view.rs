//! Visual tooltip panel: text content, auto-sizing, and visibility.

use iced::{Point, Rectangle, Size, Vector};

use super::MeasureText;

/// Default anchor fraction within the panel's own rectangle.
const DEFAULT_PIVOT: (f32, f32) = (0.5, 0.5);

/// The tooltip panel. Owns text, the background size derived from it, and
/// an opacity toggle. Screen positioning is the overlay's job; the view
/// only stores the position it is given.
#[derive(Debug, Clone)]
pub struct TooltipView {
    text: String,
    panel_size: Size,
    padding: Vector,
    font_size: f32,
    position: Point,
    pivot: (f32, f32),
    alpha: f32,
    mouse_enabled: bool,
}

impl TooltipView {
    /// Create a hidden panel with the given padding and text size.
    pub fn new(padding: Vector, font_size: f32) -> Self {
        Self {
            text: String::new(),
            panel_size: Size::new(padding.x, padding.y),
            padding,
            font_size,
            position: Point::ORIGIN,
            pivot: DEFAULT_PIVOT,
            alpha: 0.0,
            mouse_enabled: false,
        }
    }

    /// Store `text` and synchronously recompute the panel size.
    ///
    /// Size is `measure(text) + padding`, so callers can position and clamp
    /// immediately after without a stale-size frame.
    pub fn set_text(&mut self, text: &str, measure: &mut impl MeasureText) {
        self.text.clear();
        self.text.push_str(text);
        self.update_size(measure);
    }

    /// Re-measure the stored text and apply `measured + padding`.
    pub fn update_size(&mut self, measure: &mut impl MeasureText) {
        let measured = measure.measure(&self.text, self.font_size);
        self.panel_size = Size::new(
            measured.width + self.padding.x,
            measured.height + self.padding.y,
        );
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current panel size, reflecting the most recent `set_text`/`update_size`.
    pub fn size(&self) -> Size {
        self.panel_size
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Make the panel fully opaque. The panel never blocks pointer events
    /// from reaching the UI underneath it.
    pub fn show(&mut self) {
        self.alpha = 1.0;
        self.mouse_enabled = false;
    }

    /// Make the panel fully transparent; size and text are kept.
    pub fn hide(&mut self) {
        self.alpha = 0.0;
    }

    pub fn is_visible(&self) -> bool {
        self.alpha > 0.0
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Whether the panel participates in pointer hit testing.
    pub fn is_mouse_enabled(&self) -> bool {
        self.mouse_enabled
    }

    /// Position of the pivot point, in screen coordinates.
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Anchor fraction used for positioning and clamping.
    pub fn pivot(&self) -> (f32, f32) {
        self.pivot
    }

    pub fn set_pivot(&mut self, pivot: (f32, f32)) {
        self.pivot = pivot;
    }

    /// Top-left rectangle of the panel, derived from position, size, pivot.
    pub fn panel_rect(&self) -> Rectangle {
        Rectangle::new(
            Point::new(
                self.position.x - self.panel_size.width * self.pivot.0,
                self.position.y - self.panel_size.height * self.pivot.1,
            ),
            self.panel_size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Measurer returning a fixed size regardless of input.
    struct FixedMeasure(Size);

    impl MeasureText for FixedMeasure {
        fn measure(&mut self, _text: &str, _font_size: f32) -> Size {
            self.0
        }
    }

    #[test]
    fn starts_hidden() {
        let view = TooltipView::new(Vector::new(16.0, 16.0), 14.0);
        assert!(!view.is_visible());
        assert!(!view.is_mouse_enabled());
    }

    #[test]
    fn panel_size_is_measured_plus_padding() {
        let mut view = TooltipView::new(Vector::new(16.0, 16.0), 14.0);
        let mut measure = FixedMeasure(Size::new(60.0, 20.0));
        view.set_text("Damage: 42", &mut measure);
        assert_eq!(view.size(), Size::new(76.0, 36.0));
    }

    #[test]
    fn show_and_hide_toggle_visibility_only() {
        let mut view = TooltipView::new(Vector::new(16.0, 16.0), 14.0);
        let mut measure = FixedMeasure(Size::new(60.0, 20.0));
        view.set_text("Damage: 42", &mut measure);
        view.show();
        assert!(view.is_visible());
        assert!(!view.is_mouse_enabled());
        view.hide();
        assert!(!view.is_visible());
        // Hide keeps text and size
        assert_eq!(view.text(), "Damage: 42");
        assert_eq!(view.size(), Size::new(76.0, 36.0));
    }

    #[test]
    fn update_size_remeasures_stored_text() {
        let mut view = TooltipView::new(Vector::new(16.0, 16.0), 14.0);
        view.set_text("Damage: 42", &mut FixedMeasure(Size::new(60.0, 20.0)));
        assert_eq!(view.size(), Size::new(76.0, 36.0));

        // Same text, new font metrics
        view.update_size(&mut FixedMeasure(Size::new(90.0, 30.0)));
        assert_eq!(view.size(), Size::new(106.0, 46.0));
        assert_eq!(view.text(), "Damage: 42");
    }

    #[test]
    fn panel_rect_respects_pivot() {
        let mut view = TooltipView::new(Vector::new(16.0, 16.0), 14.0);
        let mut measure = FixedMeasure(Size::new(84.0, 24.0));
        view.set_text("Sturdy boots", &mut measure);
        view.set_position(Point::new(500.0, 400.0));

        // Center pivot: rect centered on position
        let rect = view.panel_rect();
        assert_eq!(rect.x, 450.0);
        assert_eq!(rect.y, 380.0);

        view.set_pivot((0.0, 0.0));
        let rect = view.panel_rect();
        assert_eq!(rect.x, 500.0);
        assert_eq!(rect.y, 400.0);
    }
}
