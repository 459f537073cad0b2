//! Screen placement helpers for the tooltip panel.

use iced::{Point, Rectangle, Size};

/// Clamp one coordinate to `[min, max]`, tolerating `min > max`.
///
/// When the panel is larger than the screen the bounds invert; the min
/// bound wins so the panel's left/top edge stays on-screen.
pub fn clamp_axis(value: f32, min: f32, max: f32) -> f32 {
    value.min(max).max(min)
}

/// Clamp a pivot-point position so the panel stays within the screen.
///
/// `pivot` is the anchor fraction within the panel's own rectangle:
/// (0, 0) = top-left edge is the anchor point, (1, 1) = bottom-right.
pub fn clamp_to_screen(position: Point, size: Size, pivot: (f32, f32), screen: Size) -> Point {
    let (px, py) = pivot;
    let min_x = size.width * px;
    let max_x = screen.width - size.width * (1.0 - px);
    let min_y = size.height * py;
    let max_y = screen.height - size.height * (1.0 - py);

    Point::new(
        clamp_axis(position.x, min_x, max_x),
        clamp_axis(position.y, min_y, max_y),
    )
}

/// Horizontal offset from a slot's anchor to the tooltip's pivot.
///
/// Slots on the right half of the screen get the tooltip on their left,
/// and vice versa, so the panel never starts off the nearer screen edge.
pub fn slot_x_offset(
    slot_x: f32,
    screen_width: f32,
    tooltip_half_width: f32,
    slot_half_width: f32,
) -> f32 {
    let total_offset = tooltip_half_width + slot_half_width;
    if slot_x >= screen_width / 2.0 {
        -total_offset
    } else {
        total_offset
    }
}

/// Screen-space anchor point of a slot rectangle (its center).
pub fn slot_anchor(rect: Rectangle) -> Point {
    rect.center()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Size = Size::new(1920.0, 1080.0);

    #[test]
    fn in_bounds_position_is_unchanged() {
        let p = clamp_to_screen(Point::new(515.0, 385.0), Size::new(76.0, 36.0), (0.5, 0.5), SCREEN);
        assert_eq!(p, Point::new(515.0, 385.0));
    }

    #[test]
    fn clamps_to_all_four_edges() {
        let size = Size::new(100.0, 40.0);
        let pivot = (0.5, 0.5);
        let left = clamp_to_screen(Point::new(-500.0, 540.0), size, pivot, SCREEN);
        assert_eq!(left.x, 50.0);
        let right = clamp_to_screen(Point::new(5000.0, 540.0), size, pivot, SCREEN);
        assert_eq!(right.x, 1870.0);
        let top = clamp_to_screen(Point::new(960.0, -10.0), size, pivot, SCREEN);
        assert_eq!(top.y, 20.0);
        let bottom = clamp_to_screen(Point::new(960.0, 9999.0), size, pivot, SCREEN);
        assert_eq!(bottom.y, 1060.0);
    }

    #[test]
    fn clamp_respects_arbitrary_pivots() {
        let size = Size::new(200.0, 100.0);
        for &pivot in &[(0.0, 0.0), (1.0, 1.0), (0.25, 0.75), (0.5, 0.5)] {
            for &candidate in &[
                Point::new(-1000.0, -1000.0),
                Point::new(0.0, 0.0),
                Point::new(960.0, 540.0),
                Point::new(3000.0, 3000.0),
            ] {
                let p = clamp_to_screen(candidate, size, pivot, SCREEN);
                let min_x = size.width * pivot.0;
                let max_x = SCREEN.width - size.width * (1.0 - pivot.0);
                let min_y = size.height * pivot.1;
                let max_y = SCREEN.height - size.height * (1.0 - pivot.1);
                assert!(p.x >= min_x && p.x <= max_x, "x={} out of [{min_x},{max_x}] for pivot {pivot:?}", p.x);
                assert!(p.y >= min_y && p.y <= max_y, "y={} out of [{min_y},{max_y}] for pivot {pivot:?}", p.y);
            }
        }
    }

    #[test]
    fn clamp_is_idempotent() {
        let size = Size::new(120.0, 50.0);
        for &pivot in &[(0.0, 0.0), (0.5, 0.5), (0.9, 0.1)] {
            for &candidate in &[Point::new(-50.0, 2000.0), Point::new(1900.0, 10.0)] {
                let once = clamp_to_screen(candidate, size, pivot, SCREEN);
                let twice = clamp_to_screen(once, size, pivot, SCREEN);
                assert_eq!(once, twice);
            }
        }
    }

    #[test]
    fn oversized_panel_collapses_to_min() {
        // Panel wider than the screen: min_x (1500) > max_x (420).
        let p = clamp_to_screen(
            Point::new(960.0, 540.0),
            Size::new(3000.0, 40.0),
            (0.5, 0.5),
            SCREEN,
        );
        assert_eq!(p.x, 1500.0);
    }

    #[test]
    fn slot_on_right_half_flips_left() {
        assert_eq!(slot_x_offset(1800.0, 1920.0, 50.0, 40.0), -90.0);
        // Exactly at center counts as the right half
        assert_eq!(slot_x_offset(960.0, 1920.0, 50.0, 40.0), -90.0);
    }

    #[test]
    fn slot_on_left_half_flips_right() {
        assert_eq!(slot_x_offset(100.0, 1920.0, 50.0, 40.0), 90.0);
    }

    #[test]
    fn slot_anchor_is_rect_center() {
        let rect = Rectangle::new(Point::new(10.0, 20.0), Size::new(40.0, 60.0));
        assert_eq!(slot_anchor(rect), Point::new(30.0, 50.0));
    }
}
