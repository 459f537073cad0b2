//! Demo trigger layout: edge slot columns plus free-hover regions.

use iced::{Point, Rectangle, Size};

use crate::overlay::TooltipTrigger;

const SLOT_SIZE: f32 = 48.0;
const SLOT_SPACING: f32 = 16.0;
const EDGE_MARGIN: f32 = 40.0;

/// Tooltip texts for the left slot column.
const LEFT_SLOTS: &[&str] = &[
    "Iron Sword\nDamage: 42",
    "Oak Shield\nBlock: 17",
    "Sturdy Boots\nArmor: 8",
    "Healing Draught\nRestores 50 health",
];

/// Tooltip texts for the right slot column.
const RIGHT_SLOTS: &[&str] = &[
    "Silver Ring\n+3 willpower",
    "Torch\nLights dark places",
    "Rope Coil\n15 meters",
    "Empty Flask",
];

/// Build the demo's hoverable regions for the given screen size.
///
/// Both edge columns use slot positioning, so the left column shows its
/// tooltips on the right and the right column on the left. The center
/// regions follow the mouse.
pub fn build_triggers(screen: Size) -> Vec<TooltipTrigger> {
    let mut triggers = Vec::new();

    let column_height = |count: usize| count as f32 * (SLOT_SIZE + SLOT_SPACING) - SLOT_SPACING;

    let left_top = (screen.height - column_height(LEFT_SLOTS.len())) / 2.0;
    for (i, text) in LEFT_SLOTS.iter().enumerate() {
        let rect = Rectangle::new(
            Point::new(EDGE_MARGIN, left_top + i as f32 * (SLOT_SIZE + SLOT_SPACING)),
            Size::new(SLOT_SIZE, SLOT_SIZE),
        );
        triggers.push(TooltipTrigger::new(*text, rect).with_slot_positioning(true));
    }

    let right_top = (screen.height - column_height(RIGHT_SLOTS.len())) / 2.0;
    for (i, text) in RIGHT_SLOTS.iter().enumerate() {
        let rect = Rectangle::new(
            Point::new(
                screen.width - EDGE_MARGIN - SLOT_SIZE,
                right_top + i as f32 * (SLOT_SIZE + SLOT_SPACING),
            ),
            Size::new(SLOT_SIZE, SLOT_SIZE),
        );
        triggers.push(TooltipTrigger::new(*text, rect).with_slot_positioning(true));
    }

    // Free-hover regions in the middle: these follow the pointer.
    let region = Size::new(220.0, 120.0);
    triggers.push(TooltipTrigger::new(
        "Quest marker\nFollows the pointer",
        Rectangle::new(
            Point::new(screen.width / 2.0 - region.width - 20.0, screen.height / 2.0 - region.height / 2.0),
            region,
        ),
    ));
    triggers.push(TooltipTrigger::new(
        "Danger zone\nStay alert",
        Rectangle::new(
            Point::new(screen.width / 2.0 + 20.0, screen.height / 2.0 - region.height / 2.0),
            region,
        ),
    ));

    triggers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_columns_sit_on_their_screen_halves() {
        let screen = Size::new(1280.0, 720.0);
        let triggers = build_triggers(screen);
        for trigger in triggers.iter().filter(|t| t.uses_slot_positioning()) {
            let center_x = trigger.rect().center_x();
            assert!(
                center_x < screen.width / 4.0 || center_x > screen.width * 3.0 / 4.0,
                "slot at {center_x} is not near a screen edge"
            );
        }
    }

    #[test]
    fn all_triggers_have_text_and_fit_on_screen() {
        let screen = Size::new(1280.0, 720.0);
        for trigger in build_triggers(screen) {
            assert!(!trigger.text().is_empty());
            let rect = trigger.rect();
            assert!(rect.x >= 0.0 && rect.y >= 0.0);
            assert!(rect.x + rect.width <= screen.width);
            assert!(rect.y + rect.height <= screen.height);
        }
    }

    #[test]
    fn follow_regions_do_not_use_slot_positioning() {
        let triggers = build_triggers(Size::new(1280.0, 720.0));
        let follow = triggers.iter().filter(|t| !t.uses_slot_positioning()).count();
        assert_eq!(follow, 2);
    }
}
