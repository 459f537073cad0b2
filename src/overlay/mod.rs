//! Tooltip overlay: view panel, overlay service, and hover triggers.
//!
//! This module is split into:
//! - `view`: the visual panel (text, auto-sized background, opacity)
//! - `manager`: the overlay service (placement, clamping, mouse-follow)
//! - `trigger`: per-element hover handlers
//! - `placement`: pure screen-placement math

mod manager;
pub mod placement;
mod trigger;
mod view;

pub use manager::TooltipOverlay;
pub use trigger::TooltipTrigger;
pub use view::TooltipView;

use iced::Size;

/// Host text-measurement collaborator: preferred size of a string under
/// the current font and style.
pub trait MeasureText {
    fn measure(&mut self, text: &str, font_size: f32) -> Size;
}
