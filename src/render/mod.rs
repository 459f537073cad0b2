//! Text measurement backing the tooltip panel's auto-sizing.

mod font;

pub use font::{OverlayFontSystem, approximate_text_size};
