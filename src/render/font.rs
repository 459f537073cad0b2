//! Font management using cosmic-text.
//!
//! Loads TTF/OTF fonts from a directory into a cosmic-text FontSystem for
//! text shaping and measurement. When no fonts can be loaded the system
//! stays usable headless via a deterministic size approximation.

use std::path::Path;

use cosmic_text::{Buffer, Metrics, Shaping, fontdb};
use iced::Size;

use crate::overlay::MeasureText;

/// Shaping bounds large enough that tooltip text never wraps during
/// measurement; wrapping is not part of the panel-sizing contract.
const MEASURE_BOUNDS: f32 = 10000.0;

/// Average glyph advance as a fraction of the font size, used when no font
/// files are available to shape against.
const FALLBACK_ADVANCE_RATIO: f32 = 0.58;

/// Line height for a given font size.
fn line_height(font_size: f32) -> f32 {
    (font_size * 1.2).ceil()
}

/// Manages tooltip fonts via cosmic-text.
///
/// Holds a `FontSystem` with only the fonts found in the configured
/// directory (no system fonts) and the family name measurement shapes with.
pub struct OverlayFontSystem {
    font_system: cosmic_text::FontSystem,
    /// Family of the first successfully loaded face; None = fallback mode.
    family: Option<String>,
    loaded: usize,
}

impl std::fmt::Debug for OverlayFontSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverlayFontSystem")
            .field("family", &self.family)
            .field("loaded", &self.loaded)
            .finish()
    }
}

impl OverlayFontSystem {
    /// Create a font system from the TTF/OTF files in `fonts_dir`.
    ///
    /// A missing directory or unreadable files are logged and skipped; with
    /// nothing loaded, measurement uses the deterministic approximation.
    pub fn new(fonts_dir: Option<&Path>) -> Self {
        let mut db = fontdb::Database::new();
        let mut family = None;
        let mut loaded = 0;

        if let Some(dir) = fonts_dir {
            match std::fs::read_dir(dir) {
                Ok(entries) => {
                    for entry in entries.flatten() {
                        let path = entry.path();
                        let is_font = path
                            .extension()
                            .and_then(|e| e.to_str())
                            .is_some_and(|e| e.eq_ignore_ascii_case("ttf") || e.eq_ignore_ascii_case("otf"));
                        if !is_font {
                            continue;
                        }
                        let data = match std::fs::read(&path) {
                            Ok(d) => d,
                            Err(e) => {
                                tracing::warn!("Failed to read font {}: {e}", path.display());
                                continue;
                            }
                        };
                        if family.is_none() {
                            family = fontdb_family_name(&data);
                        }
                        db.load_font_data(data);
                        loaded += 1;
                        tracing::debug!("Loaded font {}", path.display());
                    }
                }
                Err(e) => tracing::warn!("Fonts directory {} not readable: {e}", dir.display()),
            }
        }

        if loaded == 0 {
            tracing::debug!("No fonts loaded; measuring with the fallback approximation");
        }

        let font_system = cosmic_text::FontSystem::new_with_locale_and_db("en-US".to_string(), db);
        Self { font_system, family, loaded }
    }

    /// Number of font files loaded.
    pub fn loaded_fonts(&self) -> usize {
        self.loaded
    }

    /// Create an owned `AttrsOwned` for the configured family.
    ///
    /// Owned so it does not borrow from self across `&mut font_system` calls.
    fn attrs_owned(&self) -> cosmic_text::AttrsOwned {
        let attrs = match self.family.as_deref() {
            Some(name) => cosmic_text::Attrs::new().family(cosmic_text::Family::Name(name)),
            None => cosmic_text::Attrs::new(),
        };
        cosmic_text::AttrsOwned::new(&attrs)
    }

    /// Shape `text` and return its laid-out size (widest run × run span).
    fn measure_shaped(&mut self, text: &str, font_size: f32) -> Size {
        let line_height = line_height(font_size);
        let metrics = Metrics::new(font_size, line_height);
        let attrs = self.attrs_owned();

        let mut buffer = Buffer::new(&mut self.font_system, metrics);
        buffer.set_size(&mut self.font_system, Some(MEASURE_BOUNDS), Some(MEASURE_BOUNDS));
        buffer.set_text(
            &mut self.font_system,
            text,
            &attrs.as_attrs(),
            Shaping::Advanced,
            None,
        );
        buffer.shape_until_scroll(&mut self.font_system, true);

        let runs: Vec<_> = buffer.layout_runs().collect();
        let max_width = runs.iter().map(|run| run.line_w).fold(0.0, f32::max);
        let total_height = if runs.len() <= 1 {
            line_height
        } else {
            let first_y = runs.first().map(|run| run.line_y).unwrap_or(0.0);
            runs.last()
                .map(|run| run.line_y - first_y + line_height)
                .unwrap_or(line_height)
        };

        Size::new(max_width.ceil(), total_height)
    }
}

impl MeasureText for OverlayFontSystem {
    fn measure(&mut self, text: &str, font_size: f32) -> Size {
        if text.is_empty() {
            return Size::ZERO;
        }
        if self.loaded == 0 {
            return approximate_text_size(text, font_size);
        }
        self.measure_shaped(text, font_size)
    }
}

/// Deterministic text-size approximation for when no fonts are available.
///
/// Width is the longest line's character count at an average advance;
/// height is one line-height per `\n`-separated segment.
pub fn approximate_text_size(text: &str, font_size: f32) -> Size {
    if text.is_empty() {
        return Size::ZERO;
    }
    let mut lines = 0usize;
    let mut max_chars = 0usize;
    for line in text.split('\n') {
        lines += 1;
        max_chars = max_chars.max(line.chars().count());
    }
    Size::new(
        (max_chars as f32 * font_size * FALLBACK_ADVANCE_RATIO).ceil(),
        lines as f32 * line_height(font_size),
    )
}

/// Extract the font family name from raw font data using fontdb.
fn fontdb_family_name(data: &[u8]) -> Option<String> {
    let mut tmp_db = fontdb::Database::new();
    tmp_db.load_font_data(data.to_vec());
    tmp_db
        .faces()
        .next()
        .map(|face| face.families[0].0.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_measures_zero() {
        let mut fs = OverlayFontSystem::new(None);
        assert_eq!(fs.measure("", 14.0), Size::ZERO);
    }

    #[test]
    fn fallback_is_deterministic() {
        let mut fs = OverlayFontSystem::new(None);
        let a = fs.measure("Damage: 42", 14.0);
        let b = fs.measure("Damage: 42", 14.0);
        assert_eq!(a, b);
        assert_eq!(a, approximate_text_size("Damage: 42", 14.0));
    }

    #[test]
    fn longer_text_measures_wider() {
        let mut fs = OverlayFontSystem::new(None);
        let short = fs.measure("Axe", 14.0);
        let long = fs.measure("Axe of the Mountain King", 14.0);
        assert!(long.width > short.width);
        assert_eq!(long.height, short.height);
    }

    #[test]
    fn multi_line_text_measures_taller() {
        let mut fs = OverlayFontSystem::new(None);
        let one = fs.measure("Sturdy boots", 14.0);
        let two = fs.measure("Sturdy boots\n+5 agility", 14.0);
        assert!(two.height > one.height);
    }

    #[test]
    fn fallback_width_uses_longest_line() {
        let size = approximate_text_size("ab\nabcdef\nabc", 12.0);
        assert_eq!(size, approximate_text_size("abcdef\nx\nx", 12.0));
    }

    #[test]
    fn missing_fonts_dir_loads_nothing() {
        let fs = OverlayFontSystem::new(Some(Path::new("/nonexistent/fonts")));
        assert_eq!(fs.loaded_fonts(), 0);
    }
}
