//! Overlay configuration persistence.
//!
//! Stores author-set tooltip parameters (follow offset, panel padding, font
//! size, fonts directory) as JSON at
//! `~/.local/share/tooltip-overlay/config.json`. Loaded once on startup;
//! missing or malformed files fall back to defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file path.
fn default_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tooltip-overlay")
        .join("config.json")
}

/// Persisted overlay settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlayConfig {
    /// Mouse-follow offset applied to the pointer position, in screen units.
    #[serde(default = "default_follow_offset")]
    pub follow_offset: (f32, f32),
    /// Padding added to the measured text size, per axis.
    #[serde(default = "default_panel_padding")]
    pub panel_padding: (f32, f32),
    /// Tooltip text size in pixels.
    #[serde(default = "default_font_size")]
    pub font_size: f32,
    /// Directory to load TTF/OTF fonts from.
    #[serde(default)]
    pub fonts_dir: Option<PathBuf>,
    /// Path the config was loaded from (not serialized).
    #[serde(skip)]
    path: PathBuf,
}

fn default_follow_offset() -> (f32, f32) {
    (15.0, -15.0)
}
fn default_panel_padding() -> (f32, f32) {
    (16.0, 16.0)
}
fn default_font_size() -> f32 {
    14.0
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            follow_offset: default_follow_offset(),
            panel_padding: default_panel_padding(),
            font_size: default_font_size(),
            fonts_dir: None,
            path: default_path(),
        }
    }
}

impl OverlayConfig {
    /// Load from the default location, falling back to defaults on any error.
    pub fn load() -> Self {
        Self::load_from(&default_path())
    }

    /// Load from an explicit path, falling back to defaults on any error.
    pub fn load_from(path: &Path) -> Self {
        let mut config = match std::fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!("Malformed config {}: {e}", path.display());
                Self::default()
            }),
            Err(_) => Self::default(),
        };
        config.path = path.to_path_buf();
        config
    }

    /// Persist current config to the path it was loaded from.
    pub fn save(&self) -> crate::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_authoring_values() {
        let config = OverlayConfig::default();
        assert_eq!(config.follow_offset, (15.0, -15.0));
        assert_eq!(config.panel_padding, (16.0, 16.0));
        assert_eq!(config.font_size, 14.0);
        assert!(config.fonts_dir.is_none());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = OverlayConfig::load_from(&dir.path().join("nope.json"));
        assert_eq!(config.panel_padding, (16.0, 16.0));
    }

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut config = OverlayConfig::load_from(&path);
        config.follow_offset = (20.0, -5.0);
        config.font_size = 16.0;
        config.save().unwrap();

        let reloaded = OverlayConfig::load_from(&path);
        assert_eq!(reloaded.follow_offset, (20.0, -5.0));
        assert_eq!(reloaded.font_size, 16.0);
        // Unset fields keep their defaults
        assert_eq!(reloaded.panel_padding, (16.0, 16.0));
    }

    #[test]
    fn malformed_json_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        let config = OverlayConfig::load_from(&path);
        assert_eq!(config.follow_offset, (15.0, -15.0));
    }
}
