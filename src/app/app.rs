//! App struct definition and core initialization.

use iced::widget::canvas::Cache;
use iced::{Point, Size, Task, Theme, Vector};

use crate::config::OverlayConfig;
use crate::overlay::{TooltipOverlay, TooltipTrigger, TooltipView};
use crate::render::OverlayFontSystem;

use super::{scene, Message, INIT_CONFIG, INIT_FONTS, INIT_WINDOW};

/// Application state.
pub struct App {
    pub(crate) overlay: TooltipOverlay,
    pub(crate) fonts: OverlayFontSystem,
    pub(crate) triggers: Vec<TooltipTrigger>,
    /// Index into `triggers` of the currently hovered element.
    pub(crate) hovered: Option<usize>,
    /// Current mouse position in canvas coordinates.
    pub(crate) mouse_position: Option<Point>,
    pub(crate) screen_size: Size,
    pub(crate) frame_cache: Cache,
}

impl App {
    pub fn title(_state: &Self) -> String {
        "Tooltip Overlay Demo".to_string()
    }

    pub fn theme(_state: &Self) -> Theme {
        Theme::Dark
    }

    pub fn boot() -> (Self, Task<Message>) {
        let config = INIT_CONFIG
            .with(|cell| cell.borrow_mut().take())
            .unwrap_or_default();
        let fonts = INIT_FONTS
            .with(|cell| cell.borrow_mut().take())
            .unwrap_or_else(|| OverlayFontSystem::new(None));
        let screen_size = INIT_WINDOW
            .with(|cell| cell.borrow_mut().take())
            .unwrap_or_else(|| Size::new(1280.0, 720.0));

        let mut overlay = TooltipOverlay::new(
            Vector::new(config.follow_offset.0, config.follow_offset.1),
            screen_size,
        );
        overlay.bind_view(TooltipView::new(
            Vector::new(config.panel_padding.0, config.panel_padding.1),
            config.font_size,
        ));

        let app = App {
            overlay,
            fonts,
            triggers: scene::build_triggers(screen_size),
            hovered: None,
            mouse_position: None,
            screen_size,
            frame_cache: Cache::new(),
        };

        (app, Task::none())
    }

    /// Redraw the canvas on the next frame.
    pub(crate) fn invalidate(&self) {
        self.frame_cache.clear();
    }
}
