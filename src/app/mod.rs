//! Iced-based demo application for the tooltip overlay.
//!
//! This module is split into:
//! - `app`: App struct and initialization
//! - `scene`: demo trigger layout
//! - `mouse`: hover hit testing and enter/exit dispatch
//! - `update`: App::update() and message handling
//! - `view`: App::view(), subscriptions, and canvas rendering

mod app;
mod mouse;
mod scene;
mod update;
mod view;

use std::cell::RefCell;

use iced::{Point, Size};

use crate::config::OverlayConfig;
use crate::render::OverlayFontSystem;

pub use app::App;

/// Canvas-specific messages.
#[derive(Debug, Clone)]
pub enum CanvasMessage {
    MouseMove(Point),
    CursorLeft,
}

/// Application messages.
#[derive(Debug, Clone)]
pub enum Message {
    CanvasEvent(CanvasMessage),
    /// Per-frame tick driving the mouse-follow update.
    Tick,
    /// Window gained (true) or lost (false) focus.
    WindowFocusChanged(bool),
    WindowResized(Size),
}

// Thread-local storage for init params (App::boot is a plain fn).
thread_local! {
    pub(crate) static INIT_CONFIG: RefCell<Option<OverlayConfig>> = const { RefCell::new(None) };
    pub(crate) static INIT_FONTS: RefCell<Option<OverlayFontSystem>> = const { RefCell::new(None) };
    pub(crate) static INIT_WINDOW: RefCell<Option<Size>> = const { RefCell::new(None) };
}

/// Run the demo UI with the given config, fonts, and initial window size.
pub fn run_ui(config: OverlayConfig, fonts: OverlayFontSystem, window: Size) -> crate::Result<()> {
    INIT_CONFIG.with(|cell| *cell.borrow_mut() = Some(config));
    INIT_FONTS.with(|cell| *cell.borrow_mut() = Some(fonts));
    INIT_WINDOW.with(|cell| *cell.borrow_mut() = Some(window));

    iced::application(App::boot, App::update, App::view)
        .title(App::title)
        .subscription(App::subscription)
        .theme(App::theme)
        .window_size((window.width, window.height))
        .run()?;

    Ok(())
}
