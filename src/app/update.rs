//! App::update() and message handling.

use iced::Task;

use super::app::App;
use super::{scene, CanvasMessage, Message};

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CanvasEvent(CanvasMessage::MouseMove(pos)) => {
                self.handle_mouse_move(pos);
            }
            Message::CanvasEvent(CanvasMessage::CursorLeft) => {
                self.handle_cursor_left();
            }
            Message::Tick => {
                if self.overlay.is_following_mouse()
                    && let Some(pos) = self.mouse_position
                {
                    self.overlay.tick(pos);
                    self.invalidate();
                }
            }
            Message::WindowFocusChanged(focused) => {
                self.overlay.handle_focus(focused);
                self.invalidate();
            }
            Message::WindowResized(size) => {
                self.screen_size = size;
                self.overlay.set_screen_size(size);
                // Region layout depends on the screen size; rebuild and
                // re-derive the hover state from the last pointer sample.
                self.triggers = scene::build_triggers(size);
                self.hovered = None;
                self.overlay.hide();
                if let Some(pos) = self.mouse_position {
                    self.handle_mouse_move(pos);
                }
                self.invalidate();
            }
        }
        Task::none()
    }
}
