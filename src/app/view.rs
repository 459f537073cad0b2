//! App::view(), subscriptions, and canvas rendering.

use iced::widget::canvas::{self, Canvas, Geometry, Path, Stroke};
use iced::{alignment, mouse, Color, Element, Event, Length, Pixels, Point, Rectangle, Subscription, Theme};

use crate::overlay::{TooltipTrigger, TooltipView};

use super::app::App;
use super::{CanvasMessage, Message};

/// Demo color palette.
mod palette {
    use iced::Color;

    pub const BACKGROUND: Color = Color::from_rgb(0.05, 0.05, 0.08);
    pub const SLOT_FILL: Color = Color::from_rgb(0.12, 0.12, 0.16);
    pub const SLOT_BORDER: Color = Color::from_rgb(0.35, 0.35, 0.42);
    pub const SLOT_HOVER: Color = Color::from_rgb(0.22, 0.22, 0.30);
    pub const LABEL: Color = Color::from_rgb(0.75, 0.75, 0.78);
    pub const TOOLTIP_BG: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.92);
    pub const TOOLTIP_BORDER: Color = Color::from_rgb(0.6, 0.5, 0.15);
    pub const TOOLTIP_TEXT: Color = Color::WHITE;
}

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        Canvas::new(SceneRenderer { app: self })
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            // Follow-mode repositioning runs off this tick (~60fps)
            iced::time::every(std::time::Duration::from_millis(16)).map(|_| Message::Tick),
            iced::event::listen_with(filter_window_events),
        ])
    }
}

/// Map window focus/resize events to app messages.
fn filter_window_events(
    event: Event,
    _status: iced::event::Status,
    _window: iced::window::Id,
) -> Option<Message> {
    match event {
        Event::Window(iced::window::Event::Focused) => Some(Message::WindowFocusChanged(true)),
        Event::Window(iced::window::Event::Unfocused) => Some(Message::WindowFocusChanged(false)),
        Event::Window(iced::window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    }
}

/// Canvas renderer for the demo scene and the tooltip panel.
struct SceneRenderer<'a> {
    app: &'a App,
}

impl canvas::Program<Message> for SceneRenderer<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        match event {
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                if bounds.contains(*position) {
                    let local = Point::new(position.x - bounds.x, position.y - bounds.y);
                    return Some(canvas::Action::publish(Message::CanvasEvent(
                        CanvasMessage::MouseMove(local),
                    )));
                }
                None
            }
            Event::Mouse(mouse::Event::CursorLeft) => Some(canvas::Action::publish(
                Message::CanvasEvent(CanvasMessage::CursorLeft),
            )),
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self.app.frame_cache.draw(renderer, bounds.size(), |frame| {
            frame.fill_rectangle(Point::ORIGIN, bounds.size(), palette::BACKGROUND);

            for (i, trigger) in self.app.triggers.iter().enumerate() {
                let hovered = self.app.hovered == Some(i);
                draw_trigger_region(frame, trigger, hovered);
            }

            // Panel last so it overlays the scene
            if let Some(view) = self.app.overlay.view()
                && view.is_visible()
            {
                draw_tooltip_panel(frame, view);
            }
        });

        vec![geometry]
    }
}

/// A color with its alpha multiplied by `alpha`.
fn scaled(color: Color, alpha: f32) -> Color {
    Color { a: color.a * alpha, ..color }
}

/// Draw one hoverable region: fill, border, and its label line.
fn draw_trigger_region(frame: &mut canvas::Frame, trigger: &TooltipTrigger, hovered: bool) {
    let rect = trigger.rect();
    let fill = if hovered { palette::SLOT_HOVER } else { palette::SLOT_FILL };
    frame.fill_rectangle(rect.position(), rect.size(), fill);

    let outline = Path::rectangle(rect.position(), rect.size());
    frame.stroke(
        &outline,
        Stroke::default().with_color(palette::SLOT_BORDER).with_width(1.0),
    );

    let label = trigger.text().lines().next().unwrap_or_default();
    frame.fill_text(canvas::Text {
        content: label.to_string(),
        position: rect.center(),
        color: palette::LABEL,
        size: Pixels(10.0),
        line_height: iced::widget::text::LineHeight::default(),
        font: iced::Font::DEFAULT,
        align_x: alignment::Horizontal::Center.into(),
        align_y: alignment::Vertical::Center,
        shaping: iced::widget::text::Shaping::Advanced,
        max_width: f32::INFINITY,
    });
}

/// Draw the tooltip panel: background, border, centered text. The view's
/// alpha scales every layer, matching its opacity-toggle contract.
fn draw_tooltip_panel(frame: &mut canvas::Frame, view: &TooltipView) {
    let rect = view.panel_rect();
    let alpha = view.alpha();
    frame.fill_rectangle(rect.position(), rect.size(), scaled(palette::TOOLTIP_BG, alpha));

    let outline = Path::rectangle(rect.position(), rect.size());
    frame.stroke(
        &outline,
        Stroke::default()
            .with_color(scaled(palette::TOOLTIP_BORDER, alpha))
            .with_width(1.0),
    );

    frame.fill_text(canvas::Text {
        content: view.text().to_string(),
        position: rect.center(),
        color: scaled(palette::TOOLTIP_TEXT, alpha),
        size: Pixels(view.font_size()),
        line_height: iced::widget::text::LineHeight::default(),
        font: iced::Font::DEFAULT,
        align_x: alignment::Horizontal::Center.into(),
        align_y: alignment::Vertical::Center,
        shaping: iced::widget::text::Shaping::Advanced,
        max_width: f32::INFINITY,
    });
}
