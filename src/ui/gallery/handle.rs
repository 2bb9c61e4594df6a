// SPDX-License-Identifier: MPL-2.0
//! Drag handle drawn at the top edge of the reveal panel.

use crate::ui::design_tokens::{palette, sizing};
use crate::ui::gallery::component::Message;
use crate::ui::gallery::input::PointerEvent;
use iced::widget::{canvas, Action};
use iced::{mouse, touch, Event, Point, Rectangle, Renderer, Size, Theme};

/// Canvas program for the panel grip. A press inside its bounds starts a drag;
/// moves and releases are picked up by the global pointer subscription.
#[derive(Debug, Clone, Copy)]
pub struct DragHandle {
    /// Whether a drag is already in progress (draws the grip highlighted).
    pub active: bool,
}

impl canvas::Program<Message> for DragHandle {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if cursor.is_over(bounds) {
                    let position = cursor.position()?;
                    return Some(
                        Action::publish(Message::Pointer(PointerEvent::Start { y: position.y }))
                            .and_capture(),
                    );
                }
            }
            Event::Touch(touch::Event::FingerPressed { position, .. }) => {
                if bounds.contains(*position) {
                    return Some(
                        Action::publish(Message::Pointer(PointerEvent::Start { y: position.y }))
                            .and_capture(),
                    );
                }
            }
            _ => {}
        }

        None
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let grip_size = Size::new(sizing::HANDLE_GRIP_WIDTH, sizing::HANDLE_GRIP_THICKNESS);
        let top_left = Point::new(
            (bounds.width - grip_size.width) / 2.0,
            (bounds.height - grip_size.height) / 2.0,
        );
        let grip = canvas::Path::rounded_rectangle(
            top_left,
            grip_size,
            (sizing::HANDLE_GRIP_THICKNESS / 2.0).into(),
        );
        let color = if self.active {
            palette::PRIMARY_400
        } else {
            palette::GRAY_400
        };
        frame.fill(&grip, color);

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.active {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}
