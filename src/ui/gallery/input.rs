// SPDX-License-Identifier: MPL-2.0
//! Mapping of raw Iced events onto the gallery's pointer and key streams.

use iced::keyboard::{self, key::Named};
use iced::{mouse, touch, window, Event};

/// Single-pointer drag stream. Mouse and touch both map onto it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Press on the drag handle, window-absolute y.
    Start { y: f32 },
    /// Pointer moved while dragging, window-absolute y.
    Move { y: f32 },
    /// Pointer released.
    End,
    /// Input ended abnormally (touch lost, pointer left the window, focus lost).
    Cancel,
}

impl PointerEvent {
    /// Whether this event finishes a drag.
    #[must_use]
    pub fn ends_drag(self) -> bool {
        matches!(self, PointerEvent::End | PointerEvent::Cancel)
    }
}

/// Maps a global event onto the drag stream. Starts come from the handle
/// widget, so only moves and terminations are recognized here.
#[must_use]
pub fn pointer_event(event: &Event) -> Option<PointerEvent> {
    match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(PointerEvent::Move { y: position.y })
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => Some(PointerEvent::End),
        Event::Mouse(mouse::Event::CursorLeft) => Some(PointerEvent::Cancel),
        Event::Touch(touch::Event::FingerMoved { position, .. }) => {
            Some(PointerEvent::Move { y: position.y })
        }
        Event::Touch(touch::Event::FingerLifted { .. }) => Some(PointerEvent::End),
        Event::Touch(touch::Event::FingerLost { .. }) => Some(PointerEvent::Cancel),
        Event::Window(window::Event::Unfocused) => Some(PointerEvent::Cancel),
        _ => None,
    }
}

/// Keys the lightbox reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

impl From<&keyboard::Key> for LightboxKey {
    fn from(key: &keyboard::Key) -> Self {
        match key {
            keyboard::Key::Named(Named::Escape) => LightboxKey::Escape,
            keyboard::Key::Named(Named::ArrowLeft) => LightboxKey::ArrowLeft,
            keyboard::Key::Named(Named::ArrowRight) => LightboxKey::ArrowRight,
            _ => LightboxKey::Other,
        }
    }
}

/// Maps a global event onto the lightbox key stream.
#[must_use]
pub fn lightbox_key(event: &Event) -> Option<LightboxKey> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => Some(LightboxKey::from(key)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Point;

    #[test]
    fn cursor_move_maps_to_move_with_y() {
        let event = Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(12.0, 345.0),
        });
        assert_eq!(pointer_event(&event), Some(PointerEvent::Move { y: 345.0 }));
    }

    #[test]
    fn every_termination_signal_ends_the_drag() {
        let finger = touch::Finger(1);
        let events = [
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)),
            Event::Mouse(mouse::Event::CursorLeft),
            Event::Touch(touch::Event::FingerLifted {
                id: finger,
                position: Point::ORIGIN,
            }),
            Event::Touch(touch::Event::FingerLost {
                id: finger,
                position: Point::ORIGIN,
            }),
            Event::Window(window::Event::Unfocused),
        ];

        for event in events {
            let pointer = pointer_event(&event).expect("termination should map");
            assert!(pointer.ends_drag(), "{event:?} should end the drag");
        }
    }

    #[test]
    fn right_button_release_is_ignored() {
        let event = Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Right));
        assert_eq!(pointer_event(&event), None);
    }

    #[test]
    fn named_keys_map_to_lightbox_keys() {
        assert_eq!(
            LightboxKey::from(&keyboard::Key::Named(Named::Escape)),
            LightboxKey::Escape
        );
        assert_eq!(
            LightboxKey::from(&keyboard::Key::Named(Named::ArrowLeft)),
            LightboxKey::ArrowLeft
        );
        assert_eq!(
            LightboxKey::from(&keyboard::Key::Named(Named::ArrowRight)),
            LightboxKey::ArrowRight
        );
        assert_eq!(
            LightboxKey::from(&keyboard::Key::Named(Named::Space)),
            LightboxKey::Other
        );
    }
}
