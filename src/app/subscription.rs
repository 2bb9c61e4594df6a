// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window geometry is always tracked because the panel anchors are derived
//! from the viewport height. Everything else is owned by the gallery and only
//! subscribed while a binding is held.

use super::Message;
use crate::ui::gallery;
use iced::{event, window, Event, Subscription};

/// Window open and resize events, always active.
pub fn create_window_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        Event::Window(window::Event::Opened { size, .. } | window::Event::Resized(size)) => {
            Some(Message::WindowResized(size))
        }
        _ => None,
    })
}

/// Pointer and keyboard listeners currently held by the gallery.
pub fn create_gallery_subscription(gallery: &gallery::State) -> Subscription<Message> {
    gallery.subscription().map(Message::Gallery)
}
