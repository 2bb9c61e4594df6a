// SPDX-License-Identifier: MPL-2.0
//! Gallery surface orchestrator.
//!
//! Composes the panel and lightbox sub-components side by side. They share the
//! image list the owner passes in on every call and are otherwise independent;
//! the one rule that spans both lives in [`State::reconcile`].

use super::input::{self, LightboxKey, PointerEvent};
use super::subcomponents::lightbox::{self, Direction};
use super::subcomponents::panel;
use crate::media::ImageList;
use iced::{event, Subscription};

/// Per-call inputs owned by the application.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    pub images: &'a ImageList,
    /// Current window height, read fresh for every message.
    pub viewport_height: f32,
}

/// Messages for the gallery surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    Pointer(PointerEvent),
    TogglePanel,
    ThumbnailPressed(usize),
    CloseLightbox,
    Navigate(Direction),
    KeyPressed(LightboxKey),
}

/// Gallery surface state.
#[derive(Debug, Default)]
pub struct State {
    panel: panel::State,
    lightbox: lightbox::State,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a gallery message.
    ///
    /// While the lightbox is open the panel accepts no new drag or toggle, but
    /// an in-progress drag can still move and end.
    ///
    /// The panel is docked to the bottom edge, so pointer positions are handed
    /// to it as the distance above that edge: pulling the handle up grows the
    /// panel.
    pub fn handle(&mut self, msg: Message, ctx: Context<'_>) {
        let len = ctx.images.len();
        let from_bottom = |window_y: f32| ctx.viewport_height - window_y;

        match msg {
            Message::Pointer(pointer) => {
                let panel_msg = match pointer {
                    PointerEvent::Start { y } => {
                        if self.lightbox.is_open() {
                            tracing::debug!("lightbox open, ignoring drag start");
                            return;
                        }
                        panel::Message::BeginDrag {
                            pointer_y: from_bottom(y),
                        }
                    }
                    PointerEvent::Move { y } => panel::Message::UpdateDrag {
                        pointer_y: from_bottom(y),
                    },
                    PointerEvent::End | PointerEvent::Cancel => panel::Message::EndDrag,
                };
                self.handle_panel(panel_msg, ctx.viewport_height);
            }
            Message::TogglePanel => {
                if self.lightbox.is_open() {
                    tracing::debug!("lightbox open, ignoring panel toggle");
                    return;
                }
                self.handle_panel(panel::Message::Toggle, ctx.viewport_height);
            }
            Message::ThumbnailPressed(index) => {
                self.lightbox.handle(lightbox::Message::Open(index), len);
            }
            Message::CloseLightbox => self.lightbox.handle(lightbox::Message::Close, len),
            Message::Navigate(direction) => {
                self.lightbox
                    .handle(lightbox::Message::Navigate(direction), len);
            }
            Message::KeyPressed(key) => {
                self.lightbox.handle(lightbox::Message::KeyPressed(key), len);
            }
        }
    }

    fn handle_panel(&mut self, msg: panel::Message, viewport_height: f32) {
        if let panel::Effect::Settled(anchor) = self.panel.handle(msg, viewport_height) {
            tracing::debug!(?anchor, offset = self.panel.offset(), "panel settled");
        }
    }

    /// Applies the cross-machine rule after the owner supplies a new list.
    ///
    /// An empty list forces both machines to their closed defaults; a shorter
    /// list closes the lightbox if its selection no longer exists.
    pub fn reconcile(&mut self, images: &ImageList) {
        if images.is_empty() {
            self.panel.reset();
            self.lightbox.close();
        } else {
            self.lightbox.reconcile(images.len());
        }
    }

    /// Global listeners currently held by the surface.
    ///
    /// Pointer events are routed only while a drag session exists and keys
    /// only while the lightbox is open.
    pub fn subscription(&self) -> Subscription<Message> {
        let pointer = if self.listens_pointer() {
            event::listen_with(|event, _status, _window| {
                input::pointer_event(&event).map(Message::Pointer)
            })
        } else {
            Subscription::none()
        };

        let keyboard = if self.listens_keys() {
            event::listen_with(|event, _status, _window| {
                input::lightbox_key(&event).map(Message::KeyPressed)
            })
        } else {
            Subscription::none()
        };

        Subscription::batch([pointer, keyboard])
    }

    /// Whether the pointer move/end listener is held.
    #[must_use]
    pub fn listens_pointer(&self) -> bool {
        self.panel.is_dragging()
    }

    /// Whether the Escape/arrow key listener is held.
    #[must_use]
    pub fn listens_keys(&self) -> bool {
        self.lightbox.is_open()
    }

    #[must_use]
    pub fn panel(&self) -> &panel::State {
        &self.panel
    }

    #[must_use]
    pub fn lightbox(&self) -> &lightbox::State {
        &self.lightbox
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.panel.is_dragging()
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.lightbox.selected_index()
    }
}
