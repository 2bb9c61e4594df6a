// SPDX-License-Identifier: MPL-2.0
//! Lightbox sub-component: modal carousel with wraparound navigation.

use crate::ui::gallery::input::LightboxKey;
use crate::ui::state::{Binding, BindingKind};

/// Direction of carousel navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    /// Index one step away from `index` in a list of `len` items, wrapping at
    /// both ends. `len` must be non-zero.
    #[must_use]
    pub fn step(self, index: usize, len: usize) -> usize {
        debug_assert!(len > 0);
        match self {
            Direction::Previous => {
                if index == 0 {
                    len - 1
                } else {
                    index - 1
                }
            }
            Direction::Next => {
                if index + 1 >= len {
                    0
                } else {
                    index + 1
                }
            }
        }
    }
}

/// Open lightbox: the viewed index plus the keyboard listener it holds.
#[derive(Debug)]
struct Selection {
    index: usize,
    _keyboard: Binding,
}

/// Lightbox sub-component state. Closed when there is no selection.
#[derive(Debug, Default)]
pub struct State {
    selection: Option<Selection>,
}

/// Messages for the lightbox sub-component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Open(usize),
    Close,
    Navigate(Direction),
    KeyPressed(LightboxKey),
}

impl State {
    /// Handle a lightbox message against the current list length.
    pub fn handle(&mut self, msg: Message, len: usize) {
        match msg {
            Message::Open(index) => {
                self.open(index, len);
            }
            Message::Close => self.close(),
            Message::Navigate(direction) => self.navigate(direction, len),
            Message::KeyPressed(key) => self.handle_key(key, len),
        }
    }

    /// Shows the image at `index`. Out-of-range indices are rejected.
    pub fn open(&mut self, index: usize, len: usize) -> bool {
        if index >= len {
            tracing::warn!(index, len, "rejecting lightbox open with invalid index");
            return false;
        }

        match self.selection.as_mut() {
            Some(selection) => selection.index = index,
            None => {
                self.selection = Some(Selection {
                    index,
                    _keyboard: Binding::acquire(BindingKind::Keyboard),
                });
            }
        }
        true
    }

    /// Closes the lightbox and releases the keyboard listener. Idempotent.
    pub fn close(&mut self) {
        self.selection = None;
    }

    /// Steps the selection with wraparound. No-op while closed.
    pub fn navigate(&mut self, direction: Direction, len: usize) {
        if len == 0 {
            self.close();
            return;
        }

        if let Some(selection) = self.selection.as_mut() {
            selection.index = direction.step(selection.index, len);
        }
    }

    /// Keyboard contract while open: Escape closes, arrows navigate.
    pub fn handle_key(&mut self, key: LightboxKey, len: usize) {
        if !self.is_open() {
            return;
        }

        match key {
            LightboxKey::Escape => self.close(),
            LightboxKey::ArrowLeft => self.navigate(Direction::Previous, len),
            LightboxKey::ArrowRight => self.navigate(Direction::Next, len),
            LightboxKey::Other => {}
        }
    }

    /// Closes the lightbox if its index no longer fits the current list.
    pub fn reconcile(&mut self, len: usize) {
        if self.selection.as_ref().is_some_and(|s| s.index >= len) {
            tracing::debug!(len, "image list no longer contains selection, closing");
            self.close();
        }
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selection.as_ref().map(|s| s.index)
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.selection.is_some()
    }
}
