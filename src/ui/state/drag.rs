// SPDX-License-Identifier: MPL-2.0
//! Drag session state
//!
//! Records the reference origin of an in-progress panel drag.

use super::binding::{Binding, BindingKind};

/// An active panel drag. Exists only between drag start and drag end.
///
/// The session owns the pointer listener binding, so destroying the session
/// releases the move/end listeners with it.
#[derive(Debug)]
pub struct DragSession {
    /// Pointer y-coordinate when the drag started.
    start_pointer_y: f32,

    /// Panel offset when the drag started.
    start_offset: f32,

    /// Latched once the drag has pulled a closed panel past the reveal threshold.
    revealed: bool,

    _pointer: Binding,
}

impl DragSession {
    /// Starts a drag, acquiring the pointer listeners.
    pub fn begin(pointer_y: f32, offset: f32) -> Self {
        Self {
            start_pointer_y: pointer_y,
            start_offset: offset,
            revealed: false,
            _pointer: Binding::acquire(BindingKind::Pointer),
        }
    }

    /// Unclamped offset for the current pointer position.
    #[must_use]
    pub fn candidate_offset(&self, pointer_y: f32) -> f32 {
        let delta = pointer_y - self.start_pointer_y;
        self.start_offset + delta
    }

    /// Marks the panel as visually open for the rest of this drag.
    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}
