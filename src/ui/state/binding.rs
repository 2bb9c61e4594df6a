// SPDX-License-Identifier: MPL-2.0
//! Scoped acquisition of global input listeners.
//!
//! A [`Binding`] stands for one registered global listener. The application
//! subscription only routes a listener kind while a binding of that kind is
//! alive, so dropping the binding is the release. Every exit path (normal end,
//! cancel, reset, unmount) therefore releases through `Drop`.

/// Global listener kinds the gallery surface can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    /// Pointer move/end/cancel stream, held for the duration of a panel drag.
    Pointer,
    /// Escape/arrow key stream, held while the lightbox is open.
    Keyboard,
}

/// Live registration of a global listener. Not cloneable: there is exactly one
/// owner, and the listener is gone when that owner drops it.
#[derive(Debug)]
#[must_use = "dropping a binding releases its listener immediately"]
pub struct Binding {
    kind: BindingKind,
}

impl Binding {
    /// Registers a listener of the given kind.
    pub fn acquire(kind: BindingKind) -> Self {
        tracing::trace!(?kind, "listener acquired");
        Self { kind }
    }
}

impl Drop for Binding {
    fn drop(&mut self) {
        tracing::trace!(kind = ?self.kind, "listener released");
    }
}
