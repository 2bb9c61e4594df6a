// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Interaction state kept apart from the widgets that render it.

pub mod binding;
pub mod drag;

pub use binding::{Binding, BindingKind};
pub use drag::DragSession;
