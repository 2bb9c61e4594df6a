// SPDX-License-Identifier: MPL-2.0
//! Gallery surface: a bottom-docked reveal panel with a thumbnail grid and a
//! full-window lightbox for browsing one image at a time.

pub mod component;
pub mod handle;
pub mod input;
pub mod subcomponents;
pub mod view;

pub use component::{Context, Message, State};
pub use view::{view, ViewContext};
