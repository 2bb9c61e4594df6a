// SPDX-License-Identifier: MPL-2.0
//! `reveal_gallery` is an image gallery built with the Iced GUI framework.
//!
//! A bottom-docked panel is dragged (or toggled) open to reveal a thumbnail
//! grid, and a lightbox shows one image at a time with wrap-around keyboard
//! navigation. Global pointer and keyboard listeners are held only while a drag
//! or the lightbox needs them.

pub mod app;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
