// SPDX-License-Identifier: MPL-2.0
//! Image sources for the gallery.

pub mod image_list;

pub use image_list::{is_supported_image, ImageList, ImageRef, ImageSource};
