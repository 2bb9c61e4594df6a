// SPDX-License-Identifier: MPL-2.0
//! Nested TEA sub-components for the gallery.
//!
//! Each sub-component owns its State and Message and exposes a `handle()`
//! method. The main component.rs orchestrates them.
//!
//! ## Architecture
//!
//! ```text
//! component.rs (orchestrator)
//!     ├── panel    - Drag offset, snap anchors, reveal latch
//!     └── lightbox - Selected index, wrap-around navigation
//! ```

pub mod lightbox;
pub mod panel;
