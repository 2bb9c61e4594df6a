// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Panel**: Reveal panel geometry and snap thresholds
//! - **Grid**: Thumbnail grid layout

// ==========================================================================
// Panel Geometry
// ==========================================================================

/// Largest panel offset, as a fraction of the viewport height.
pub const PANEL_MAX_HEIGHT_RATIO: f32 = 0.85;

/// Resting offset of the open anchor, as a fraction of the viewport height.
pub const PANEL_OPEN_HEIGHT_RATIO: f32 = 0.7;

/// Offset (px) past which a drag from the closed state shows the panel as open.
pub const PANEL_REVEAL_THRESHOLD_PX: f32 = 100.0;

/// Offset (px) at or past which a released drag commits to the open anchor.
pub const PANEL_SNAP_THRESHOLD_PX: f32 = 150.0;

// ==========================================================================
// Thumbnail Grid
// ==========================================================================

/// Default number of thumbnail columns.
pub const DEFAULT_GRID_COLUMNS: u16 = 3;

/// Minimum number of thumbnail columns.
pub const MIN_GRID_COLUMNS: u16 = 1;

/// Maximum number of thumbnail columns.
pub const MAX_GRID_COLUMNS: u16 = 8;

/// Default thumbnail height in pixels.
pub const DEFAULT_THUMBNAIL_HEIGHT: f32 = 160.0;

/// Minimum thumbnail height in pixels.
pub const MIN_THUMBNAIL_HEIGHT: f32 = 48.0;

/// Maximum thumbnail height in pixels.
pub const MAX_THUMBNAIL_HEIGHT: f32 = 480.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(PANEL_OPEN_HEIGHT_RATIO < PANEL_MAX_HEIGHT_RATIO);
    assert!(PANEL_REVEAL_THRESHOLD_PX < PANEL_SNAP_THRESHOLD_PX);
    assert!(MIN_GRID_COLUMNS <= DEFAULT_GRID_COLUMNS);
    assert!(DEFAULT_GRID_COLUMNS <= MAX_GRID_COLUMNS);
    assert!(MIN_THUMBNAIL_HEIGHT <= DEFAULT_THUMBNAIL_HEIGHT);
    assert!(DEFAULT_THUMBNAIL_HEIGHT <= MAX_THUMBNAIL_HEIGHT);
};
