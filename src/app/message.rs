// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::ImageList;
use crate::ui::gallery;
use iced::Size;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    /// Result of the background image-list load.
    ImagesLoaded(Result<ImageList, Error>),
    /// Re-read the image source from disk.
    Reload,
    WindowResized(Size),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Directory to scan or JSON manifest to read.
    pub source: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `REVEAL_GALLERY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
