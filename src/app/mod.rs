// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the gallery surface.
//!
//! The `App` struct owns the image list, the viewport size, and the
//! localization bundle, and hands all of them to the gallery on every call.
//! Loading the list is the only side effect and runs off the UI thread.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::error::{Error, Result};
use crate::i18n::fluent::I18n;
use crate::media::{ImageList, ImageSource};
use crate::ui::gallery::{self, Context as GalleryContext};
use crate::ui::theming::ThemeMode;
use config::Config;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::path::PathBuf;

/// Root Iced application state.
#[derive(Debug)]
pub struct App {
    i18n: I18n,
    config: Config,
    gallery: gallery::State,
    images: ImageList,
    source: Option<ImageSource>,
    viewport: Size,
    theme_mode: ThemeMode,
    loading: bool,
    load_error: Option<String>,
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot, flags are only consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            config: Config::default(),
            gallery: gallery::State::new(),
            images: ImageList::default(),
            source: None,
            viewport: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
            theme_mode: ThemeMode::System,
            loading: false,
            load_error: None,
        }
    }
}

impl App {
    /// Initializes application state and kicks off asynchronous loading of the
    /// image list named in `Flags`.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) =
            config::load_with_override(flags.config_dir.as_deref().map(PathBuf::from));
        let i18n = I18n::new(flags.lang.clone(), &config);
        if let Some(key) = config_warning {
            tracing::warn!("{}", i18n.tr(&key));
        }

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            config,
            source: flags.source.map(ImageSource::from_path),
            ..Self::default()
        };

        let task = app.start_loading();
        (app, task)
    }

    fn start_loading(&mut self) -> Task<Message> {
        let Some(source) = self.source.clone() else {
            tracing::info!("no image source given");
            return Task::none();
        };

        self.loading = true;
        Task::perform(load_images(source), Message::ImagesLoaded)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.gallery.selected_index() {
            Some(index) => {
                let position = self.i18n.tr_with_args(
                    "lightbox-position",
                    &[
                        ("current", (index + 1).to_string()),
                        ("total", self.images.len().to_string()),
                    ],
                );
                format!("{position} - {app_name}")
            }
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_window_subscription(),
            subscription::create_gallery_subscription(&self.gallery),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(msg) => {
                self.gallery.handle(
                    msg,
                    GalleryContext {
                        images: &self.images,
                        viewport_height: self.viewport.height,
                    },
                );
                Task::none()
            }
            Message::ImagesLoaded(result) => {
                self.loading = false;
                match result {
                    Ok(images) => {
                        self.images = images;
                        self.load_error = None;
                    }
                    Err(err) => {
                        tracing::warn!(%err, "failed to load image list");
                        self.images = ImageList::default();
                        self.load_error = Some(err.to_string());
                    }
                }
                self.gallery.reconcile(&self.images);
                Task::none()
            }
            Message::Reload => self.start_loading(),
            Message::WindowResized(size) => {
                self.viewport = size;
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            images: &self.images,
            gallery_config: &self.config.gallery,
            viewport_height: self.viewport.height,
            has_source: self.source.is_some(),
            loading: self.loading,
            load_error: self.load_error.as_deref(),
        })
    }
}

async fn load_images(source: ImageSource) -> Result<ImageList> {
    tokio::task::spawn_blocking(move || ImageList::load(&source))
        .await
        .map_err(|err| Error::Io(err.to_string()))?
}
