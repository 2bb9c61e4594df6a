// SPDX-License-Identifier: MPL-2.0
use reveal_gallery::app::config::{self, Config, GalleryConfig, GeneralConfig};
use reveal_gallery::i18n::fluent::I18n;
use reveal_gallery::media::{ImageList, ImageRef, ImageSource};
use reveal_gallery::ui::gallery::input::{LightboxKey, PointerEvent};
use reveal_gallery::ui::gallery::subcomponents::lightbox::Direction;
use reveal_gallery::ui::gallery::subcomponents::panel::Anchor;
use reveal_gallery::ui::gallery::{Context, Message, State};
use reveal_gallery::ui::theming::ThemeMode;
use std::fs;
use tempfile::tempdir;

const VIEWPORT: f32 = 1000.0;

fn send(state: &mut State, images: &ImageList, msg: Message) {
    state.handle(
        msg,
        Context {
            images,
            viewport_height: VIEWPORT,
        },
    );
}

#[test]
fn browse_a_manifest_gallery_end_to_end() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let manifest = dir.path().join("article-gallery.json");
    fs::write(&manifest, r#"["first.jpg", "second.jpg", "third.jpg"]"#)
        .expect("Failed to write manifest");

    let images = ImageList::load(&ImageSource::from_path(&manifest)).expect("manifest loads");
    assert_eq!(images.len(), 3);

    let mut state = State::new();
    state.reconcile(&images);

    // Pull the grip up past both thresholds and release
    send(&mut state, &images, Message::Pointer(PointerEvent::Start { y: 980.0 }));
    send(&mut state, &images, Message::Pointer(PointerEvent::Move { y: 860.0 }));
    assert_eq!(state.panel().mode(), Anchor::Open);
    send(&mut state, &images, Message::Pointer(PointerEvent::Move { y: 780.0 }));
    assert_eq!(state.panel().offset(), 200.0);
    send(&mut state, &images, Message::Pointer(PointerEvent::End));
    assert_eq!(state.panel().offset(), 700.0);
    assert!(!state.is_dragging());

    // Open the last thumbnail and wrap forward with the keyboard
    send(&mut state, &images, Message::ThumbnailPressed(2));
    send(&mut state, &images, Message::KeyPressed(LightboxKey::ArrowRight));
    assert_eq!(state.selected_index(), Some(0));
    send(&mut state, &images, Message::Navigate(Direction::Previous));
    assert_eq!(state.selected_index(), Some(2));

    send(&mut state, &images, Message::KeyPressed(LightboxKey::Escape));
    assert_eq!(state.selected_index(), None);

    // The toggle closes the panel again
    send(&mut state, &images, Message::TogglePanel);
    assert_eq!(state.panel().mode(), Anchor::Closed);
    assert_eq!(state.panel().offset(), 0.0);
}

#[test]
fn short_drag_snaps_back_closed() {
    let images: ImageList = ["a.png", "b.png"].into_iter().map(ImageRef::from).collect();
    let mut state = State::new();

    send(&mut state, &images, Message::Pointer(PointerEvent::Start { y: 990.0 }));
    send(&mut state, &images, Message::Pointer(PointerEvent::Move { y: 930.0 }));
    assert_eq!(state.panel().mode(), Anchor::Closed);
    send(&mut state, &images, Message::Pointer(PointerEvent::Move { y: 870.0 }));
    assert_eq!(state.panel().mode(), Anchor::Open);
    send(&mut state, &images, Message::Pointer(PointerEvent::End));

    assert_eq!(state.panel().mode(), Anchor::Closed);
    assert_eq!(state.panel().offset(), 0.0);
}

#[test]
fn directory_source_feeds_the_gallery() {
    let dir = tempdir().expect("Failed to create temporary directory");
    for name in ["02.png", "01.jpg", "readme.md"] {
        fs::write(dir.path().join(name), b"").expect("Failed to write file");
    }

    let images = ImageList::load(&ImageSource::from_path(dir.path())).expect("scan succeeds");
    assert_eq!(images.len(), 2);

    let mut state = State::new();
    send(&mut state, &images, Message::ThumbnailPressed(1));
    assert_eq!(state.selected_index(), Some(1));

    state.reconcile(&ImageList::default());
    assert_eq!(state.selected_index(), None);
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    let initial_config = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            theme_mode: ThemeMode::Dark,
        },
        gallery: GalleryConfig::default(),
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");
    let loaded = config::load_from_path(&temp_config_file_path).expect("Failed to load config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("gallery-title"), "Gallery");

    let mut french_config = initial_config.clone();
    french_config.general.language = Some("fr".to_string());
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");
    let loaded = config::load_from_path(&temp_config_file_path).expect("Failed to load config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("gallery-title"), "Galerie");
}

#[test]
fn malformed_config_falls_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "[gallery\ncolumns = ").expect("write");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}
