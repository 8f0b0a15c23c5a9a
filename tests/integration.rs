// SPDX-License-Identifier: MPL-2.0
use hotel_showcase::config::{self, Config, RotationSettings};
use hotel_showcase::content;
use hotel_showcase::ui::state::AutoPlay;
use hotel_showcase::ui::theming::ThemeMode;
use hotel_showcase::ui::widgets::{banner_slideshow, review_carousel, room_card};
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

const SITE: &str = r#"
[hotel]
name = "Hotel Test"

[[banners]]
title = "First"
image = "images/first.jpg"

[[banners]]
title = "Second"
image = "images/second.jpg"

[[banners]]
title = "Third"
image = "images/missing.jpg"

[[reviews]]
author = "Ann"
quote = "Nice"
rating = 4

[[reviews]]
author = "Bob"
quote = "Fine"
rating = 3

[[rooms]]
id = "penthouse"
name = "Penthouse"
nightly_rate = 500
primary_image = "images/penthouse.jpg"
"#;

#[test]
fn config_file_drives_widget_rotation() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let written = Config {
        banner: RotationSettings {
            pausable: Some(false),
            interval_ms: Some(2_000),
            ..RotationSettings::default()
        },
        ..Config::default()
    };
    config::save_to_path(&written, &config_path).expect("Failed to write config file");
    let loaded_config = config::load_from_path(&config_path).expect("Failed to load config");

    let site_path = dir.path().join("site.toml");
    fs::write(&site_path, SITE).expect("Failed to write content file");
    let loaded = content::load_from_path(&site_path).expect("Failed to load content");

    let mut banner = banner_slideshow::State::new(&loaded, loaded_config.banner_rotation());
    assert_eq!(banner.rotation().config().auto_play, AutoPlay::Always);
    assert_eq!(banner.rotation().config().interval.value(), 2_000);

    // Not pausable any more: arrows keep the slideshow running.
    banner.update(banner_slideshow::Message::Next);
    assert!(banner.timer().is_some());
}

#[test]
fn images_resolve_next_to_content_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::create_dir_all(dir.path().join("images")).expect("Failed to create image dir");
    fs::write(dir.path().join("images/first.jpg"), b"jpeg").expect("Failed to write image");
    let site_path = dir.path().join("site.toml");
    fs::write(&site_path, SITE).expect("Failed to write content file");

    let loaded = content::load_from_path(&site_path).expect("Failed to load content");
    let mut banner = banner_slideshow::State::new(&loaded, Config::default().banner_rotation());

    assert_eq!(
        banner.current().image,
        Some(dir.path().join("images/first.jpg"))
    );
    banner.update(banner_slideshow::Message::GoTo(2));
    assert_eq!(banner.current().image, None);
}

#[test]
fn room_without_photos_shows_primary_image() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let site_path = dir.path().join("site.toml");
    fs::write(&site_path, SITE).expect("Failed to write content file");
    let loaded = content::load_from_path(&site_path).expect("Failed to load content");

    let room = loaded.content.rooms[0].clone();
    let card = room_card::State::new(
        room,
        loaded.base_dir.as_deref(),
        Config::default().rooms_rotation(),
    );
    assert_eq!(
        card.current_photo().item.image,
        PathBuf::from("images/penthouse.jpg")
    );
    assert!(card.timer().is_none());
}

#[test]
fn content_reload_with_fewer_reviews_clamps_position() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let site_path = dir.path().join("site.toml");
    fs::write(&site_path, SITE).expect("Failed to write content file");
    let loaded = content::load_from_path(&site_path).expect("Failed to load content");

    let mut reviews =
        review_carousel::State::new(&loaded.content, Config::default().reviews_rotation());
    reviews.update(review_carousel::Message::GoTo(1));

    let trimmed = SITE.replace(
        "[[reviews]]\nauthor = \"Bob\"\nquote = \"Fine\"\nrating = 3\n",
        "",
    );
    fs::write(&site_path, trimmed).expect("Failed to rewrite content file");
    let reloaded = content::load_from_path(&site_path).expect("Failed to reload content");
    reviews.replace_content(&reloaded.content);

    assert_eq!(reviews.rotation().len(), 1);
    assert_eq!(reviews.rotation().current_index(), Some(0));
    assert!(reviews.timer().is_none());
}

#[test]
fn theme_preference_round_trips() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let (mut loaded_config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    loaded_config.general.theme_mode = ThemeMode::Light;
    config::save_with_override(&loaded_config, Some(dir.path().to_path_buf()))
        .expect("Failed to save config");

    let (reloaded, _) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(reloaded.general.theme_mode, ThemeMode::Light);
}
