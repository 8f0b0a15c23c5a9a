// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the showcase widgets.
//!
//! The `App` struct owns one state per widget instance (banner, hero, reviews
//! and one card per room), loads configuration and content at start-up and
//! turns every live rotation timer into a subscription.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::content::{self, LoadedContent};
use crate::ui::state::Timer;
use crate::ui::theming::ThemeMode;
use crate::ui::widgets::{banner_slideshow, hero_rotator, review_carousel, room_card};
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    config: Config,
    /// Config directory used for saving; `None` resolves through [`paths`].
    config_dir: Option<PathBuf>,
    content: LoadedContent,
    /// Content file to re-read on reload; `None` when showing embedded content.
    content_path: Option<PathBuf>,
    theme_mode: ThemeMode,
    /// `theme_mode` resolved once, so the system theme is not queried every frame.
    theme: Theme,
    banner: banner_slideshow::State,
    hero: hero_rotator::State,
    reviews: review_carousel::State,
    rooms: Vec<room_card::State>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("content_path", &self.content_path)
            .field("theme_mode", &self.theme_mode)
            .field("rooms", &self.rooms.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 860;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 720;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
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

impl App {
    /// Loads configuration and content and mounts every widget.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            log::warn!("{warning}; using default settings");
        }

        let content_path = flags
            .content
            .map(PathBuf::from)
            .or_else(|| config.content.path.clone());

        let (loaded, content_warning) = content::load_or_embedded(content_path.as_deref());
        if let Some(warning) = content_warning {
            log::warn!("{warning}; showing embedded content");
        }
        // Reloading only makes sense for the file that was actually loaded.
        let content_path = content_path.filter(|_| loaded.base_dir.is_some());

        let theme_mode = flags.theme.unwrap_or(config.general.theme_mode);

        (
            Self::from_parts(config, None, loaded, content_path, theme_mode),
            Task::none(),
        )
    }

    fn from_parts(
        config: Config,
        config_dir: Option<PathBuf>,
        content: LoadedContent,
        content_path: Option<PathBuf>,
        theme_mode: ThemeMode,
    ) -> Self {
        let banner = banner_slideshow::State::new(&content, config.banner_rotation());
        let hero = hero_rotator::State::new(&content, config.hero_rotation());
        let reviews = review_carousel::State::new(&content.content, config.reviews_rotation());
        let rooms = content
            .content
            .rooms
            .iter()
            .cloned()
            .map(|room| {
                room_card::State::new(room, content.base_dir.as_deref(), config.rooms_rotation())
            })
            .collect();

        Self {
            config,
            config_dir,
            content,
            content_path,
            theme_mode,
            theme: theme_mode.theme(),
            banner,
            hero,
            reviews,
            rooms,
        }
    }

    fn title(&self) -> String {
        let hotel = &self.content.content.hotel.name;
        if hotel.is_empty() {
            "Hotel Showcase".to_string()
        } else {
            format!("{hotel} - Hotel Showcase")
        }
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn set_theme_mode(&mut self, mode: ThemeMode) {
        self.theme_mode = mode;
        self.theme = mode.theme();
    }

    /// Every timer currently requested by a widget.
    fn timers(&self) -> Vec<Timer> {
        [self.banner.timer(), self.hero.timer(), self.reviews.timer()]
            .into_iter()
            .chain(self.rooms.iter().map(room_card::State::timer))
            .flatten()
            .collect()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_rotation_subscription(self.timers())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(navbar_message) => update::handle_navbar_message(self, navbar_message),
            Message::Banner(msg) => {
                update::log_effect("banner", self.banner.update(msg));
            }
            Message::Hero(msg) => {
                update::log_effect("hero", self.hero.update(msg));
            }
            Message::Reviews(msg) => {
                update::log_effect("reviews", self.reviews.update(msg));
            }
            Message::Room { id, message } => update::handle_room_message(self, &id, message),
            Message::RotationTick(key) => update::handle_rotation_tick(self, key),
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::navbar;
    use crate::ui::state::rotation::Effect;
    use crate::ui::widgets::theme_switch;
    use std::fs;
    use tempfile::tempdir;

    fn embedded_app() -> App {
        let loaded = content::load_embedded().expect("embedded content");
        App::from_parts(Config::default(), None, loaded, None, ThemeMode::Light)
    }

    const TWO_ROOMS: &str = r#"
        [[banners]]
        title = "One"
        image = "one.jpg"

        [[banners]]
        title = "Two"
        image = "two.jpg"

        [[rooms]]
        id = "a"
        name = "Room A"
        nightly_rate = 100
        primary_image = "a.jpg"
        [[rooms.photos]]
        image = "a-1.jpg"
        [[rooms.photos]]
        image = "a-2.jpg"
        [[rooms.photos]]
        image = "a-3.jpg"

        [[rooms]]
        id = "b"
        name = "Room B"
        nightly_rate = 120
        primary_image = "b.jpg"
    "#;

    const ONE_ROOM_REPLACED: &str = r#"
        [[banners]]
        title = "Only"
        image = "only.jpg"

        [[rooms]]
        id = "a"
        name = "Room A, renovated"
        nightly_rate = 130
        primary_image = "a.jpg"
        [[rooms.photos]]
        image = "a-1.jpg"
        [[rooms.photos]]
        image = "a-2.jpg"

        [[rooms]]
        id = "c"
        name = "Room C"
        nightly_rate = 90
        primary_image = "c.jpg"
    "#;

    fn file_app(dir: &std::path::Path, raw: &str) -> App {
        let path = dir.join("site.toml");
        fs::write(&path, raw).expect("write content");
        let loaded = content::load_from_path(&path).expect("valid content");
        App::from_parts(
            Config::default(),
            Some(dir.join("config")),
            loaded,
            Some(path),
            ThemeMode::Light,
        )
    }

    #[test]
    fn default_widgets_request_their_timers() {
        let app = embedded_app();
        // Banner, hero, reviews and the two room galleries with photos.
        assert_eq!(app.timers().len(), 5);
    }

    #[test]
    fn ticks_reach_only_their_owner() {
        let mut app = embedded_app();
        let key = app.hero.timer().expect("hero timer").key;

        let _ = app.update(Message::RotationTick(key));

        assert_eq!(app.hero.rotation().current_index(), Some(1));
        assert_eq!(app.banner.rotation().current_index(), Some(0));
        assert_eq!(app.reviews.rotation().current_index(), Some(0));
    }

    #[test]
    fn banner_arrow_stops_banner_timer() {
        let mut app = embedded_app();
        let stale = app.banner.timer().expect("banner timer").key;

        let _ = app.update(Message::Banner(banner_slideshow::Message::Next));
        assert_eq!(app.timers().len(), 4);

        let _ = app.update(Message::RotationTick(stale));
        assert_eq!(app.banner.rotation().current_index(), Some(1));
    }

    #[test]
    fn room_messages_are_routed_by_id() {
        let dir = tempdir().expect("temp dir");
        let mut app = file_app(dir.path(), TWO_ROOMS);

        let _ = app.update(Message::Room {
            id: "a".into(),
            message: room_card::Message::GoTo(2),
        });
        let _ = app.update(Message::Room {
            id: "missing".into(),
            message: room_card::Message::Next,
        });

        assert_eq!(app.rooms[0].gallery().current_index(), Some(2));
        assert_eq!(app.rooms[1].gallery().current_index(), None);
    }

    #[test]
    fn reload_matches_rooms_by_id() {
        let dir = tempdir().expect("temp dir");
        let mut app = file_app(dir.path(), TWO_ROOMS);
        let _ = app.update(Message::Room {
            id: "a".into(),
            message: room_card::Message::GoTo(2),
        });
        let _ = app.update(Message::Banner(banner_slideshow::Message::GoTo(1)));

        fs::write(dir.path().join("site.toml"), ONE_ROOM_REPLACED).expect("rewrite content");
        let _ = app.update(Message::Navbar(navbar::Message::Reload));

        let ids: Vec<_> = app.rooms.iter().map(room_card::State::id).collect();
        assert_eq!(ids, ["a", "c"]);
        assert_eq!(app.rooms[0].room().name, "Room A, renovated");
        // Three photos became two: the gallery position clamps.
        assert_eq!(app.rooms[0].gallery().current_index(), Some(1));
        assert_eq!(app.banner.rotation().current_index(), Some(0));
        assert_eq!(app.content.content.rooms.len(), 2);
    }

    #[test]
    fn failed_reload_keeps_current_content() {
        let dir = tempdir().expect("temp dir");
        let mut app = file_app(dir.path(), TWO_ROOMS);

        fs::write(dir.path().join("site.toml"), "[[rooms]]\nid = 1\n").expect("break content");
        let _ = app.update(Message::Navbar(navbar::Message::Reload));

        assert_eq!(app.rooms.len(), 2);
        assert_eq!(app.banner.rotation().len(), 2);
    }

    #[test]
    fn theme_change_is_saved() {
        let dir = tempdir().expect("temp dir");
        let mut app = file_app(dir.path(), TWO_ROOMS);

        let _ = app.update(Message::Navbar(navbar::Message::Theme(
            theme_switch::Message::DarkToggled(true),
        )));

        assert_eq!(app.theme(), Theme::Dark);
        let saved = config::load_from_path(&dir.path().join("config").join("settings.toml"))
            .expect("settings written");
        assert_eq!(saved.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn theme_is_resolved_when_mode_changes() {
        let mut app = embedded_app();
        assert_eq!(app.theme(), Theme::Light);

        app.set_theme_mode(ThemeMode::Dark);
        assert_eq!(app.theme(), Theme::Dark);

        app.set_theme_mode(ThemeMode::System);
        let resolved = app.theme();
        assert!(resolved == Theme::Light || resolved == Theme::Dark);
        assert_eq!(app.theme(), resolved);
    }

    #[test]
    fn stale_tick_has_no_effect() {
        let mut app = embedded_app();
        let key = app.reviews.timer().expect("review timer").key;
        assert_eq!(
            app.reviews.update(review_carousel::Message::Next),
            Effect::Moved { from: 0, to: 1 }
        );
        let _ = app.update(Message::RotationTick(key));
        assert_eq!(app.reviews.rotation().current_index(), Some(1));
    }

    #[test]
    fn title_includes_hotel_name() {
        let app = embedded_app();
        assert!(app.title().starts_with("Hotel Miramar"));
    }
}
