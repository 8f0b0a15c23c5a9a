// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::navbar;
use crate::ui::state::TimerKey;
use crate::ui::theming::ThemeMode;
use crate::ui::widgets::{banner_slideshow, hero_rotator, review_carousel, room_card};

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Navbar(navbar::Message),
    Banner(banner_slideshow::Message),
    Hero(hero_rotator::Message),
    Reviews(review_carousel::Message),
    Room {
        /// Id of the room whose card emitted the message.
        id: String,
        message: room_card::Message,
    },
    /// A rotation timer fired. Routed to the rotation that owns the key.
    RotationTick(TimerKey),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `HOTEL_SHOWCASE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional content file, taking precedence over `[content] path`.
    pub content: Option<String>,
    /// Optional theme for this session. Not written back to the config.
    pub theme: Option<ThemeMode>,
}
