// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Theme mode
//! - `[content]` - Location of the showcase content file
//! - `[banner]`, `[hero]`, `[reviews]`, `[rooms]` - Rotation settings per widget
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `HOTEL_SHOWCASE_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use hotel_showcase::config::{self, Config};
//! use hotel_showcase::ui::theming::ThemeMode;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.theme_mode = ThemeMode::Dark;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::state::{AutoPlay, RotationConfig, RotationInterval};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Where the showcase content comes from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ContentConfig {
    /// Path to a content TOML file. The embedded content is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Rotation settings of one widget. Unset fields keep the widget's default.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct RotationSettings {
    /// Delay between automatic advances, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_ms: Option<u64>,

    /// Whether the widget advances on its own.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_play: Option<bool>,

    /// Whether a play/pause toggle is offered (and manual navigation pauses).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pausable: Option<bool>,

    /// Whether navigation wraps from the last item to the first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wraps: Option<bool>,
}

impl RotationSettings {
    /// Applies these settings on top of a widget's defaults.
    #[must_use]
    pub fn resolve(&self, auto_play_default: bool, pausable_default: bool) -> RotationConfig {
        let auto_play = match (
            self.auto_play.unwrap_or(auto_play_default),
            self.pausable.unwrap_or(pausable_default),
        ) {
            (false, _) => AutoPlay::Off,
            (true, true) => AutoPlay::Pausable,
            (true, false) => AutoPlay::Always,
        };

        RotationConfig {
            interval: self
                .interval_ms
                .map(RotationInterval::new)
                .unwrap_or_default(),
            auto_play,
            wraps: self.wraps.unwrap_or(true),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub content: ContentConfig,

    /// Banner slideshow rotation.
    #[serde(default)]
    pub banner: RotationSettings,

    /// Hero image rotation.
    #[serde(default)]
    pub hero: RotationSettings,

    /// Review carousel rotation.
    #[serde(default)]
    pub reviews: RotationSettings,

    /// Room card galleries.
    #[serde(default)]
    pub rooms: RotationSettings,
}

impl Config {
    #[must_use]
    pub fn banner_rotation(&self) -> RotationConfig {
        self.banner.resolve(true, DEFAULT_BANNER_PAUSABLE)
    }

    #[must_use]
    pub fn hero_rotation(&self) -> RotationConfig {
        self.hero.resolve(true, DEFAULT_HERO_PAUSABLE)
    }

    #[must_use]
    pub fn reviews_rotation(&self) -> RotationConfig {
        self.reviews.resolve(true, DEFAULT_REVIEWS_PAUSABLE)
    }

    #[must_use]
    pub fn rooms_rotation(&self) -> RotationConfig {
        self.rooms.resolve(DEFAULT_ROOMS_AUTO_PLAY, false)
    }
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(D::Error::custom)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("could not load {}: {err}", path.display())),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
