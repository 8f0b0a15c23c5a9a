// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Rotation**: Interval bounds shared by every rotating widget
//! - **Widgets**: Per-widget auto-play defaults

// ==========================================================================
// Rotation Defaults
// ==========================================================================

/// Default delay between two automatic advances (in milliseconds).
pub const DEFAULT_ROTATION_INTERVAL_MS: u64 = 5_000;

/// Minimum rotation interval (in milliseconds).
pub const MIN_ROTATION_INTERVAL_MS: u64 = 1_000;

/// Maximum rotation interval (in milliseconds).
pub const MAX_ROTATION_INTERVAL_MS: u64 = 60_000;

// ==========================================================================
// Widget Defaults
// ==========================================================================

/// The banner slideshow exposes a play/pause toggle.
pub const DEFAULT_BANNER_PAUSABLE: bool = true;

/// The hero rotator runs without any control.
pub const DEFAULT_HERO_PAUSABLE: bool = false;

/// The review carousel keeps rotating after manual navigation.
pub const DEFAULT_REVIEWS_PAUSABLE: bool = false;

/// Room galleries advance on their own; `auto_play = false` opts out.
pub const DEFAULT_ROOMS_AUTO_PLAY: bool = true;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_ROTATION_INTERVAL_MS > 0);
    assert!(MAX_ROTATION_INTERVAL_MS >= MIN_ROTATION_INTERVAL_MS);
    assert!(DEFAULT_ROTATION_INTERVAL_MS >= MIN_ROTATION_INTERVAL_MS);
    assert!(DEFAULT_ROTATION_INTERVAL_MS <= MAX_ROTATION_INTERVAL_MS);
};
