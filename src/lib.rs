// SPDX-License-Identifier: MPL-2.0
//! `hotel_showcase` is a hotel marketing page built with the Iced GUI framework.
//!
//! It renders a banner slideshow, a hero image rotator, a review carousel and
//! room cards with inline galleries, all driven by one timed rotation
//! controller ([`ui::state::Rotation`]) instantiated per widget.

pub mod app;
pub mod content;
pub mod error;
pub mod ui;

pub use app::config;
