// SPDX-License-Identifier: MPL-2.0
//! Showcase widgets. Each rotating widget owns its own rotation state.

pub mod banner_slideshow;
pub mod controls;
pub mod hero_rotator;
pub mod info_card;
pub mod picture;
pub mod review_carousel;
pub mod room_card;
pub mod theme_switch;

pub use picture::Slide;
