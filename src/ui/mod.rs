// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Rotation controller, hover gate and index clamping
//! - [`widgets`] - Banner, hero, review and room widgets plus static cards
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`navbar`] - Site header with theme switch and reload

pub mod design_tokens;
pub mod navbar;
pub mod state;
pub mod styles;
pub mod theming;
pub mod widgets;
