// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains the state logic shared by the showcase widgets,
//! kept apart from the views that render it.

pub mod display_index;
pub mod hover;
pub mod rotation;
pub mod rotation_interval;
pub mod timer;

// Re-export commonly used types for convenience
pub use hover::HoverGate;
pub use rotation::{AutoPlay, Rotation, RotationConfig};
pub use rotation_interval::RotationInterval;
pub use timer::{RotationId, Timer, TimerKey};
