// SPDX-License-Identifier: MPL-2.0
//! Rotation interval domain type.
//!
//! This module provides a type-safe wrapper for the delay between two
//! automatic advances of a rotating widget, in milliseconds.

use crate::config::{
    DEFAULT_ROTATION_INTERVAL_MS, MAX_ROTATION_INTERVAL_MS, MIN_ROTATION_INTERVAL_MS,
};
use std::time::Duration;

/// Delay between automatic advances, in milliseconds.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1–60 seconds).
///
/// # Example
///
/// ```
/// use hotel_showcase::ui::state::RotationInterval;
///
/// let interval = RotationInterval::new(5_000);
/// assert_eq!(interval.value(), 5_000);
///
/// // Values outside range are clamped
/// let too_fast = RotationInterval::new(10);
/// assert_eq!(too_fast.value(), 1_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RotationInterval(u64);

impl RotationInterval {
    /// Creates a new interval, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_ROTATION_INTERVAL_MS, MAX_ROTATION_INTERVAL_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Returns the interval as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for RotationInterval {
    fn default() -> Self {
        Self(DEFAULT_ROTATION_INTERVAL_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_eq!(RotationInterval::new(0).value(), MIN_ROTATION_INTERVAL_MS);
        assert_eq!(
            RotationInterval::new(u64::MAX).value(),
            MAX_ROTATION_INTERVAL_MS
        );
    }

    #[test]
    fn new_accepts_valid_values() {
        assert_eq!(RotationInterval::new(1_000).value(), 1_000);
        assert_eq!(RotationInterval::new(7_500).value(), 7_500);
        assert_eq!(RotationInterval::new(60_000).value(), 60_000);
    }

    #[test]
    fn default_is_five_seconds() {
        assert_eq!(
            RotationInterval::default().as_duration(),
            Duration::from_secs(5)
        );
    }
}
