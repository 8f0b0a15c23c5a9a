// SPDX-License-Identifier: MPL-2.0
//! Identity of the periodic timer driving a rotation.
//!
//! A rotation never owns a running timer itself. It describes the timer it
//! wants through [`Timer`], and the application turns every description into
//! a subscription. The runtime keeps one subscription per distinct
//! [`TimerKey`] and cancels it as soon as the key is no longer requested.

use super::rotation_interval::RotationInterval;

/// Unique identifier of one rotation instance.
///
/// Every mount gets a fresh id, so ticks addressed to an unmounted instance
/// can never reach its replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RotationId(u64);

impl RotationId {
    /// Creates a new unique rotation ID.
    pub(crate) fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Subscription identity of a rotation timer.
///
/// `generation` changes on every auto-play transition; the old key stops
/// being requested and its timer is torn down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerKey {
    pub owner: RotationId,
    pub generation: u64,
}

/// A timer the owning rotation wants running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    pub key: TimerKey,
    pub interval: RotationInterval,
}
