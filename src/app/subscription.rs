// SPDX-License-Identifier: MPL-2.0
//! Timer subscriptions for the rotating widgets.
//!
//! Each live [`Timer`] becomes one `time::every` subscription identified by its
//! [`TimerKey`](crate::ui::state::TimerKey). When a rotation stops reporting a
//! timer, or reports one with a new key, the runtime drops the old
//! subscription, which cancels it.

use super::Message;
use crate::ui::state::Timer;
use iced::{time, Subscription};

/// Creates one tick subscription per live rotation timer.
pub fn create_rotation_subscription(
    timers: impl IntoIterator<Item = Timer>,
) -> Subscription<Message> {
    Subscription::batch(timers.into_iter().map(|timer| {
        time::every(timer.interval.as_duration())
            .with(timer.key)
            .map(|(key, _instant)| Message::RotationTick(key))
    }))
}
