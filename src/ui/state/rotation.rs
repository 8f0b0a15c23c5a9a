// SPDX-License-Identifier: MPL-2.0
//! Timed rotation through an ordered collection.
//!
//! [`Rotation`] keeps track of which item of a collection is displayed and
//! under which rule that changes: automatically on a timer, or manually via
//! arrows and dot indicators. Every rotating widget owns one instance; no state
//! is shared between instances.
//!
//! # Auto-play variants
//!
//! - [`AutoPlay::Pausable`]: starts playing; any manual navigation pauses it
//!   until [`Rotation::toggle_auto_play`] resumes it.
//! - [`AutoPlay::Always`]: always playing, no way to pause. Manual navigation
//!   restarts the interval so the next automatic advance comes a full period
//!   after the click.
//! - [`AutoPlay::Off`]: manual navigation only, never a timer.
//!
//! # Example
//!
//! ```
//! use hotel_showcase::ui::state::{AutoPlay, Rotation, RotationConfig};
//!
//! let mut banners = Rotation::new(
//!     vec!["spa", "pool", "suite"],
//!     RotationConfig {
//!         auto_play: AutoPlay::Pausable,
//!         ..RotationConfig::default()
//!     },
//! );
//!
//! let timer = banners.timer().expect("three items rotate");
//! banners.tick(timer.key);
//! assert_eq!(banners.current_item(), Some(&"pool"));
//!
//! banners.next();
//! assert!(!banners.is_auto_playing());
//! assert!(banners.timer().is_none());
//! ```

use super::display_index::{effective_index, effective_item};
use super::rotation_interval::RotationInterval;
use super::timer::{RotationId, Timer, TimerKey};

/// How a rotation advances on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoPlay {
    /// Never advances automatically.
    Off,
    /// Advances automatically and cannot be paused.
    #[default]
    Always,
    /// Advances automatically; manual navigation pauses, a toggle resumes.
    Pausable,
}

/// Per-widget parameters of a rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationConfig {
    pub interval: RotationInterval,
    pub auto_play: AutoPlay,
    /// Whether stepping past either end continues at the other end.
    pub wraps: bool,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            interval: RotationInterval::default(),
            auto_play: AutoPlay::default(),
            wraps: true,
        }
    }
}

/// Messages accepted by a rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Next,
    Previous,
    GoTo(usize),
    ToggleAutoPlay,
    /// A tick delivered by the timer identified by the key.
    Tick(TimerKey),
}

/// Effects produced by rotation changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// The displayed item changed.
    Moved { from: usize, to: usize },
    /// Auto-play was switched on or off.
    AutoPlayChanged(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    Manual,
    Automatic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Forward,
    Backward,
}

/// Current position and auto-play state over a collection of `T`.
#[derive(Debug)]
pub struct Rotation<T> {
    id: RotationId,
    items: Vec<T>,
    index: usize,
    auto_playing: bool,
    config: RotationConfig,
    generation: u64,
}

impl<T> Rotation<T> {
    /// Creates a rotation positioned on the first item.
    #[must_use]
    pub fn new(items: Vec<T>, config: RotationConfig) -> Self {
        Self {
            id: RotationId::new(),
            items,
            index: 0,
            auto_playing: config.auto_play != AutoPlay::Off,
            config,
            generation: 0,
        }
    }

    #[must_use]
    pub fn config(&self) -> RotationConfig {
        self.config
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the displayed item, `None` for an empty collection.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        effective_index(self.items.len(), self.index)
    }

    #[must_use]
    pub fn current_item(&self) -> Option<&T> {
        self.current_index().and_then(|i| self.items.get(i))
    }

    /// Displayed item, or `fallback` when the collection is empty.
    #[must_use]
    pub fn current_item_or<'a>(&'a self, fallback: &'a T) -> &'a T {
        effective_item(&self.items, self.index, fallback)
    }

    #[must_use]
    pub fn is_auto_playing(&self) -> bool {
        self.auto_playing
    }

    /// Whether a play/pause toggle should be offered.
    #[must_use]
    pub fn is_pausable(&self) -> bool {
        self.config.auto_play == AutoPlay::Pausable
    }

    /// Whether there is anything to rotate to.
    #[must_use]
    pub fn can_navigate(&self) -> bool {
        self.items.len() > 1
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.target(Step::Backward).is_some()
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.target(Step::Forward).is_some()
    }

    pub fn next(&mut self) -> Effect {
        self.step(Step::Forward, Origin::Manual)
    }

    pub fn previous(&mut self) -> Effect {
        self.step(Step::Backward, Origin::Manual)
    }

    /// Jumps to `index`. Targets past the end clamp to the last item.
    pub fn go_to(&mut self, index: usize) -> Effect {
        if !self.can_navigate() {
            return Effect::None;
        }
        self.on_manual_navigation();
        let target = index.min(self.items.len() - 1);
        self.move_to(target)
    }

    /// Flips auto-play. Only pausable rotations can be toggled.
    pub fn toggle_auto_play(&mut self) -> Effect {
        if !self.is_pausable() {
            return Effect::None;
        }
        self.auto_playing = !self.auto_playing;
        self.rearm();
        Effect::AutoPlayChanged(self.auto_playing)
    }

    /// Automatic advance requested by the timer identified by `key`.
    ///
    /// Ticks from a timer that is no longer live are ignored.
    pub fn tick(&mut self, key: TimerKey) -> Effect {
        if self.timer().map(|timer| timer.key) != Some(key) {
            log::trace!("{:?}: ignoring stale tick {:?}", self.id, key);
            return Effect::None;
        }
        self.step(Step::Forward, Origin::Automatic)
    }

    /// The timer this rotation needs, if any.
    ///
    /// There is exactly one while auto-playing over more than one item.
    #[must_use]
    pub fn timer(&self) -> Option<Timer> {
        (self.auto_playing && self.can_navigate()).then_some(Timer {
            key: TimerKey {
                owner: self.id,
                generation: self.generation,
            },
            interval: self.config.interval,
        })
    }

    /// Returns true if `key` was issued by this rotation.
    #[must_use]
    pub fn owns(&self, key: TimerKey) -> bool {
        key.owner == self.id
    }

    /// Swaps in a new collection, keeping the position when it is still valid.
    pub fn replace_items(&mut self, items: Vec<T>) {
        let previous = self.index;
        self.items = items;
        self.index = effective_index(self.items.len(), previous).unwrap_or(0);
        if self.index != previous {
            log::debug!(
                "{:?}: collection shrank to {}, index clamped {} -> {}",
                self.id,
                self.items.len(),
                previous,
                self.index
            );
        }
    }

    /// Handle a rotation message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Next => self.next(),
            Message::Previous => self.previous(),
            Message::GoTo(index) => self.go_to(index),
            Message::ToggleAutoPlay => self.toggle_auto_play(),
            Message::Tick(key) => self.tick(key),
        }
    }

    fn step(&mut self, step: Step, origin: Origin) -> Effect {
        if !self.can_navigate() {
            return Effect::None;
        }
        if origin == Origin::Manual {
            self.on_manual_navigation();
        }
        match self.target(step) {
            Some(target) => self.move_to(target),
            None => Effect::None,
        }
    }

    fn target(&self, step: Step) -> Option<usize> {
        let last = self.items.len().checked_sub(1)?;
        if last == 0 {
            return None;
        }
        let current = self.index.min(last);
        match step {
            Step::Forward if current < last => Some(current + 1),
            Step::Forward => self.config.wraps.then_some(0),
            Step::Backward if current > 0 => Some(current - 1),
            Step::Backward => self.config.wraps.then_some(last),
        }
    }

    fn move_to(&mut self, target: usize) -> Effect {
        let from = self.index;
        self.index = target;
        if from == target {
            Effect::None
        } else {
            Effect::Moved { from, to: target }
        }
    }

    fn on_manual_navigation(&mut self) {
        match self.config.auto_play {
            AutoPlay::Pausable if self.auto_playing => {
                self.auto_playing = false;
                self.rearm();
            }
            AutoPlay::Always => self.rearm(),
            AutoPlay::Pausable | AutoPlay::Off => {}
        }
    }

    fn rearm(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        log::debug!(
            "{:?}: timer generation {} (auto-play {})",
            self.id,
            self.generation,
            self.auto_playing
        );
    }
}
