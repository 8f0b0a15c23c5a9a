// SPDX-License-Identifier: MPL-2.0
//! Pointer presence over a display region.
//!
//! The gate only decides whether manual navigation affordances are drawn. It
//! never touches a rotation index or its timer.

/// Messages for the hover gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Pointer entered the region.
    Entered,
    /// Pointer left the region.
    Left,
}

/// Whether the pointer is currently over the gated region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverGate {
    active: bool,
}

impl HoverGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter(&mut self) {
        self.active = true;
    }

    pub fn leave(&mut self) {
        self.active = false;
    }

    /// Returns true while affordances should be rendered.
    #[must_use]
    pub fn is_active(self) -> bool {
        self.active
    }

    pub fn handle(&mut self, msg: Message) {
        match msg {
            Message::Entered => self.enter(),
            Message::Left => self.leave(),
        }
    }
}
