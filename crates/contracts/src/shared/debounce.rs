//! Timer-free debounce bookkeeping.
//!
//! The UI starts a timer per keystroke and reports back with the tick it was
//! given; only the newest tick fires.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebounceTick(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Debouncer {
    latest: u64,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new quiet window, invalidating every earlier tick.
    pub fn schedule(&mut self) -> DebounceTick {
        self.latest += 1;
        DebounceTick(self.latest)
    }

    /// True exactly once, for the newest tick.
    pub fn fire(&mut self, tick: DebounceTick) -> bool {
        if tick.0 == self.latest && self.latest != 0 {
            // consume so a duplicate timer callback can't fire twice
            self.latest += 1;
            true
        } else {
            false
        }
    }

    /// Drop whatever window is pending.
    pub fn cancel(&mut self) {
        self.latest += 1;
    }
}
