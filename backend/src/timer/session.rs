//! Live state of the active run order

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::time::Millis;

/// Countdown state for the current run order
///
/// Invariants while the session exists:
/// - `index < list.len()`
/// - `remaining_ms <= seconds_per_entry * 1000`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnSession {
    id: Uuid,
    list: Vec<String>,
    index: usize,
    seconds_per_entry: u32,
    /// Time left as of `reference_ms`
    remaining_ms: Millis,
    reference_ms: Millis,
    paused: bool,
}

impl TurnSession {
    /// Open a session on the first entry
    ///
    /// # Panics
    /// Panics if `list` is empty
    pub(crate) fn new(list: Vec<String>, seconds_per_entry: u32, now: Millis) -> Self {
        assert!(!list.is_empty(), "session list must not be empty");
        Self {
            id: Uuid::new_v4(),
            list,
            index: 0,
            seconds_per_entry,
            remaining_ms: entry_ms(seconds_per_entry),
            reference_ms: now,
            paused: false,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn list(&self) -> &[String] {
        &self.list
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn current_entry(&self) -> &str {
        &self.list[self.index]
    }

    pub fn seconds_per_entry(&self) -> u32 {
        self.seconds_per_entry
    }

    /// Full countdown length of one entry
    pub fn entry_ms(&self) -> Millis {
        entry_ms(self.seconds_per_entry)
    }

    /// Stored remaining time (frozen value while paused)
    pub fn remaining_ms(&self) -> Millis {
        self.remaining_ms
    }

    pub fn reference_ms(&self) -> Millis {
        self.reference_ms
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Time left at `now`: frozen while paused, counting down otherwise
    pub fn left_at(&self, now: Millis) -> Millis {
        if self.paused {
            self.remaining_ms
        } else {
            let elapsed = now.saturating_sub(self.reference_ms);
            self.remaining_ms.saturating_sub(elapsed)
        }
    }

    pub(crate) fn freeze(&mut self, now: Millis) {
        self.remaining_ms = self.left_at(now);
        self.paused = true;
    }

    pub(crate) fn unfreeze(&mut self, now: Millis) {
        self.reference_ms = now;
        self.paused = false;
    }

    /// Move to the next entry; false when the list is exhausted
    pub(crate) fn step(&mut self, now: Millis) -> bool {
        self.index += 1;
        if self.index >= self.list.len() {
            return false;
        }
        self.remaining_ms = self.entry_ms();
        self.reference_ms = now;
        self.paused = false;
        true
    }
}

fn entry_ms(seconds_per_entry: u32) -> Millis {
    Millis::from(seconds_per_entry) * 1_000
}
