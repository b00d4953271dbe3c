//! Turn-session event journal
//!
//! Every state change of the turn timer is recorded as a [`TimerEvent`]
//! stamped with the driver's millisecond clock. Events let a renderer (or a
//! test) replay what happened in a session:
//! - **Started**: a session began on its first entry
//! - **EntryChanged**: the countdown moved on to the next entry
//! - **Paused / Resumed**: the countdown was frozen or restarted
//! - **Skipped**: the current entry was cut short
//! - **Finished**: the last entry's countdown ended
//! - **TornDown**: the session was discarded
//! - **NoEntries**: a start was refused because the run order was empty

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::time::Millis;

/// Timer event capturing a state change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TimerEvent {
    Started {
        at_ms: Millis,
        session_id: Uuid,
        entry: String,
        total: usize,
        seconds_per_entry: u32,
    },

    EntryChanged {
        at_ms: Millis,
        session_id: Uuid,
        entry: String,
        index: usize,
    },

    Paused {
        at_ms: Millis,
        session_id: Uuid,
        remaining_ms: Millis,
    },

    Resumed {
        at_ms: Millis,
        session_id: Uuid,
        remaining_ms: Millis,
    },

    /// The entry at `index` was skipped with time left on its countdown
    Skipped {
        at_ms: Millis,
        session_id: Uuid,
        entry: String,
        index: usize,
        remaining_ms: Millis,
    },

    Finished {
        at_ms: Millis,
        session_id: Uuid,
        total: usize,
    },

    TornDown { session_id: Uuid },

    NoEntries { at_ms: Millis },
}

impl TimerEvent {
    /// Timestamp of the event, if it carries one
    pub fn at_ms(&self) -> Option<Millis> {
        match self {
            TimerEvent::Started { at_ms, .. }
            | TimerEvent::EntryChanged { at_ms, .. }
            | TimerEvent::Paused { at_ms, .. }
            | TimerEvent::Resumed { at_ms, .. }
            | TimerEvent::Skipped { at_ms, .. }
            | TimerEvent::Finished { at_ms, .. }
            | TimerEvent::NoEntries { at_ms } => Some(*at_ms),
            TimerEvent::TornDown { .. } => None,
        }
    }

    pub fn session_id(&self) -> Option<Uuid> {
        match self {
            TimerEvent::Started { session_id, .. }
            | TimerEvent::EntryChanged { session_id, .. }
            | TimerEvent::Paused { session_id, .. }
            | TimerEvent::Resumed { session_id, .. }
            | TimerEvent::Skipped { session_id, .. }
            | TimerEvent::Finished { session_id, .. }
            | TimerEvent::TornDown { session_id } => Some(*session_id),
            TimerEvent::NoEntries { .. } => None,
        }
    }

    /// Short type name, e.g. `"started"`
    pub fn event_type(&self) -> &'static str {
        match self {
            TimerEvent::Started { .. } => "started",
            TimerEvent::EntryChanged { .. } => "entry_changed",
            TimerEvent::Paused { .. } => "paused",
            TimerEvent::Resumed { .. } => "resumed",
            TimerEvent::Skipped { .. } => "skipped",
            TimerEvent::Finished { .. } => "finished",
            TimerEvent::TornDown { .. } => "torn_down",
            TimerEvent::NoEntries { .. } => "no_entries",
        }
    }
}

/// Append-only log of timer events
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<TimerEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn log(&mut self, event: TimerEvent) {
        self.events.push(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events(&self) -> &[TimerEvent] {
        &self.events
    }

    /// Most recent event
    pub fn last(&self) -> Option<&TimerEvent> {
        self.events.last()
    }

    /// Events of a specific type
    pub fn events_of_type(&self, event_type: &str) -> Vec<&TimerEvent> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    /// Events for one session
    pub fn events_for_session(&self, session_id: Uuid) -> Vec<&TimerEvent> {
        self.events
            .iter()
            .filter(|e| e.session_id() == Some(session_id))
            .collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Serialize the whole log as a pretty-printed JSON array
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.events)
    }
}
