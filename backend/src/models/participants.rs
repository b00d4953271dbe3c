//! Participant roster
//!
//! Two canonical name lists: attendees and organizers. Both are always in
//! normalized form (see [`crate::roster::normalize`]); the only ways to
//! change them go through normalization.

use serde::{Deserialize, Serialize};

use crate::roster::{normalize_names, parse_list, ParsedRoster};

/// Configured attendees and organizers
///
/// Replaced wholesale by configuration (roster load or editor commit);
/// read, never mutated, by the run-order builder and group partitioner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantList {
    attendees: Vec<String>,
    organizers: Vec<String>,
}

impl ParticipantList {
    /// Build a roster, normalizing both lists
    ///
    /// # Example
    /// ```
    /// use turn_roulette_core_rs::ParticipantList;
    ///
    /// let roster = ParticipantList::new(
    ///     vec!["Bob".into(), "alice".into(), "Charlie".into()],
    ///     vec![],
    /// );
    /// assert_eq!(roster.attendees(), ["alice", "Bob", "Charlie"]);
    /// ```
    pub fn new(attendees: Vec<String>, organizers: Vec<String>) -> Self {
        Self {
            attendees: normalize_names(attendees),
            organizers: normalize_names(organizers),
        }
    }

    /// Build a roster from editor text, one name per line
    pub fn from_text(attendees: &str, organizers: &str) -> Self {
        Self {
            attendees: parse_list(attendees),
            organizers: parse_list(organizers),
        }
    }

    pub fn attendees(&self) -> &[String] {
        &self.attendees
    }

    pub fn organizers(&self) -> &[String] {
        &self.organizers
    }

    pub fn is_empty(&self) -> bool {
        self.attendees.is_empty() && self.organizers.is_empty()
    }

    pub fn set_attendees(&mut self, names: Vec<String>) {
        self.attendees = normalize_names(names);
    }

    pub fn set_organizers(&mut self, names: Vec<String>) {
        self.organizers = normalize_names(names);
    }

    /// Replace the lists present in a parsed roster file
    pub fn apply(&mut self, parsed: ParsedRoster) {
        if let Some(attendees) = parsed.attendees {
            self.set_attendees(attendees);
        }
        if let Some(organizers) = parsed.organizers {
            self.set_organizers(organizers);
        }
    }
}
