//! Seed strings and role namespacing
//!
//! A user-supplied seed is either non-empty (fully reproducible) or empty
//! (fresh: derived from the wall clock). Every shuffle appends a role tag so
//! that varying one dimension does not correlate with another. Fresh seeds
//! carry the role tag too, so two shuffles drawn in the same millisecond
//! still get distinct streams.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::time::unix_millis;

/// Which shuffle a seed is namespaced for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeedRole {
    /// Attendee shuffle of a run order
    Attendees,
    /// Organizer shuffle of a run order
    Organizers,
    /// Group partition for the given group count
    Groups(usize),
}

impl fmt::Display for SeedRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedRole::Attendees => write!(f, "P"),
            SeedRole::Organizers => write!(f, "O"),
            SeedRole::Groups(count) => write!(f, "G{}", count),
        }
    }
}

/// Seed for one shuffle action
///
/// # Example
/// ```
/// use turn_roulette_core_rs::{Seed, SeedRole};
///
/// let seed = Seed::from_input("  demo ");
/// assert!(seed.is_reproducible());
/// assert_eq!(seed.for_role(SeedRole::Attendees), "demo|P");
/// assert_eq!(seed.for_role(SeedRole::Groups(3)), "demo|G3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Seed {
    /// User-supplied, trimmed, non-empty seed text
    Fixed(String),
    /// No seed given; freshness comes from this wall-clock reading (ms)
    Fresh(u64),
}

impl Seed {
    /// Build a seed from raw user input, reading the clock when it is blank
    pub fn from_input(input: &str) -> Self {
        Self::from_input_at(input, unix_millis())
    }

    /// Like [`Seed::from_input`] with an explicit clock reading
    pub fn from_input_at(input: &str, now_ms: u64) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            Seed::Fresh(now_ms)
        } else {
            Seed::Fixed(trimmed.to_string())
        }
    }

    /// True when the same input will always produce the same shuffles
    pub fn is_reproducible(&self) -> bool {
        matches!(self, Seed::Fixed(_))
    }

    /// Seed string for one role, `"<base>|<tag>"`
    pub fn for_role(&self, role: SeedRole) -> String {
        match self {
            Seed::Fixed(text) => format!("{}|{}", text, role),
            Seed::Fresh(millis) => format!("{}|{}", millis, role),
        }
    }
}
