//! Run-order builder
//!
//! Organizers and attendees are shuffled independently, each with its own
//! role-tagged seed, then concatenated organizers-first when organizers are
//! included. Changing one list never reorders the other.

use serde::{Deserialize, Serialize};

use crate::models::ParticipantList;
use crate::rng::{seeded_shuffle, Seed, SeedRole};

/// Ordered list of names for one turn-taking session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunOrder {
    names: Vec<String>,
    /// How many leading names came from the organizer shuffle
    organizer_count: usize,
}

impl RunOrder {
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn into_names(self) -> Vec<String> {
        self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Leading organizer segment (empty when organizers were excluded)
    pub fn organizers(&self) -> &[String] {
        &self.names[..self.split_point()]
    }

    /// Trailing attendee segment
    pub fn attendees(&self) -> &[String] {
        &self.names[self.split_point()..]
    }

    // A deserialized order may claim more organizers than it has names
    fn split_point(&self) -> usize {
        self.organizer_count.min(self.names.len())
    }
}

/// Build a run order from the roster
///
/// # Example
/// ```
/// use turn_roulette_core_rs::{build_run_order, ParticipantList, Seed};
///
/// let roster = ParticipantList::new(
///     vec!["Bob".into(), "alice".into(), "Charlie".into()],
///     vec!["Olu".into()],
/// );
/// let order = build_run_order(&roster, &Seed::from_input("demo"), false);
/// assert_eq!(order.names(), ["Bob", "alice", "Charlie"]);
///
/// let with_org = build_run_order(&roster, &Seed::from_input("demo"), true);
/// assert_eq!(with_org.organizers(), ["Olu"]);
/// assert_eq!(with_org.attendees(), order.names());
/// ```
pub fn build_run_order(
    participants: &ParticipantList,
    seed: &Seed,
    include_organizers: bool,
) -> RunOrder {
    let attendees = seeded_shuffle(participants.attendees(), &seed.for_role(SeedRole::Attendees));

    let order = if include_organizers {
        let mut names =
            seeded_shuffle(participants.organizers(), &seed.for_role(SeedRole::Organizers));
        let organizer_count = names.len();
        names.extend(attendees);
        RunOrder {
            names,
            organizer_count,
        }
    } else {
        RunOrder {
            names: attendees,
            organizer_count: 0,
        }
    };

    tracing::debug!(
        len = order.len(),
        organizers = order.organizer_count,
        reproducible = seed.is_reproducible(),
        "built run order"
    );
    order
}
