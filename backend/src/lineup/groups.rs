//! Group partitioner
//!
//! Shuffles the attendee list and cuts it into `k` contiguous slices. With
//! `base = n / k` and `extra = n % k`, the first `extra` groups get
//! `base + 1` names and the rest get `base`. Group sizes and their order
//! never depend on the seed; only membership does.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rng::{seeded_shuffle, Seed, SeedRole};

/// Errors from a group action
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GroupError {
    #[error("No attendees configured")]
    NoAttendees,
}

/// Ordered groups of names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupPartition {
    groups: Vec<Vec<String>>,
}

impl GroupPartition {
    pub fn groups(&self) -> &[Vec<String>] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Size of each group, in output order
    pub fn sizes(&self) -> Vec<usize> {
        self.groups.iter().map(Vec::len).collect()
    }

    /// Total number of names across all groups
    pub fn member_count(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }
}

/// Split `items` into `k` contiguous, near-equal slices (k coerced to ≥ 1)
///
/// # Example
/// ```
/// use turn_roulette_core_rs::split_balanced;
///
/// let groups = split_balanced(&[1, 2, 3, 4, 5, 6, 7], 3);
/// assert_eq!(groups, vec![vec![1, 2, 3], vec![4, 5], vec![6, 7]]);
/// ```
pub fn split_balanced<T: Clone>(items: &[T], k: usize) -> Vec<Vec<T>> {
    let k = k.max(1);
    let base = items.len() / k;
    let extra = items.len() % k;

    let mut groups = Vec::with_capacity(k);
    let mut start = 0;
    for g in 0..k {
        let size = if g < extra { base + 1 } else { base };
        groups.push(items[start..start + size].to_vec());
        start += size;
    }
    groups
}

/// Shuffle the attendees and split them into `group_count` groups
///
/// The shuffle seed is namespaced by the group count, so asking for a
/// different number of groups with the same seed also reshuffles.
///
/// # Errors
/// [`GroupError::NoAttendees`] when `attendees` is empty.
///
/// # Example
/// ```
/// use turn_roulette_core_rs::{partition_groups, Seed};
///
/// let names: Vec<String> = ["Ada", "Ben", "Cy", "Dee", "Eve", "Fay", "Gus"]
///     .iter().map(|s| s.to_string()).collect();
/// let partition = partition_groups(&names, 3, &Seed::from_input("demo")).unwrap();
/// assert_eq!(partition.sizes(), vec![3, 2, 2]);
/// ```
pub fn partition_groups(
    attendees: &[String],
    group_count: usize,
    seed: &Seed,
) -> Result<GroupPartition, GroupError> {
    if attendees.is_empty() {
        return Err(GroupError::NoAttendees);
    }

    let group_count = group_count.max(1);
    let shuffled = seeded_shuffle(attendees, &seed.for_role(SeedRole::Groups(group_count)));
    let groups = split_balanced(&shuffled, group_count);

    tracing::debug!(
        attendees = attendees.len(),
        groups = group_count,
        "partitioned attendees"
    );
    Ok(GroupPartition { groups })
}
