//! Tests for run orders and group partitions

use turn_roulette_core_rs::{
    build_run_order, partition_groups, split_balanced, GroupError, ParticipantList, Seed,
};

fn roster(attendees: &[&str], organizers: &[&str]) -> ParticipantList {
    ParticipantList::new(
        attendees.iter().map(|s| s.to_string()).collect(),
        organizers.iter().map(|s| s.to_string()).collect(),
    )
}

fn strings(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_end_to_end_demo_seed() {
    let participants = roster(&["Bob", "alice", "Charlie"], &[]);
    assert_eq!(participants.attendees(), ["alice", "Bob", "Charlie"]);

    let seed = Seed::from_input("demo");
    let first = build_run_order(&participants, &seed, false);
    let again = build_run_order(&participants, &Seed::from_input("demo"), false);
    assert_eq!(first.names(), ["Bob", "alice", "Charlie"]);
    assert_eq!(first, again);

    let other = build_run_order(&participants, &Seed::from_input("demo2"), false);
    assert_eq!(other.names(), ["Bob", "Charlie", "alice"]);
}

#[test]
fn test_accented_roster_matches_browser_order() {
    let participants = roster(&["Eve", "zed", "Émile"], &[]);
    assert_eq!(participants.attendees(), ["Émile", "Eve", "zed"]);

    let order = build_run_order(&participants, &Seed::from_input("demo"), false);
    assert_eq!(order.names(), ["Eve", "Émile", "zed"]);
}

#[test]
fn test_input_order_does_not_matter() {
    let a = roster(&["Charlie", "alice", "Bob"], &[]);
    let b = roster(&["Bob", "Charlie", "ALICE", "alice"], &[]);
    let seed = Seed::from_input("demo");

    // b keeps "ALICE" casing, so compare case-folded
    let fold = |names: &[String]| names.iter().map(|n| n.to_lowercase()).collect::<Vec<_>>();
    assert_eq!(
        fold(build_run_order(&a, &seed, false).names()),
        fold(build_run_order(&b, &seed, false).names())
    );
}

#[test]
fn test_organizers_lead_when_included() {
    let participants = roster(&["Bob", "alice", "Charlie"], &["Org1", "Org2"]);
    let order = build_run_order(&participants, &Seed::from_input("demo"), true);

    assert_eq!(order.len(), 5);
    assert_eq!(order.organizers(), ["Org2", "Org1"]);
    assert_eq!(order.attendees(), ["Bob", "alice", "Charlie"]);
    assert_eq!(
        order.names(),
        ["Org2", "Org1", "Bob", "alice", "Charlie"]
    );
}

#[test]
fn test_organizers_excluded() {
    let participants = roster(&["Bob", "alice"], &["Org1", "Org2"]);
    let order = build_run_order(&participants, &Seed::from_input("demo"), false);

    assert_eq!(order.len(), 2);
    assert!(order.organizers().is_empty());
    assert!(order.names().iter().all(|n| !n.starts_with("Org")));
}

#[test]
fn test_sub_orders_independent() {
    let seed = Seed::from_input("standup");
    let base = build_run_order(&roster(&["a", "b", "c", "d"], &["x", "y", "z"]), &seed, true);

    let more_attendees =
        build_run_order(&roster(&["a", "b", "c", "d", "e"], &["x", "y", "z"]), &seed, true);
    assert_eq!(base.organizers(), more_attendees.organizers());

    let more_organizers =
        build_run_order(&roster(&["a", "b", "c", "d"], &["w", "x", "y", "z"]), &seed, true);
    assert_eq!(base.attendees(), more_organizers.attendees());
}

#[test]
fn test_fresh_seed_reproducible_for_same_instant() {
    let participants = roster(&["a", "b", "c", "d", "e", "f"], &["x", "y"]);
    let one = build_run_order(&participants, &Seed::Fresh(1_700_000_000_123), true);
    let two = build_run_order(&participants, &Seed::Fresh(1_700_000_000_123), true);
    assert_eq!(one, two);
}

#[test]
fn test_partition_seven_into_three() {
    let names = strings(&["Ada", "Ben", "Cy", "Dee", "Eve", "Fay", "Gus"]);
    let partition = partition_groups(&names, 3, &Seed::from_input("demo")).unwrap();

    assert_eq!(partition.sizes(), vec![3, 2, 2]);
    assert_eq!(
        partition.groups(),
        [
            strings(&["Gus", "Ben", "Eve"]),
            strings(&["Dee", "Cy"]),
            strings(&["Ada", "Fay"]),
        ]
    );
}

#[test]
fn test_partition_sizes_independent_of_seed() {
    let names = strings(&["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"]);
    for seed in ["one", "two", "three"] {
        let partition = partition_groups(&names, 4, &Seed::from_input(seed)).unwrap();
        assert_eq!(partition.sizes(), vec![3, 3, 2, 2]);
        assert_eq!(partition.member_count(), 10);
    }
}

#[test]
fn test_group_count_reshuffles() {
    let names = strings(&["a", "b", "c", "d", "e", "f", "g", "h"]);
    let seed = Seed::from_input("demo");
    let two = partition_groups(&names, 2, &seed).unwrap();
    let four = partition_groups(&names, 4, &seed).unwrap();

    let flat = |p: &turn_roulette_core_rs::GroupPartition| p.groups().concat();
    assert_ne!(flat(&two), flat(&four));
}

#[test]
fn test_partition_zero_count_is_one_group() {
    let names = strings(&["a", "b", "c"]);
    let partition = partition_groups(&names, 0, &Seed::from_input("x")).unwrap();
    assert_eq!(partition.sizes(), vec![3]);
}

#[test]
fn test_partition_no_attendees() {
    assert_eq!(
        partition_groups(&[], 4, &Seed::from_input("x")),
        Err(GroupError::NoAttendees)
    );
}

#[test]
fn test_split_balanced_empty_input() {
    let groups = split_balanced::<u8>(&[], 3);
    assert_eq!(groups, vec![Vec::<u8>::new(), Vec::new(), Vec::new()]);
}
