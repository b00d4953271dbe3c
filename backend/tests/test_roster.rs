//! Tests for roster normalization, parsing and loading

use std::cell::RefCell;
use std::rc::Rc;

use turn_roulette_core_rs::{
    normalize_names, parse_list, parse_roster, LoadOutcome, ParticipantList, RosterError,
    RosterLoad,
};

#[test]
fn test_case_variants_collapse_to_first_seen() {
    assert_eq!(normalize_names(["Alice", "alice", "ALICE"]), vec!["Alice"]);
}

#[test]
fn test_sorted_case_insensitively() {
    assert_eq!(
        parse_list("Bob\nalice\nCharlie\n"),
        vec!["alice", "Bob", "Charlie"]
    );
    assert_eq!(
        normalize_names(["delta", "Charlie", "bravo", "Alpha"]),
        vec!["Alpha", "bravo", "Charlie", "delta"]
    );
}

#[test]
fn test_normalization_idempotent() {
    let once = parse_list("  zoe \n\nZoe\nadam\n Adam\nmia");
    assert_eq!(once, vec!["adam", "mia", "zoe"]);
    assert_eq!(normalize_names(&once), once);
}

#[test]
fn test_insertion_order_irrelevant() {
    assert_eq!(
        normalize_names(["c", "a", "b"]),
        normalize_names(["b", "c", "a"])
    );
}

#[test]
fn test_full_roster_file() {
    let text = r#"
# Sprint review roster
title: Sprint 42
organizers:
  - Dana
  - dana
attendees:
  - Bob
  - alice   # remote
  - Charlie

notes:
  - not a person
"#;
    let parsed = parse_roster(text);
    assert_eq!(parsed.organizers, Some(vec!["Dana".to_string()]));
    assert_eq!(
        parsed.attendees,
        Some(vec![
            "alice".to_string(),
            "Bob".to_string(),
            "Charlie".to_string()
        ])
    );
}

#[test]
fn test_malformed_lines_skipped() {
    let parsed = parse_roster("attendees:\njust text\n  - Amy\n  -\n  - Ben\n");
    assert_eq!(
        parsed.attendees,
        Some(vec!["Amy".to_string(), "Ben".to_string()])
    );
}

#[test]
fn test_load_success_replaces_present_sections_only() {
    let mut roster = ParticipantList::new(vec!["Old".into()], vec!["Olu".into()]);
    let mut load = RosterLoad::new();

    let outcome = load.resolve(Ok("attendees:\n - New\n - next\n".into()), &mut roster);

    assert_eq!(
        outcome,
        LoadOutcome::Loaded {
            attendees: 2,
            organizers: 1
        }
    );
    assert_eq!(roster.attendees(), ["New", "next"]);
    assert_eq!(roster.organizers(), ["Olu"]);
}

#[test]
fn test_ready_callbacks_fire_once_on_failure() {
    let mut roster = ParticipantList::new(vec!["Keep".into()], vec![]);
    let mut load = RosterLoad::new();
    let log = Rc::new(RefCell::new(Vec::new()));

    for id in 0..3 {
        let log = log.clone();
        load.on_ready(move |outcome| log.borrow_mut().push((id, outcome.is_loaded())));
    }
    assert!(!load.is_resolved());

    load.resolve(Err(RosterError::Unavailable("timeout".into())), &mut roster);
    load.resolve(Ok("attendees:\n - Late\n".into()), &mut roster);

    assert!(load.is_resolved());
    assert_eq!(*log.borrow(), vec![(0, false), (1, false), (2, false)]);
    assert_eq!(roster.attendees(), ["Keep"]);
}

#[test]
fn test_text_without_sections_falls_back() {
    let mut roster = ParticipantList::default();
    let mut load = RosterLoad::new();
    let outcome = load.resolve(Ok("<html>not found</html>".into()), &mut roster);

    assert_eq!(
        outcome,
        LoadOutcome::Fallback {
            reason: RosterError::NoSections.to_string()
        }
    );
    assert!(roster.is_empty());
}

#[test]
fn test_accented_names_sort_with_their_base_letter() {
    let names = parse_list("zed\nÉmile\nEve\n_x\n10\némile\n");
    assert_eq!(names, vec!["_x", "10", "Émile", "Eve", "zed"]);
}
