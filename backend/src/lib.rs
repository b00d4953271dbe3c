//! Turn Roulette Core - Rust Engine
//!
//! Seeded name roulette and group maker for live facilitation: picks
//! participants in a reproducible random order with a per-entry countdown,
//! or splits the roster into balanced random groups.
//!
//! # Architecture
//!
//! - **rng**: Seed digest, counter-based generator, Fisher–Yates shuffle
//! - **roster**: Name normalization, roster text format, one-shot loading
//! - **models**: Domain types (ParticipantList, TimerEvent)
//! - **lineup**: Run-order builder and group partitioner
//! - **timer**: Turn-timer state machine and display snapshot
//! - **orchestrator**: Configuration and the `Facilitator` host facade
//! - **core**: Clock readings and countdown formatting
//!
//! # Critical Invariants
//!
//! 1. All randomness is deterministic for a non-empty seed
//! 2. Roster lists are always normalized (unique, collated case- and accent-insensitively)
//! 3. The timer never reads a clock or schedules itself; drivers pass `now`

// Module declarations
pub mod core;
pub mod lineup;
pub mod models;
pub mod orchestrator;
pub mod rng;
pub mod roster;
pub mod timer;

// Re-exports for convenience
pub use crate::core::time::{Millis, MonotonicClock};
pub use lineup::{
    build_run_order, partition_groups, split_balanced, GroupError, GroupPartition, RunOrder,
};
pub use models::{EventLog, ParticipantList, TimerEvent};
pub use orchestrator::{
    header_seconds, sanitize_group_count, sanitize_seconds, ConfigError, Facilitator, Frame,
    GroupParams, SessionConfig, Status, TurnParams,
};
pub use rng::{seed_hash, seeded_shuffle, shuffle_with, Seed, SeedRole, StreamGenerator};
pub use roster::{
    normalize_names, parse_list, parse_roster, LoadOutcome, ParsedRoster, RosterError, RosterLoad,
};
pub use timer::{
    Advance, FrameRequest, TickOutcome, TimerError, TimerState, TurnDisplay, TurnSession,
    TurnTimer, ALL_DONE, NO_ENTRIES,
};
