//! Facilitator - the host-facing facade
//!
//! Owns the long-lived configuration state (roster and session config), the
//! single turn-timer slot and the single group view. Host inputs (controls,
//! key presses, frame callbacks) map onto its synchronous commands; each
//! command reports a [`Status`] instead of failing, so every degenerate
//! condition has something to show.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::config::{GroupParams, SessionConfig, TurnParams, MIN_SECONDS_PER_ENTRY};
use crate::core::time::{unix_millis, Millis};
use crate::lineup::{build_run_order, partition_groups, GroupPartition};
use crate::models::ParticipantList;
use crate::rng::Seed;
use crate::roster::{LoadOutcome, RosterError, RosterLoad};
use crate::timer::{
    Advance, FrameRequest, TimerError, TimerState, TurnDisplay, TurnTimer, ALL_DONE, NO_ENTRIES,
};

/// Outcome of a facilitator command, for the renderer's status line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Nothing active
    Idle,
    /// A session began on `entry`
    Started { entry: String, total: usize },
    /// The countdown moved to `entry`
    NextEntry { entry: String, index: usize },
    Paused,
    Resumed,
    /// The last entry finished
    AllDone,
    /// A start found an empty run order
    NoEntries,
    /// A group action found no attendees
    NoAttendees,
    /// Groups are ready to show
    Groups { count: usize },
    /// Roster replaced from a load or editor commit
    RosterUpdated { attendees: usize, organizers: usize },
    /// Roster load failed; configured lists kept
    UsingDefaults,
    /// The command does not apply in the current state
    Ignored { reason: String },
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Idle => write!(f, "Ready"),
            Status::Started { entry, total } => write!(f, "{} (1 of {})", entry, total),
            Status::NextEntry { entry, index } => write!(f, "{} (#{})", entry, index + 1),
            Status::Paused => write!(f, "Paused"),
            Status::Resumed => write!(f, "Resumed"),
            Status::AllDone => write!(f, "{}", ALL_DONE),
            Status::NoEntries => write!(f, "{}", NO_ENTRIES),
            Status::NoAttendees => write!(f, "No attendees configured"),
            Status::Groups { count } => write!(f, "{} groups", count),
            Status::RosterUpdated {
                attendees,
                organizers,
            } => write!(f, "{} attendees, {} organizers", attendees, organizers),
            Status::UsingDefaults => write!(f, "Using defaults"),
            Status::Ignored { reason } => write!(f, "{}", reason),
        }
    }
}

impl From<Advance> for Status {
    fn from(advance: Advance) -> Self {
        match advance {
            Advance::Next { entry, index } => Status::NextEntry { entry, index },
            Advance::Finished => Status::AllDone,
        }
    }
}

impl From<TimerError> for Status {
    fn from(err: TimerError) -> Self {
        match err {
            TimerError::NoEntries => Status::NoEntries,
            other => Status::Ignored {
                reason: other.to_string(),
            },
        }
    }
}

/// One driver frame: what to draw and whether to call again
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub display: TurnDisplay,
    pub frame: FrameRequest,
    /// Set when this frame moved to another entry or finished
    pub status: Option<Status>,
}

/// Facilitation engine for one presentation
///
/// # Example
/// ```
/// use turn_roulette_core_rs::{Facilitator, FrameRequest, SessionConfig, Status, TurnParams};
///
/// let mut facilitator = Facilitator::new(SessionConfig::default());
/// facilitator.commit_roster_text("Bob\nalice\nCharlie", "");
///
/// let params = TurnParams::from_inputs("60", "demo", false);
/// let status = facilitator.start(&params, 0);
/// assert_eq!(status, Status::Started { entry: "Bob".into(), total: 3 });
///
/// let frame = facilitator.frame(30_000);
/// assert_eq!(frame.display.label, "30s");
/// assert_eq!(frame.frame, FrameRequest::NextFrame);
/// ```
#[derive(Debug, Clone)]
pub struct Facilitator {
    config: SessionConfig,
    roster: ParticipantList,
    timer: TurnTimer,
    groups: Option<GroupPartition>,
    status: Status,
}

impl Facilitator {
    /// Create a facilitator whose roster starts as the config's lists
    pub fn new(config: SessionConfig) -> Self {
        let config = config.normalized();
        let roster = config.roster();
        Self {
            config,
            roster,
            timer: TurnTimer::new(),
            groups: None,
            status: Status::Idle,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn roster(&self) -> &ParticipantList {
        &self.roster
    }

    pub fn timer(&self) -> &TurnTimer {
        &self.timer
    }

    /// Most recent command status
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Current group view, if any
    pub fn groups(&self) -> Option<&GroupPartition> {
        self.groups.as_ref()
    }

    // ========================================================================
    // Roster configuration
    // ========================================================================

    /// Replace the roster wholesale
    pub fn set_roster(&mut self, roster: ParticipantList) -> Status {
        self.roster = roster;
        self.record(Status::RosterUpdated {
            attendees: self.roster.attendees().len(),
            organizers: self.roster.organizers().len(),
        })
    }

    /// Commit editor text (one name per line) as the new roster
    pub fn commit_roster_text(&mut self, attendees: &str, organizers: &str) -> Status {
        self.set_roster(ParticipantList::from_text(attendees, organizers))
    }

    /// Resolve a pending roster load against this facilitator's roster
    pub fn resolve_roster_load(
        &mut self,
        load: &mut RosterLoad,
        fetched: Result<String, RosterError>,
    ) -> Status {
        match load.resolve(fetched, &mut self.roster) {
            LoadOutcome::Loaded {
                attendees,
                organizers,
            } => self.record(Status::RosterUpdated {
                attendees,
                organizers,
            }),
            LoadOutcome::Fallback { .. } => self.record(Status::UsingDefaults),
        }
    }

    // ========================================================================
    // Turn timer commands
    // ========================================================================

    /// Build a run order and start counting down its first entry
    ///
    /// Any previous session is torn down first: there is only one slot.
    /// Seconds below the minimum are raised to it.
    pub fn start(&mut self, params: &TurnParams, now: Millis) -> Status {
        self.timer.teardown();

        let seconds_per_entry = params.seconds_per_entry.max(MIN_SECONDS_PER_ENTRY);

        let seed = Seed::from_input_at(&params.seed, unix_millis());
        let order = build_run_order(&self.roster, &seed, params.include_organizers);
        let total = order.len();

        let status = match self.timer.start(order.into_names(), seconds_per_entry, now) {
            Ok(_) => Status::Started {
                entry: self.timer.current_entry().unwrap_or_default().to_string(),
                total,
            },
            Err(err) => err.into(),
        };
        self.record(status)
    }

    /// Primary input: start when nothing is running, else pause/resume
    pub fn toggle(&mut self, params: &TurnParams, now: Millis) -> Status {
        match self.timer.state() {
            TimerState::Idle | TimerState::Finished => self.start(params, now),
            TimerState::Running | TimerState::Paused => {
                let status = match self.timer.toggle_pause(now) {
                    Ok(FrameRequest::Stop) => Status::Paused,
                    Ok(FrameRequest::NextFrame) => Status::Resumed,
                    Err(err) => err.into(),
                };
                self.record(status)
            }
        }
    }

    pub fn pause(&mut self, now: Millis) -> Status {
        let status = match self.timer.pause(now) {
            Ok(_) => Status::Paused,
            Err(err) => err.into(),
        };
        self.record(status)
    }

    pub fn resume(&mut self, now: Millis) -> Status {
        let status = match self.timer.resume(now) {
            Ok(_) => Status::Resumed,
            Err(err) => err.into(),
        };
        self.record(status)
    }

    /// Cut the current entry short
    pub fn skip(&mut self, now: Millis) -> Status {
        let status = match self.timer.skip(now) {
            Ok(advance) => advance.into(),
            Err(err) => err.into(),
        };
        self.record(status)
    }

    /// Driver frame callback
    ///
    /// A frame arriving while the timer is not running (a callback that was
    /// already queued before a pause or teardown) changes nothing and asks
    /// for no further frames.
    pub fn frame(&mut self, now: Millis) -> Frame {
        match self.timer.tick(now) {
            Ok(outcome) => {
                let status = outcome.advanced.map(|advance| self.record(advance.into()));
                Frame {
                    display: self.display(now),
                    frame: outcome.frame,
                    status,
                }
            }
            Err(_) => Frame {
                display: self.display(now),
                frame: FrameRequest::Stop,
                status: None,
            },
        }
    }

    /// Discard the session (slide left, presenter quit); idempotent
    pub fn teardown(&mut self) {
        self.timer.teardown();
        self.status = Status::Idle;
    }

    /// Renderer snapshot at `now`
    pub fn display(&self, now: Millis) -> TurnDisplay {
        let display = self.timer.display(now);
        match self.status {
            Status::NoEntries => display.with_status(NO_ENTRIES),
            _ => display,
        }
    }

    // ========================================================================
    // Groups
    // ========================================================================

    /// Shuffle the attendees into groups, replacing the current group view
    pub fn make_groups(&mut self, params: &GroupParams) -> Status {
        let seed = Seed::from_input_at(&params.seed, unix_millis());
        let status = match partition_groups(self.roster.attendees(), params.group_count, &seed) {
            Ok(partition) => {
                let count = partition.len();
                self.groups = Some(partition);
                Status::Groups { count }
            }
            Err(_) => {
                self.groups = None;
                Status::NoAttendees
            }
        };
        self.record(status)
    }

    pub fn clear_groups(&mut self) {
        self.groups = None;
    }

    fn record(&mut self, status: Status) -> Status {
        tracing::debug!(%status, "facilitator status");
        self.status = status.clone();
        status
    }
}
