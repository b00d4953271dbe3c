//! Turn timer state machine

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::display::TurnDisplay;
use super::session::TurnSession;
use crate::core::time::Millis;
use crate::models::{EventLog, TimerEvent};

/// Timer lifecycle state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerState {
    /// No session; accepts `start`
    #[default]
    Idle,
    /// Counting down the current entry
    Running,
    /// Countdown frozen
    Paused,
    /// Every entry has had its turn; only `teardown` leaves this state
    Finished,
}

impl fmt::Display for TimerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimerState::Idle => "idle",
            TimerState::Running => "running",
            TimerState::Paused => "paused",
            TimerState::Finished => "finished",
        };
        f.write_str(name)
    }
}

/// Errors from timer commands
///
/// None of these leave the timer in a different state than before the call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimerError {
    #[error("No names configured")]
    NoEntries,

    #[error("Cannot {command} while {state}")]
    InvalidTransition {
        command: &'static str,
        state: TimerState,
    },
}

/// Whether the driver should schedule another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameRequest {
    /// Call `tick` again on the next frame
    NextFrame,
    /// No further ticks wanted (paused, finished, or torn down)
    Stop,
}

/// Result of moving past the current entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Advance {
    /// Countdown restarted on the entry at `index`
    Next { entry: String, index: usize },
    /// The list is exhausted
    Finished,
}

/// Result of one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickOutcome {
    /// Time left on the entry that was current when the frame started
    pub remaining_ms: Millis,
    /// Set when this frame's countdown reached zero
    pub advanced: Option<Advance>,
    pub frame: FrameRequest,
}

/// Countdown driver for a single run order
///
/// Holds at most one [`TurnSession`]. Every command takes the driver's
/// current time in milliseconds; the timer itself never reads a clock or
/// schedules anything.
///
/// # Example
/// ```
/// use turn_roulette_core_rs::{Advance, TimerState, TurnTimer};
///
/// let mut timer = TurnTimer::new();
/// timer.start(vec!["Ada".into(), "Ben".into()], 60, 0).unwrap();
///
/// let tick = timer.tick(59_000).unwrap();
/// assert_eq!(tick.remaining_ms, 1_000);
///
/// let tick = timer.tick(60_000).unwrap();
/// assert_eq!(tick.advanced, Some(Advance::Next { entry: "Ben".into(), index: 1 }));
/// assert_eq!(timer.state(), TimerState::Running);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TurnTimer {
    state: TimerState,
    session: Option<TurnSession>,
    /// Entries in the most recently finished run
    finished_total: usize,
    /// Spans every session this timer has run; `teardown` does not clear it
    events: EventLog,
}

impl TurnTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn session(&self) -> Option<&TurnSession> {
        self.session.as_ref()
    }

    /// Events from every session so far, oldest first
    ///
    /// Use [`EventLog::events_for_session`] to narrow to one run.
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// True while the timer wants frames from its driver
    pub fn wants_frame(&self) -> bool {
        self.state == TimerState::Running
    }

    /// Name currently on the countdown
    pub fn current_entry(&self) -> Option<&str> {
        self.session.as_ref().map(TurnSession::current_entry)
    }

    /// Time left on the current entry at `now` (0 without a session)
    pub fn remaining_at(&self, now: Millis) -> Millis {
        self.session.as_ref().map_or(0, |s| s.left_at(now))
    }

    /// Begin a session on `list`
    ///
    /// # Errors
    /// - [`TimerError::NoEntries`] if `list` is empty (timer stays idle)
    /// - [`TimerError::InvalidTransition`] unless the timer is idle
    pub fn start(
        &mut self,
        list: Vec<String>,
        seconds_per_entry: u32,
        now: Millis,
    ) -> Result<FrameRequest, TimerError> {
        self.require("start", &[TimerState::Idle])?;

        if list.is_empty() {
            tracing::info!("start refused: run order is empty");
            self.events.log(TimerEvent::NoEntries { at_ms: now });
            return Err(TimerError::NoEntries);
        }

        let session = TurnSession::new(list, seconds_per_entry, now);
        tracing::info!(
            session_id = %session.id(),
            entries = session.len(),
            seconds_per_entry,
            "turn session started"
        );
        self.events.log(TimerEvent::Started {
            at_ms: now,
            session_id: session.id(),
            entry: session.current_entry().to_string(),
            total: session.len(),
            seconds_per_entry,
        });
        self.session = Some(session);
        self.state = TimerState::Running;
        Ok(FrameRequest::NextFrame)
    }

    /// Recompute the countdown at `now`, advancing when it reaches zero
    ///
    /// # Errors
    /// [`TimerError::InvalidTransition`] unless running. A frame that was
    /// requested before a pause or teardown lands here and has no effect.
    pub fn tick(&mut self, now: Millis) -> Result<TickOutcome, TimerError> {
        self.require("tick", &[TimerState::Running])?;
        let left = self.remaining_at(now);

        if left > 0 {
            return Ok(TickOutcome {
                remaining_ms: left,
                advanced: None,
                frame: FrameRequest::NextFrame,
            });
        }

        let advanced = self.advance(now)?;
        Ok(TickOutcome {
            remaining_ms: 0,
            frame: self.frame_request(),
            advanced: Some(advanced),
        })
    }

    /// Freeze the countdown; returns the time left
    pub fn pause(&mut self, now: Millis) -> Result<Millis, TimerError> {
        self.require("pause", &[TimerState::Running])?;
        let session = self.session_mut("pause")?;
        session.freeze(now);
        let remaining_ms = session.remaining_ms();
        let session_id = session.id();

        tracing::debug!(%session_id, remaining_ms, "paused");
        self.events.log(TimerEvent::Paused {
            at_ms: now,
            session_id,
            remaining_ms,
        });
        self.state = TimerState::Paused;
        Ok(remaining_ms)
    }

    /// Restart the countdown from where it was frozen
    ///
    /// Time spent paused is not charged to the entry.
    pub fn resume(&mut self, now: Millis) -> Result<FrameRequest, TimerError> {
        self.require("resume", &[TimerState::Paused])?;
        let session = self.session_mut("resume")?;
        session.unfreeze(now);
        let remaining_ms = session.remaining_ms();
        let session_id = session.id();

        tracing::debug!(%session_id, remaining_ms, "resumed");
        self.events.log(TimerEvent::Resumed {
            at_ms: now,
            session_id,
            remaining_ms,
        });
        self.state = TimerState::Running;
        Ok(FrameRequest::NextFrame)
    }

    /// Pause when running, resume when paused
    pub fn toggle_pause(&mut self, now: Millis) -> Result<FrameRequest, TimerError> {
        match self.state {
            TimerState::Running => self.pause(now).map(|_| FrameRequest::Stop),
            TimerState::Paused => self.resume(now),
            state => Err(TimerError::InvalidTransition {
                command: "toggle",
                state,
            }),
        }
    }

    /// End the current entry immediately, whatever time is left
    pub fn skip(&mut self, now: Millis) -> Result<Advance, TimerError> {
        self.require("skip", &[TimerState::Running, TimerState::Paused])?;
        if let Some(session) = &self.session {
            let remaining_ms = session.left_at(now);
            tracing::debug!(entry = session.current_entry(), remaining_ms, "skipped");
            self.events.log(TimerEvent::Skipped {
                at_ms: now,
                session_id: session.id(),
                entry: session.current_entry().to_string(),
                index: session.index(),
                remaining_ms,
            });
        }
        self.advance(now)
    }

    /// Move to the next entry, or finish after the last one
    ///
    /// A paused session comes back running on the next entry.
    pub fn advance(&mut self, now: Millis) -> Result<Advance, TimerError> {
        self.require("advance", &[TimerState::Running, TimerState::Paused])?;
        let session = self.session_mut("advance")?;

        if session.step(now) {
            let entry = session.current_entry().to_string();
            let index = session.index();
            let session_id = session.id();
            tracing::debug!(%session_id, index, entry = entry.as_str(), "next entry");
            self.events.log(TimerEvent::EntryChanged {
                at_ms: now,
                session_id,
                entry: entry.clone(),
                index,
            });
            self.state = TimerState::Running;
            return Ok(Advance::Next { entry, index });
        }

        let total = session.len();
        let session_id = session.id();
        tracing::info!(%session_id, total, "turn session finished");
        self.events.log(TimerEvent::Finished {
            at_ms: now,
            session_id,
            total,
        });
        self.session = None;
        self.finished_total = total;
        self.state = TimerState::Finished;
        Ok(Advance::Finished)
    }

    /// Discard any session and return to idle; safe to call repeatedly
    pub fn teardown(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::debug!(session_id = %session.id(), "turn session torn down");
            self.events.log(TimerEvent::TornDown {
                session_id: session.id(),
            });
        }
        self.finished_total = 0;
        self.state = TimerState::Idle;
    }

    /// Snapshot for a renderer at `now`
    pub fn display(&self, now: Millis) -> TurnDisplay {
        match (&self.session, self.state) {
            (Some(session), _) => TurnDisplay::for_session(session, self.state, now),
            (None, TimerState::Finished) => TurnDisplay::finished(self.finished_total),
            (None, _) => TurnDisplay::idle(),
        }
    }

    fn frame_request(&self) -> FrameRequest {
        if self.wants_frame() {
            FrameRequest::NextFrame
        } else {
            FrameRequest::Stop
        }
    }

    fn require(&self, command: &'static str, allowed: &[TimerState]) -> Result<(), TimerError> {
        if allowed.contains(&self.state) {
            Ok(())
        } else {
            Err(TimerError::InvalidTransition {
                command,
                state: self.state,
            })
        }
    }

    fn session_mut(&mut self, command: &'static str) -> Result<&mut TurnSession, TimerError> {
        let state = self.state;
        self.session
            .as_mut()
            .ok_or(TimerError::InvalidTransition { command, state })
    }
}
