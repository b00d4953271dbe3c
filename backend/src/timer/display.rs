//! Renderer-facing snapshot of the turn timer

use serde::{Deserialize, Serialize};

use super::session::TurnSession;
use super::turn_timer::TimerState;
use crate::core::time::{clock_label, countdown_label, progress_ratio, Millis};

/// Headline shown when a start finds no names
pub const NO_ENTRIES: &str = "No names configured";

/// Headline shown after the last entry
pub const ALL_DONE: &str = "All done 🎉";

/// What a renderer needs to draw the overlay at one instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnDisplay {
    pub state: TimerState,
    /// Name on the countdown, if a session is active
    pub entry: Option<String>,
    /// Text for the name box: the entry, a sentinel, or empty
    pub headline: String,
    /// Zero-based position of `entry` in the run order
    pub index: usize,
    /// Length of the run order
    pub total: usize,
    pub remaining_ms: Millis,
    /// e.g. `"42s"`
    pub label: String,
    /// e.g. `"0:42"`
    pub clock: String,
    /// Fraction of the entry's time still left, 1.0 → 0.0
    pub progress: f64,
}

impl TurnDisplay {
    pub(crate) fn for_session(session: &TurnSession, state: TimerState, now: Millis) -> Self {
        let left = session.left_at(now);
        Self {
            state,
            entry: Some(session.current_entry().to_string()),
            headline: session.current_entry().to_string(),
            index: session.index(),
            total: session.len(),
            remaining_ms: left,
            label: countdown_label(left),
            clock: clock_label(left),
            progress: progress_ratio(left, session.entry_ms()),
        }
    }

    pub(crate) fn finished(total: usize) -> Self {
        Self {
            state: TimerState::Finished,
            headline: ALL_DONE.to_string(),
            total,
            index: total,
            ..Self::idle()
        }
    }

    pub(crate) fn idle() -> Self {
        Self {
            state: TimerState::Idle,
            entry: None,
            headline: String::new(),
            index: 0,
            total: 0,
            remaining_ms: 0,
            label: countdown_label(0),
            clock: clock_label(0),
            progress: 0.0,
        }
    }

    /// Same snapshot with a status message in place of an empty headline
    pub fn with_status(mut self, status: &str) -> Self {
        if self.headline.is_empty() {
            self.headline = status.to_string();
        }
        self
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn is_paused(&self) -> bool {
        self.state == TimerState::Paused
    }

    pub fn is_finished(&self) -> bool {
        self.state == TimerState::Finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_snapshot() {
        let session = TurnSession::new(vec!["Ada".into(), "Ben".into()], 60, 0);
        let display = TurnDisplay::for_session(&session, TimerState::Running, 17_500);

        assert_eq!(display.headline, "Ada");
        assert_eq!(display.remaining_ms, 42_500);
        assert_eq!(display.label, "43s");
        assert_eq!(display.clock, "0:43");
        assert_eq!(display.total, 2);
        assert!(display.is_running());
    }

    #[test]
    fn test_finished_snapshot() {
        let display = TurnDisplay::finished(3);
        assert_eq!(display.headline, ALL_DONE);
        assert_eq!(display.label, "0s");
        assert!(display.entry.is_none());
        assert!(display.is_finished());
    }

    #[test]
    fn test_status_only_fills_empty_headline() {
        assert_eq!(TurnDisplay::idle().with_status(NO_ENTRIES).headline, NO_ENTRIES);
        assert_eq!(TurnDisplay::finished(1).with_status(NO_ENTRIES).headline, ALL_DONE);
    }
}
