//! One-shot roster load
//!
//! A roster may arrive asynchronously (file read, network fetch). Callers
//! register "ready" callbacks before the load resolves; the load resolves
//! exactly once, and every callback fires exactly once with the outcome,
//! on success and on failure alike. A failed load keeps whatever lists were
//! configured before.

use std::fmt;
use thiserror::Error;

use super::parser::parse_roster;
use crate::models::ParticipantList;

/// Why a roster could not be loaded
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("Roster source unavailable: {0}")]
    Unavailable(String),

    #[error("Roster contains no attendees or organizers section")]
    NoSections,
}

/// Result of a resolved load, as seen by ready callbacks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Roster applied; counts are the configured list sizes afterwards
    Loaded { attendees: usize, organizers: usize },

    /// Load failed; previous lists were kept
    Fallback { reason: String },
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded { .. })
    }

    /// Status line for the renderer
    pub fn status(&self) -> String {
        match self {
            LoadOutcome::Loaded {
                attendees,
                organizers,
            } => format!(
                "Loaded {} attendees and {} organizers",
                attendees, organizers
            ),
            LoadOutcome::Fallback { .. } => "Using defaults".to_string(),
        }
    }
}

type ReadyCallback = Box<dyn FnOnce(&LoadOutcome)>;

enum LoadState {
    Pending(Vec<ReadyCallback>),
    Resolved(LoadOutcome),
}

/// Pending-or-resolved roster load with queued ready callbacks
///
/// # Example
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use turn_roulette_core_rs::{ParticipantList, RosterLoad};
///
/// let mut roster = ParticipantList::default();
/// let mut load = RosterLoad::new();
/// let fired = Rc::new(Cell::new(0));
/// let counter = fired.clone();
/// load.on_ready(move |_| counter.set(counter.get() + 1));
///
/// load.resolve(Ok("attendees:\n - Bob\n".to_string()), &mut roster);
/// assert_eq!(fired.get(), 1);
/// assert_eq!(roster.attendees(), ["Bob".to_string()]);
/// ```
pub struct RosterLoad {
    state: LoadState,
}

impl RosterLoad {
    pub fn new() -> Self {
        Self {
            state: LoadState::Pending(Vec::new()),
        }
    }

    /// Register a callback; runs immediately if the load already resolved
    pub fn on_ready<F>(&mut self, callback: F)
    where
        F: FnOnce(&LoadOutcome) + 'static,
    {
        match &mut self.state {
            LoadState::Pending(callbacks) => callbacks.push(Box::new(callback)),
            LoadState::Resolved(outcome) => callback(outcome),
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self.state, LoadState::Resolved(_))
    }

    /// Outcome, once resolved
    pub fn outcome(&self) -> Option<&LoadOutcome> {
        match &self.state {
            LoadState::Resolved(outcome) => Some(outcome),
            LoadState::Pending(_) => None,
        }
    }

    /// Resolve the load with fetched text (or the transport error)
    ///
    /// Applies parsed sections to `roster` on success. Only the first call
    /// has any effect; later calls return the original outcome untouched.
    pub fn resolve(
        &mut self,
        fetched: Result<String, RosterError>,
        roster: &mut ParticipantList,
    ) -> LoadOutcome {
        if let LoadState::Resolved(outcome) = &self.state {
            tracing::debug!("roster load already resolved; ignoring");
            return outcome.clone();
        }

        let outcome = match fetched.and_then(|text| {
            let parsed = parse_roster(&text);
            if parsed.is_empty() {
                Err(RosterError::NoSections)
            } else {
                Ok(parsed)
            }
        }) {
            Ok(parsed) => {
                roster.apply(parsed);
                tracing::info!(
                    attendees = roster.attendees().len(),
                    organizers = roster.organizers().len(),
                    "roster loaded"
                );
                LoadOutcome::Loaded {
                    attendees: roster.attendees().len(),
                    organizers: roster.organizers().len(),
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "roster load failed; keeping configured lists");
                LoadOutcome::Fallback {
                    reason: err.to_string(),
                }
            }
        };

        let previous = std::mem::replace(&mut self.state, LoadState::Resolved(outcome.clone()));
        if let LoadState::Pending(callbacks) = previous {
            for callback in callbacks {
                callback(&outcome);
            }
        }
        outcome
    }
}

impl Default for RosterLoad {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RosterLoad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            LoadState::Pending(callbacks) => f
                .debug_struct("RosterLoad")
                .field("pending_callbacks", &callbacks.len())
                .finish(),
            LoadState::Resolved(outcome) => f
                .debug_struct("RosterLoad")
                .field("outcome", outcome)
                .finish(),
        }
    }
}
