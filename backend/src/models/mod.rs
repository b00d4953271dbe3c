//! Domain models for the facilitator

pub mod event;
pub mod participants;

// Re-exports
pub use event::{EventLog, TimerEvent};
pub use participants::ParticipantList;
