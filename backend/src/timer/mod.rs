//! Turn timer
//!
//! Countdown state machine for one live turn-taking session:
//!
//! ```text
//!            start (non-empty)          pause
//!   Idle ───────────────────▶ Running ◀──────▶ Paused
//!    ▲                          │     resume     │
//!    │ teardown (any state)     │ advance past   │ skip / advance
//!    │                          ▼ last entry     │ past last entry
//!    └─────────────────────── Finished ◀─────────┘
//! ```
//!
//! The timer is driven from outside: a frame scheduler calls
//! [`TurnTimer::tick`] with the current time, and the tick's
//! [`FrameRequest`] says whether another call is wanted. The remaining time
//! is always recomputed from the reference timestamp, so late or irregular
//! frames never accumulate drift.

mod display;
mod session;
mod turn_timer;

pub use display::{TurnDisplay, ALL_DONE, NO_ENTRIES};
pub use session::TurnSession;
pub use turn_timer::{Advance, FrameRequest, TickOutcome, TimerError, TimerState, TurnTimer};
