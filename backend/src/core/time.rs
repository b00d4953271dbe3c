//! Time handling for the turn timer
//!
//! The timer never reads a clock itself: every command takes `now` as
//! milliseconds on a monotonic scale chosen by the driver. This module
//! provides that scale ([`MonotonicClock`]), the wall-clock reading used for
//! fresh seeds, and the countdown labels shown to a renderer.

use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// Milliseconds on the driver's monotonic scale
pub type Millis = u64;

/// Milliseconds since the Unix epoch (0 if the system clock is before it)
pub fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Monotonic millisecond source anchored at construction
///
/// # Example
/// ```
/// use turn_roulette_core_rs::MonotonicClock;
///
/// let clock = MonotonicClock::new();
/// let a = clock.now_ms();
/// let b = clock.now_ms();
/// assert!(b >= a);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Milliseconds elapsed since the clock was created
    pub fn now_ms(&self) -> Millis {
        self.origin.elapsed().as_millis() as Millis
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Whole seconds shown on the countdown ring
///
/// Rounds up while at least one second is left, so a fresh 60s turn reads
/// 60 and the final partial second reads 0.
///
/// # Example
/// ```
/// use turn_roulette_core_rs::core::time::countdown_seconds;
///
/// assert_eq!(countdown_seconds(60_000), 60);
/// assert_eq!(countdown_seconds(59_001), 60);
/// assert_eq!(countdown_seconds(1_000), 1);
/// assert_eq!(countdown_seconds(999), 0);
/// ```
pub fn countdown_seconds(left_ms: Millis) -> u64 {
    if left_ms >= 1_000 {
        left_ms.div_ceil(1_000)
    } else {
        0
    }
}

/// Countdown label, e.g. `"42s"`
pub fn countdown_label(left_ms: Millis) -> String {
    format!("{}s", countdown_seconds(left_ms))
}

/// Minutes and seconds, e.g. `"1:05"`
///
/// # Example
/// ```
/// use turn_roulette_core_rs::core::time::clock_label;
///
/// assert_eq!(clock_label(65_000), "1:05");
/// assert_eq!(clock_label(500), "0:00");
/// ```
pub fn clock_label(left_ms: Millis) -> String {
    let secs = countdown_seconds(left_ms);
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Fraction of the turn still left, in [0, 1]
pub fn progress_ratio(left_ms: Millis, total_ms: Millis) -> f64 {
    if total_ms == 0 {
        return 0.0;
    }
    (left_ms as f64 / total_ms as f64).clamp(0.0, 1.0)
}
