//! Deterministic random number generation
//!
//! Uses a 32-bit string digest (xmur3-style) to seed a 32-bit counter-based
//! generator (mulberry32-style), and a Fisher–Yates shuffle on top of it.
//! CRITICAL: All randomness in the facilitator MUST go through this module.

mod seed;
mod seed_hash;
mod shuffle;
mod stream;

pub use seed::{Seed, SeedRole};
pub use seed_hash::seed_hash;
pub use shuffle::{seeded_shuffle, shuffle_with};
pub use stream::StreamGenerator;
