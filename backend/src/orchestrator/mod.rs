//! Facilitator - configuration and the host-facing command surface
//!
//! See `engine.rs` for the command set and `config.rs` for options.

pub mod config;
pub mod engine;

pub use config::{
    header_seconds, sanitize_group_count, sanitize_seconds, ConfigError, GroupParams,
    SessionConfig, TurnParams,
};
pub use engine::{Facilitator, Frame, Status};
