//! Roster input: name normalization, the roster text format, and the
//! one-shot roster load.

pub mod loader;
pub mod normalize;
pub mod parser;

pub use loader::{LoadOutcome, RosterError, RosterLoad};
pub use normalize::{normalize_names, parse_list};
pub use parser::{parse_roster, ParsedRoster};
