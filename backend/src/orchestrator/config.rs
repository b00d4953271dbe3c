//! Facilitator configuration
//!
//! Every recognized option with its default. Values typed into form fields
//! or slide headers are sanitized, never rejected: a missing or unreadable
//! number falls back to its default, and durations are clamped.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::ParticipantList;

pub const DEFAULT_SECONDS_PER_ENTRY: u32 = 60;
pub const MIN_SECONDS_PER_ENTRY: u32 = 5;
pub const DEFAULT_GROUP_COUNT: usize = 4;
pub const MIN_GROUP_COUNT: usize = 1;

/// Slide-header keys consulted for a per-slide duration, in priority order
pub const HEADER_SECONDS_KEYS: [&str; 4] = ["time", "seconds", "secs", "duration"];

/// Errors loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Session configuration
///
/// ```toml
/// seconds_per_entry = 90
/// seed = "retro-2025-09-15"
/// include_organizers = true
/// group_count = 3
/// attendees = ["Bob", "alice"]
/// organizers = ["Dana"]
/// ```
///
/// `attendees` and `organizers` are the fallback roster, used until (or
/// instead of) a roster load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub seconds_per_entry: u32,
    pub seed: String,
    pub include_organizers: bool,
    pub group_count: usize,
    pub attendees: Vec<String>,
    pub organizers: Vec<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seconds_per_entry: DEFAULT_SECONDS_PER_ENTRY,
            seed: String::new(),
            include_organizers: false,
            group_count: DEFAULT_GROUP_COUNT,
            attendees: Vec::new(),
            organizers: Vec::new(),
        }
    }
}

impl SessionConfig {
    /// Parse TOML; missing keys take their defaults
    ///
    /// # Example
    /// ```
    /// use turn_roulette_core_rs::SessionConfig;
    ///
    /// let config = SessionConfig::from_toml_str("seconds_per_entry = 2\nseed = 'x'").unwrap();
    /// assert_eq!(config.seconds_per_entry, 5);
    /// assert_eq!(config.group_count, 4);
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: SessionConfig = toml::from_str(text)?;
        Ok(config.normalized())
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Clamp numeric options into their valid ranges
    pub fn normalized(mut self) -> Self {
        if self.seconds_per_entry < MIN_SECONDS_PER_ENTRY {
            tracing::warn!(
                requested = self.seconds_per_entry,
                "seconds_per_entry below minimum; clamping"
            );
            self.seconds_per_entry = MIN_SECONDS_PER_ENTRY;
        }
        if self.group_count < MIN_GROUP_COUNT {
            tracing::warn!("group_count must be positive; using default");
            self.group_count = DEFAULT_GROUP_COUNT;
        }
        self.seed = self.seed.trim().to_string();
        self
    }

    /// Fallback roster from the configured lists
    pub fn roster(&self) -> ParticipantList {
        ParticipantList::new(self.attendees.clone(), self.organizers.clone())
    }

    pub fn turn_params(&self) -> TurnParams {
        TurnParams {
            seconds_per_entry: self.seconds_per_entry.max(MIN_SECONDS_PER_ENTRY),
            seed: self.seed.clone(),
            include_organizers: self.include_organizers,
        }
    }

    pub fn group_params(&self) -> GroupParams {
        GroupParams {
            group_count: self.group_count.max(MIN_GROUP_COUNT),
            seed: self.seed.clone(),
        }
    }
}

/// Parameters of one "start" action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnParams {
    pub seconds_per_entry: u32,
    pub seed: String,
    pub include_organizers: bool,
}

impl TurnParams {
    /// Build from raw control values (seconds field, seed field, checkbox)
    ///
    /// # Example
    /// ```
    /// use turn_roulette_core_rs::TurnParams;
    ///
    /// let params = TurnParams::from_inputs("abc", "  demo ", true);
    /// assert_eq!(params.seconds_per_entry, 60);
    /// assert_eq!(params.seed, "demo");
    /// ```
    pub fn from_inputs(seconds: &str, seed: &str, include_organizers: bool) -> Self {
        Self {
            seconds_per_entry: sanitize_seconds(seconds),
            seed: seed.trim().to_string(),
            include_organizers,
        }
    }
}

impl Default for TurnParams {
    fn default() -> Self {
        SessionConfig::default().turn_params()
    }
}

/// Parameters of one "group" action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupParams {
    pub group_count: usize,
    pub seed: String,
}

impl GroupParams {
    /// Build from raw control values (group-count field, seed field)
    pub fn from_inputs(group_count: &str, seed: &str) -> Self {
        Self {
            group_count: sanitize_group_count(group_count),
            seed: seed.trim().to_string(),
        }
    }
}

impl Default for GroupParams {
    fn default() -> Self {
        SessionConfig::default().group_params()
    }
}

/// Read the leading integer of a form value (`"90s"` → 90)
///
/// Leading whitespace and one sign are accepted; anything else ends the
/// number. Returns `None` when no digits lead the text.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let text = raw.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    // saturate absurdly long digit runs instead of failing
    let value = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

/// Seconds-per-entry from a form value: default 60, minimum 5
///
/// # Example
/// ```
/// use turn_roulette_core_rs::sanitize_seconds;
///
/// assert_eq!(sanitize_seconds(""), 60);
/// assert_eq!(sanitize_seconds("90"), 90);
/// assert_eq!(sanitize_seconds("2"), 5);
/// assert_eq!(sanitize_seconds("-30"), 5);
/// ```
pub fn sanitize_seconds(raw: &str) -> u32 {
    match parse_leading_int(raw) {
        Some(value) => value.clamp(i64::from(MIN_SECONDS_PER_ENTRY), i64::from(u32::MAX)) as u32,
        None => DEFAULT_SECONDS_PER_ENTRY,
    }
}

/// Group count from a form value: default 4 when missing or non-positive
///
/// # Example
/// ```
/// use turn_roulette_core_rs::sanitize_group_count;
///
/// assert_eq!(sanitize_group_count("3"), 3);
/// assert_eq!(sanitize_group_count("0"), 4);
/// assert_eq!(sanitize_group_count("many"), 4);
/// ```
pub fn sanitize_group_count(raw: &str) -> usize {
    match parse_leading_int(raw) {
        Some(value) if value >= MIN_GROUP_COUNT as i64 => {
            usize::try_from(value).unwrap_or(usize::MAX)
        }
        _ => DEFAULT_GROUP_COUNT,
    }
}

/// Per-slide duration from header properties
///
/// The first of `time`, `seconds`, `secs`, `duration` holding a positive
/// integer wins.
///
/// # Example
/// ```
/// use std::collections::HashMap;
/// use turn_roulette_core_rs::header_seconds;
///
/// let mut props = HashMap::new();
/// props.insert("time".to_string(), "soon".to_string());
/// props.insert("secs".to_string(), " 45 ".to_string());
/// assert_eq!(header_seconds(&props), Some(45));
/// ```
pub fn header_seconds(props: &HashMap<String, String>) -> Option<u32> {
    HEADER_SECONDS_KEYS.iter().find_map(|key| {
        props
            .get(*key)
            .and_then(|raw| parse_leading_int(raw))
            .filter(|value| *value > 0)
            .map(|value| value.min(i64::from(u32::MAX)) as u32)
    })
}
