//! Roster text format
//!
//! A small YAML-like file:
//!
//! ```text
//! # weekly standup
//! organizers:
//!   - Dana
//! attendees:
//!   - Bob
//!   - "alice"
//! ```
//!
//! `key:` lines open a section (`attendees` or `organizers`), `-` lines are
//! items of the open section, and `#` starts a comment. Blank lines,
//! unknown keys and malformed lines are skipped; parsing never fails.

use super::normalize::normalize_names;

/// Lists found in a roster file
///
/// A section missing from the file is `None`, so applying the parse result
/// leaves that list as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRoster {
    pub attendees: Option<Vec<String>>,
    pub organizers: Option<Vec<String>>,
}

impl ParsedRoster {
    /// True when the file named neither section
    pub fn is_empty(&self) -> bool {
        self.attendees.is_none() && self.organizers.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Attendees,
    Organizers,
    Ignored,
}

fn strip_comment(line: &str) -> &str {
    if line.trim_start().starts_with('#') {
        return "";
    }
    // Inline comments need leading whitespace so names like "C#" survive
    match line.find(" #").or_else(|| line.find("\t#")) {
        Some(pos) => &line[..pos],
        None => line,
    }
}

fn unquote(item: &str) -> &str {
    let item = item.trim();
    for quote in ['"', '\''] {
        if item.len() >= 2 && item.starts_with(quote) && item.ends_with(quote) {
            return &item[1..item.len() - 1];
        }
    }
    item
}

/// Parse roster text into normalized lists
///
/// # Example
/// ```
/// use turn_roulette_core_rs::parse_roster;
///
/// let parsed = parse_roster("attendees:\n  - Bob\n  - alice\n");
/// assert_eq!(parsed.attendees, Some(vec!["alice".to_string(), "Bob".to_string()]));
/// assert_eq!(parsed.organizers, None);
/// ```
pub fn parse_roster(text: &str) -> ParsedRoster {
    let mut attendees: Option<Vec<String>> = None;
    let mut organizers: Option<Vec<String>> = None;
    let mut section: Option<Section> = None;

    for raw in text.lines() {
        let line = strip_comment(raw).trim();
        if line.is_empty() {
            continue;
        }

        if let Some(item) = line.strip_prefix('-') {
            let target = match section {
                Some(Section::Attendees) => attendees.get_or_insert_with(Vec::new),
                Some(Section::Organizers) => organizers.get_or_insert_with(Vec::new),
                Some(Section::Ignored) | None => continue,
            };
            target.push(unquote(item).to_string());
            continue;
        }

        let Some((key, rest)) = line.split_once(':') else {
            tracing::debug!(line, "skipping malformed roster line");
            continue;
        };
        if !rest.trim().is_empty() {
            // scalar `key: value` entries are not lists
            section = Some(Section::Ignored);
            continue;
        }
        section = Some(match key.trim().to_lowercase().as_str() {
            "attendees" => {
                attendees.get_or_insert_with(Vec::new);
                Section::Attendees
            }
            "organizers" => {
                organizers.get_or_insert_with(Vec::new);
                Section::Organizers
            }
            other => {
                tracing::debug!(key = other, "ignoring unknown roster key");
                Section::Ignored
            }
        });
    }

    ParsedRoster {
        attendees: attendees.map(normalize_names),
        organizers: organizers.map(normalize_names),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_key_items_skipped() {
        let parsed = parse_roster("guests:\n  - Zed\nattendees:\n  - Amy\n");
        assert_eq!(parsed.attendees, Some(vec!["Amy".to_string()]));
        assert_eq!(parsed.organizers, None);
    }

    #[test]
    fn test_items_before_any_section_skipped() {
        let parsed = parse_roster("- Stray\nattendees:\n- Amy\n");
        assert_eq!(parsed.attendees, Some(vec!["Amy".to_string()]));
    }

    #[test]
    fn test_comments_and_quotes() {
        let text = "# header\nattendees: # people\n  - 'Amy' # host\n  - C#\n  - \"\"\n";
        let parsed = parse_roster(text);
        assert_eq!(
            parsed.attendees,
            Some(vec!["Amy".to_string(), "C#".to_string()])
        );
    }

    #[test]
    fn test_empty_section_is_present() {
        let parsed = parse_roster("organizers:\n");
        assert_eq!(parsed.organizers, Some(Vec::new()));
        assert!(!parsed.is_empty());
        assert!(parse_roster("title: Standup\n").is_empty());
    }
}
