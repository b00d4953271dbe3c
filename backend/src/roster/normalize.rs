//! Name normalization
//!
//! Canonical form: trimmed, non-empty, unique under case-insensitive
//! comparison (first-seen casing wins), sorted with the root Unicode
//! collation at primary strength. Case and accents are ignored by the sort
//! and punctuation is not, so `_x` < `10` < `Émile` < `Eve` < `zed`.
//!
//! Shuffles operate on this canonical order, so a seeded shuffle depends
//! only on the *set* of names and never on the order they were typed in.
//! Names that differ only by accents compare equal and keep the order they
//! were typed in.

use std::collections::HashSet;

use icu_collator::{Collator, CollatorOptions, Strength};

/// Case-folded dedupe key
fn fold(name: &str) -> String {
    name.to_lowercase()
}

fn primary_collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Primary);
    match Collator::try_new(&Default::default(), options) {
        Ok(collator) => Some(collator),
        Err(err) => {
            tracing::warn!(error = ?err, "root collation unavailable, sorting by lowercase");
            None
        }
    }
}

/// Stable sort into canonical order
fn sort_names(names: &mut [String]) {
    match primary_collator() {
        Some(collator) => names.sort_by(|a, b| collator.compare(a, b)),
        None => names.sort_by_cached_key(|name| fold(name)),
    }
}

/// Normalize a list of raw names
///
/// # Example
/// ```
/// use turn_roulette_core_rs::normalize_names;
///
/// let names = normalize_names(["Bob", " alice ", "", "ALICE", "Charlie"]);
/// assert_eq!(names, vec!["alice", "Bob", "Charlie"]);
/// ```
pub fn normalize_names<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for entry in raw {
        let trimmed = entry.as_ref().trim();
        if trimmed.is_empty() {
            continue;
        }
        if seen.insert(fold(trimmed)) {
            names.push(trimmed.to_string());
        }
    }

    sort_names(&mut names);
    names
}

/// Normalize free-form text holding one name per line (`\n` or `\r\n`)
pub fn parse_list(text: &str) -> Vec<String> {
    normalize_names(text.lines())
}
