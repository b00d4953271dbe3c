//! Fisher–Yates shuffle driven by [`StreamGenerator`]

use super::StreamGenerator;

/// Return a shuffled copy of `items`, consuming draws from `rng`
///
/// Walks `i` from `len - 1` down to 1 and swaps `i` with
/// `j = floor(rng.next_f64() * (i + 1))`. The caller's slice is never
/// mutated.
pub fn shuffle_with<T: Clone>(items: &[T], rng: &mut StreamGenerator) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.range(i + 1);
        shuffled.swap(i, j);
    }
    shuffled
}

/// Shuffle a copy of `items` with a generator seeded from `seed`
///
/// # Example
/// ```
/// use turn_roulette_core_rs::seeded_shuffle;
///
/// let names = vec!["alice", "Bob", "Charlie"];
/// assert_eq!(seeded_shuffle(&names, "demo|P"), vec!["Bob", "alice", "Charlie"]);
/// ```
pub fn seeded_shuffle<T: Clone>(items: &[T], seed: &str) -> Vec<T> {
    let mut rng = StreamGenerator::from_seed_str(seed);
    shuffle_with(items, &mut rng)
}
