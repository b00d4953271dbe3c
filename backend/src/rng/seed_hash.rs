//! String → u32 seed digest
//!
//! Bit-for-bit reproduction of the xmur3 mixing function (first output only).
//! Characters are consumed as UTF-16 code units, and the initial mix uses the
//! UTF-16 length, so digests match those produced by browser-based tools for
//! the same seed text (including non-ASCII seeds).

const INIT: u32 = 1_779_033_703;
const MIX: u32 = 3_432_918_353;
const AVALANCHE_1: u32 = 2_246_822_507;
const AVALANCHE_2: u32 = 3_266_489_909;

/// Hash a seed string to a 32-bit generator seed
///
/// Same string → same digest, on every platform. The empty string is a valid
/// input.
///
/// # Example
/// ```
/// use turn_roulette_core_rs::seed_hash;
///
/// assert_eq!(seed_hash("demo"), 1_128_472_497);
/// assert_eq!(seed_hash("demo"), seed_hash("demo"));
/// ```
pub fn seed_hash(seed: &str) -> u32 {
    let units: Vec<u16> = seed.encode_utf16().collect();

    let mut h = INIT ^ units.len() as u32;
    for &unit in &units {
        h = (h ^ u32::from(unit)).wrapping_mul(MIX);
        h = h.rotate_left(13);
    }

    h = (h ^ (h >> 16)).wrapping_mul(AVALANCHE_1);
    h = (h ^ (h >> 13)).wrapping_mul(AVALANCHE_2);
    h ^ (h >> 16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_seed_is_valid() {
        assert_eq!(seed_hash(""), 167_010_153);
    }

    #[test]
    fn test_non_ascii_uses_utf16_units() {
        // 'ë' is a single UTF-16 unit (U+00EB) but two UTF-8 bytes
        assert_eq!(seed_hash("Zoë"), 847_967_297);
    }

    #[test]
    fn test_role_suffix_changes_digest() {
        assert_ne!(seed_hash("demo|P"), seed_hash("demo|O"));
    }
}
