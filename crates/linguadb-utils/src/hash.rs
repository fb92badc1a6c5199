//! Stable 64-bit hashing.
//!
//! All fingerprint surfaces route through these helpers so the hash
//! function can only ever change in one place.

use xxhash_rust::xxh3::{xxh3_64, xxh3_64_with_seed};

/// Stable 64-bit hash of a byte slice.
#[must_use]
pub fn hash64(bytes: &[u8]) -> u64 {
    xxh3_64(bytes)
}

/// Seeded variant for callers that partition hash domains.
#[must_use]
pub fn hash64_seeded(bytes: &[u8], seed: u64) -> u64 {
    xxh3_64_with_seed(bytes, seed)
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash64_is_stable_for_equal_input() {
        assert_eq!(hash64(b"tour-42"), hash64(b"tour-42"));
    }

    #[test]
    fn hash64_differs_for_different_input() {
        assert_ne!(hash64(b"tour-42"), hash64(b"tour-43"));
    }

    #[test]
    fn seeded_hash_differs_from_unseeded() {
        assert_ne!(hash64(b"tour-42"), hash64_seeded(b"tour-42", 7));
    }
}
