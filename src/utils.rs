use std::{collections::HashSet, hash::Hash};

use rand::Rng;

/// Unbiased in-place Fisher-Yates shuffle
/// Walks from the last index down to 1 and swaps each position with a
/// uniformly chosen index in [0, i].
pub fn fisher_yates_shuffle<T>(items: &mut [T], rng: &mut impl Rng) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Returns the first key that appears more than once, in iteration order
pub fn first_duplicate<T, K: Eq + Hash>(
    items: impl IntoIterator<Item = T>,
    key: impl Fn(&T) -> K,
) -> Option<K> {
    let mut seen: HashSet<K> = HashSet::new();
    for item in items {
        let k = key(&item);
        if seen.contains(&k) {
            return Some(k);
        }
        seen.insert(k);
    }
    None
}

/// Seed used to shuffle the deck for a given round
/// Same base seed + round always yields the same deal. Rounds are spread
/// by the 64-bit golden ratio so nearby base seeds don't share deals.
pub fn derive_round_seed(seed: u64, round: u32) -> u64 {
    seed.wrapping_add((round as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}
