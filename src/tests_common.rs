//! Prefix generators shared by tests, benchmarks and demos.

use crate::{BitPrefix, BitWord, Ipv4Prefix};
use core::iter;

/// Generate the prefixes `1`, `01`, `001`, ... up to the full width of `T`.
///
/// Inserted into a trie these make a maximally deep, lopsided tree.
pub fn generate_prefixes_skewed<T: BitWord>() -> impl Iterator<Item = BitPrefix<T>> {
    (1..=T::BITS).map(|len| {
        let value = T::prefix_mask(len).and(T::prefix_mask(len - 1).not());
        BitPrefix::new(value, len).unwrap_or_else(|_| BitPrefix::any())
    })
}

/// Generate distinct prefixes of exactly `len` bits, stepping the significant
/// bits by `step` from zero until they overflow `len` bits.
pub fn generate_prefixes_fixed_length<T: BitWord>(
    len: u32,
    step: u64,
) -> impl Iterator<Item = BitPrefix<T>> {
    let len = len.min(T::BITS);
    let limit = if len == u64::BITS {
        u64::MAX
    } else {
        (1u64 << len) - 1
    };
    let step = step.max(1);

    iter::successors(Some(0u64), move |prev| {
        prev.checked_add(step).filter(|next| *next <= limit)
    })
    .filter_map(move |bits| {
        // Move the significant bits to the top of a u64, then down to `T`.
        let aligned = if len == 0 { 0 } else { bits << (u64::BITS - len) };
        BitPrefix::new(T::from_msb_aligned(aligned), len).ok()
    })
}

/// Generate `count` pseudo-random IPv4 prefixes with lengths between 8 and 32,
/// deterministically derived from `seed`.
pub fn generate_ipv4_prefixes(count: usize, seed: u64) -> impl Iterator<Item = Ipv4Prefix> {
    // splitmix64
    let mut state = seed;
    iter::repeat_with(move || {
        state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    })
    .map(|random| {
        let len = 8 + (random >> 59) as u32 % 25;
        let addr = (random as u32) & u32::prefix_mask(len);
        Ipv4Prefix::new(addr, len).unwrap_or_else(|_| Ipv4Prefix::host(addr.into()))
    })
    .take(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{collections::BTreeSet, vec::Vec};

    #[test]
    fn skewed_prefixes() {
        let prefixes: Vec<_> = generate_prefixes_skewed::<u8>().collect();
        assert_eq!(prefixes.len(), 8);
        assert_eq!(prefixes[0], BitPrefix::new(0x80, 1).unwrap());
        assert_eq!(prefixes[1], BitPrefix::new(0x40, 2).unwrap());
        assert_eq!(prefixes[7], BitPrefix::new(0x01, 8).unwrap());
    }

    #[test]
    fn fixed_length_prefixes_are_distinct() {
        let prefixes: Vec<_> = generate_prefixes_fixed_length::<u16>(4, 1).collect();
        assert_eq!(prefixes.len(), 16);
        assert!(prefixes.iter().all(|prefix| prefix.len() == 4));
        assert_eq!(prefixes[15], BitPrefix::new(0xf000, 4).unwrap());

        let unique: BTreeSet<_> = prefixes.iter().collect();
        assert_eq!(unique.len(), 16);
    }

    #[test]
    fn fixed_length_full_width() {
        let prefixes: Vec<_> = generate_prefixes_fixed_length::<u8>(8, 64).collect();
        let values: Vec<_> = prefixes.iter().map(|prefix| prefix.value()).collect();
        assert_eq!(values, [0, 64, 128, 192]);
    }

    #[test]
    fn ipv4_prefixes_are_deterministic() {
        let first: Vec<_> = generate_ipv4_prefixes(32, 7).collect();
        let second: Vec<_> = generate_ipv4_prefixes(32, 7).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 32);
        assert!(first.iter().all(|prefix| (8..=32).contains(&prefix.len())));
    }
}
