use acl_trie::{tests_common::generate_ipv4_prefixes, Ipv4Prefix, Trie};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

/// Number of prefixes used by the "routing table" shaped benchmarks.
pub const TABLE_SIZE: usize = 50_000;

/// Pseudo-random IPv4 prefixes, deduplicated and sorted.
pub fn table_prefixes() -> Vec<Ipv4Prefix> {
    let mut prefixes: Vec<_> = generate_ipv4_prefixes(TABLE_SIZE, 69420).collect();
    prefixes.sort();
    prefixes.dedup();
    prefixes
}

/// The same prefixes as [`table_prefixes`], in shuffled order.
pub fn shuffled_table_prefixes() -> Vec<Ipv4Prefix> {
    let mut rng = StdRng::seed_from_u64(69420);
    let mut prefixes = table_prefixes();
    prefixes.shuffle(&mut rng);
    prefixes
}

/// Build a trie mapping each prefix to its index.
pub fn table_trie(prefixes: &[Ipv4Prefix]) -> Trie<usize> {
    prefixes.iter().copied().zip(0..).collect()
}
