use std::hint::black_box;

use acl_trie::{Ipv4Prefix, KeyPrefix};
use criterion::{criterion_group, Criterion};

use crate::common::{table_prefixes, table_trie};

fn bench(c: &mut Criterion) {
    let prefixes = table_prefixes();
    let trie = table_trie(&prefixes);

    let (first, middle, last) = (
        prefixes[0],
        prefixes[prefixes.len() / 2],
        prefixes[prefixes.len() - 1],
    );
    // Shares the path of `middle` but ends one bit later, so the walk fails at
    // the very end.
    let missing = Ipv4Prefix::new(
        middle.as_bit_prefix().value(),
        (middle.len() + 1).min(32),
    )
    .unwrap();

    let mut group = c.benchmark_group("find");
    group.bench_function("first", |b| b.iter(|| trie.find(black_box(first)).unwrap()));
    group.bench_function("middle", |b| b.iter(|| trie.find(black_box(middle)).unwrap()));
    group.bench_function("last", |b| b.iter(|| trie.find(black_box(last)).unwrap()));
    group.bench_function("missing", |b| b.iter(|| trie.find(black_box(missing))));
    group.bench_function("all_lengths_of_host", |b| {
        let host = Ipv4Prefix::host(middle.network());
        b.iter(|| {
            (0..=32)
                .filter_map(|len| host.truncate(len))
                .filter(|prefix| trie.find(prefix.bit_prefix()).is_some())
                .count()
        })
    });
}

criterion_group!(bench_find_group, bench);
