use std::time::Duration;

use acl_trie::{tests_common::generate_prefixes_skewed, BitPrefix, Ipv4Prefix, Trie};
use criterion::{criterion_group, BatchSize, Criterion, Throughput};

use crate::common::{shuffled_table_prefixes, table_prefixes};

fn insert(prefixes: Vec<Ipv4Prefix>) -> Trie<usize> {
    let mut trie = Trie::new();
    for (idx, prefix) in prefixes.into_iter().enumerate() {
        trie.insert(prefix, idx);
    }
    trie
}

fn bench(c: &mut Criterion) {
    let sorted = table_prefixes();
    let mut reversed = sorted.clone();
    reversed.reverse();
    let shuffled = shuffled_table_prefixes();

    {
        let mut group = c.benchmark_group("insert/table");
        group.throughput(Throughput::Elements(sorted.len() as u64));
        group.warm_up_time(Duration::from_secs(5));
        group.measurement_time(Duration::from_secs(15));
        group.bench_function("asc", |b| {
            b.iter_batched(|| sorted.clone(), insert, BatchSize::SmallInput)
        });
        group.bench_function("desc", |b| {
            b.iter_batched(|| reversed.clone(), insert, BatchSize::SmallInput)
        });
        group.bench_function("rand", |b| {
            b.iter_batched(|| shuffled.clone(), insert, BatchSize::SmallInput)
        });
    }

    let skewed: Vec<BitPrefix<u64>> = generate_prefixes_skewed().collect();
    c.bench_function("insert/skewed_u64", |b| {
        b.iter(|| {
            let trie: Trie<usize> = skewed.iter().copied().zip(0..).collect();
            trie
        })
    });
}

criterion_group!(bench_insert_group, bench);
