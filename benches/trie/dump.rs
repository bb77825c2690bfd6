use acl_trie::visitor::TreeStatsCollector;
use criterion::{criterion_group, Criterion};

use crate::common::{table_prefixes, table_trie};

fn bench(c: &mut Criterion) {
    let trie = table_trie(&table_prefixes());

    let mut group = c.benchmark_group("traverse");
    group.bench_function("dump", |b| b.iter(|| trie.dump::<u32>()));
    group.bench_function("max_depth", |b| b.iter(|| trie.max_depth()));
    group.bench_function("stats", |b| b.iter(|| TreeStatsCollector::collect(&trie)));
    group.bench_function("clone", |b| b.iter(|| trie.clone()));
}

criterion_group!(bench_dump_group, bench);
