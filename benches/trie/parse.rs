use std::hint::black_box;

use acl_trie::{AclRule, BitPrefix, Ipv4Prefix, Range};
use criterion::{criterion_group, Criterion};

fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    group.bench_function("ipv4_prefix", |b| {
        b.iter(|| Ipv4Prefix::parse(black_box("192.168.128.0/17")).unwrap())
    });
    group.bench_function("bit_prefix", |b| {
        b.iter(|| BitPrefix::<u32>::parse(black_box("0xc0a88000/17")).unwrap())
    });
    group.bench_function("range", |b| {
        b.iter(|| Range::<u16>::parse(black_box("1024-65535")).unwrap())
    });
    group.bench_function("acl_rule", |b| {
        b.iter(|| {
            AclRule::parse(black_box("10.0.0.0/8 192.168.1.0/24 0-65535 80-443 6-6")).unwrap()
        })
    });
}

criterion_group!(bench_parse_group, bench);
