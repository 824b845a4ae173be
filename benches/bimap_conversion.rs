use std::collections::HashMap;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use bimap::{BiMap, SingleValuedMapExt};

fn bench_from_list(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xBADF00D);

    c.bench_function("from_list/random_10k", |b| {
        b.iter_batched(
            || {
                (0..10_000)
                    .map(|_| (rng.random::<u64>(), rng.random::<u64>()))
                    .collect::<Vec<_>>()
            },
            |pairs| black_box(BiMap::from_list(pairs)),
            BatchSize::LargeInput,
        )
    });
}

fn bench_from_single_valued_map(c: &mut Criterion) {
    let source: HashMap<u64, u64> = (0..10_000u64).map(|i| (i, i ^ 0x5555)).collect();

    c.bench_function("from_single_valued_map/10k", |b| {
        b.iter(|| black_box(source.to_bimap()))
    });
}

fn bench_filter_and_fold(c: &mut Criterion) {
    let map = BiMap::from_list((0..10_000u64).map(|i| (i, i * 3)));

    c.bench_function("filter/half_of_10k", |b| {
        b.iter(|| black_box(map.filter(|l, _| l % 2 == 0)))
    });

    c.bench_function("fold/sum_10k", |b| {
        b.iter(|| black_box(map.fold(0u64, |acc, l, r| acc.wrapping_add(l ^ r))))
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_from_list, bench_from_single_valued_map, bench_filter_and_fold
);
criterion_main!(benches);
