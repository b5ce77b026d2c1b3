use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

use avlmap::AvlMap;

const N: usize = 100_000;

pub fn benchmarks(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let values: Vec<i32> = (1..=N).map(|_| rng.gen()).collect();

    c.bench_function("map_add", |b| {
        let mut map = AvlMap::new();
        b.iter(|| {
            for value in &values {
                let _ = map.add(*value, *value);
            }
        })
    });

    let mut map = AvlMap::new();
    for value in &values {
        let _ = map.add(*value, *value);
    }

    c.bench_function("map_contains_key", |b| {
        b.iter(|| {
            for value in &values {
                black_box(map.contains_key(value));
            }
        })
    });

    c.bench_function("map_get", |b| {
        b.iter(|| {
            for value in &values {
                black_box(map.get(value));
            }
        })
    });

    c.bench_function("map_remove_key", |b| {
        let mut map = map.clone();
        b.iter(|| {
            for value in &values {
                map.remove_key(value);
            }
        })
    });
}

criterion_group!(benches, benchmarks);
criterion_main!(benches);
