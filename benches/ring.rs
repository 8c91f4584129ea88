use criterion::{criterion_group, criterion_main, Criterion};
use gapless_ring::GaplessRing;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const CAPACITY: usize = 1024;

fn churn_ring(mut rng: SmallRng, num_removals: usize) {
    let mut ring = GaplessRing::new(CAPACITY, 2).expect("ring parameters are valid");

    for i in 0..CAPACITY {
        ring.push(i);
    }

    // remove an interior element of the full ring, then refill the freed slot
    for _ in 0..num_removals {
        let index = rng.gen_range(1..ring.len() - 1);
        ring.remove(index);
        ring.push(0);
    }
}

fn churn_vec(mut rng: SmallRng, num_removals: usize) {
    let mut vec = Vec::with_capacity(CAPACITY);

    for i in 0..CAPACITY {
        vec.push(i);
    }

    for _ in 0..num_removals {
        let index = rng.gen_range(1..vec.len() - 1);
        vec.remove(index);
        vec.push(0);
    }
}

fn bench_interior_removal(c: &mut Criterion) {
    let mut group = c.benchmark_group("Interior removal");

    group.bench_function("Vec", |b| {
        b.iter(|| {
            let rng = SmallRng::seed_from_u64(256);
            churn_vec(rng, 10_000);
        })
    });

    group.bench_function("GaplessRing", |b| {
        b.iter(|| {
            let rng = SmallRng::seed_from_u64(256);
            churn_ring(rng, 10_000);
        })
    });

    group.finish();
}

criterion_group!(benches, bench_interior_removal);
criterion_main!(benches);
