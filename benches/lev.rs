use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn random_seq(rng: &mut SmallRng, len: usize) -> Vec<u8> {
    const BASES: [u8; 4] = [b'A', b'C', b'G', b'T'];
    (0..len).map(|_| BASES[rng.gen_range(0..4)]).collect()
}

// One benchmark per tier window length.
fn bench_distance(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut group = c.benchmark_group("lev_distance");

    for len in [10usize, 100, 1_000] {
        let a = random_seq(&mut rng, len);
        let b = random_seq(&mut rng, len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |bencher, _| {
            bencher.iter(|| levmap::libs::lev::distance(black_box(&a), black_box(&b)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_distance);
criterion_main!(benches);
