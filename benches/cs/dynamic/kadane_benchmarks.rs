use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};
use regular_kadane::dynamic::{max_nonempty_subarray_sum, max_subarray, max_subarray_sum};

const SIZES: &[usize] = &[1_000, 10_000, 100_000];

fn random_values(len: usize) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..len).map(|_| rng.gen_range(-1_000..=1_000)).collect()
}

fn bench_kadane(c: &mut Criterion) {
    let mut group = c.benchmark_group("Kadane");

    for &len in SIZES {
        let values = random_values(len);

        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("sum", len), &values, |bencher, values| {
            bencher.iter(|| max_subarray_sum(black_box(values)))
        });
        group.bench_with_input(BenchmarkId::new("range", len), &values, |bencher, values| {
            bencher.iter(|| max_subarray(black_box(values)))
        });
        group.bench_with_input(
            BenchmarkId::new("nonempty", len),
            &values,
            |bencher, values| bencher.iter(|| max_nonempty_subarray_sum(black_box(values))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_kadane);
criterion_main!(benches);
