use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use regular_kadane::number::{nth_regular, nth_regular_big};

const TERMS: &[usize] = &[100, 1_000, 12_689];

fn bench_nth_regular(c: &mut Criterion) {
    let mut group = c.benchmark_group("Regular numbers");

    for &n in TERMS {
        group.bench_with_input(BenchmarkId::new("u64", n), &n, |bencher, &n| {
            bencher.iter(|| nth_regular(black_box(n)))
        });
        group.bench_with_input(BenchmarkId::new("biguint", n), &n, |bencher, &n| {
            bencher.iter(|| nth_regular_big(black_box(n)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_nth_regular);
criterion_main!(benches);
