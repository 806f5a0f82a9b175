//! Benchmarks for `Series` element-wise arithmetic.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use va_math::Series;

fn bench_series_ops(c: &mut Criterion) {
    let n = 4096;
    let a = Series::from_vec((0..n).map(|i| i as f64 * 0.001).collect());
    let b = Series::from_vec((0..n).map(|i| (n - i) as f64 * 0.001).collect());

    c.bench_function("series_add_4096", |bencher| {
        bencher.iter(|| black_box(&a) + black_box(&b))
    });

    c.bench_function("series_component_mul_4096", |bencher| {
        bencher.iter(|| black_box(&a).component_mul(black_box(&b)))
    });

    c.bench_function("series_cumulative_4096", |bencher| {
        bencher.iter(|| black_box(&a).cumulative())
    });
}

criterion_group!(benches, bench_series_ops);
criterion_main!(benches);
