//! Benchmarks for the threshold strategies

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use threshold_bench::image_source::{ImageSource, SyntheticImageSource};
use threshold_bench::strategies;
use threshold_bench::ThresholdParams;

const SIZES: [usize; 4] = [64, 256, 512, 1024];

fn bench_contiguous(c: &mut Criterion) {
    let mut group = c.benchmark_group("Threshold Contiguous");
    let params = ThresholdParams::new(120);

    for size in SIZES {
        let input = SyntheticImageSource::new(size, size)
            .acquire()
            .expect("synthetic source never fails");

        for strategy in strategies::all() {
            group.bench_with_input(BenchmarkId::new(strategy.name(), size), &input, |bencher, input| {
                bencher.iter_with_large_drop(|| strategy.apply(black_box(input), params))
            });
        }
    }

    group.finish();
}

fn bench_strided(c: &mut Criterion) {
    let mut group = c.benchmark_group("Threshold Strided");
    let params = ThresholdParams::new(120);

    // one cache line of padding per row forces the per-row fallback
    for size in SIZES {
        let input = SyntheticImageSource::new(size, size)
            .with_padding(64)
            .acquire()
            .expect("synthetic source never fails");

        for strategy in strategies::all() {
            group.bench_with_input(BenchmarkId::new(strategy.name(), size), &input, |bencher, input| {
                bencher.iter_with_large_drop(|| strategy.apply(black_box(input), params))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_contiguous, bench_strided);
criterion_main!(benches);
