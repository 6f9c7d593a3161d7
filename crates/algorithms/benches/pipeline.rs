//! Benchmarks for the change-detection pipeline stages

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use terradiff_algorithms::diff::abs_diff;
use terradiff_algorithms::morphology::{clean_mask, StructuringElement};
use terradiff_algorithms::pipeline::{run, PipelineConfig};
use terradiff_algorithms::threshold::threshold;
use terradiff_core::Raster;

fn create_test_pair(size: usize) -> (Raster<u8>, Raster<u8>) {
    let mut before = Raster::new(size, size);
    let mut after = Raster::new(size, size);
    for row in 0..size {
        for col in 0..size {
            let b = ((row * 7 + col * 13) % 256) as u8;
            let a = ((row * 11 + col * 3) % 256) as u8;
            before.set(row, col, b).unwrap();
            after.set(row, col, a).unwrap();
        }
    }
    (before, after)
}

fn bench_abs_diff(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline/abs_diff");
    for size in [256, 512, 1024, 2048] {
        let (before, after) = create_test_pair(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| abs_diff(black_box(&before), black_box(&after)).unwrap())
        });
    }
    group.finish();
}

fn bench_threshold(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline/threshold");
    for size in [256, 512, 1024, 2048] {
        let (before, after) = create_test_pair(size);
        let diff = abs_diff(&before, &after).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| threshold(black_box(&diff), 25).unwrap())
        });
    }
    group.finish();
}

fn bench_clean_mask(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline/clean_mask");
    let se = StructuringElement::Square(3);
    for size in [256, 512, 1024] {
        let (before, after) = create_test_pair(size);
        let diff = abs_diff(&before, &after).unwrap();
        let mask = threshold(&diff, 25).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| clean_mask(black_box(&mask), &se, 1).unwrap())
        });
    }
    group.finish();
}

fn bench_full_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline/run");
    let config = PipelineConfig::default();
    for size in [256, 512, 1024] {
        let (before, after) = create_test_pair(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| run(black_box(&before), black_box(&after), &config).unwrap())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_abs_diff,
    bench_threshold,
    bench_clean_mask,
    bench_full_run,
);
criterion_main!(benches);
