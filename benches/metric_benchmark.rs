// ============================================================================
// Metric Numeral Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Formatting - Symbol, name and rounded output across magnitudes
// 2. Parsing - Symbols, spaced symbols and full names
// 3. Round Trip - Format followed by parse
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use metric_numeral::prelude::*;
use std::hint::black_box;

const MAGNITUDES: [f64; 6] = [1.5e-21, 2.5e-9, 0.75, 1.5e3, 4.2e9, 9.9e24];

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn benchmark_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_metric");

    for value in MAGNITUDES.iter() {
        group.bench_with_input(BenchmarkId::new("symbol", value), value, |b, value| {
            b.iter(|| black_box(to_metric(black_box(*value), None, None)));
        });

        group.bench_with_input(BenchmarkId::new("name", value), value, |b, value| {
            let options = Some(FormatOptions::WITH_SPACE | FormatOptions::USE_NAME);
            b.iter(|| black_box(to_metric(black_box(*value), options, None)));
        });

        group.bench_with_input(BenchmarkId::new("rounded", value), value, |b, value| {
            b.iter(|| black_box(to_metric(black_box(*value), None, Some(2))));
        });
    }

    group.finish();
}

// ============================================================================
// Parsing Benchmarks
// ============================================================================

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("from_metric");

    for input in ["123", "1.5k", "1.5 k", "1.5 kilo", "42 yocto"].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(input), input, |b, input| {
            b.iter(|| black_box(from_metric(black_box(*input))));
        });
    }

    group.finish();
}

// ============================================================================
// Round Trip Benchmarks
// ============================================================================

fn benchmark_round_trip(c: &mut Criterion) {
    let config = MetricFormat::named();

    c.bench_function("round_trip_named", |b| {
        b.iter(|| {
            for value in MAGNITUDES.iter() {
                let text = config.format(black_box(*value)).unwrap_or_default();
                black_box(from_metric(text.as_str()).ok());
            }
        });
    });
}

criterion_group!(
    benches,
    benchmark_format,
    benchmark_parse,
    benchmark_round_trip
);
criterion_main!(benches);
