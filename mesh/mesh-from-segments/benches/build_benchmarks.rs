//! Benchmarks for segment mesh building.
//!
//! Run with: cargo bench -p mesh-from-segments
//!
//! To compare against baseline:
//! 1. First run: cargo bench -p mesh-from-segments -- --save-baseline main
//! 2. After changes: cargo bench -p mesh-from-segments -- --baseline main

#![allow(missing_docs, clippy::cast_precision_loss)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use mesh_from_segments::build_mesh;
use nalgebra::Point3;
use segment_types::LineSegment;

/// A zig-zag polyline of `count` connected segments.
fn polyline(count: usize, subdivisions: u32) -> Vec<LineSegment> {
    (0..count)
        .map(|i| {
            let i = i as f64;
            let start = Point3::new(i, (i * 0.7).sin(), i * 0.5);
            let end = Point3::new(i + 1.0, ((i + 1.0) * 0.7).sin(), (i + 1.0) * 0.5);
            LineSegment::new(start, end)
                .with_thickness(0.1)
                .with_subdivisions(subdivisions)
                .with_amplitude(0.5)
        })
        .collect()
}

fn bench_segment_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_mesh/segments");

    for count in [1usize, 10, 100, 1000] {
        let segments = polyline(count, 4);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &segments, |b, s| {
            b.iter(|| build_mesh(black_box(s)));
        });
    }

    group.finish();
}

fn bench_subdivision_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_mesh/subdivisions");

    for subdivisions in [0u32, 8, 64, 256] {
        let segments = polyline(16, subdivisions);
        group.bench_with_input(
            BenchmarkId::from_parameter(subdivisions),
            &segments,
            |b, s| {
                b.iter(|| build_mesh(black_box(s)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_segment_count, bench_subdivision_count);
criterion_main!(benches);
