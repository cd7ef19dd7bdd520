//! Stackgen Criterion Benchmark
//!
//! Measures corpus generation throughput across fixture shapes.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use stackgen::Corpus;
use std::hint::black_box;
use std::io::Write;

// =============================================================================
// BENCHMARK 1: RENDER THROUGHPUT
// =============================================================================

/// Buffered render across the blocks x funcs grid.
fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Render");

    let shapes = [
        (10, 10, "10x10"),
        (100, 100, "100x100"),
        (1000, 100, "1000x100"),
        (100, 1000, "100x1000"),
        (1000, 1000, "1000x1000"),
    ];

    for (blocks, funcs, name) in shapes {
        let corpus = Corpus::new(blocks, funcs);
        group.throughput(Throughput::Bytes(corpus.output_len() as u64));

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            &corpus,
            |b, corpus| b.iter(|| black_box(corpus).render()),
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: STREAMING EMISSION
// =============================================================================

/// A writer that counts bytes and drops them, isolating emission cost
/// from buffer growth.
struct Sink(u64);

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0 += buf.len() as u64;
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// `write_to` into a counting sink (how the CLI emits).
fn bench_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Streaming");

    let shapes = [(100, 100, "100x100"), (1000, 1000, "1000x1000")];

    for (blocks, funcs, name) in shapes {
        let corpus = Corpus::new(blocks, funcs);
        group.throughput(Throughput::Bytes(corpus.output_len() as u64));

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            &corpus,
            |b, corpus| {
                b.iter(|| {
                    let mut sink = Sink(0);
                    black_box(corpus).write_to(&mut sink).unwrap();
                    sink.0
                });
            },
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 3: BODY SCALING
// =============================================================================

/// Generation cost as the shared body grows (single function: the body is
/// built once regardless of function count).
fn bench_body_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-Body-Scaling");

    for blocks in [100_usize, 1_000, 10_000, 100_000] {
        let corpus = Corpus::new(blocks, 1);
        group.throughput(Throughput::Bytes(corpus.output_len() as u64));

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(blocks),
            &corpus,
            |b, corpus| b.iter(|| black_box(corpus).render()),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_render, bench_streaming, bench_body_scaling);
criterion_main!(benches);
