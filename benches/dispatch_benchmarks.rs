//! Criterion benchmarks for console_proxy

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use console_proxy::prelude::*;
use serde_json::json;
use std::sync::Arc;

// ============================================================================
// Proxy Creation Benchmarks
// ============================================================================

fn bench_proxy_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("proxy_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("with_sink", |b| {
        b.iter(|| {
            let console = LeveledSink::with_sink(CaptureSink::new(), LogLevel::Log);
            black_box(console)
        });
    });

    let console = LeveledSink::with_sink(CaptureSink::new(), LogLevel::Log);
    group.bench_function("set_level", |b| {
        b.iter(|| {
            console.set_level(black_box(LogLevel::Warn));
            console.set_level(black_box(LogLevel::Log));
        });
    });

    group.finish();
}

// ============================================================================
// Dispatch Benchmarks
// ============================================================================

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    group.throughput(Throughput::Elements(1));

    let console = LeveledSink::with_sink(CaptureSink::new(), LogLevel::Log);
    let args = [json!("message"), json!(42)];

    group.bench_function("suppressed", |b| {
        b.iter(|| console.debug(black_box(&args)));
    });

    // fresh capture sink per batch so the record does not grow unbounded
    group.bench_function("forwarded", |b| {
        b.iter_batched(
            || LeveledSink::with_sink(CaptureSink::new(), LogLevel::Log),
            |console| console.log(black_box(&args)),
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

// ============================================================================
// Instrumentation Benchmarks
// ============================================================================

fn bench_method_wrapper(c: &mut Criterion) {
    let mut group = c.benchmark_group("method_wrapper");
    group.throughput(Throughput::Elements(1));

    let silent = Arc::new(LeveledSink::with_sink(CaptureSink::new(), LogLevel::None));
    let log = Instrumentor::with_sink(LogLevel::Log, silent);
    let add = log.method("add", |(a, b): (i64, i64)| a + b);
    let plain = |(a, b): (i64, i64)| a + b;

    group.bench_function("unwrapped", |b| {
        b.iter(|| plain(black_box((2, 3))));
    });

    group.bench_function("wrapped_silenced", |b| {
        b.iter(|| add.call(black_box((2, 3))));
    });

    group.finish();
}

criterion_group!(benches, bench_proxy_creation, bench_dispatch, bench_method_wrapper);
criterion_main!(benches);
