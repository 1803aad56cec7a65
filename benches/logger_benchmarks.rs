//! Criterion benchmarks for tagged_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use serde_json::json;
use std::sync::Arc;
use tagged_logger::core::format_args::format_message;
use tagged_logger::prelude::*;
use tokio::runtime::Runtime;

fn runtime() -> Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("Failed to build runtime")
}

fn sample_message() -> Message {
    Message::build(
        LogLevel::Warn,
        &["api".to_string(), "auth".to_string()],
        &["login".to_string()],
        &Primary::from("user %s failed login %d times"),
        &[json!("alice"), json!(3)],
    )
}

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn bench_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");
    group.throughput(Throughput::Elements(1));

    group.bench_function("printf_template", |b| {
        let args = [json!("alice"), json!(3), json!({"ip": "10.0.0.1"})];
        b.iter(|| format_message(black_box("user %s failed %d times from %j"), &args));
    });

    let message = sample_message();
    let text = TextLogFunction::new();
    group.bench_function("text_line", |b| {
        b.iter(|| text.format(black_box(&message)));
    });

    let json_fn = JsonLogFunction::new();
    group.bench_function("json_line", |b| {
        b.iter(|| json_fn.format(black_box(&message)));
    });

    group.finish();
}

// ============================================================================
// Dispatch Benchmarks
// ============================================================================

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    group.throughput(Throughput::Elements(1));
    let rt = runtime();

    let primary = Arc::new(MemorySink::new("primary"));
    let secondary = Arc::new(MemorySink::new("secondary"));
    let logger = Logger::new(
        LoggerOptions::new()
            .level(LogLevel::Info)
            .sink(primary.clone())
            .sink(secondary.clone()),
        "bench",
    )
    .expect("Failed to build logger");

    group.bench_function("info_written", |b| {
        b.iter(|| {
            rt.block_on(logger.info(black_box("request %d served"), &[json!(200)]))
                .unwrap();
            primary.clear();
        });
    });

    group.bench_function("error_fan_out", |b| {
        b.iter(|| {
            rt.block_on(logger.error(black_box("request failed"), &[]))
                .unwrap();
            primary.clear();
            secondary.clear();
        });
    });

    group.bench_function("debug_filtered", |b| {
        b.iter(|| {
            rt.block_on(logger.debug(black_box("not written"), &[]))
                .unwrap();
        });
    });

    group.bench_function("level_check", |b| {
        b.iter(|| black_box(logger.is_debug_or_verboser()));
    });

    group.finish();
}

fn bench_factory(c: &mut Criterion) {
    let mut group = c.benchmark_group("factory");
    let factory = LoggerFactory::new(LoggerOptions::new().sink(Arc::new(MemorySink::new("m"))))
        .expect("Failed to build factory");

    group.bench_function("logger", |b| {
        b.iter(|| black_box(factory.logger(["db", "pool"])));
    });

    let parent = factory.logger("http");
    group.bench_function("child", |b| {
        b.iter(|| black_box(parent.child("req")));
    });

    group.finish();
}

criterion_group!(benches, bench_formatting, bench_dispatch, bench_factory);
criterion_main!(benches);
