//! Performance benchmarks for the salary input service.
//!
//! Covers the engine on its own and the full `/validate` HTTP path:
//! - Single valid record through the engine
//! - Single invalid record through the engine
//! - Single request through the router
//! - Batch of 1000 requests through the router
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use serde_json::{Value, json};

use salary_input::api::{AppState, create_router};
use salary_input::config::ConfigLoader;
use salary_input::models::InputRecord;
use salary_input::validation::validate;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    AppState::new(config)
}

/// A record with every income field present.
fn full_record(i: u64) -> Value {
    json!({
        "month": "April",
        "year": 2025,
        "age": 20 + (i % 80),
        "basic_salary": 4000 + i,
        "commission": 250,
        "bonus": 1000,
        "overtime": 125.5,
        "leave_pay": 300
    })
}

fn invalid_record() -> Value {
    json!({
        "month": "Aprril",
        "year": 1800,
        "age": -5,
        "basic_salary": -50000,
        "bonus": "invalid"
    })
}

fn post(body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/validate")
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

/// Benchmark: engine only.
fn bench_engine(c: &mut Criterion) {
    let valid = InputRecord::from_value(full_record(0)).unwrap();
    let invalid = InputRecord::from_value(invalid_record()).unwrap();

    let mut group = c.benchmark_group("engine");
    group.bench_function("valid_record", |b| b.iter(|| validate(black_box(&valid))));
    group.bench_function("invalid_record", |b| {
        b.iter(|| validate(black_box(&invalid)))
    });
    group.finish();
}

/// Benchmark: a single request through the router.
fn bench_single_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = full_record(0).to_string();

    c.bench_function("single_request", |b| {
        b.to_async(&rt).iter(|| async {
            let response = router.clone().oneshot(post(body.clone())).await.unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: batches of distinct requests.
fn bench_batches(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    let mut group = c.benchmark_group("batch_processing");
    group.sample_size(10);

    for batch_size in [100u64, 1000].iter() {
        let requests: Vec<String> = (0..*batch_size)
            .map(|i| full_record(i).to_string())
            .collect();
        let router = create_router(state.clone());

        group.throughput(Throughput::Elements(*batch_size));
        group.bench_with_input(
            BenchmarkId::new("requests", batch_size),
            batch_size,
            |b, _| {
                b.to_async(&rt).iter(|| async {
                    let mut results = Vec::with_capacity(requests.len());
                    for body in &requests {
                        let response = router.clone().oneshot(post(body.clone())).await.unwrap();
                        results.push(response);
                    }
                    black_box(results)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_engine, bench_single_request, bench_batches);
criterion_main!(benches);
