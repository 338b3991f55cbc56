//! 並列階乗エンジンと逐次計算のパフォーマンス比較ベンチマーク
//!
//! 範囲分割・ワーカープールのオーバーヘッドと並列化の効果を測定

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use num_bigint::BigUint;
use num_traits::One;
use parallel_compute::{ComputationOutcome, FactorialEngine};
use std::time::Duration;

fn sequential_factorial(n: u32) -> BigUint {
    let mut result = BigUint::one();
    for i in 1..=u64::from(n) {
        result *= i;
    }
    result
}

/// 逐次計算のベンチマーク
fn benchmark_sequential(c: &mut Criterion) {
    let mut group = c.benchmark_group("Sequential Factorial");
    group.measurement_time(Duration::from_secs(10));

    for n in [1_000u32, 10_000] {
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| std::hint::black_box(sequential_factorial(std::hint::black_box(n))))
        });
    }

    group.finish();
}

/// 並列エンジンのベンチマーク
fn benchmark_parallel_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("Parallel Factorial Engine");
    group.measurement_time(Duration::from_secs(10));

    let runtime = tokio::runtime::Runtime::new().expect("Tokioランタイムの作成に失敗");
    let engine = FactorialEngine::with_defaults();

    for n in [1_000u32, 10_000] {
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| {
                let outcome = runtime.block_on(async {
                    engine
                        .compute(n, Some(Duration::from_secs(30)))
                        .outcome()
                        .await
                        .unwrap()
                });
                assert!(matches!(outcome, ComputationOutcome::Factorial(_)));
                std::hint::black_box(outcome)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_sequential, benchmark_parallel_engine);
criterion_main!(benches);
