//! Criterion benchmarks for the QBF Tabu Search.
//!
//! Uses seeded random QBF instances so that runs are comparable across
//! strategies and sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use qbf_metaheur::qbf::{Objective, Qbf, QbfInstance};
use qbf_metaheur::tabu::{SearchStrategy, TabuConfig, TabuRunner};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ===========================================================================
// Random upper-triangular QBF with integer coefficients in [-10, 10]
// ===========================================================================

fn random_qbf(n: usize, seed: u64) -> Qbf {
    let mut rng = StdRng::seed_from_u64(seed);
    let rows = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| {
                    if j < i {
                        0.0
                    } else {
                        f64::from(rng.random_range(-10i32..=10))
                    }
                })
                .collect()
        })
        .collect();
    let instance = QbfInstance::from_matrix(rows).expect("square matrix");
    Qbf::new(instance, Objective::Maximize)
}

fn bench_tabu_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("tabu_qbf");
    group.sample_size(10);

    for &n in &[20, 60, 100] {
        let qbf = random_qbf(n, 42);
        for strategy in [SearchStrategy::FirstImproving, SearchStrategy::BestImproving] {
            let config = TabuConfig::default()
                .with_tabu_tenure(n / 5)
                .with_max_iterations(200)
                .with_intensification(80, 40)
                .with_strategy(strategy)
                .with_seed(42);
            group.bench_with_input(
                BenchmarkId::new(format!("{strategy:?}"), n),
                &(&qbf, config),
                |b, (q, c)| {
                    b.iter(|| {
                        let result = TabuRunner::run(black_box(*q), black_box(c));
                        black_box(result)
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_tabu_strategies);
criterion_main!(benches);
