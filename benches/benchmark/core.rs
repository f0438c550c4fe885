use crate::common::{configure_criterion, DomainError};
use criterion::{criterion_group, BenchmarkId, Criterion};
use outcome_rail::Outcome;
use std::hint::black_box;

pub fn bench_construction(c: &mut Criterion) {
    c.bench_function("core/success", |b| {
        b.iter(|| black_box(Outcome::<u64, DomainError>::success(black_box(42))))
    });

    c.bench_function("core/failure", |b| {
        b.iter(|| {
            black_box(Outcome::<u64, DomainError>::failure(DomainError::Network(
                "connection reset".to_string(),
            )))
        })
    });
}

pub fn bench_combinator_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("core/chain");

    for depth in [1, 8, 32] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut outcome = Outcome::<u64, DomainError>::success(black_box(1));
                for _ in 0..depth {
                    outcome = outcome
                        .map(|n| n.wrapping_mul(3))
                        .flat_map(|n| {
                            if n == 0 {
                                Outcome::failure(DomainError::Parse("zero".into()))
                            } else {
                                Outcome::success(n)
                            }
                        })
                        .map_error(|e| e);
                }
                black_box(outcome)
            })
        });
    }
    group.finish();
}

pub fn bench_failure_passthrough(c: &mut Criterion) {
    let failed = Outcome::<u64, DomainError>::failure(DomainError::Network("down".into()));

    c.bench_function("core/failure_passthrough", |b| {
        b.iter(|| black_box(failed.clone().map(|n| n + 1).flat_map(Outcome::success)))
    });
}

criterion_group! {
    name = core_benches;
    config = configure_criterion();
    targets = bench_construction, bench_combinator_chain, bench_failure_passthrough
}
