use crate::common::{configure_criterion, DomainError};
use criterion::{criterion_group, Criterion};
use outcome_rail::convert::{collect_failures, partition_outcomes};
use outcome_rail::{AnyError, Outcome};
use std::hint::black_box;

pub fn bench_erasure(c: &mut Criterion) {
    c.bench_function("conversions/any_error_new", |b| {
        b.iter(|| black_box(AnyError::new(DomainError::Parse("bad digit".into()))))
    });

    c.bench_function("conversions/any_error_flatten", |b| {
        b.iter(|| {
            let once = AnyError::new(DomainError::Parse("bad digit".into()));
            black_box(AnyError::new(once))
        })
    });

    c.bench_function("conversions/from_throwing_any", |b| {
        b.iter(|| black_box(Outcome::from_throwing_any(|| black_box("12x").parse::<u32>())))
    });
}

pub fn bench_batches(c: &mut Criterion) {
    let batch: Vec<Outcome<u32, DomainError>> = (0..256)
        .map(|i| {
            if i % 17 == 0 {
                Outcome::failure(DomainError::Parse(format!("row {i}")))
            } else {
                Outcome::success(i)
            }
        })
        .collect();

    c.bench_function("conversions/collect_short_circuit", |b| {
        b.iter(|| black_box(batch.clone().into_iter().collect::<Outcome<Vec<u32>, DomainError>>()))
    });

    c.bench_function("conversions/partition", |b| {
        b.iter(|| black_box(partition_outcomes(batch.clone())))
    });

    c.bench_function("conversions/collect_failures", |b| {
        b.iter(|| black_box(collect_failures(batch.clone())))
    });
}

criterion_group! {
    name = conversion_benches;
    config = configure_criterion();
    targets = bench_erasure, bench_batches
}
