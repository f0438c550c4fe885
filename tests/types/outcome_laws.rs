use std::cell::Cell;

use outcome_rail::Outcome;

fn inc(n: i64) -> i64 {
    n + 1
}

fn double(n: i64) -> i64 {
    n * 2
}

fn checked_half(n: i64) -> Outcome<i64, String> {
    if n % 2 == 0 {
        Outcome::success(n / 2)
    } else {
        Outcome::failure(format!("{n} is odd"))
    }
}

fn non_negative(n: i64) -> Outcome<i64, String> {
    if n >= 0 {
        Outcome::success(n)
    } else {
        Outcome::failure(format!("{n} is negative"))
    }
}

const SAMPLES: [i64; 6] = [-7, -2, 0, 1, 8, 1_000_001];

#[test]
fn functor_identity() {
    for v in SAMPLES {
        let outcome = Outcome::<i64, String>::success(v);
        assert_eq!(outcome.clone().map(|x| x), outcome);
    }
}

#[test]
fn functor_composition() {
    for v in SAMPLES {
        let chained = Outcome::<i64, String>::success(v).map(inc).map(double);
        let composed = Outcome::<i64, String>::success(v).map(|x| double(inc(x)));
        assert_eq!(chained, composed);
    }
}

#[test]
fn monad_left_identity() {
    for v in SAMPLES {
        assert_eq!(Outcome::success(v).flat_map(checked_half), checked_half(v));
    }
}

#[test]
fn monad_right_identity() {
    for v in SAMPLES {
        let outcome = checked_half(v);
        assert_eq!(outcome.clone().flat_map(Outcome::success), outcome);
    }
}

#[test]
fn monad_associativity() {
    for v in SAMPLES {
        let left = Outcome::success(v).flat_map(checked_half).flat_map(non_negative);
        let right = Outcome::success(v).flat_map(|x| checked_half(x).flat_map(non_negative));
        assert_eq!(left, right);
    }
}

#[test]
fn failure_flat_map_skips_transform() {
    let calls = Cell::new(0);
    let outcome = Outcome::<i64, String>::failure("upstream".into()).flat_map(|x| {
        calls.set(calls.get() + 1);
        checked_half(x)
    });

    assert_eq!(outcome, Outcome::Failure("upstream".to_string()));
    assert_eq!(calls.get(), 0);
}

#[test]
fn map_error_laws() {
    for v in SAMPLES {
        let ok = Outcome::<i64, i64>::success(v).map_error(double);
        assert_eq!(ok, Outcome::Success(v));

        let err = Outcome::<i64, i64>::failure(v).map_error(double);
        assert_eq!(err, Outcome::Failure(double(v)));
    }
}

#[test]
fn dematerialize_inverts_construction() {
    for v in SAMPLES {
        assert_eq!(Outcome::<i64, i64>::success(v).dematerialize(), Ok(v));
        assert_eq!(Outcome::<i64, i64>::failure(v).dematerialize(), Err(v));
    }
}
