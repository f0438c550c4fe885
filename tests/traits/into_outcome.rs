use outcome_rail::traits::{IntoOutcome, OptionOutcomeExt};
use outcome_rail::Outcome;

#[test]
fn result_into_outcome_keeps_variant() {
    let ok: Result<i32, &str> = Ok(1);
    assert_eq!(ok.into_outcome(), Outcome::Success(1));

    let err: Result<i32, &str> = Err("e");
    assert_eq!(err.into_outcome(), Outcome::Failure("e"));
}

#[test]
fn outcome_into_outcome_is_identity() {
    let outcome = Outcome::<i32, &str>::failure("same");
    assert_eq!(outcome.into_outcome(), outcome);
}

#[test]
fn generic_callers_accept_results_and_outcomes() {
    fn succeeded<T: IntoOutcome<u8, &'static str>>(input: T) -> bool {
        input.into_outcome().is_success()
    }

    assert!(succeeded(Ok::<u8, &str>(1)));
    assert!(!succeeded(Outcome::<u8, &str>::failure("no")));
}

#[test]
fn option_ok_or_failure() {
    assert_eq!(Some(3).ok_or_failure("missing"), Outcome::Success(3));

    let none: Option<i32> = None;
    assert_eq!(none.ok_or_failure("missing"), Outcome::Failure("missing"));
}

#[test]
fn option_ok_or_failure_with_is_lazy() {
    let mut built = false;
    let outcome = Some(1).ok_or_failure_with(|| {
        built = true;
        "never"
    });

    assert_eq!(outcome, Outcome::Success(1));
    assert!(!built);
}
