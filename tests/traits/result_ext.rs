use core::num::ParseIntError;

use outcome_rail::traits::ResultOutcomeExt;
use outcome_rail::AnyError;

#[test]
fn into_any_outcome_erases_failure() {
    let outcome = "-4".parse::<u8>().into_any_outcome();
    assert!(outcome.error().unwrap().is::<ParseIntError>());
}

#[test]
fn into_any_outcome_keeps_success() {
    let outcome = "4".parse::<u8>().into_any_outcome();
    assert_eq!(outcome.into_value(), Some(4));
}

#[test]
fn into_any_outcome_accepts_messages() {
    let result: Result<(), String> = Err("bad gateway".to_string());
    let error = result.into_any_outcome().into_error().unwrap();
    assert_eq!(error.to_string(), "bad gateway");
}

#[test]
fn into_any_outcome_does_not_double_wrap() {
    let result: Result<(), AnyError> = Err(AnyError::msg("inner"));
    let error = result.into_any_outcome().into_error().unwrap();
    assert!(!error.is::<AnyError>());
    assert_eq!(error.to_string(), "inner");
}

#[test]
fn into_typed_outcome_keeps_matching_failures() {
    let typed = "x".parse::<u8>().into_typed_outcome::<ParseIntError>().unwrap();
    assert!(typed.is_failure());
}

#[test]
fn into_typed_outcome_propagates_other_failures() {
    let escaped = "x".parse::<u8>().into_typed_outcome::<std::fmt::Error>();
    let error = escaped.unwrap_err();
    assert!(error.is::<ParseIntError>());
}

#[test]
fn into_typed_outcome_looks_through_any_error() {
    let parse_failure = "x".parse::<u8>().unwrap_err();
    let result: Result<u8, AnyError> = Err(AnyError::new(parse_failure.clone()));

    let typed = result.into_typed_outcome::<ParseIntError>().unwrap();
    assert_eq!(typed.into_error(), Some(parse_failure));
}

#[test]
fn into_typed_outcome_keeps_success_through_any_error() {
    let result: Result<u8, AnyError> = Ok(7);
    let typed = result.into_typed_outcome::<ParseIntError>().unwrap();
    assert_eq!(typed.into_value(), Some(7));
}
