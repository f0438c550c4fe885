use core::num::ParseIntError;

use outcome_rail::{attempt, AnyError, Outcome};

#[derive(Debug)]
struct Unavailable;

impl std::fmt::Display for Unavailable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("service unavailable")
    }
}

impl std::error::Error for Unavailable {}

fn call(up: bool) -> Result<&'static str, Unavailable> {
    if up {
        Ok("17")
    } else {
        Err(Unavailable)
    }
}

#[test]
fn attempt_mixes_unrelated_error_types() {
    let ok: Outcome<u8, AnyError> = attempt!({
        let body = call(true)?;
        let n: u8 = body.parse()?;
        Ok(n)
    });
    assert_eq!(ok.into_value(), Some(17));

    let down: Outcome<u8, AnyError> = attempt!({
        let body = call(false)?;
        let n: u8 = body.parse()?;
        Ok(n)
    });
    assert!(down.error().unwrap().is::<Unavailable>());
}

#[test]
fn attempt_accepts_a_single_expression() {
    let outcome = attempt!(Ok::<_, _>("300".parse::<u8>()?));
    assert!(outcome.error().unwrap().is::<ParseIntError>());
}

#[test]
fn attempt_flattens_raised_any_errors() {
    let outcome: Outcome<(), AnyError> = attempt!({
        Err::<(), _>(AnyError::new(Unavailable))?;
        Ok(())
    });

    let error = outcome.into_error().unwrap();
    assert!(error.is::<Unavailable>());
}
