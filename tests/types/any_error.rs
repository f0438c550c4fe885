use std::error::Error;
use std::fmt;

use outcome_rail::{AnyError, BoxError};

#[derive(Debug, PartialEq)]
struct Disconnected {
    peer: &'static str,
}

impl fmt::Display for Disconnected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "peer {} disconnected", self.peer)
    }
}

impl Error for Disconnected {}

#[derive(Debug)]
struct RequestFailed {
    cause: Disconnected,
}

impl fmt::Display for RequestFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("request failed")
    }
}

impl Error for RequestFailed {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.cause)
    }
}

#[test]
fn wrapping_twice_returns_the_original_wrapper() {
    let once = AnyError::new(Disconnected { peer: "db" });
    let twice = AnyError::new(once);

    assert!(twice.is::<Disconnected>());
    assert!(!twice.is::<AnyError>());
    assert_eq!(twice.downcast_ref::<Disconnected>(), Some(&Disconnected { peer: "db" }));
}

#[test]
fn wrapping_is_idempotent_through_boxes() {
    let once = AnyError::new(Disconnected { peer: "cache" });
    let boxed: BoxError = Box::new(once);
    let again = AnyError::from(boxed);

    assert!(again.is::<Disconnected>());
    assert_eq!(again.to_string(), "peer cache disconnected");
}

#[test]
fn downcast_mismatch_returns_wrapper() {
    let err = AnyError::new(Disconnected { peer: "api" });
    let err = err.downcast::<fmt::Error>().unwrap_err();
    let original = err.downcast::<Disconnected>().unwrap();
    assert_eq!(original.peer, "api");
}

#[test]
fn message_errors_render_their_text() {
    let from_str = AnyError::from("rate limited");
    let from_string = AnyError::from(String::from("rate limited"));

    assert_eq!(from_str.to_string(), "rate limited");
    assert_eq!(from_string.to_string(), from_str.to_string());
}

#[test]
fn source_and_chain_skip_the_wrapper() {
    let err = AnyError::new(RequestFailed { cause: Disconnected { peer: "s3" } });

    let source = err.source().expect("source is forwarded");
    assert_eq!(source.to_string(), "peer s3 disconnected");

    let chain: Vec<String> = err.chain().map(|e| e.to_string()).collect();
    assert_eq!(chain, vec!["request failed", "peer s3 disconnected"]);
}

#[test]
fn into_boxed_and_get_ref_expose_inner_error() {
    let err = AnyError::new(Disconnected { peer: "queue" });
    assert_eq!(err.get_ref().to_string(), "peer queue disconnected");

    let boxed = err.into_boxed();
    assert!(boxed.downcast_ref::<Disconnected>().is_some());
}

#[test]
fn debug_names_the_wrapper() {
    let err = AnyError::new(Disconnected { peer: "x" });
    assert!(format!("{err:?}").starts_with("AnyError("));
}
