//! Simulated fetch → decode pipeline built from outcomes.
//!
//! Run with `cargo run --example fetch_pipeline --features tracing`.

use outcome_rail::prelude::*;
use outcome_rail::tracing_ext::OutcomeTraceExt;
use outcome_rail::OutcomeFormatConfig;
use serde::Deserialize;

#[derive(Debug)]
enum FetchError {
    Timeout { after_ms: u64 },
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Timeout { after_ms } => write!(f, "timed out after {after_ms}ms"),
        }
    }
}

impl std::error::Error for FetchError {}

#[derive(Debug, Deserialize)]
struct Release {
    tag: String,
    downloads: u64,
}

fn fetch(url: &str) -> Result<Vec<u8>, FetchError> {
    if url.ends_with("/slow") {
        Err(FetchError::Timeout { after_ms: 3_000 })
    } else if url.ends_with("/broken") {
        Ok(b"{\"tag\": \"v1\"".to_vec())
    } else {
        Ok(br#"{"tag":"v0.1.0","downloads":1337}"#.to_vec())
    }
}

fn latest_release(url: &str) -> AnyOutcome<Release> {
    fetch(url)
        .into_any_outcome()
        .map_any(|bytes| serde_json::from_slice::<Release>(&bytes))
        .trace_failure("latest release")
}

fn main() {
    tracing_subscriber::fmt::init();

    let tagged = OutcomeFormatConfig::tagged().with_label("Release");

    for url in ["https://example.com/releases", "https://example.com/slow", "https://example.com/broken"] {
        let summary = latest_release(url).map(|r| format!("{} ({} downloads)", r.tag, r.downloads));
        println!("{url}: {}", summary.render_with(&tagged));
    }
}
