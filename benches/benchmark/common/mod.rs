use criterion::Criterion;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum DomainError {
    Network(String),
    Parse(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::Network(msg) => write!(f, "network: {msg}"),
            DomainError::Parse(msg) => write!(f, "parse: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}

pub fn configure_criterion() -> Criterion {
    Criterion::default()
        .measurement_time(Duration::from_secs(3))
        .warm_up_time(Duration::from_secs(1))
}
