//! Configuration error types.

use thiserror::Error;

/// A single problem with a configuration
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("History capacity must be at least 1")]
    ZeroHistoryCapacity,

    #[error("Display length limit must be at least 1")]
    ZeroDisplayLength,

    #[error("Exponent threshold must be finite and positive (got {threshold})")]
    InvalidExponentThreshold { threshold: f64 },

    #[error("Too many fraction digits ({digits}), maximum: {max}")]
    TooManyFractionDigits { digits: usize, max: usize },
}

/// Errors that can occur while loading or applying a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration text is not valid JSON for `CalculatorConfig`
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// One or more values are out of range; every violation is listed
    #[error("Invalid configuration: {}", describe(.violations))]
    Invalid { violations: Vec<ConfigViolation> },
}

fn describe(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
