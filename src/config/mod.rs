//! Calculator configuration.
//!
//! Configuration is validated with Stillwater's `Validation` type so that
//! every problem is reported at once instead of stopping at the first one.
//!
//! # Example
//!
//! ```rust
//! use reckon::config::{CalculatorConfig, ConfigError};
//!
//! let config = CalculatorConfig::from_json(r#"{ "history_capacity": 10 }"#).unwrap();
//! assert_eq!(config.history_capacity, 10);
//! assert_eq!(config.display_max_len, 10);
//!
//! let err = CalculatorConfig::from_json(r#"{ "history_capacity": 0, "display_max_len": 0 }"#)
//!     .unwrap_err();
//! match err {
//!     ConfigError::Invalid { violations } => assert_eq!(violations.len(), 2),
//!     other => panic!("unexpected error: {other}"),
//! }
//! ```

mod builder;
pub mod error;

pub use builder::CalculatorBuilder;
pub use error::{ConfigError, ConfigViolation};

use crate::core::{DisplayFormat, DEFAULT_HISTORY_CAPACITY};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Upper bound for `fraction_digits`.
pub const MAX_FRACTION_DIGITS: usize = 20;

/// Tunable behaviour of a calculator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Number of completed calculations kept in history
    pub history_capacity: usize,

    /// Display text longer than this is projected
    pub display_max_len: usize,

    /// Magnitude above which the projection uses exponential form
    pub exponent_threshold: f64,

    /// Digits after the point in the projection
    pub fraction_digits: usize,

    /// Whether Clear also empties the history
    pub clear_resets_history: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        let format = DisplayFormat::default();
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            display_max_len: format.max_len,
            exponent_threshold: format.exponent_threshold,
            fraction_digits: format.fraction_digits,
            clear_resets_history: false,
        }
    }
}

impl CalculatorConfig {
    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validated()
    }

    /// Check every constraint, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

        checks.push(if self.history_capacity == 0 {
            Validation::fail(ConfigViolation::ZeroHistoryCapacity)
        } else {
            Validation::success(())
        });

        checks.push(if self.display_max_len == 0 {
            Validation::fail(ConfigViolation::ZeroDisplayLength)
        } else {
            Validation::success(())
        });

        checks.push(
            if self.exponent_threshold.is_finite() && self.exponent_threshold > 0.0 {
                Validation::success(())
            } else {
                Validation::fail(ConfigViolation::InvalidExponentThreshold {
                    threshold: self.exponent_threshold,
                })
            },
        );

        checks.push(if self.fraction_digits > MAX_FRACTION_DIGITS {
            Validation::fail(ConfigViolation::TooManyFractionDigits {
                digits: self.fraction_digits,
                max: MAX_FRACTION_DIGITS,
            })
        } else {
            Validation::success(())
        });

        Validation::all_vec(checks).map(|_| ())
    }

    /// Validate, converting failures into a `ConfigError`.
    pub fn validated(self) -> Result<Self, ConfigError> {
        match self.validate() {
            Validation::Success(_) => Ok(self),
            Validation::Failure(errors) => Err(ConfigError::Invalid {
                violations: errors.iter().cloned().collect(),
            }),
        }
    }

    /// Display projection described by this configuration.
    pub fn display_format(&self) -> DisplayFormat {
        DisplayFormat {
            max_len: self.display_max_len,
            exponent_threshold: self.exponent_threshold,
            fraction_digits: self.fraction_digits,
        }
    }
}
