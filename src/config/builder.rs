//! Builder for configured calculators.

use crate::config::error::ConfigError;
use crate::config::CalculatorConfig;
use crate::machine::Calculator;
use tracing::info;

/// Builder for constructing calculators with a fluent API.
///
/// # Example
///
/// ```rust
/// use reckon::CalculatorBuilder;
///
/// let calculator = CalculatorBuilder::new()
///     .history_capacity(10)
///     .fraction_digits(2)
///     .build()
///     .unwrap();
///
/// assert_eq!(calculator.state().history.capacity(), 10);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CalculatorBuilder {
    config: CalculatorConfig,
}

impl CalculatorBuilder {
    /// Create a builder starting from the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn config(mut self, config: CalculatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Set how many completed calculations are kept
    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.config.history_capacity = capacity;
        self
    }

    /// Set the display length above which the projection applies
    pub fn display_max_len(mut self, len: usize) -> Self {
        self.config.display_max_len = len;
        self
    }

    /// Set the magnitude above which the projection uses exponential form
    pub fn exponent_threshold(mut self, threshold: f64) -> Self {
        self.config.exponent_threshold = threshold;
        self
    }

    /// Set the digits shown after the point in the projection
    pub fn fraction_digits(mut self, digits: usize) -> Self {
        self.config.fraction_digits = digits;
        self
    }

    /// Make Clear empty the history as well
    pub fn clear_resets_history(mut self, enabled: bool) -> Self {
        self.config.clear_resets_history = enabled;
        self
    }

    /// Build the calculator.
    /// Returns every configuration violation if any value is out of range.
    pub fn build(self) -> Result<Calculator, ConfigError> {
        let config = self.config.validated()?;
        if config != CalculatorConfig::default() {
            info!(?config, "building calculator with custom configuration");
        }
        Ok(Calculator::from_valid_config(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigViolation;

    #[test]
    fn builder_uses_defaults() {
        let calculator = CalculatorBuilder::new().build().unwrap();
        assert_eq!(calculator.config(), &CalculatorConfig::default());
    }

    #[test]
    fn builder_applies_settings() {
        let calculator = CalculatorBuilder::new()
            .history_capacity(3)
            .display_max_len(12)
            .exponent_threshold(1e6)
            .fraction_digits(4)
            .clear_resets_history(true)
            .build()
            .unwrap();

        let config = calculator.config();
        assert_eq!(config.history_capacity, 3);
        assert_eq!(config.display_max_len, 12);
        assert_eq!(config.exponent_threshold, 1e6);
        assert_eq!(config.fraction_digits, 4);
        assert!(config.clear_resets_history);
    }

    #[test]
    fn builder_reports_all_violations() {
        let result = CalculatorBuilder::new()
            .history_capacity(0)
            .exponent_threshold(f64::INFINITY)
            .build();

        match result {
            Err(ConfigError::Invalid { violations }) => {
                assert_eq!(
                    violations,
                    vec![
                        ConfigViolation::ZeroHistoryCapacity,
                        ConfigViolation::InvalidExponentThreshold {
                            threshold: f64::INFINITY
                        },
                    ]
                );
            }
            other => panic!("Expected invalid configuration, got {other:?}"),
        }
    }

    #[test]
    fn builder_accepts_whole_config() {
        let config = CalculatorConfig {
            history_capacity: 7,
            ..CalculatorConfig::default()
        };

        let calculator = CalculatorBuilder::new().config(config.clone()).build().unwrap();
        assert_eq!(calculator.config(), &config);
    }
}
