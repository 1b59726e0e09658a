//! Calculator that owns its current state.
//!
//! This is the imperative shell around the pure transition function: it keeps
//! the latest state, feeds it commands one at a time and hands renderers a
//! snapshot.

use crate::config::CalculatorConfig;
use crate::core::{CalculationHistory, CalculatorState, DisplayFormat};
use crate::input::{keypad, normalize, Command, KeyInput, NormalizedInput};
use crate::machine::snapshot::Snapshot;
use crate::machine::transition::{step, StepResult};
use tracing::debug;

/// A calculator instance.
///
/// Commands are applied synchronously; each is fully resolved before the
/// next one is accepted.
///
/// # Example
///
/// ```rust
/// use reckon::Calculator;
///
/// let mut calculator = Calculator::new();
/// calculator.type_keys("12*3=");
///
/// let snapshot = calculator.snapshot();
/// assert_eq!(snapshot.display, "36");
/// assert_eq!(snapshot.history, vec!["12 × 3 = 36"]);
/// ```
#[derive(Clone, Debug)]
pub struct Calculator {
    state: CalculatorState,
    config: CalculatorConfig,
    format: DisplayFormat,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Calculator with the default configuration.
    pub fn new() -> Self {
        Self::from_valid_config(CalculatorConfig::default())
    }

    /// Callers must have validated `config`.
    pub(crate) fn from_valid_config(config: CalculatorConfig) -> Self {
        let history = CalculationHistory::with_capacity(config.history_capacity);
        Self {
            state: CalculatorState::with_history(history),
            format: config.display_format(),
            config,
        }
    }

    /// Current state (pure)
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Configuration in effect (pure)
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Apply one command and return the new state.
    pub fn apply(&mut self, command: Command) -> &CalculatorState {
        match step(&self.state, command) {
            StepResult::Transitioned(mut next) => {
                if command == Command::Clear && self.config.clear_resets_history {
                    next.history = next.history.cleared();
                }
                self.state = next;
                debug!(
                    command = command.name(),
                    display = %self.state.display,
                    pending = ?self.state.pending_operator,
                    "command applied"
                );
            }
            StepResult::Ignored(reason) => {
                debug!(command = command.name(), %reason, "command ignored");
            }
        }
        &self.state
    }

    /// Normalize and apply a key press.
    ///
    /// Returns the normalized input so the host can honour
    /// `suppress_default`, or `None` when the key means nothing.
    pub fn press(&mut self, key: KeyInput) -> Option<NormalizedInput> {
        let input = normalize(key)?;
        self.apply(input.command);
        Some(input)
    }

    /// Apply the command of the keypad button labelled `label`.
    pub fn click(&mut self, label: &str) -> Option<Command> {
        let command = keypad::button_for_label(label)
            .map(|button| button.command)
            .or_else(|| Command::from_label(label))?;
        self.apply(command);
        Some(command)
    }

    /// Press each character of `keys` in order.
    pub fn type_keys(&mut self, keys: &str) {
        for c in keys.chars() {
            self.press(KeyInput::Char(c));
        }
    }

    /// Read-only view for renderers.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state, &self.format)
    }
}
