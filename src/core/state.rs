//! The calculator's state record.
//!
//! All fields are owned by the state machine. Renderers only ever read a
//! snapshot of them.

use super::format::{number_to_string, parse_display};
use super::history::CalculationHistory;
use super::operator::Operator;
use serde::{Deserialize, Serialize};

/// Display text in the cleared state.
pub const INITIAL_DISPLAY: &str = "0";

/// Complete state of one calculator.
///
/// States are plain values: every transition takes a state and returns a new
/// one, so a state can be cloned, compared and serialized freely.
///
/// # Example
///
/// ```rust
/// use reckon::core::CalculatorState;
///
/// let state = CalculatorState::new();
/// assert_eq!(state.display, "0");
/// assert!(state.pending_value.is_none());
/// assert!(state.pending_operator.is_none());
/// assert!(!state.awaiting_operand);
/// assert!(state.history.is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Text of the value being composed or shown; never empty
    pub display: String,
    /// First operand of an operation in progress
    pub pending_value: Option<f64>,
    /// Operator waiting for its second operand
    pub pending_operator: Option<Operator>,
    /// When set, the next digit starts a fresh number
    pub awaiting_operand: bool,
    /// Completed calculations, most recent first
    pub history: CalculationHistory,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Cleared state with the default history bound.
    pub fn new() -> Self {
        Self::with_history(CalculationHistory::new())
    }

    /// Cleared state carrying an existing history.
    pub fn with_history(history: CalculationHistory) -> Self {
        Self {
            display: INITIAL_DISPLAY.to_string(),
            pending_value: None,
            pending_operator: None,
            awaiting_operand: false,
            history,
        }
    }

    /// Reset everything except the history.
    pub fn cleared(&self) -> Self {
        Self::with_history(self.history.clone())
    }

    /// Numeric value of the display.
    pub fn display_value(&self) -> f64 {
        parse_display(&self.display)
    }

    /// Whether a binary operation is waiting for its second operand.
    pub fn has_pending_operation(&self) -> bool {
        self.pending_value.is_some() && self.pending_operator.is_some()
    }

    /// `"<pending value> <operator>"` while an operation is in progress.
    ///
    /// ```rust
    /// use reckon::core::{CalculatorState, Operator};
    ///
    /// let mut state = CalculatorState::new();
    /// assert_eq!(state.pending_expression(), None);
    ///
    /// state.pending_value = Some(12.5);
    /// state.pending_operator = Some(Operator::Multiply);
    /// assert_eq!(state.pending_expression().as_deref(), Some("12.5 ×"));
    /// ```
    pub fn pending_expression(&self) -> Option<String> {
        match (self.pending_value, self.pending_operator) {
            (Some(value), Some(op)) => Some(format!("{} {}", number_to_string(value), op)),
            _ => None,
        }
    }
}
