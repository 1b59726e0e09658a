//! Read-only view of the calculator for renderers.

use crate::core::{CalculatorState, DisplayFormat, Operator};
use serde::{Deserialize, Serialize};

/// Everything a renderer needs after a transition.
///
/// Snapshots are detached copies: holding one never affects the calculator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Display text as it should be drawn (projected)
    pub display: String,
    /// Display text at full precision
    pub raw_display: String,
    pub pending_value: Option<f64>,
    pub pending_operator: Option<Operator>,
    /// `"<pending value> <operator>"` line shown above the display
    pub pending_expression: Option<String>,
    /// Completed calculations, most recent first
    pub history: Vec<String>,
}

impl Snapshot {
    /// Capture `state`, projecting its display through `format`.
    pub fn capture(state: &CalculatorState, format: &DisplayFormat) -> Self {
        Self {
            display: format.project(&state.display),
            raw_display: state.display.clone(),
            pending_value: state.pending_value,
            pending_operator: state.pending_operator,
            pending_expression: state.pending_expression(),
            history: state.history.lines(),
        }
    }

    /// Serialize for renderers living outside Rust.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
