//! Pure transition function of the calculator.
//!
//! `step` takes a state and a command and returns the next state, or reports
//! that the command has no effect. Nothing here mutates its input.

use crate::core::format::number_to_string;
use crate::core::{evaluate, CalculatorState, HistoryEntry, Operator, INITIAL_DISPLAY};
use crate::input::{Command, Digit};
use std::fmt;
use tracing::warn;

/// Why a command left the state unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The number being composed already has a decimal point
    DuplicateDecimalPoint,
    /// Equals was pressed with no operation in progress
    NoPendingOperation,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateDecimalPoint => write!(f, "number already has a decimal point"),
            Self::NoPendingOperation => write!(f, "no operation in progress"),
        }
    }
}

/// Result of applying one command.
#[derive(Clone, Debug, PartialEq)]
pub enum StepResult {
    /// The command produced this new state
    Transitioned(CalculatorState),

    /// The command was a no-op
    Ignored(IgnoreReason),
}

impl StepResult {
    /// Resolve to the state that follows `current`.
    pub fn into_state(self, current: &CalculatorState) -> CalculatorState {
        match self {
            Self::Transitioned(next) => next,
            Self::Ignored(_) => current.clone(),
        }
    }
}

/// Apply a command, reporting no-ops explicitly.
///
/// # Example
///
/// ```rust
/// use reckon::core::CalculatorState;
/// use reckon::input::Command;
/// use reckon::machine::{step, IgnoreReason, StepResult};
///
/// let state = CalculatorState::new();
/// assert_eq!(
///     step(&state, Command::Equals),
///     StepResult::Ignored(IgnoreReason::NoPendingOperation)
/// );
/// ```
pub fn step(state: &CalculatorState, command: Command) -> StepResult {
    match command {
        Command::Digit(digit) => StepResult::Transitioned(input_digit(state, digit)),
        Command::Decimal => input_decimal(state),
        Command::Operate(op) => StepResult::Transitioned(operate(state, Some(op))),
        Command::Equals => equals(state),
        Command::Clear => StepResult::Transitioned(state.cleared()),
        Command::Backspace => StepResult::Transitioned(backspace(state)),
    }
}

/// Apply a command and return the next state.
///
/// # Example
///
/// ```rust
/// use reckon::core::{CalculatorState, Operator};
/// use reckon::input::{Command, Digit};
/// use reckon::machine::apply;
///
/// let digit = |d| Command::Digit(Digit::new(d).unwrap());
///
/// let state = [digit(2), Command::Operate(Operator::Add), digit(3), Command::Equals]
///     .into_iter()
///     .fold(CalculatorState::new(), |state, command| apply(&state, command));
///
/// assert_eq!(state.display, "5");
/// assert_eq!(state.history.lines(), vec!["2 + 3 = 5"]);
/// ```
pub fn apply(state: &CalculatorState, command: Command) -> CalculatorState {
    step(state, command).into_state(state)
}

fn input_digit(state: &CalculatorState, digit: Digit) -> CalculatorState {
    let mut next = state.clone();
    if state.awaiting_operand {
        next.display = digit.to_string();
        next.awaiting_operand = false;
    } else if state.display == INITIAL_DISPLAY {
        next.display = digit.to_string();
    } else {
        next.display.push(digit.as_char());
    }
    next
}

fn input_decimal(state: &CalculatorState) -> StepResult {
    let mut next = state.clone();
    if state.awaiting_operand {
        next.display = "0.".to_string();
        next.awaiting_operand = false;
    } else if state.display.contains('.') {
        return StepResult::Ignored(IgnoreReason::DuplicateDecimalPoint);
    } else {
        next.display.push('.');
    }
    StepResult::Transitioned(next)
}

/// Record the display as an operand and queue `next_operator`.
///
/// When an operation is already pending it is computed first and logged to
/// history. `None` is the terminal operator used by Equals.
fn operate(state: &CalculatorState, next_operator: Option<Operator>) -> CalculatorState {
    let input_value = state.display_value();
    let mut next = state.clone();

    match (state.pending_value, state.pending_operator) {
        (None, _) => next.pending_value = Some(input_value),
        (Some(current), Some(op)) => {
            let result = finite_or_zero(evaluate(current, input_value, Some(op)));
            next.display = number_to_string(result);
            next.pending_value = Some(result);
            next.history = state
                .history
                .record(HistoryEntry::new(current, op, input_value, result));
        }
        (Some(_), None) => {}
    }

    next.awaiting_operand = true;
    next.pending_operator = next_operator;
    next
}

fn equals(state: &CalculatorState) -> StepResult {
    if !state.has_pending_operation() {
        return StepResult::Ignored(IgnoreReason::NoPendingOperation);
    }

    let mut next = operate(state, None);
    next.pending_operator = None;
    next.pending_value = None;
    next.awaiting_operand = true;
    StepResult::Transitioned(next)
}

fn backspace(state: &CalculatorState) -> CalculatorState {
    let mut next = state.clone();
    if next.display.chars().count() > 1 {
        next.display.pop();
    } else {
        next.display = INITIAL_DISPLAY.to_string();
    }

    // "-5" loses its digit and would leave a bare sign
    if !next.display.chars().any(|c| c.is_ascii_digit()) {
        next.display = INITIAL_DISPLAY.to_string();
    }
    next
}

/// Overflowing results fold to 0 so the display stays a finite number.
fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        warn!(%value, "non-finite result replaced with 0");
        0.0
    }
}
