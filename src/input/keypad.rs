//! On-screen keypad model.
//!
//! Renderers draw these buttons and send the button's command when it is
//! clicked or touched.

use super::command::{Command, Digit};
use crate::core::Operator;
use serde::Serialize;

/// Visual role of a button.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub enum ButtonKind {
    Digit,
    Operation,
    Equals,
    Clear,
}

/// One keypad button.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct Button {
    pub label: &'static str,
    pub command: Command,
    pub kind: ButtonKind,
    /// Number of grid columns the button covers
    pub span: u8,
}

impl Button {
    const fn new(label: &'static str, command: Command, kind: ButtonKind, span: u8) -> Self {
        Self {
            label,
            command,
            kind,
            span,
        }
    }

    const fn digit(label: &'static str, value: u8) -> Self {
        Self::new(label, Command::Digit(Digit(value)), ButtonKind::Digit, 1)
    }

    const fn operation(label: &'static str, op: Operator) -> Self {
        Self::new(label, Command::Operate(op), ButtonKind::Operation, 1)
    }
}

/// Number of columns in the keypad grid.
pub const KEYPAD_COLUMNS: u8 = 4;

/// Keypad rows, top to bottom.
pub const KEYPAD: [&[Button]; 5] = [
    &[
        Button::new("Clear", Command::Clear, ButtonKind::Clear, 2),
        Button::new("⌫", Command::Backspace, ButtonKind::Operation, 1),
        Button::operation("÷", Operator::Divide),
    ],
    &[
        Button::digit("7", 7),
        Button::digit("8", 8),
        Button::digit("9", 9),
        Button::operation("×", Operator::Multiply),
    ],
    &[
        Button::digit("4", 4),
        Button::digit("5", 5),
        Button::digit("6", 6),
        Button::operation("−", Operator::Subtract),
    ],
    &[
        Button::digit("1", 1),
        Button::digit("2", 2),
        Button::digit("3", 3),
        Button::operation("+", Operator::Add),
    ],
    &[
        Button::new("0", Command::Digit(Digit(0)), ButtonKind::Digit, 2),
        Button::new(".", Command::Decimal, ButtonKind::Digit, 1),
        Button::new("=", Command::Equals, ButtonKind::Equals, 1),
    ],
];

/// Keyboard legend shown under the keypad.
pub const SHORTCUT_LEGEND: &str =
    "Numbers: 0-9 | Operations: +, -, *, / | Enter: = | Esc: Clear";

/// All buttons in reading order.
pub fn buttons() -> impl Iterator<Item = &'static Button> {
    KEYPAD.iter().flat_map(|row| row.iter())
}

/// Find the button drawn with `label`.
pub fn button_for_label(label: &str) -> Option<&'static Button> {
    buttons().find(|button| button.label == label)
}
