//! Abstract commands understood by the state machine.

use crate::core::Operator;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A decimal digit, 0 through 9.
///
/// # Example
///
/// ```rust
/// use reckon::input::Digit;
///
/// let seven = Digit::from_char('7').unwrap();
/// assert_eq!(seven.value(), 7);
/// assert_eq!(seven.as_char(), '7');
/// assert!(Digit::new(10).is_none());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(pub(crate) u8);

impl Digit {
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self(d as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("digit out of range: {value}"))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// The closed set of intents the state machine applies.
///
/// Keyboard events and keypad clicks both reduce to these.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Command {
    Digit(Digit),
    Decimal,
    Operate(Operator),
    Equals,
    Clear,
    Backspace,
}

impl Command {
    /// Name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Digit(_) => "Digit",
            Self::Decimal => "Decimal",
            Self::Operate(_) => "Operate",
            Self::Equals => "Equals",
            Self::Clear => "Clear",
            Self::Backspace => "Backspace",
        }
    }

    /// Map a keypad label to its command.
    ///
    /// Accepts the labels drawn on the keypad as well as their ASCII
    /// spellings, so a click and a key press produce the same command.
    ///
    /// ```rust
    /// use reckon::core::Operator;
    /// use reckon::input::Command;
    ///
    /// assert_eq!(Command::from_label("÷"), Some(Command::Operate(Operator::Divide)));
    /// assert_eq!(Command::from_label("−"), Some(Command::Operate(Operator::Subtract)));
    /// assert_eq!(Command::from_label("Clear"), Some(Command::Clear));
    /// assert_eq!(Command::from_label("%"), None);
    /// ```
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        let command = match label {
            "." => Self::Decimal,
            "+" => Self::Operate(Operator::Add),
            "-" | "−" => Self::Operate(Operator::Subtract),
            "*" | "×" => Self::Operate(Operator::Multiply),
            "/" | "÷" => Self::Operate(Operator::Divide),
            "=" => Self::Equals,
            "Clear" | "C" | "c" => Self::Clear,
            "⌫" => Self::Backspace,
            _ => {
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Digit(Digit::from_char(c)?),
                    _ => return None,
                }
            }
        };
        Some(command)
    }
}

impl From<Digit> for Command {
    fn from(digit: Digit) -> Self {
        Self::Digit(digit)
    }
}

impl From<Operator> for Command {
    fn from(op: Operator) -> Self {
        Self::Operate(op)
    }
}
