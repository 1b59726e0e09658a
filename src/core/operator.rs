//! Binary arithmetic operators.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four binary operators the keypad offers.
///
/// # Example
///
/// ```rust
/// use reckon::core::Operator;
///
/// assert_eq!(Operator::Add.apply(2.0, 3.0), 5.0);
/// assert_eq!(Operator::Divide.apply(5.0, 0.0), 0.0);
/// assert_eq!(Operator::Multiply.symbol(), '×');
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators in keypad order.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Symbol used in history entries and the pending expression line.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// Apply the operator to two operands.
    ///
    /// Division by zero yields 0 instead of an infinite or undefined value.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b != 0.0 {
                    a / b
                } else {
                    0.0
                }
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Evaluate `a op b`.
///
/// `None` stands for the terminal operator used when finishing a calculation
/// and acts as identity on the second operand.
pub fn evaluate(a: f64, b: f64, op: Option<Operator>) -> f64 {
    match op {
        Some(op) => op.apply(a, b),
        None => b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_is_applied() {
        assert_eq!(Operator::Add.apply(2.0, 3.0), 5.0);
        assert_eq!(Operator::Subtract.apply(2.0, 3.0), -1.0);
        assert_eq!(Operator::Multiply.apply(2.0, 3.0), 6.0);
        assert_eq!(Operator::Divide.apply(3.0, 2.0), 1.5);
    }

    #[test]
    fn division_by_zero_yields_zero() {
        assert_eq!(Operator::Divide.apply(5.0, 0.0), 0.0);
        assert_eq!(Operator::Divide.apply(-5.0, -0.0), 0.0);
    }

    #[test]
    fn terminal_operator_is_identity_on_second_operand() {
        assert_eq!(evaluate(7.0, 4.0, None), 4.0);
        assert_eq!(evaluate(7.0, 4.0, Some(Operator::Subtract)), 3.0);
    }

    #[test]
    fn symbols_match_keypad_labels() {
        let symbols: String = Operator::ALL.iter().map(|op| op.symbol()).collect();
        assert_eq!(symbols, "+-×÷");
        assert_eq!(Operator::Divide.to_string(), "÷");
    }

    #[test]
    fn operator_serializes_correctly() {
        let json = serde_json::to_string(&Operator::Multiply).unwrap();
        let deserialized: Operator = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Operator::Multiply);
    }
}
