//! Reckon: a pure functional calculator state machine
//!
//! Reckon models the logic behind a single-screen keypad calculator. It is
//! built on the "pure core, imperative shell" philosophy: every transition is
//! a pure function from a state and a command to the next state, and a thin
//! [`Calculator`] shell owns the latest state and hands renderers a snapshot.
//!
//! # Core Concepts
//!
//! - **Commands**: key presses and keypad clicks normalize to a closed set of
//!   [`Command`]s
//! - **State**: display text, pending operand and operator, edit mode and a
//!   bounded history, held in one [`CalculatorState`] value
//! - **Transitions**: [`apply`] evaluates binary operations left to right,
//!   with no operator precedence
//! - **Snapshot**: the projected, read-only view drawn after each command
//!
//! # Example
//!
//! ```rust
//! use reckon::input::KeyInput;
//! use reckon::Calculator;
//!
//! let mut calculator = Calculator::new();
//! for key in ["5", "/", "0", "Enter"] {
//!     calculator.press(KeyInput::from_key_name(key));
//! }
//!
//! let snapshot = calculator.snapshot();
//! assert_eq!(snapshot.display, "0");
//! assert_eq!(snapshot.history, vec!["5 ÷ 0 = 0"]);
//! ```

pub mod config;
pub mod core;
pub mod input;
pub mod machine;

// Re-export commonly used types
pub use crate::config::{CalculatorBuilder, CalculatorConfig, ConfigError};
pub use crate::core::{CalculationHistory, CalculatorState, HistoryEntry, Operator};
pub use crate::input::{normalize, Command, KeyInput};
pub use crate::machine::{apply, Calculator, Snapshot};
