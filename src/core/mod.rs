//! Core calculator types and logic.
//!
//! This module contains the pure functional core of the calculator:
//! - The four binary operators and their arithmetic
//! - The calculator state record
//! - Immutable, bounded calculation history
//! - Number rendering and the display projection
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy.

pub mod format;
mod history;
mod operator;
mod state;

pub use format::DisplayFormat;
pub use history::{CalculationHistory, HistoryEntry, DEFAULT_HISTORY_CAPACITY};
pub use operator::{evaluate, Operator};
pub use state::{CalculatorState, INITIAL_DISPLAY};
