//! Bounded history of completed calculations.
//!
//! Provides immutable tracking of finished binary operations, most recent
//! first, following functional programming principles.

use super::format::number_to_string;
use super::operator::Operator;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of entries kept unless configured otherwise.
pub const DEFAULT_HISTORY_CAPACITY: usize = 5;

/// Record of a single completed calculation.
///
/// Entries are immutable values. Their `Display` form is the text shown in the
/// history panel.
///
/// # Example
///
/// ```rust
/// use reckon::core::{HistoryEntry, Operator};
///
/// let entry = HistoryEntry::new(2.0, Operator::Add, 3.0, 5.0);
/// assert_eq!(entry.to_string(), "2 + 3 = 5");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The pending value the operation started from
    pub left: f64,
    /// The operator that was pending
    pub operator: Operator,
    /// The operand entered last
    pub right: f64,
    /// The computed result
    pub result: f64,
}

impl HistoryEntry {
    pub fn new(left: f64, operator: Operator, right: f64, result: f64) -> Self {
        Self {
            left,
            operator,
            right,
            result,
        }
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            number_to_string(self.left),
            self.operator,
            number_to_string(self.right),
            number_to_string(self.result)
        )
    }
}

/// Most-recent-first log of completed calculations, bounded to `capacity`.
///
/// History is immutable - `record` returns a new history with the entry at
/// the front and the oldest entries beyond the bound discarded.
///
/// # Example
///
/// ```rust
/// use reckon::core::{CalculationHistory, HistoryEntry, Operator};
///
/// let history = CalculationHistory::with_capacity(2);
/// let history = history
///     .record(HistoryEntry::new(1.0, Operator::Add, 1.0, 2.0))
///     .record(HistoryEntry::new(2.0, Operator::Add, 1.0, 3.0))
///     .record(HistoryEntry::new(3.0, Operator::Add, 1.0, 4.0));
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.entries()[0].result, 4.0);
/// assert_eq!(history.entries()[1].result, 3.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculationHistory {
    entries: Vec<HistoryEntry>,
    capacity: usize,
}

impl Default for CalculationHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculationHistory {
    /// Create an empty history holding up to five entries.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Create an empty history with a custom bound.
    ///
    /// A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Record an entry, returning a new history.
    ///
    /// This is a pure function - the existing history is left untouched.
    pub fn record(&self, entry: HistoryEntry) -> Self {
        let capacity = self.capacity.max(1);
        let mut entries = Vec::with_capacity(capacity);
        entries.push(entry);
        entries.extend(self.entries.iter().take(capacity - 1).cloned());
        Self { entries, capacity }
    }

    /// Empty history with the same bound.
    pub fn cleared(&self) -> Self {
        Self::with_capacity(self.capacity)
    }

    /// Entries, most recent first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Most recent entry, if any.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    /// Entries rendered for the history panel.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(result: f64) -> HistoryEntry {
        HistoryEntry::new(result - 1.0, Operator::Add, 1.0, result)
    }

    #[test]
    fn new_history_is_empty() {
        let history = CalculationHistory::new();
        assert!(history.is_empty());
        assert!(history.latest().is_none());
        assert_eq!(history.capacity(), DEFAULT_HISTORY_CAPACITY);
    }

    #[test]
    fn record_puts_newest_first() {
        let history = CalculationHistory::new().record(entry(1.0)).record(entry(2.0));

        assert_eq!(history.len(), 2);
        assert_eq!(history.latest().map(|e| e.result), Some(2.0));
        assert_eq!(history.entries()[1].result, 1.0);
    }

    #[test]
    fn record_is_immutable() {
        let history = CalculationHistory::new();
        let new_history = history.record(entry(1.0));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn oldest_entries_are_discarded_beyond_capacity() {
        let history = (1..=6).fold(CalculationHistory::new(), |h, i| h.record(entry(i as f64)));

        let results: Vec<f64> = history.entries().iter().map(|e| e.result).collect();
        assert_eq!(results, vec![6.0, 5.0, 4.0, 3.0, 2.0]);
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let history = CalculationHistory::with_capacity(0)
            .record(entry(1.0))
            .record(entry(2.0));

        assert_eq!(history.capacity(), 1);
        assert_eq!(history.len(), 1);
        assert_eq!(history.entries()[0].result, 2.0);
    }

    #[test]
    fn deserialized_zero_capacity_is_clamped_on_record() {
        let history: CalculationHistory =
            serde_json::from_str(r#"{"entries":[],"capacity":0}"#).unwrap();
        let history = history.record(entry(1.0)).record(entry(2.0));

        assert_eq!(history.capacity(), 1);
        assert_eq!(history.len(), 1);
        assert_eq!(history.latest().map(|e| e.result), Some(2.0));
    }

    #[test]
    fn cleared_keeps_capacity() {
        let history = CalculationHistory::with_capacity(3).record(entry(1.0));
        let cleared = history.cleared();

        assert!(cleared.is_empty());
        assert_eq!(cleared.capacity(), 3);
    }

    #[test]
    fn entry_renders_with_operator_symbol() {
        assert_eq!(
            HistoryEntry::new(6.0, Operator::Divide, 4.0, 1.5).to_string(),
            "6 ÷ 4 = 1.5"
        );
        assert_eq!(
            HistoryEntry::new(0.1, Operator::Multiply, 3.0, 0.1 * 3.0).to_string(),
            "0.1 × 3 = 0.30000000000000004"
        );
        assert_eq!(
            HistoryEntry::new(2.0, Operator::Subtract, 5.0, -3.0).to_string(),
            "2 - 5 = -3"
        );
    }

    #[test]
    fn lines_follow_entry_order() {
        let history = CalculationHistory::new().record(entry(1.0)).record(entry(2.0));
        assert_eq!(history.lines(), vec!["1 + 1 = 2", "0 + 1 = 1"]);
    }

    #[test]
    fn history_serializes_correctly() {
        let history = CalculationHistory::new().record(entry(3.0));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: CalculationHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}
