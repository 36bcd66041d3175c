//! Execution result types.
//!
//! Bitstring ordering: the rightmost character is classical bit 0. For
//! example `"01"` means bit 0 read `1` and bit 1 read `0`.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Measurement counts from circuit execution.
///
/// Maps bitstrings to occurrence counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Counts {
    counts: FxHashMap<String, u64>,
}

impl Counts {
    /// Create empty counts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create counts from an iterator of (bitstring, count) pairs.
    /// Duplicate bitstrings are accumulated, consistent with `insert()`.
    pub fn from_pairs(iter: impl IntoIterator<Item = (impl Into<String>, u64)>) -> Self {
        let mut counts = Self::new();
        for (k, v) in iter {
            counts.insert(k, v);
        }
        counts
    }

    /// Add `count` observations of a bitstring.
    pub fn insert(&mut self, bitstring: impl Into<String>, count: u64) {
        *self.counts.entry(bitstring.into()).or_default() += count;
    }

    /// Get the count for a bitstring (0 if never observed).
    pub fn get(&self, bitstring: &str) -> u64 {
        self.counts.get(bitstring).copied().unwrap_or(0)
    }

    /// Iterate over (bitstring, count) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &u64)> {
        self.counts.iter()
    }

    /// Get the total number of shots.
    pub fn total_shots(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Get the most frequent bitstring.
    ///
    /// Ties resolve to the lexicographically smallest bitstring.
    pub fn most_frequent(&self) -> Option<(&String, &u64)> {
        self.sorted().into_iter().next()
    }

    /// Get probabilities for each bitstring.
    #[allow(clippy::cast_precision_loss)]
    pub fn probabilities(&self) -> FxHashMap<String, f64> {
        let total = self.total_shots() as f64;
        if total == 0.0 {
            return FxHashMap::default();
        }
        self.counts
            .iter()
            .map(|(k, &v)| (k.clone(), v as f64 / total))
            .collect()
    }

    /// Get sorted counts (by count descending, then bitstring ascending).
    pub fn sorted(&self) -> Vec<(&String, &u64)> {
        let mut items: Vec<_> = self.counts.iter().collect();
        items.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        items
    }

    /// Get counts ordered by bitstring.
    pub fn sorted_by_bitstring(&self) -> Vec<(&String, &u64)> {
        let mut items: Vec<_> = self.counts.iter().collect();
        items.sort_by(|a, b| a.0.cmp(b.0));
        items
    }

    /// Get the number of unique bitstrings.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if counts are empty.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl FromIterator<(String, u64)> for Counts {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

impl fmt::Display for Counts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (bitstring, count)) in self.sorted_by_bitstring().into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "'{bitstring}': {count}")?;
        }
        write!(f, "}}")
    }
}

/// Result of circuit execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Measurement counts.
    pub counts: Counts,
    /// Number of shots executed.
    pub shots: u32,
    /// Execution time in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_time_ms: Option<u64>,
    /// Additional metadata.
    #[serde(default)]
    pub metadata: serde_json::Value,
}

impl ExecutionResult {
    /// Create a new execution result.
    pub fn new(counts: Counts, shots: u32) -> Self {
        Self {
            counts,
            shots,
            execution_time_ms: None,
            metadata: serde_json::Value::Null,
        }
    }

    /// Set the execution time.
    pub fn with_execution_time(mut self, time_ms: u64) -> Self {
        self.execution_time_ms = Some(time_ms);
        self
    }

    /// Set metadata.
    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = metadata;
        self
    }

    /// Get the most frequent measurement result and its frequency.
    #[allow(clippy::cast_precision_loss)]
    pub fn most_frequent(&self) -> Option<(&String, f64)> {
        let total = self.counts.total_shots() as f64;
        if total == 0.0 {
            return None;
        }
        self.counts
            .most_frequent()
            .map(|(s, &c)| (s, c as f64 / total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_basic() {
        let mut counts = Counts::new();
        counts.insert("00", 500);
        counts.insert("11", 400);
        counts.insert("11", 100);

        assert_eq!(counts.get("00"), 500);
        assert_eq!(counts.get("11"), 500);
        assert_eq!(counts.get("01"), 0);
        assert_eq!(counts.total_shots(), 1000);
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_counts_probabilities() {
        let counts = Counts::from_pairs([("00", 300), ("01", 200), ("10", 300), ("11", 200)]);

        let probs = counts.probabilities();
        assert!((probs["00"] - 0.3).abs() < 1e-10);
        assert!((probs["01"] - 0.2).abs() < 1e-10);
        assert!(Counts::new().probabilities().is_empty());
    }

    #[test]
    fn test_sorted_breaks_ties_by_bitstring() {
        let counts = Counts::from_pairs([("11", 5), ("01", 9), ("00", 5)]);
        let sorted: Vec<_> = counts.sorted().into_iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(sorted, vec!["01", "00", "11"]);

        let (most, count) = counts.most_frequent().unwrap();
        assert_eq!(most, "01");
        assert_eq!(*count, 9);
    }

    #[test]
    fn test_display_orders_by_bitstring() {
        let counts = Counts::from_pairs([("10", 2), ("01", 1)]);
        assert_eq!(counts.to_string(), "{'01': 1, '10': 2}");
        assert_eq!(Counts::new().to_string(), "{}");
    }

    #[test]
    fn test_counts_serialize_as_map() {
        let counts = Counts::from_pairs([("1", 3)]);
        let json = serde_json::to_value(&counts).unwrap();
        assert_eq!(json, serde_json::json!({ "1": 3 }));
    }

    #[test]
    fn test_execution_result() {
        let counts = Counts::from_pairs([("00", 500), ("11", 500)]);
        let result = ExecutionResult::new(counts, 1000).with_execution_time(42);

        assert_eq!(result.shots, 1000);
        assert_eq!(result.execution_time_ms, Some(42));

        let (most, prob) = result.most_frequent().unwrap();
        assert_eq!(most, "00");
        assert!((prob - 0.5).abs() < 1e-10);
    }
}
