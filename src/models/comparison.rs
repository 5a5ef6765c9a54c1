//! Comparison of retrieved identifiers against a known-good set.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Result of comparing retrieved identifiers against a known-good set.
///
/// Both inputs are treated as sets: duplicates collapse and input order is
/// irrelevant. `found` and `missed` partition the known set, so
/// `found_count + missed_count == total_known` always holds. The element
/// order of `found` and `missed` is unordered; callers that need a stable
/// ordering sort for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Known identifiers that appear in the retrieved set
    pub found: Vec<String>,

    /// Known identifiers absent from the retrieved set
    pub missed: Vec<String>,

    /// Size of the deduplicated known set
    pub total_known: usize,

    /// Number of known identifiers found
    pub found_count: usize,

    /// Number of known identifiers missed
    pub missed_count: usize,
}

impl ComparisonResult {
    /// Compare retrieved identifiers against known identifiers.
    ///
    /// Pure computation: no I/O, deterministic membership for given inputs.
    /// Empty inputs are valid and yield empty/zero results.
    pub fn new(retrieved: &[String], known: &[String]) -> Self {
        let retrieved_set: HashSet<&str> = retrieved.iter().map(String::as_str).collect();
        let known_set: HashSet<&str> = known.iter().map(String::as_str).collect();

        let found: Vec<String> = known_set
            .intersection(&retrieved_set)
            .map(|id| id.to_string())
            .collect();
        let missed: Vec<String> = known_set
            .difference(&retrieved_set)
            .map(|id| id.to_string())
            .collect();

        let found_count = found.len();
        let missed_count = missed.len();

        Self {
            found,
            missed,
            total_known: known_set.len(),
            found_count,
            missed_count,
        }
    }

    /// Fraction of known identifiers the search retrieved (0.0 to 1.0)
    pub fn recall(&self) -> f64 {
        if self.total_known == 0 {
            0.0
        } else {
            self.found_count as f64 / self.total_known as f64
        }
    }

    /// Check if every known identifier was retrieved (and there was at least one)
    pub fn is_complete(&self) -> bool {
        self.total_known > 0 && self.missed_count == 0
    }
}
