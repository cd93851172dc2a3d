//! Entropy calculation for feedback distributions
//!
//! Calculates Shannon entropy to measure the information gain from a guess.
//! Higher entropy means the guess better splits the remaining candidates.

use crate::core::PatternTable;
use crate::solver::partition::pattern_counts;

/// Metrics for evaluating a guess against a candidate set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected bucket size: Σ p(bucket) × |bucket|
    pub expected_remaining: f64,
    /// Maximum bucket size (worst-case remaining candidates)
    pub max_partition: usize,
}

impl GuessMetrics {
    const EMPTY: Self = Self {
        entropy: 0.0,
        expected_remaining: 0.0,
        max_partition: 0,
    };
}

/// Calculate comprehensive metrics for a guess
///
/// Returns entropy, expected bucket size, and max bucket size in one pass.
/// These order candidates for exact evaluation; they never decide an
/// expected-step value.
#[must_use]
pub fn calculate_metrics(table: &PatternTable, guess: usize, set: &[usize]) -> GuessMetrics {
    if set.is_empty() {
        return GuessMetrics::EMPTY;
    }

    // Sorted so equal distributions sum in the same order and tie exactly
    let mut counts: Vec<usize> = pattern_counts(table, set, guess).into_values().collect();
    counts.sort_unstable();

    let total = set.len() as f64;
    let mut entropy = 0.0;
    let mut expected_remaining = 0.0;
    let mut max_partition = 0;

    for count in counts {
        let p = count as f64 / total;
        entropy += -p * p.log2();
        expected_remaining += p * count as f64;
        max_partition = max_partition.max(count);
    }

    GuessMetrics {
        entropy,
        expected_remaining,
        max_partition,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Universe;

    fn table_for(words: &[&str]) -> PatternTable {
        PatternTable::build(&Universe::from_strs(words).unwrap())
    }

    #[test]
    fn entropy_all_same_pattern() {
        // zzzzz is gray against every candidate = 0 bits
        let table = table_for(&["aaaaa", "bbbbb", "ccccc", "zzzzz"]);
        assert!(calculate_metrics(&table, 3, &[0, 1, 2]).entropy.abs() < 0.001);
    }

    #[test]
    fn entropy_perfect_split() {
        let table = table_for(&["slate", "zzzzz"]);
        assert!((calculate_metrics(&table, 0, &[0, 1]).entropy - 1.0).abs() < 0.001);
    }

    #[test]
    fn calculate_metrics_skewed_distribution() {
        // 3 candidates share the all-gray pattern, 1 is a perfect match
        let table = table_for(&["abcde", "fghij", "fghik", "fghil"]);
        let metrics = calculate_metrics(&table, 0, &[0, 1, 2, 3]);

        // H = -(0.75*log2(0.75) + 0.25*log2(0.25)) = 0.811
        assert!((metrics.entropy - 0.811).abs() < 0.01);
        // 0.75*3 + 0.25*1 = 2.5
        assert!((metrics.expected_remaining - 2.5).abs() < 0.001);
        assert_eq!(metrics.max_partition, 3);
    }

    #[test]
    fn calculate_metrics_fixture_guesses() {
        let table = table_for(&["crane", "slate", "irate", "plate", "erase"]);
        let set = [0, 1, 2, 3, 4];

        // slate separates all five: log2(5) bits, every bucket a singleton
        let slate = calculate_metrics(&table, 1, &set);
        assert!((slate.entropy - 5f64.log2()).abs() < 1e-9);
        assert!((slate.expected_remaining - 1.0).abs() < 1e-9);
        assert_eq!(slate.max_partition, 1);

        // crane: buckets of 1, 2, 2
        let crane = calculate_metrics(&table, 0, &set);
        assert!((crane.expected_remaining - 1.8).abs() < 1e-9);
        assert_eq!(crane.max_partition, 2);
        assert!(crane.entropy < slate.entropy);
    }

    #[test]
    fn calculate_metrics_empty_candidates() {
        let table = table_for(&["crane"]);
        assert_eq!(calculate_metrics(&table, 0, &[]), GuessMetrics::EMPTY);
    }

    #[test]
    fn calculate_metrics_single_candidate() {
        let table = table_for(&["crane", "slate"]);
        let metrics = calculate_metrics(&table, 0, &[1]);

        assert!(metrics.entropy.abs() < 0.001);
        assert!((metrics.expected_remaining - 1.0).abs() < 0.001);
        assert_eq!(metrics.max_partition, 1);
    }
}
