//! Splitting a candidate set by the feedback one guess would produce

use crate::core::{CandidateSet, Pattern, PatternTable};
use rustc_hash::FxHashMap;

/// Probability mass tolerance for the partition invariant
const MASS_TOLERANCE: f64 = 1e-9;

/// Candidates sharing one feedback pattern
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket {
    pub pattern: Pattern,
    pub members: CandidateSet,
}

impl Bucket {
    /// Number of candidates in this bucket
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false for buckets produced by [`partition`]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Disjoint buckets covering a candidate set, in order of first appearance
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    buckets: Vec<Bucket>,
    total: usize,
}

impl Partition {
    /// The buckets
    #[must_use]
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    /// Consume into buckets
    #[must_use]
    pub fn into_buckets(self) -> Vec<Bucket> {
        self.buckets
    }

    /// Size of the partitioned set
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct patterns
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// True only when partitioning an empty set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// The bucket of candidates that produce `pattern`, if any do
    #[must_use]
    pub fn bucket(&self, pattern: Pattern) -> Option<&Bucket> {
        self.buckets.iter().find(|b| b.pattern == pattern)
    }

    /// Probability that the secret falls in `bucket`
    #[must_use]
    pub fn probability(&self, bucket: &Bucket) -> f64 {
        bucket.len() as f64 / self.total as f64
    }

    /// Whether the guess separates nothing: one bucket holding the whole set,
    /// under a pattern other than `all_correct`
    #[must_use]
    pub fn is_degenerate(&self, all_correct: Pattern) -> bool {
        self.buckets.len() == 1 && self.buckets[0].pattern != all_correct
    }

    /// Assert that bucket probabilities sum to one
    ///
    /// # Panics
    /// Panics if the mass is off by more than the tolerance, which means the
    /// pattern table or the partitioner is broken.
    pub fn assert_mass(&self) {
        let mass: f64 = self.buckets.iter().map(|b| self.probability(b)).sum();
        assert!(
            (mass - 1.0).abs() <= MASS_TOLERANCE,
            "partition probability mass is {mass}, expected 1"
        );
    }
}

/// Split `set` into buckets keyed by the pattern `guess` produces against each member
///
/// Buckets are disjoint and their sizes sum to `set.len()`. Members keep their
/// sorted order, so every bucket is itself a canonical candidate set.
///
/// # Panics
/// Panics if `guess` or a member is out of range for `table`, or if the sizes of
/// the buckets do not add up to the size of the set.
#[must_use]
pub fn partition(table: &PatternTable, set: &[usize], guess: usize) -> Partition {
    let row = table.row(guess);
    let mut slots: FxHashMap<Pattern, usize> = FxHashMap::default();
    let mut groups: Vec<(Pattern, Vec<usize>)> = Vec::new();

    for &answer in set {
        let pattern = row[answer];
        let slot = *slots.entry(pattern).or_insert_with(|| {
            groups.push((pattern, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(answer);
    }

    let buckets: Vec<Bucket> = groups
        .into_iter()
        .map(|(pattern, members)| Bucket {
            pattern,
            members: CandidateSet::from_sorted(members),
        })
        .collect();

    let covered: usize = buckets.iter().map(Bucket::len).sum();
    assert_eq!(covered, set.len(), "partition lost candidates");

    Partition {
        buckets,
        total: set.len(),
    }
}

/// Count how many members of `set` fall under each pattern, without building buckets
#[must_use]
pub fn pattern_counts(
    table: &PatternTable,
    set: &[usize],
    guess: usize,
) -> FxHashMap<Pattern, usize> {
    let row = table.row(guess);
    let mut counts = FxHashMap::default();

    for &answer in set {
        *counts.entry(row[answer]).or_insert(0) += 1;
    }

    counts
}
