//! Solving algorithms
//!
//! Partitioning and entropy ranking feed two evaluators of a candidate set:
//! the exact memoized expectimax and a depth-limited greedy lookahead. Both sit
//! behind [`Evaluator`], and [`RootEvaluator`] uses either to score root guesses.

pub mod cache;
pub mod entropy;
pub mod evaluator;
pub mod exact;
pub mod lookahead;
pub mod partition;
pub mod root;

pub use cache::{CacheStats, MemoCache};
pub use evaluator::{Evaluator, SetEvaluator};
pub use exact::{ExactSolver, Solution};
pub use lookahead::{LeafCost, LookaheadEvaluator};
pub use partition::{Bucket, Partition, partition};
pub use root::{
    CancelFlag, RankOutcome, RankedGuess, RootEvaluator, compare_ranked, forced_first_guess_cost,
};
