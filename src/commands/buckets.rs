//! Show how one guess splits the candidate set

use super::Workspace;
use crate::output;
use crate::solver::{Partition, partition};
use anyhow::Result;

/// Partition the candidates by `guess` and print the buckets
///
/// With `feedback`, only the bucket of candidates that would produce that
/// feedback is printed.
///
/// # Errors
/// Returns an error if the guess is not part of the universe or the feedback
/// string is invalid.
pub fn run_buckets(
    workspace: &Workspace,
    guess: &str,
    feedback: Option<&str>,
) -> Result<Partition> {
    let guess = workspace.resolve_guess(guess)?;
    let only = feedback
        .map(|text| workspace.parse_feedback(text))
        .transpose()?;

    let split = partition(&workspace.table, workspace.candidates.indices(), guess);
    split.assert_mass();

    output::print_buckets(&workspace.universe, guess, &split, only);
    Ok(split)
}
