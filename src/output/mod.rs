//! Terminal output formatting
//!
//! Colors come from `colored`, which honors `NO_COLOR` and non-tty output.

use crate::commands::GuessReport;
use crate::core::{Pattern, Universe, Word};
use crate::solver::{CacheStats, Partition, RankOutcome};
use colored::Colorize;

/// Words shown per bucket before the list is elided
const BUCKET_PREVIEW: usize = 8;

/// Color each letter of `guess` by its feedback digit
#[must_use]
pub fn format_feedback(guess: &Word, pattern: Pattern) -> String {
    guess
        .text()
        .chars()
        .zip(pattern.digits(guess.len()))
        .map(|(letter, digit)| {
            let tile = format!(" {} ", letter.to_ascii_uppercase());
            match digit {
                2 => tile.black().on_green().to_string(),
                1 => tile.black().on_yellow().to_string(),
                _ => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Expected steps with four decimals, prefixed by `~` for estimates
#[must_use]
pub fn format_steps(value: f64, exact: bool) -> String {
    if exact {
        format!("{value:.4}")
    } else {
        format!("~{value:.4}")
    }
}

/// Up to `limit` words of `members`, then a count of the rest
#[must_use]
pub fn format_word_list(universe: &Universe, members: &[usize], limit: usize) -> String {
    let shown: Vec<&str> = members
        .iter()
        .take(limit)
        .map(|&i| universe.word(i).text())
        .collect();

    let mut line = shown.join(", ");
    if members.len() > limit {
        line.push_str(&format!(" … and {} more", members.len() - limit));
    }
    line
}

/// One-line summary of cache usage
#[must_use]
pub fn format_cache_stats(stats: &CacheStats) -> String {
    format!(
        "cache: {} hits, {} misses ({:.1}% hit rate), {} insertions, {} evictions ({} entries)",
        stats.hits,
        stats.misses,
        stats.hit_rate() * 100.0,
        stats.insertions,
        stats.evictions,
        stats.evicted_entries
    )
}

/// Print a ranking table, best first (`top` = 0 prints every row)
pub fn print_ranking(universe: &Universe, outcome: &RankOutcome, top: usize, exact: bool) {
    let rows = if top == 0 {
        outcome.results.len()
    } else {
        top.min(outcome.results.len())
    };

    println!(
        "{}",
        format!(
            "{:>4}  {:<width$}  {:>10}  {:>8}  {:>9}  {:>5}",
            "#",
            "guess",
            "E[guesses]",
            "entropy",
            "E[bucket]",
            "max",
            width = universe.word_len().max(5)
        )
        .bold()
    );

    for (rank, result) in outcome.results.iter().take(rows).enumerate() {
        // Pad before coloring so escape codes do not count toward the width
        let word = format!(
            "{:<width$}",
            universe.word(result.guess).text(),
            width = universe.word_len().max(5)
        );
        let word = if rank == 0 {
            word.green().bold().to_string()
        } else {
            word
        };
        println!(
            "{:>4}  {word}  {:>10}  {:>8.4}  {:>9.3}  {:>5}",
            rank + 1,
            format_steps(result.expected_steps, exact),
            result.metrics.entropy,
            result.metrics.expected_remaining,
            result.metrics.max_partition,
        );
    }

    if outcome.cancelled {
        println!(
            "{}",
            format!(
                "Stopped early: {} roots completed before cancellation",
                outcome.results.len()
            )
            .yellow()
        );
    }

    let stats = outcome.cache_stats;
    if stats.hits + stats.misses > 0 {
        println!("{}", format_cache_stats(&stats).dimmed());
    }
}

/// Print the report of one forced first guess
pub fn print_evaluation(universe: &Universe, report: &GuessReport, candidates: usize) {
    let word = universe.word(report.guess);
    let kind = if report.exact { "exact" } else { "lookahead estimate" };

    println!("{} against {candidates} candidates", word.text().to_uppercase().bold());
    println!(
        "  Expected guesses:  {} ({kind})",
        format_steps(report.expected_steps, report.exact).green().bold()
    );
    println!("  Entropy:           {:.4} bits", report.metrics.entropy);
    println!("  Expected bucket:   {:.3}", report.metrics.expected_remaining);
    println!("  Largest bucket:    {}", report.metrics.max_partition);
}

/// Print every bucket of a partition, largest first, or only the bucket
/// matching `only`
pub fn print_buckets(
    universe: &Universe,
    guess: usize,
    split: &Partition,
    only: Option<Pattern>,
) {
    let word = universe.word(guess);
    println!(
        "{} splits {} candidates into {} buckets",
        word.text().to_uppercase().bold(),
        split.total(),
        split.len()
    );

    let mut buckets: Vec<_> = match only {
        Some(pattern) => split.bucket(pattern).into_iter().collect(),
        None => split.buckets().iter().collect(),
    };
    buckets.sort_by(|a, b| b.len().cmp(&a.len()).then(a.pattern.cmp(&b.pattern)));

    if let Some(pattern) = only
        && buckets.is_empty()
    {
        println!(
            "{}",
            format!("No candidate gives {}", pattern.to_emoji(word.len())).yellow()
        );
    }

    for bucket in buckets {
        println!(
            "{}  {}  {:>5}  {:>6.2}%  {}",
            format_feedback(word, bucket.pattern),
            bucket.pattern.to_emoji(word.len()),
            bucket.len(),
            split.probability(bucket) * 100.0,
            format_word_list(universe, bucket.members.indices(), BUCKET_PREVIEW)
        );
    }
}
