//! Command-line front end for the expectimax engine

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;
use wordle_expectimax::commands::{self, RankOptions, Workspace};
use wordle_expectimax::config::{GuessPolicy, SolverConfig};
use wordle_expectimax::solver::LeafCost;

#[derive(Parser)]
#[command(name = "wordle-expectimax")]
#[command(about = "Expected-guess analysis for Wordle-style games", long_about = None)]
#[command(version)]
struct Cli {
    /// Word universe, one word per line
    #[arg(short, long, value_name = "FILE")]
    words: PathBuf,

    /// Candidate secrets still possible (defaults to the whole universe)
    #[arg(short, long, value_name = "FILE")]
    candidates: Option<PathBuf>,

    #[command(flatten)]
    solver: SolverArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank root guesses by expected number of guesses
    Rank {
        /// Rows to print (0 = all)
        #[arg(short = 'n', long, default_value_t = 20)]
        top: usize,

        /// Stop starting new root evaluations after this many seconds
        #[arg(long, value_name = "SECS")]
        time_limit: Option<f64>,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },

    /// Expected number of guesses when GUESS is played first
    Evaluate {
        /// Word to evaluate
        guess: String,
    },

    /// Show how GUESS splits the candidates
    Buckets {
        /// Word to split by
        guess: String,

        /// Show only the bucket for this feedback, e.g. "--G-Y" or "⬜⬜🟩⬜🟨"
        #[arg(short, long, value_name = "PATTERN")]
        feedback: Option<String>,
    },
}

#[derive(Args)]
struct SolverArgs {
    /// Which words may be guessed below the root
    #[arg(long, value_enum, default_value_t = PolicyArg::Closed)]
    policy: PolicyArg,

    /// Lookahead depth (0 = exact)
    #[arg(long, default_value_t = 0)]
    ply: usize,

    /// Root guesses scored after entropy pre-selection (0 = all)
    #[arg(long, default_value_t = 64)]
    max_roots: usize,

    /// Memo cache entries per worker (0 disables memoization)
    #[arg(long, default_value_t = 1_000_000)]
    cache_capacity: usize,

    /// Fraction of the cache dropped when it is full
    #[arg(long, default_value_t = 0.1)]
    evict_fraction: f64,

    /// Leaf estimate below the lookahead horizon
    #[arg(long, value_enum, default_value_t = LeafArg::Calibrated)]
    leaf_cost: LeafArg,

    /// Value of the constant leaf estimate
    #[arg(long, default_value_t = 2.0)]
    leaf_constant: f64,

    /// Worker threads (0 = one per core)
    #[arg(short = 'j', long, default_value_t = 0)]
    workers: usize,

    /// Stack size of each worker thread in MiB
    #[arg(long, default_value_t = 64)]
    stack_mib: usize,
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    /// Only remaining candidates may be guessed
    Closed,
    /// Any word of the universe may be guessed
    Open,
}

#[derive(Clone, Copy, ValueEnum)]
enum LeafArg {
    Calibrated,
    Constant,
    Sequential,
}

impl SolverArgs {
    fn to_config(&self) -> SolverConfig {
        SolverConfig {
            policy: match self.policy {
                PolicyArg::Closed => GuessPolicy::Closed,
                PolicyArg::Open => GuessPolicy::Open,
            },
            ply: self.ply,
            max_exact_roots: self.max_roots,
            cache_capacity: self.cache_capacity,
            evict_fraction: self.evict_fraction,
            leaf_cost: match self.leaf_cost {
                LeafArg::Calibrated => LeafCost::default(),
                LeafArg::Constant => LeafCost::Constant(self.leaf_constant),
                LeafArg::Sequential => LeafCost::Sequential,
            },
            workers: self.workers,
            worker_stack_size: self.stack_mib.saturating_mul(1024 * 1024),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.solver.to_config();
    config.validate()?;

    let workspace = Workspace::load(&cli.words, cli.candidates.as_deref())?;

    match cli.command {
        Commands::Rank {
            top,
            time_limit,
            no_progress,
        } => {
            let time_limit = time_limit.map(Duration::try_from_secs_f64).transpose()?;
            let options = RankOptions {
                top,
                time_limit,
                show_progress: !no_progress,
            };
            commands::run_rank(&workspace, config, &options)?;
        }
        Commands::Evaluate { guess } => {
            commands::run_evaluate(&workspace, config, &guess)?;
        }
        Commands::Buckets { guess, feedback } => {
            commands::run_buckets(&workspace, &guess, feedback.as_deref())?;
        }
    }

    Ok(())
}
