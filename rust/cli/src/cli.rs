//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "nines",
    version,
    about = "Nines solitaire: deal, simulate and analyse games"
)]
pub struct NinesCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start a game and deal cards onto the table
    Deal {
        /// Shuffle seed (defaults to the configured seed, then a random one)
        #[arg(long)]
        seed: Option<u64>,
        /// Number of cards to deal
        #[arg(long, default_value_t = 12)]
        cards: usize,
        /// Number of piles on the table
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..))]
        piles: Option<u8>,
    },
    /// Auto-play games and report how they ended
    Sim {
        /// Number of games to play
        #[arg(long)]
        games: u64,
        /// Base seed; game i is shuffled with seed + i
        #[arg(long)]
        seed: Option<u64>,
        /// Automated player (baseline or random)
        #[arg(long)]
        ai: Option<String>,
        /// Append one JSONL game record per game to this file
        #[arg(long)]
        output: Option<String>,
        /// Move cap per game before it is abandoned
        #[arg(long)]
        max_moves: Option<usize>,
        /// Number of piles on the table
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..))]
        piles: Option<u8>,
    },
    /// Aggregate a game-record file (or a directory of them)
    Stats {
        #[arg(long)]
        input: String,
    },
    /// Print the resolved configuration with value sources
    Cfg,
    /// Print a sample of the seeded ChaCha20 stream
    Rng {
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Subcommand names, listed in usage errors.
pub const COMMANDS: &[&str] = &["deal", "sim", "stats", "cfg", "rng"];
