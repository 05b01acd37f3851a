//! # Nines CLI Library
//!
//! Command-line driver for the nines solitaire engine: deal a seeded table,
//! auto-play simulations, aggregate recorded games and inspect configuration.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line
//! arguments and executes the appropriate subcommand.
//!
//! ```no_run
//! use std::io;
//! let args = vec!["nines", "sim", "--games", "100", "--seed", "1"];
//! let code = nines_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `deal`: Start a seeded game and show the piles after K deals
//! - `sim`: Auto-play games and optionally record them as JSONL
//! - `stats`: Aggregate statistics from game-record files
//! - `cfg`: Display current configuration settings
//! - `rng`: Inspect the seeded ChaCha20 stream

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod io_utils;
pub mod logging;
pub mod ui;

use cli::{COMMANDS, Commands, NinesCli};
use commands::{
    SimArgs, handle_cfg_command, handle_deal_command, handle_rng_command, handle_sim_command,
    handle_stats_command,
};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` for interrupted runs
///
/// ```
/// use std::io;
/// let args = vec!["nines", "deal", "--seed", "42", "--cards", "8"];
/// let code = nines_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match NinesCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return usage_error(e, out, err),
    };

    let result = match cli.cmd {
        Commands::Deal { seed, cards, piles } => handle_deal_command(seed, cards, piles, out),
        Commands::Sim {
            games,
            seed,
            ai,
            output,
            max_moves,
            piles,
        } => handle_sim_command(
            SimArgs {
                games,
                seed,
                ai,
                output,
                max_moves,
                piles,
            },
            out,
            err,
        ),
        Commands::Stats { input } => handle_stats_command(input, out, err),
        Commands::Cfg => handle_cfg_command(out, err),
        Commands::Rng { seed } => handle_rng_command(seed, out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(_)) => exit_code::INTERRUPTED,
        Err(e) => {
            let _ = writeln!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

fn usage_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // help and version go to stdout and succeed
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match write!(out, "{}", e) {
            Ok(()) => exit_code::SUCCESS,
            Err(_) => exit_code::ERROR,
        };
    }
    let _ = write_usage(&e, err);
    exit_code::ERROR
}

fn write_usage(e: &clap::Error, err: &mut dyn Write) -> std::io::Result<()> {
    writeln!(err, "{}", e)?;
    writeln!(err)?;
    writeln!(err, "Nines Solitaire CLI")?;
    writeln!(err, "Usage: nines <command> [options]\n")?;
    writeln!(err, "Commands:")?;
    for c in COMMANDS {
        writeln!(err, "  {}", c)?;
    }
    writeln!(err, "\nFor full help, run: nines --help")
}
