//! Simulation command: auto-play many games with an automated player.
//!
//! Game `i` of a run is shuffled with `seed + i`, so any single game can be
//! reproduced with `nines deal --seed <seed + i>` or by re-running the same
//! simulation.
//!
//! # Environment Variables
//!
//! - `NINES_SIM_BREAK_AFTER`: stop after N games and report an interruption
//!   (used to exercise partial runs)

use crate::config;
use crate::error::CliError;
use crate::io_utils::ensure_parent_dir;
use crate::ui;
use nines_ai::{create_ai_seeded, play_to_completion};
use nines_engine::engine::Engine;
use nines_engine::logger::{GameLogger, GameRecord, GameResult};
use std::io::Write;
use tracing::{debug, info};

pub const ENV_BREAK_AFTER: &str = "NINES_SIM_BREAK_AFTER";

/// Options for one `sim` run; `None` fields fall back to the configuration.
#[derive(Debug, Clone, Default)]
pub struct SimArgs {
    pub games: u64,
    pub seed: Option<u64>,
    pub ai: Option<String>,
    pub output: Option<String>,
    pub max_moves: Option<usize>,
    pub piles: Option<u8>,
}

#[derive(Debug, Default)]
struct Tally {
    won: u64,
    lost: u64,
    abandoned: u64,
}

impl Tally {
    fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Won => self.won += 1,
            GameResult::Lost => self.lost += 1,
            GameResult::Abandoned => self.abandoned += 1,
        }
    }

    fn played(&self) -> u64 {
        self.won + self.lost + self.abandoned
    }

    fn write(&self, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(out, "Won: {}", self.won)?;
        writeln!(out, "Lost: {}", self.lost)?;
        writeln!(out, "Abandoned: {}", self.abandoned)
    }
}

/// Handle the sim command.
///
/// Prints the base seed, the player, and won/lost/abandoned totals. With
/// `output` set, appends one [`GameRecord`] per game to that file.
///
/// # Errors
///
/// - [`CliError::InvalidInput`] for zero games or an unknown player
/// - [`CliError::Interrupted`] when `NINES_SIM_BREAK_AFTER` stops the run early
pub fn handle_sim_command(
    args: SimArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if args.games == 0 {
        ui::write_error(err, "games must be >= 1")?;
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }

    let mut cfg = config::load()?;
    if let Some(p) = args.piles {
        cfg.piles = usize::from(p);
    }
    let ai_name = args.ai.unwrap_or_else(|| cfg.ai.clone());
    let max_moves = args.max_moves.unwrap_or(cfg.max_moves);
    if max_moves == 0 {
        return Err(CliError::InvalidInput("max-moves must be >= 1".to_string()));
    }
    let base_seed = args.seed.or(cfg.seed).unwrap_or_else(rand::random);

    let mut logger = match args.output.as_deref() {
        Some(p) => {
            let path = std::path::Path::new(p);
            ensure_parent_dir(path).map_err(|e| CliError::Io(std::io::Error::other(e)))?;
            Some(GameLogger::append(path)?)
        }
        None => None,
    };

    let break_after = std::env::var(ENV_BREAK_AFTER)
        .ok()
        .and_then(|v| v.parse::<u64>().ok());

    writeln!(out, "Seed: {}", base_seed)?;
    writeln!(out, "AI: {}", ai_name)?;

    let mut tally = Tally::default();
    for i in 0..args.games {
        if let Some(b) = break_after
            && i >= b
        {
            tally.write(out)?;
            writeln!(out, "Interrupted: played {}/{}", tally.played(), args.games)?;
            return Err(CliError::Interrupted(format!(
                "played {}/{}",
                tally.played(),
                args.games
            )));
        }

        let seed = base_seed.wrapping_add(i);
        let Some(mut ai) = create_ai_seeded(&ai_name, seed) else {
            ui::write_error(err, &format!("unknown ai '{}'", ai_name))?;
            return Err(CliError::InvalidInput(format!("unknown ai '{}'", ai_name)));
        };
        let mut engine = Engine::with_config(&cfg.engine_config(seed))?;
        let outcome = play_to_completion(&mut engine, ai.as_mut(), max_moves);
        debug!(game = i, seed, result = ?outcome.result, moves = outcome.moves, "game finished");
        tally.record(outcome.result);

        if let Some(logger) = logger.as_mut() {
            let events = engine.drain_events();
            let mut rec = GameRecord::from_engine(logger.next_id(), &engine, events);
            rec.meta = Some(serde_json::json!({ "ai": ai.name(), "max_moves": max_moves }));
            logger.write(&rec)?;
        }
    }

    info!(games = args.games, won = tally.won, lost = tally.lost, "simulation finished");
    writeln!(out, "Games: {}", args.games)?;
    tally.write(out)?;
    Ok(())
}
