//! # nines-ai: Automated Players for Nines
//!
//! Provides automated players that drive a [`Engine`] through its public
//! move API. Every player produces one [`Move`] per call, so a triple is
//! completed over three consecutive calls exactly as a human would click it.
//!
//! ## Core Components
//!
//! - [`AIPlayer`] - Trait defining the interface for move selection
//! - [`baseline`] - Deterministic player that always takes the first legal triple
//! - [`random`] - Seeded player that takes a random legal triple
//! - [`create_ai`] - Factory function for creating players by name
//! - [`play_to_completion`] - Runs a game until it ends or a move cap is hit
//!
//! ## Quick Start
//!
//! ```rust
//! use nines_ai::{create_ai, play_to_completion};
//! use nines_engine::engine::Engine;
//!
//! let mut ai = create_ai("baseline").expect("known player");
//! let mut engine = Engine::new(Some(42));
//!
//! let outcome = play_to_completion(&mut engine, ai.as_mut(), 5_000);
//! println!("{} finished as {:?} after {} moves", ai.name(), outcome.result, outcome.moves);
//! ```
//!
//! ## AI Types
//!
//! Currently supported AI types:
//! - `"baseline"` - Deterministic first-legal-triple player
//! - `"random"` - Uniformly random legal triple, seeded

use nines_engine::engine::{Engine, GameState, Move};
use nines_engine::errors::GameError;
use nines_engine::logger::GameResult;
use nines_engine::rules;

pub mod baseline;
pub mod random;

/// Names accepted by [`create_ai`].
pub const AI_NAMES: [&str; 2] = ["baseline", "random"];

/// Trait defining the interface for automated players.
///
/// # Required Methods
///
/// - [`choose`](AIPlayer::choose) - Pick the next move for the current table
/// - [`name`](AIPlayer::name) - Return the player's identifier
///
/// # Example Implementation
///
/// ```rust
/// use nines_ai::AIPlayer;
/// use nines_engine::engine::{Engine, Move};
///
/// struct AlwaysDeal;
///
/// impl AIPlayer for AlwaysDeal {
///     fn choose(&mut self, _engine: &Engine) -> Move {
///         Move::Deal
///     }
///
///     fn name(&self) -> &str {
///         "AlwaysDeal"
///     }
/// }
/// ```
pub trait AIPlayer: Send {
    /// Determine the next move for the current engine state.
    ///
    /// Implementations must only return picks that the engine will accept
    /// (same pile, adjacent to the existing selection) or [`Move::Deal`].
    fn choose(&mut self, engine: &Engine) -> Move;

    /// Return the name/identifier of this player.
    fn name(&self) -> &str;
}

/// Factory function to create players by type string.
///
/// Returns `None` for an unknown name so callers can report it.
///
/// ```rust
/// use nines_ai::create_ai;
///
/// assert_eq!(create_ai("baseline").unwrap().name(), "BaselineAI");
/// assert!(create_ai("oracle").is_none());
/// ```
pub fn create_ai(ai_type: &str) -> Option<Box<dyn AIPlayer>> {
    create_ai_seeded(ai_type, 0)
}

/// Like [`create_ai`] but seeds players that use randomness.
pub fn create_ai_seeded(ai_type: &str, seed: u64) -> Option<Box<dyn AIPlayer>> {
    match ai_type {
        "baseline" => Some(Box::new(baseline::BaselineAI::new())),
        "random" => Some(Box::new(random::RandomAI::new(seed))),
        _ => None,
    }
}

/// Result of driving a game with [`play_to_completion`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub result: GameResult,
    /// Moves the engine accepted during this run
    pub moves: usize,
}

/// Plays `engine` with `ai` until the game ends or `max_moves` moves have
/// been attempted.
///
/// Recycling can make a game cycle forever, so hitting the cap yields
/// [`GameResult::Abandoned`]. A move the engine rejects still counts toward
/// the cap.
pub fn play_to_completion(
    engine: &mut Engine,
    ai: &mut dyn AIPlayer,
    max_moves: usize,
) -> Outcome {
    let mut accepted = 0;
    for _ in 0..max_moves {
        if engine.state() != GameState::Playing {
            break;
        }
        let mv = ai.choose(engine);
        match engine.apply(mv) {
            Ok(_) => accepted += 1,
            // deck and table both empty: nothing left to do
            Err(GameError::EmptyDeck) if engine.state() == GameState::Playing => break,
            Err(_) => {}
        }
    }
    Outcome {
        result: engine.state().into(),
        moves: accepted,
    }
}

/// Continues a partial selection toward a legal triple that contains it.
///
/// Returns the next adjacent pick, a deselection when no legal triple can be
/// finished from the current picks, or `None` when nothing is selected.
pub(crate) fn continue_selection(engine: &Engine) -> Option<Move> {
    let picks = engine.selection().picks();
    let first = *picks.first()?;
    let pile = engine.pile(first.pile)?;
    // the next pick must touch one already made, whatever slot the run started at
    let next = engine
        .legal_triples()
        .into_iter()
        .filter(|triple| picks.iter().all(|p| triple.contains(p)))
        .flat_map(|triple| triple.into_iter())
        .find(|&c| !picks.contains(&c) && rules::can_add(c, engine.selection(), pile));
    Some(Move::Select(next.unwrap_or(first)))
}
