//! Baseline player for nines.
//!
//! Deterministic reference player used for simulations and as a yardstick
//! for other strategies.

use crate::{AIPlayer, continue_selection};
use nines_engine::engine::{Engine, Move};

/// Simple deterministic player.
///
/// # Strategy
///
/// - If a selection is in progress, finish it along the first legal triple
///   that contains it (or drop a pick that cannot be completed).
/// - Otherwise start the first legal triple: lowest pile id, lowest starting
///   index.
/// - With no legal triple on the table, deal.
///
/// # Example
///
/// ```rust
/// use nines_ai::baseline::BaselineAI;
/// use nines_ai::AIPlayer;
/// use nines_engine::engine::{Engine, Move};
///
/// let mut ai = BaselineAI::new();
/// let engine = Engine::new(Some(42));
///
/// // nothing on the table yet
/// assert_eq!(ai.choose(&engine), Move::Deal);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BaselineAI;

impl BaselineAI {
    pub fn new() -> Self {
        Self
    }
}

impl AIPlayer for BaselineAI {
    fn choose(&mut self, engine: &Engine) -> Move {
        if let Some(mv) = continue_selection(engine) {
            return mv;
        }
        match engine.legal_triples().first() {
            Some(triple) => Move::Select(triple[0]),
            None => Move::Deal,
        }
    }

    fn name(&self) -> &str {
        "BaselineAI"
    }
}
