//! Seeded random player.

use crate::{AIPlayer, continue_selection};
use nines_engine::engine::{Engine, Move};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Picks a uniformly random legal triple and deals when there is none.
///
/// The same seed against the same game always produces the same moves.
#[derive(Debug, Clone)]
pub struct RandomAI {
    rng: ChaCha20Rng,
}

impl RandomAI {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl AIPlayer for RandomAI {
    fn choose(&mut self, engine: &Engine) -> Move {
        if let Some(mv) = continue_selection(engine) {
            return mv;
        }
        let triples = engine.legal_triples();
        if triples.is_empty() {
            return Move::Deal;
        }
        let pick = self.rng.random_range(0..triples.len());
        Move::Select(triples[pick][0])
    }

    fn name(&self) -> &str {
        "RandomAI"
    }
}
