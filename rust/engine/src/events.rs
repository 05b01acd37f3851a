use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::pile::PileId;
use crate::rules::TRIPLE_SIZE;

/// State changes a presentation layer reacts to, queued by the engine in
/// the order they happen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// A fresh game began with empty piles
    Started {
        /// Shuffle seed, absent for stacked decks
        seed: Option<u64>,
        /// Number of piles on the table
        piles: usize,
    },
    /// One card moved from the deck to a pile
    Dealt { card: Card, pile: PileId },
    /// A legal triple left the table and went to the back of the deck
    Discarded {
        cards: [Card; TRIPLE_SIZE],
        pile: PileId,
        sum: u32,
        /// The emptied pile was taken off the table
        pile_removed: bool,
    },
    /// The remaining cards satisfy the terminal sum invariant
    Won { deck_count: usize },
    /// The deck ran out with cards still on the table
    Lost { cards_on_table: usize },
}

impl GameEvent {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameEvent::Won { .. } | GameEvent::Lost { .. })
    }
}
