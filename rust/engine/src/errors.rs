use thiserror::Error;

use crate::engine::GameState;
use crate::pile::PileId;

/// Why a pick could not join the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionReason {
    /// The card lies in a different pile than the cards already selected
    DifferentPile,
    /// The card touches none of the selected cards
    NotAdjacent,
}

impl std::fmt::Display for SelectionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionReason::DifferentPile => write!(f, "card is in a different pile"),
            SelectionReason::NotAdjacent => write!(f, "card is not adjacent to the selection"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Deck is empty")]
    EmptyDeck,
    #[error("Invalid selection: {reason}")]
    InvalidSelection { reason: SelectionReason },
    #[error("Illegal triple: sum {sum} is not 9, 19 or 29")]
    IllegalTriple { sum: u32 },
    #[error("Selection holds {size} cards, a triple needs 3")]
    IncompleteSelection { size: usize },
    #[error("Game is over ({state:?})")]
    GameOver { state: GameState },
    #[error("No card at {pile} index {index}")]
    UnknownCard { pile: PileId, index: usize },
    #[error("No pile with id {0}")]
    UnknownPile(PileId),
    #[error("Invalid card value: {value}, expected 1-10")]
    InvalidCard { value: u8 },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
