use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::Card;

/// Stable identifier of a pile on the table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PileId(pub u8);

impl fmt::Display for PileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pile {}", self.0)
    }
}

/// Address of one card on the table: a pile and a slot within it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct CardRef {
    pub pile: PileId,
    pub index: usize,
}

impl CardRef {
    pub fn new(pile: PileId, index: usize) -> Self {
        Self { pile, index }
    }
}

impl fmt::Display for CardRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.pile, self.index)
    }
}

/// An ordered row of dealt cards, oldest first.
///
/// Adjacency is circular: the first and last cards of a pile touch, so a
/// triple may span the seam of the row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    id: PileId,
    cards: Vec<Card>,
}

impl Pile {
    pub fn new(id: PileId) -> Self {
        Self {
            id,
            cards: Vec::new(),
        }
    }

    pub fn id(&self) -> PileId {
        self.id
    }

    pub fn append(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn remove_at(&mut self, index: usize) -> Option<Card> {
        if index < self.cards.len() {
            Some(self.cards.remove(index))
        } else {
            None
        }
    }

    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Indices of the previous and next cards around `index`, wrapping at
    /// both ends. `None` when `index` is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use nines_engine::cards::{Card, Suit};
    /// use nines_engine::pile::{Pile, PileId};
    ///
    /// let mut pile = Pile::new(PileId(1));
    /// for value in [2, 4, 6] {
    ///     pile.append(Card { suit: Suit::Clubs, value });
    /// }
    /// assert_eq!(pile.neighbors_of(0), Some((2, 1)));
    /// assert_eq!(pile.neighbors_of(2), Some((1, 0)));
    /// assert_eq!(pile.neighbors_of(3), None);
    /// ```
    pub fn neighbors_of(&self, index: usize) -> Option<(usize, usize)> {
        let len = self.cards.len();
        if index >= len {
            return None;
        }
        let prev = if index == 0 { len - 1 } else { index - 1 };
        let next = if index + 1 == len { 0 } else { index + 1 };
        Some((prev, next))
    }

    /// Whether two distinct slots touch under circular adjacency.
    pub fn are_adjacent(&self, a: usize, b: usize) -> bool {
        if a == b {
            return false;
        }
        match self.neighbors_of(a) {
            Some((prev, next)) => prev == b || next == b,
            None => false,
        }
    }
}
