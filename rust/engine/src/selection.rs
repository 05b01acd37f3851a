use serde::{Deserialize, Serialize};

use crate::pile::{CardRef, PileId};

/// Cards currently picked by the player, in pick order.
///
/// All picks share one pile. The engine clears the selection after every
/// resolved triple attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    picks: Vec<CardRef>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// The pile the selection lives in, if anything is selected.
    pub fn pile(&self) -> Option<PileId> {
        self.picks.first().map(|r| r.pile)
    }

    pub fn picks(&self) -> &[CardRef] {
        &self.picks
    }

    /// Selected slot indices, ascending.
    pub fn sorted_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.picks.iter().map(|r| r.index).collect();
        indices.sort_unstable();
        indices
    }

    pub fn contains(&self, card: CardRef) -> bool {
        self.picks.contains(&card)
    }

    /// Adds `card` unless already present.
    pub fn insert(&mut self, card: CardRef) {
        if !self.contains(card) {
            self.picks.push(card);
        }
    }

    pub fn remove(&mut self, card: CardRef) -> bool {
        match self.picks.iter().position(|&r| r == card) {
            Some(pos) => {
                self.picks.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.picks.clear();
    }

    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }
}
