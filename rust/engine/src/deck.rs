use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// Seed used when a caller does not supply one.
pub const DEFAULT_SEED: u64 = 0xA1A2_A3A4;

/// The draw pile. Front is the next card to deal, back is the most
/// recently recycled card.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: VecDeque<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep enumeration order until shuffle is called explicitly
        Self {
            cards: full_deck().into(),
            rng,
        }
    }

    /// A stacked deck dealt in exactly the given order.
    pub fn from_cards<I>(cards: I) -> Self
    where
        I: IntoIterator<Item = Card>,
    {
        Self {
            cards: cards.into_iter().collect(),
            rng: ChaCha20Rng::seed_from_u64(DEFAULT_SEED),
        }
    }

    /// Refills the deck with all 40 cards in enumeration order.
    pub fn build(&mut self) {
        self.cards.clear();
        self.cards.extend(full_deck());
    }

    pub fn shuffle(&mut self) {
        fisher_yates(self.cards.make_contiguous(), &mut self.rng);
    }

    pub fn draw(&mut self) -> Result<Card, GameError> {
        self.cards.pop_front().ok_or(GameError::EmptyDeck)
    }

    pub fn recycle(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    pub fn peek_front(&self) -> Option<Card> {
        self.cards.front().copied()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards front to back.
    pub fn iter(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }

    pub fn to_vec(&self) -> Vec<Card> {
        self.cards.iter().copied().collect()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new_with_seed(DEFAULT_SEED)
    }
}

/// Uniform in-place permutation: walk from the last index down to 1 and
/// swap each slot with one drawn uniformly from `0..=i`.
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}
