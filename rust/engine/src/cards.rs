use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::GameError;

/// Lowest card value (the ace counts as 1).
pub const MIN_VALUE: u8 = 1;
/// Highest card value. The deck carries no face cards.
pub const MAX_VALUE: u8 = 10;
/// Number of cards in a complete deck: 4 suits of 10 values.
pub const DECK_SIZE: usize = 40;

/// Represents one of the four suits of the deck.
/// Suits only distinguish cards; they never affect matching.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Spades suit (♠)
    Spades,
    /// Hearts suit (♥)
    Hearts,
    /// Diamonds suit (♦)
    Diamonds,
    /// Clubs suit (♣)
    Clubs,
}

impl Suit {
    pub fn symbol(&self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }
}

/// A single card: a suit and a value between [`MIN_VALUE`] and [`MAX_VALUE`].
/// Cards are plain values; a complete deck holds exactly one card per pair.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The suit of the card
    pub suit: Suit,
    /// The face value, 1 (ace) through 10
    pub value: u8,
}

impl Card {
    /// Builds a card, rejecting values outside `1..=10`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nines_engine::cards::{Card, Suit};
    ///
    /// let ace = Card::new(Suit::Spades, 1).unwrap();
    /// assert_eq!(ace.to_string(), "A♠");
    /// assert!(Card::new(Suit::Spades, 11).is_err());
    /// ```
    pub fn new(suit: Suit, value: u8) -> Result<Self, GameError> {
        if !(MIN_VALUE..=MAX_VALUE).contains(&value) {
            return Err(GameError::InvalidCard { value });
        }
        Ok(Self { suit, value })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            1 => write!(f, "A{}", self.suit.symbol()),
            v => write!(f, "{}{}", v, self.suit.symbol()),
        }
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs]
}

pub fn all_values() -> impl Iterator<Item = u8> {
    MIN_VALUE..=MAX_VALUE
}

/// All 40 cards, suit-major then value ascending.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(DECK_SIZE);
    for &suit in &all_suits() {
        for value in all_values() {
            v.push(Card { suit, value });
        }
    }
    v
}
