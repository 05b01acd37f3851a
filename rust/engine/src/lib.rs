//! # nines-engine: Nines Solitaire Engine Core
//!
//! A deterministic rules engine for the "nines" solitaire: a 40-card deck
//! (four suits, values 1 to 10) is dealt round-robin into a row of piles, and
//! the player discards runs of three adjacent cards in one pile whose values
//! sum to 9, 19 or 29. Discards go back under the deck. The game is won when
//! the remaining cards line up as consecutive accepted triples, and lost when
//! the deck runs dry with cards still on the table.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Card) and deck enumeration
//! - [`deck`] - Seeded Fisher–Yates shuffling, draw and recycle
//! - [`deal_order`] - Round-robin pile cursor that survives pile removal
//! - [`pile`] - Piles on the table and circular adjacency
//! - [`selection`] - The player's transient pick of up to three cards
//! - [`rules`] - Pick validation and triple sums
//! - [`engine`] - Game orchestration, win and loss detection
//! - [`events`] - Notifications for presentation layers
//! - [`logger`] - GameRecord JSONL serialization
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use nines_engine::engine::{Engine, SelectionOutcome};
//! use nines_engine::pile::CardRef;
//!
//! let mut engine = Engine::new(Some(42));
//! for _ in 0..12 {
//!     engine.deal().expect("deck has cards");
//! }
//!
//! // Complete the first legal triple on the table, if any
//! if let Some(triple) = engine.legal_triples().first().copied() {
//!     let mut last = None;
//!     for card in triple {
//!         last = Some(engine.select(card).expect("adjacent pick"));
//!     }
//!     assert!(matches!(last, Some(SelectionOutcome::Discarded(_))));
//! }
//! ```
//!
//! ## Stacked Decks
//!
//! Tests and puzzles can deal from a fixed order:
//!
//! ```rust
//! use nines_engine::cards::{Card, Suit};
//! use nines_engine::deck::Deck;
//! use nines_engine::engine::Engine;
//!
//! let deck = Deck::from_cards([1, 3, 5].map(|value| Card { suit: Suit::Hearts, value }));
//! let mut engine = Engine::with_deck(deck, 1).unwrap();
//! assert_eq!(engine.deal().unwrap().card.value, 1);
//! ```

pub mod cards;
pub mod deal_order;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod events;
pub mod logger;
pub mod pile;
pub mod rules;
pub mod selection;
