use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cards::Card;
use crate::deal_order::DealOrder;
use crate::deck::{Deck, DEFAULT_SEED};
use crate::errors::GameError;
use crate::events::GameEvent;
use crate::pile::{CardRef, Pile, PileId};
use crate::rules::{self, LEFTOVER_VALUE, TRIPLE_SIZE};
use crate::selection::Selection;

/// Piles laid out at the start of a game.
pub const DEFAULT_PILE_COUNT: usize = 4;

/// Lifecycle of one game. `Won` and `Lost` are terminal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

impl GameState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameState::Playing)
    }
}

/// Construction parameters for [`Engine::with_config`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Shuffle seed; a fixed default seed is used when absent
    pub seed: Option<u64>,
    /// Number of piles laid out at game start
    pub piles: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            piles: DEFAULT_PILE_COUNT,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.piles == 0 {
            return Err(GameError::InvalidConfig("piles must be >= 1".into()));
        }
        if self.piles > usize::from(u8::MAX) {
            return Err(GameError::InvalidConfig(format!(
                "piles must be <= {}",
                u8::MAX
            )));
        }
        Ok(())
    }
}

/// A card that left the deck, and where it landed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dealt {
    pub card: Card,
    pub pile: PileId,
}

/// A triple that was matched and recycled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discard {
    /// The matched cards in pile order
    pub cards: [Card; TRIPLE_SIZE],
    pub pile: PileId,
    pub sum: u32,
    /// The pile emptied and was taken off the table
    pub pile_removed: bool,
    /// The discard completed the game
    pub won: bool,
}

/// Result of a single pick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionOutcome {
    /// The card joined the selection
    Selected { size: usize },
    /// The card was already selected and has been released
    Deselected { size: usize },
    /// The third pick completed a legal triple
    Discarded(Discard),
    /// The third pick completed a triple with a rejected sum; the selection was cleared
    Mismatched { sum: u32 },
}

/// A player action, for drivers that queue or generate moves.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    Deal,
    Select(CardRef),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    Dealt(Dealt),
    Selection(SelectionOutcome),
}

/// Read-only view of one pile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PileView {
    pub id: PileId,
    pub cards: Vec<Card>,
}

/// Read-only view of the whole table for presentation layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub state: GameState,
    pub deck_count: usize,
    pub piles: Vec<PileView>,
    pub selection: Vec<CardRef>,
}

/// Game-state engine for one solitaire table.
/// Owns the deck, the pile registry, the deal order and the current selection.
///
/// # Examples
///
/// ```
/// use nines_engine::engine::{Engine, GameState};
///
/// let mut engine = Engine::new(Some(12345));
/// assert_eq!(engine.deck_count(), 40);
///
/// // Four piles receive cards round-robin
/// for _ in 0..8 {
///     engine.deal().expect("deck has cards");
/// }
/// assert!(engine.piles().all(|p| p.len() == 2));
/// assert_eq!(engine.state(), GameState::Playing);
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    /// Remaining cards, front dealt next
    deck: Deck,
    /// Live piles keyed by id
    piles: BTreeMap<PileId, Pile>,
    /// Which pile receives the next card
    deal_order: DealOrder,
    /// Cards picked toward the next triple
    selection: Selection,
    state: GameState,
    /// Shuffle seed; `None` for stacked decks
    seed: Option<u64>,
    pile_count: usize,
    /// Successful deals and picks since the game started
    moves: usize,
    events: Vec<GameEvent>,
}

impl Engine {
    /// A shuffled game on the default four piles.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or(DEFAULT_SEED);
        let mut engine = Self::empty(Deck::new_with_seed(seed), Some(seed), DEFAULT_PILE_COUNT);
        engine.start_game();
        engine
    }

    pub fn with_config(config: &EngineConfig) -> Result<Self, GameError> {
        config.validate()?;
        let seed = config.seed.unwrap_or(DEFAULT_SEED);
        let mut engine = Self::empty(Deck::new_with_seed(seed), Some(seed), config.piles);
        engine.start_game();
        Ok(engine)
    }

    /// A game dealt from `deck` exactly as given, without shuffling.
    pub fn with_deck(deck: Deck, piles: usize) -> Result<Self, GameError> {
        EngineConfig { seed: None, piles }.validate()?;
        let mut engine = Self::empty(deck, None, piles);
        engine.reset_table();
        Ok(engine)
    }

    fn empty(deck: Deck, seed: Option<u64>, pile_count: usize) -> Self {
        Self {
            deck,
            piles: BTreeMap::new(),
            deal_order: DealOrder::new(),
            selection: Selection::new(),
            state: GameState::Playing,
            seed,
            pile_count,
            moves: 0,
            events: Vec::new(),
        }
    }

    /// Rebuilds and shuffles the full deck and lays out empty piles.
    pub fn start_game(&mut self) {
        self.deck.build();
        self.deck.shuffle();
        if self.seed.is_none() {
            // a stacked game restarted from a real shuffle
            self.seed = Some(DEFAULT_SEED);
        }
        self.reset_table();
    }

    fn reset_table(&mut self) {
        self.piles = (1..=self.pile_count)
            .map(|n| {
                let id = PileId(n as u8);
                (id, Pile::new(id))
            })
            .collect();
        self.deal_order.reset(self.piles.keys().copied());
        self.selection.clear();
        self.state = GameState::Playing;
        self.moves = 0;
        self.events.push(GameEvent::Started {
            seed: self.seed,
            piles: self.pile_count,
        });
        info!(seed = ?self.seed, piles = self.pile_count, deck = self.deck.len(), "game started");
    }

    fn ensure_playing(&self) -> Result<(), GameError> {
        if self.state.is_terminal() {
            Err(GameError::GameOver { state: self.state })
        } else {
            Ok(())
        }
    }

    /// Moves the front card of the deck onto the next pile in deal order.
    ///
    /// # Errors
    ///
    /// - [`GameError::EmptyDeck`] - nothing left to deal; the game is lost
    ///   if cards remain on the table
    /// - [`GameError::GameOver`] - the game already ended
    pub fn deal(&mut self) -> Result<Dealt, GameError> {
        self.ensure_playing()?;
        if self.deck.is_empty() {
            self.check_loss();
            return Err(GameError::EmptyDeck);
        }
        let pile_id = self
            .deal_order
            .next()
            .ok_or_else(|| GameError::InvalidConfig("no piles on the table".into()))?;
        let pile = self
            .piles
            .get_mut(&pile_id)
            .ok_or(GameError::UnknownPile(pile_id))?;
        let card = self.deck.draw()?;
        pile.append(card);
        self.moves += 1;
        debug!(%card, pile = %pile_id, deck = self.deck.len(), "dealt");
        self.events.push(GameEvent::Dealt {
            card,
            pile: pile_id,
        });
        Ok(Dealt {
            card,
            pile: pile_id,
        })
    }

    /// Toggles `card` in the selection, resolving the triple on the third pick.
    ///
    /// Picking an already-selected card always releases it.
    ///
    /// # Errors
    ///
    /// - [`GameError::InvalidSelection`] - different pile or not adjacent; nothing changes
    /// - [`GameError::UnknownPile`] / [`GameError::UnknownCard`] - no such card on the table
    /// - [`GameError::GameOver`] - the game already ended
    pub fn select(&mut self, card: CardRef) -> Result<SelectionOutcome, GameError> {
        self.ensure_playing()?;
        let pile = self
            .piles
            .get(&card.pile)
            .ok_or(GameError::UnknownPile(card.pile))?;
        if card.index >= pile.len() {
            return Err(GameError::UnknownCard {
                pile: card.pile,
                index: card.index,
            });
        }

        if self.selection.remove(card) {
            self.moves += 1;
            debug!(%card, size = self.selection.len(), "deselected");
            return Ok(SelectionOutcome::Deselected {
                size: self.selection.len(),
            });
        }

        if let Err(e) = rules::validate_pick(card, &self.selection, pile) {
            debug!(%card, error = %e, "pick rejected");
            return Err(e);
        }
        self.selection.insert(card);
        self.moves += 1;
        debug!(%card, size = self.selection.len(), "selected");

        if self.selection.len() < TRIPLE_SIZE {
            return Ok(SelectionOutcome::Selected {
                size: self.selection.len(),
            });
        }
        match self.resolve() {
            Ok(discard) => Ok(SelectionOutcome::Discarded(discard)),
            Err(GameError::IllegalTriple { sum }) => Ok(SelectionOutcome::Mismatched { sum }),
            Err(e) => Err(e),
        }
    }

    /// Validates the three selected cards and discards them when legal.
    ///
    /// A legal triple leaves its pile, goes to the back of the deck in pile
    /// order, and may take an emptied pile off the table (never the last
    /// one). The win check runs after every discard. An illegal triple only
    /// clears the selection.
    ///
    /// # Errors
    ///
    /// - [`GameError::IncompleteSelection`] - fewer than three cards selected
    /// - [`GameError::IllegalTriple`] - the sum is not 9, 19 or 29
    pub fn resolve(&mut self) -> Result<Discard, GameError> {
        self.ensure_playing()?;
        let size = self.selection.len();
        let pile_id = match self.selection.pile() {
            Some(id) if size == TRIPLE_SIZE => id,
            _ => return Err(GameError::IncompleteSelection { size }),
        };
        let indices = self.selection.sorted_indices();
        let pile = self
            .piles
            .get_mut(&pile_id)
            .ok_or(GameError::UnknownPile(pile_id))?;
        let mut cards = Vec::with_capacity(TRIPLE_SIZE);
        for &index in &indices {
            let card = pile.get(index).ok_or(GameError::UnknownCard {
                pile: pile_id,
                index,
            })?;
            cards.push(card);
        }

        let sum = match rules::validate_triple(&cards) {
            Ok(sum) => sum,
            Err(e) => {
                self.selection.clear();
                debug!(pile = %pile_id, error = %e, "triple rejected");
                return Err(e);
            }
        };

        for &index in indices.iter().rev() {
            pile.remove_at(index);
        }
        let emptied = pile.is_empty();
        for &card in &cards {
            self.deck.recycle(card);
        }
        self.selection.clear();

        let pile_removed = emptied && self.piles.len() > 1;
        if pile_removed {
            self.piles.remove(&pile_id);
            self.deal_order.remove(pile_id);
            info!(pile = %pile_id, remaining = self.piles.len(), "pile removed");
        }

        let cards = [cards[0], cards[1], cards[2]];
        info!(pile = %pile_id, sum, deck = self.deck.len(), "triple discarded");
        self.events.push(GameEvent::Discarded {
            cards,
            pile: pile_id,
            sum,
            pile_removed,
        });
        let won = self.check_win();
        Ok(Discard {
            cards,
            pile: pile_id,
            sum,
            pile_removed,
            won,
        })
    }

    /// Whether the remaining cards satisfy the terminal sum invariant.
    ///
    /// The table must hold at most one card. A lone leftover must be a 3 and
    /// the whole deck must split into accepted triples from the front. With
    /// an empty table the front of the deck takes the leftover's place: it
    /// must be a 3 and the triples start right after it.
    pub fn is_winning_position(&self) -> bool {
        let mut on_table = self.piles.values().flat_map(|p| p.cards().iter());
        let leftover = on_table.next();
        if on_table.next().is_some() {
            return false;
        }
        let deck = self.deck.to_vec();
        match leftover {
            Some(card) => card.value == LEFTOVER_VALUE && rules::decomposes_into_triples(&deck),
            None => match deck.split_first() {
                Some((front, rest)) => {
                    front.value == LEFTOVER_VALUE && rules::decomposes_into_triples(rest)
                }
                None => false,
            },
        }
    }

    /// Runs the win check, moving to [`GameState::Won`] when it holds.
    pub fn check_win(&mut self) -> bool {
        if self.state == GameState::Won {
            return true;
        }
        if self.state.is_terminal() || !self.is_winning_position() {
            return false;
        }
        self.state = GameState::Won;
        info!(deck = self.deck.len(), moves = self.moves, "game won");
        self.events.push(GameEvent::Won {
            deck_count: self.deck.len(),
        });
        true
    }

    /// Moves to [`GameState::Lost`] when the deck is exhausted while cards
    /// remain on the table.
    pub fn check_loss(&mut self) -> bool {
        if self.state == GameState::Lost {
            return true;
        }
        let cards_on_table = self.cards_on_table();
        if self.state.is_terminal() || !self.deck.is_empty() || cards_on_table == 0 {
            return false;
        }
        self.state = GameState::Lost;
        info!(cards_on_table, moves = self.moves, "game lost");
        self.events.push(GameEvent::Lost { cards_on_table });
        true
    }

    pub fn apply(&mut self, mv: Move) -> Result<MoveOutcome, GameError> {
        match mv {
            Move::Deal => self.deal().map(MoveOutcome::Dealt),
            Move::Select(card) => self.select(card).map(MoveOutcome::Selection),
        }
    }

    /// Every run of three adjacent cards, per pile, whose sum is accepted.
    /// Ordered by pile id, then by the slot the run starts at.
    pub fn legal_triples(&self) -> Vec<[CardRef; TRIPLE_SIZE]> {
        let mut found = Vec::new();
        for pile in self.piles.values() {
            for window in rules::triple_windows(pile.len()) {
                let sum: u32 = window
                    .iter()
                    .filter_map(|&i| pile.get(i))
                    .map(|c| u32::from(c.value))
                    .sum();
                if rules::is_winning_sum(sum) {
                    found.push(window.map(|i| CardRef::new(pile.id(), i)));
                }
            }
        }
        found
    }

    pub fn card_at(&self, card: CardRef) -> Option<Card> {
        self.piles.get(&card.pile)?.get(card.index)
    }

    pub fn pile(&self, id: PileId) -> Option<&Pile> {
        self.piles.get(&id)
    }

    /// Live piles in id order.
    pub fn piles(&self) -> impl Iterator<Item = &Pile> + '_ {
        self.piles.values()
    }

    pub fn pile_ids(&self) -> Vec<PileId> {
        self.piles.keys().copied().collect()
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn deck_count(&self) -> usize {
        self.deck.len()
    }

    pub fn cards_on_table(&self) -> usize {
        self.piles.values().map(Pile::len).sum()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected_cards(&self) -> Vec<Card> {
        self.selection
            .picks()
            .iter()
            .filter_map(|&r| self.card_at(r))
            .collect()
    }

    pub fn deal_order(&self) -> &DealOrder {
        &self.deal_order
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn moves(&self) -> usize {
        self.moves
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Hands queued notifications to the caller, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state,
            deck_count: self.deck.len(),
            piles: self
                .piles
                .values()
                .map(|p| PileView {
                    id: p.id(),
                    cards: p.cards().to_vec(),
                })
                .collect(),
            selection: self.selection.picks().to_vec(),
        }
    }
}
