use crate::cards::Card;
use crate::errors::{GameError, SelectionReason};
use crate::pile::{CardRef, Pile};
use crate::selection::Selection;

/// Sums a triple must hit exactly to be discarded.
pub const WINNING_SUMS: [u32; 3] = [9, 19, 29];

/// Number of cards in a discard.
pub const TRIPLE_SIZE: usize = 3;

/// Value the single card left outside the final triples must have.
pub const LEFTOVER_VALUE: u8 = 3;

pub fn triple_sum(cards: &[Card]) -> u32 {
    cards.iter().map(|c| u32::from(c.value)).sum()
}

pub fn is_winning_sum(sum: u32) -> bool {
    WINNING_SUMS.contains(&sum)
}

/// True iff the three values sum to exactly 9, 19 or 29.
///
/// # Examples
///
/// ```
/// use nines_engine::cards::{Card, Suit};
/// use nines_engine::rules::is_legal_triple;
///
/// let c = |value| Card { suit: Suit::Hearts, value };
/// assert!(is_legal_triple(&[c(1), c(3), c(5)]));
/// assert!(is_legal_triple(&[c(1), c(9), c(9)]));
/// assert!(!is_legal_triple(&[c(10), c(10), c(10)]));
/// ```
pub fn is_legal_triple(cards: &[Card; TRIPLE_SIZE]) -> bool {
    is_winning_sum(triple_sum(cards))
}

/// Checks a completed selection and returns its sum when it may be discarded.
///
/// # Errors
///
/// - [`GameError::IncompleteSelection`] - not exactly three cards
/// - [`GameError::IllegalTriple`] - the sum is not 9, 19 or 29
pub fn validate_triple(cards: &[Card]) -> Result<u32, GameError> {
    if cards.len() != TRIPLE_SIZE {
        return Err(GameError::IncompleteSelection { size: cards.len() });
    }
    let sum = triple_sum(cards);
    if is_winning_sum(sum) {
        Ok(sum)
    } else {
        Err(GameError::IllegalTriple { sum })
    }
}

/// Decides whether `candidate` may join `selection`.
///
/// `pile` is the pile holding `candidate`. An empty selection accepts any
/// card. Otherwise the candidate must sit in the selection's pile and touch
/// at least one selected card under the pile's circular adjacency.
/// Deselecting an already-picked card is not a pick and never reaches here.
///
/// # Errors
///
/// Returns [`GameError::InvalidSelection`] with the failed rule.
pub fn validate_pick(
    candidate: CardRef,
    selection: &Selection,
    pile: &Pile,
) -> Result<(), GameError> {
    let Some(selected_pile) = selection.pile() else {
        return Ok(());
    };
    if candidate.pile != selected_pile || pile.id() != selected_pile {
        return Err(GameError::InvalidSelection {
            reason: SelectionReason::DifferentPile,
        });
    }
    let touches = selection
        .picks()
        .iter()
        .any(|picked| pile.are_adjacent(candidate.index, picked.index));
    if touches {
        Ok(())
    } else {
        Err(GameError::InvalidSelection {
            reason: SelectionReason::NotAdjacent,
        })
    }
}

pub fn can_add(candidate: CardRef, selection: &Selection, pile: &Pile) -> bool {
    validate_pick(candidate, selection, pile).is_ok()
}

/// Every run of three circularly-adjacent slots in a pile of `len` cards.
/// A pile of exactly three cards yields a single run.
pub fn triple_windows(len: usize) -> Vec<[usize; TRIPLE_SIZE]> {
    match len {
        0..=2 => Vec::new(),
        3 => vec![[0, 1, 2]],
        _ => (0..len)
            .map(|start| [start, (start + 1) % len, (start + 2) % len])
            .collect(),
    }
}

/// Whether `cards`, split into consecutive groups of three from the front,
/// gives an accepted sum for every group. A short trailing group is summed
/// as it stands.
pub fn decomposes_into_triples(cards: &[Card]) -> bool {
    cards
        .chunks(TRIPLE_SIZE)
        .all(|group| is_winning_sum(triple_sum(group)))
}
