use nines_engine::cards::{all_suits, full_deck, Card};
use nines_engine::deck::Deck;
use nines_engine::engine::{Engine, GameState, SelectionOutcome};
use nines_engine::errors::GameError;
use nines_engine::events::GameEvent;
use nines_engine::pile::{CardRef, PileId};

/// Builds a stacked deck from values, giving repeated values successive suits.
fn deck_from_values(values: &[u8]) -> Deck {
    let mut seen = [0usize; 11];
    let cards: Vec<Card> = values
        .iter()
        .map(|&value| {
            let suit = all_suits()[seen[value as usize] % 4];
            seen[value as usize] += 1;
            Card { suit, value }
        })
        .collect();
    Deck::from_cards(cards)
}

/// The full 40-card deck with `prefix` values dealt first, the rest in
/// enumeration order.
fn full_deck_with_prefix(prefix: &[u8]) -> Deck {
    let mut rest = full_deck();
    let mut front = Vec::new();
    for &value in prefix {
        let pos = rest
            .iter()
            .position(|c| c.value == value)
            .expect("value still available");
        front.push(rest.remove(pos));
    }
    front.extend(rest);
    Deck::from_cards(front)
}

/// Twelve accepted triples built from the full deck minus one 3 and one (5, 3, 1).
const TWELVE_TRIPLES: [u8; 36] = [
    10, 10, 9, 10, 10, 9, 9, 8, 2, 9, 8, 2, 8, 7, 4, 8, 7, 4, 7, 6, 6, 7, 6, 6, 5, 3, 1, 5, 3, 1,
    5, 2, 2, 4, 4, 1,
];

fn select_all(engine: &mut Engine, refs: &[CardRef]) -> SelectionOutcome {
    let mut last = None;
    for &r in refs {
        last = Some(engine.select(r).expect("pick accepted"));
    }
    last.expect("at least one pick")
}

#[test]
fn discard_empties_and_removes_pile_then_dealing_skips_it() {
    // pile 1 receives deal positions 0, 4 and 8
    let deck = full_deck_with_prefix(&[2, 10, 10, 10, 3, 10, 9, 9, 4, 8, 8, 8]);
    let mut engine = Engine::with_deck(deck, 4).unwrap();
    for _ in 0..12 {
        engine.deal().unwrap();
    }
    assert_eq!(engine.deck_count(), 28);
    let p1 = PileId(1);
    let values: Vec<u8> = engine.pile(p1).unwrap().cards().iter().map(|c| c.value).collect();
    assert_eq!(values, vec![2, 3, 4]);

    let outcome = select_all(
        &mut engine,
        &[CardRef::new(p1, 0), CardRef::new(p1, 1), CardRef::new(p1, 2)],
    );
    let SelectionOutcome::Discarded(discard) = outcome else {
        panic!("expected a discard, got {:?}", outcome);
    };
    assert_eq!(discard.sum, 9);
    assert!(discard.pile_removed);
    assert!(!discard.won);

    assert_eq!(engine.deck_count(), 31);
    let back: Vec<u8> = engine.deck().to_vec()[28..].iter().map(|c| c.value).collect();
    assert_eq!(back, vec![2, 3, 4]);
    assert!(engine.pile(p1).is_none());
    assert_eq!(engine.pile_ids(), vec![PileId(2), PileId(3), PileId(4)]);

    let next: Vec<PileId> = (0..4).map(|_| engine.deal().unwrap().pile).collect();
    assert_eq!(next, vec![PileId(2), PileId(3), PileId(4), PileId(2)]);
}

#[test]
fn last_pile_is_never_removed() {
    let deck = deck_from_values(&[1, 3, 5, 10]);
    let mut engine = Engine::with_deck(deck, 1).unwrap();
    for _ in 0..3 {
        engine.deal().unwrap();
    }
    let p = PileId(1);
    let outcome = select_all(
        &mut engine,
        &[CardRef::new(p, 0), CardRef::new(p, 1), CardRef::new(p, 2)],
    );
    let SelectionOutcome::Discarded(discard) = outcome else {
        panic!("expected a discard");
    };
    assert!(!discard.pile_removed);
    assert_eq!(engine.pile_ids(), vec![p]);
    assert_eq!(engine.deal().unwrap().pile, p);
}

#[test]
fn triple_across_the_seam_is_discarded() {
    // pile: 4, 10, 10, 2, 3 -> seam run 2, 3, 4 sums to 9
    let deck = deck_from_values(&[4, 10, 10, 2, 3]);
    let mut engine = Engine::with_deck(deck, 1).unwrap();
    for _ in 0..5 {
        engine.deal().unwrap();
    }
    let p = PileId(1);
    let outcome = select_all(
        &mut engine,
        &[CardRef::new(p, 3), CardRef::new(p, 4), CardRef::new(p, 0)],
    );
    assert!(matches!(outcome, SelectionOutcome::Discarded(_)));
    let left: Vec<u8> = engine.pile(p).unwrap().cards().iter().map(|c| c.value).collect();
    assert_eq!(left, vec![10, 10]);
    let back: Vec<u8> = engine.deck().iter().map(|c| c.value).collect();
    assert_eq!(back, vec![4, 2, 3], "recycled in pile order");
}

#[test]
fn deck_exhausted_with_cards_on_table_is_a_loss() {
    let deck = deck_from_values(&[10, 10, 10]);
    let mut engine = Engine::with_deck(deck, 4).unwrap();
    engine.deal().unwrap();
    engine.deal().unwrap();
    assert_eq!(engine.deck_count(), 1);
    engine.deal().unwrap();
    assert_eq!(engine.deal(), Err(GameError::EmptyDeck));
    assert_eq!(engine.state(), GameState::Lost);
    assert_eq!(
        engine.events().last(),
        Some(&GameEvent::Lost { cards_on_table: 3 })
    );
}

#[test]
fn one_leftover_three_with_triple_deck_wins() {
    let mut values = vec![3, 5, 3, 1];
    values.extend_from_slice(&TWELVE_TRIPLES);
    assert_eq!(values.len(), 40);
    let mut engine = Engine::with_deck(deck_from_values(&values), 1).unwrap();
    for _ in 0..4 {
        engine.deal().unwrap();
    }
    assert!(!engine.is_winning_position());

    let p = PileId(1);
    let outcome = select_all(
        &mut engine,
        &[CardRef::new(p, 1), CardRef::new(p, 2), CardRef::new(p, 3)],
    );
    let SelectionOutcome::Discarded(discard) = outcome else {
        panic!("expected a discard");
    };
    assert!(discard.won);
    assert_eq!(engine.cards_on_table(), 1);
    assert_eq!(engine.state(), GameState::Won);
    assert!(engine.check_win());
    assert!(matches!(
        engine.events().last(),
        Some(GameEvent::Won { deck_count: 39 })
    ));
    assert!(matches!(engine.deal(), Err(GameError::GameOver { .. })));
}

#[test]
fn empty_table_with_three_on_top_of_triple_deck_wins() {
    let mut values = vec![5, 3, 1, 3];
    values.extend_from_slice(&TWELVE_TRIPLES);
    let mut engine = Engine::with_deck(deck_from_values(&values), 1).unwrap();
    for _ in 0..3 {
        engine.deal().unwrap();
    }
    let p = PileId(1);
    let outcome = select_all(
        &mut engine,
        &[CardRef::new(p, 0), CardRef::new(p, 1), CardRef::new(p, 2)],
    );
    assert!(matches!(outcome, SelectionOutcome::Discarded(ref d) if d.won));
    assert_eq!(engine.cards_on_table(), 0);
    assert_eq!(engine.deck().peek_front().map(|c| c.value), Some(3));
    assert_eq!(engine.state(), GameState::Won);
}

#[test]
fn leftover_other_than_three_does_not_win() {
    // same deck with the leading 3 swapped for a 4 from the tail
    let mut values = vec![4, 5, 3, 1];
    values.extend_from_slice(&TWELVE_TRIPLES[..33]);
    values.extend_from_slice(&[3, 4, 1]);
    let mut engine = Engine::with_deck(deck_from_values(&values), 1).unwrap();
    for _ in 0..4 {
        engine.deal().unwrap();
    }
    let p = PileId(1);
    select_all(
        &mut engine,
        &[CardRef::new(p, 1), CardRef::new(p, 2), CardRef::new(p, 3)],
    );
    assert_eq!(engine.cards_on_table(), 1);
    assert!(!engine.check_win());
    assert_eq!(engine.state(), GameState::Playing);
}

#[test]
fn broken_triple_in_deck_does_not_win() {
    let mut values = vec![3, 5, 3, 1];
    let mut tail = TWELVE_TRIPLES.to_vec();
    // (10, 10, 9) and (9, 8, 2) become (2, 10, 9) and (9, 8, 10): sums 21 and 27
    tail.swap(0, 8);
    values.extend_from_slice(&tail);
    let mut engine = Engine::with_deck(deck_from_values(&values), 1).unwrap();
    for _ in 0..4 {
        engine.deal().unwrap();
    }
    let p = PileId(1);
    select_all(
        &mut engine,
        &[CardRef::new(p, 1), CardRef::new(p, 2), CardRef::new(p, 3)],
    );
    assert_eq!(engine.state(), GameState::Playing);
}

#[test]
fn more_than_one_card_on_table_never_wins() {
    let mut values = vec![3, 3];
    values.extend_from_slice(&TWELVE_TRIPLES);
    let mut engine = Engine::with_deck(deck_from_values(&values), 2).unwrap();
    engine.deal().unwrap();
    engine.deal().unwrap();
    assert!(!engine.check_win());
}

#[test]
fn both_cards_of_a_two_card_pile_can_be_picked_either_way() {
    let mut engine = Engine::with_deck(deck_from_values(&[10, 10, 10]), 1).unwrap();
    engine.deal().unwrap();
    engine.deal().unwrap();
    let p = PileId(1);

    for order in [[0, 1], [1, 0]] {
        for index in order {
            let outcome = engine.select(CardRef::new(p, index)).expect("ends touch");
            assert!(matches!(outcome, SelectionOutcome::Selected { .. }), "{:?}", outcome);
        }
        assert_eq!(engine.selection().len(), 2);
        for index in order {
            engine.select(CardRef::new(p, index)).unwrap();
        }
        assert!(engine.selection().is_empty());
    }
}
