//! UI helper functions for terminal output formatting.

use std::io::Write;

use nines_engine::pile::Pile;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// One pile as a single line, e.g. `Pile 2: 7♣ A♥ 10♦`.
pub fn format_pile(pile: &Pile) -> String {
    let cards: Vec<String> = pile.cards().iter().map(|c| c.to_string()).collect();
    if cards.is_empty() {
        format!("Pile {}: (empty)", pile.id().0)
    } else {
        format!("Pile {}: {}", pile.id().0, cards.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nines_engine::cards::{Card, Suit};
    use nines_engine::pile::PileId;

    #[test]
    fn pile_line_lists_cards_in_order() {
        let mut pile = Pile::new(PileId(2));
        assert_eq!(format_pile(&pile), "Pile 2: (empty)");
        pile.append(Card {
            suit: Suit::Clubs,
            value: 7,
        });
        pile.append(Card {
            suit: Suit::Hearts,
            value: 1,
        });
        assert_eq!(format_pile(&pile), "Pile 2: 7♣ A♥");
    }

    #[test]
    fn warning_has_prefix() {
        let mut err = Vec::new();
        display_warning(&mut err, "careful").unwrap();
        assert_eq!(String::from_utf8(err).unwrap(), "WARNING: careful\n");
    }
}
