//! Deal command: start a seeded game and show the table after K deals.

use crate::config;
use crate::error::CliError;
use crate::ui;
use nines_engine::cards::DECK_SIZE;
use nines_engine::engine::{Engine, EngineConfig};
use std::io::Write;

/// Handle the deal command.
///
/// Missing `seed` and `piles` fall back to the configuration; without a
/// configured seed a random one is drawn and printed so the game can be
/// reproduced.
///
/// ```ignore
/// let mut out = Vec::new();
/// handle_deal_command(Some(42), 12, None, &mut out).unwrap();
/// ```
pub fn handle_deal_command(
    seed: Option<u64>,
    cards: usize,
    piles: Option<u8>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if cards > DECK_SIZE {
        return Err(CliError::InvalidInput(format!(
            "cards must be <= {}",
            DECK_SIZE
        )));
    }
    let cfg = config::load()?;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let piles = piles.map(usize::from).unwrap_or(cfg.piles);

    let mut engine = Engine::with_config(&EngineConfig {
        seed: Some(seed),
        piles,
    })?;
    for _ in 0..cards {
        engine.deal()?;
    }

    writeln!(out, "Seed: {}", seed)?;
    for pile in engine.piles() {
        writeln!(out, "{}", ui::format_pile(pile))?;
    }
    writeln!(out, "Deck: {}", engine.deck_count())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deal_output(seed: u64, cards: usize, piles: Option<u8>) -> String {
        let mut out = Vec::new();
        handle_deal_command(Some(seed), cards, piles, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_deal_shows_every_pile_and_deck_count() {
        let output = deal_output(42, 12, Some(4));
        assert!(output.starts_with("Seed: 42\n"));
        for id in 1..=4 {
            assert!(output.contains(&format!("Pile {}:", id)));
        }
        assert!(output.ends_with("Deck: 28\n"));
    }

    #[test]
    fn test_deal_is_deterministic() {
        assert_eq!(deal_output(7, 10, Some(3)), deal_output(7, 10, Some(3)));
    }

    #[test]
    fn test_deal_spreads_cards_round_robin() {
        let output = deal_output(1, 5, Some(2));
        let counts: Vec<usize> = output
            .lines()
            .filter(|l| l.starts_with("Pile"))
            .map(|l| l.split_whitespace().count() - 2)
            .collect();
        assert_eq!(counts, vec![3, 2]);
    }

    #[test]
    fn test_deal_rejects_more_cards_than_the_deck() {
        let mut out = Vec::new();
        let result = handle_deal_command(Some(1), DECK_SIZE + 1, None, &mut out);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
