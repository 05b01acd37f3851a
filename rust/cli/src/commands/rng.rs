//! Random number generator inspection command.
//!
//! Shows the first values of the seeded ChaCha20 stream and the top of the
//! deck that the same seed shuffles, so a seed can be checked by eye before
//! running a simulation with it.

use crate::error::CliError;
use nines_engine::deck::Deck;
use rand::{RngCore, SeedableRng};
use std::io::Write;

const SAMPLE_LEN: usize = 5;

/// Handle the rng command.
///
/// Without `seed`, a random seed is drawn and printed.
pub fn handle_rng_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let s = seed.unwrap_or_else(rand::random);
    let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(s);
    let vals: Vec<u64> = (0..SAMPLE_LEN).map(|_| rng.next_u64()).collect();

    let mut deck = Deck::new_with_seed(s);
    deck.shuffle();
    let head: Vec<String> = deck.iter().take(SAMPLE_LEN).map(|c| c.to_string()).collect();

    writeln!(out, "Seed: {}", s)?;
    writeln!(out, "RNG sample: {:?}", vals)?;
    writeln!(out, "Deck head: {}", head.join(" "))?;
    Ok(())
}
