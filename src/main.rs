//! Driver: prints the Alloy partial instance for the reference deal.
//!
//! Configuration is compiled in: cards 1..=7, quotas A:1, B:3, C:3.
//! A malformed configuration surfaces as an error from `main` before any
//! output is written.

use deal_worlds::render::{holds_line, sig_declaration};
use deal_worlds::{enumerate_worlds, DealConfig, DealError, Deck};

const DECK_SIZE: u32 = 7;

fn main() -> Result<(), DealError> {
    let deck = Deck::sequential(DECK_SIZE);
    let config = DealConfig::reference();

    let worlds = enumerate_worlds(&deck, &config)?;

    println!("{}", sig_declaration(&worlds));
    for world in &worlds {
        println!("{}", holds_line(world));
    }

    Ok(())
}
