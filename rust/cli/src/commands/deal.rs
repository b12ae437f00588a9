//! `holdem deal`: one seeded deal, in the order a table deals it.
//!
//! Hole cards go out one per player per pass in seat order, then the board
//! comes off the top with no burns. With the same seed and player count the
//! output matches the first hand `holdem sim` plays.

use std::io::Write;

use holdem_engine::cards::Card;
use holdem_engine::deck::Deck;
use holdem_engine::player::Player;

use crate::config;
use crate::error::CliError;

const HOLE_CARDS: usize = 2;
const BOARD_CARDS: usize = 5;

pub fn handle_deal_command(
    seed: Option<u64>,
    players: u8,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let seed = match seed {
        Some(seed) => seed,
        None => config::load()?.seed.unwrap_or_else(rand::random),
    };

    let mut deck = Deck::new_with_seed(seed);
    deck.shuffle();
    let mut seats: Vec<Player> = (1..=players)
        .map(|i| Player::new(format!("p{i}"), format!("p{i}"), 0))
        .collect();
    deck.deal_to_players(&mut seats, HOLE_CARDS, |_| true);
    let board = deck.deal_cards(BOARD_CARDS);

    writeln!(out, "Seed: {}", seed)?;
    if let Some(shuffle) = deck.last_seed() {
        writeln!(out, "Shuffle seed: {}", shuffle)?;
    }
    for p in &seats {
        writeln!(out, "Hole {}: {}", p.id, codes(p.cards()))?;
    }
    writeln!(out, "Board: {}", codes(&board))?;
    Ok(())
}

fn codes(cards: &[Card]) -> String {
    cards.iter().map(Card::code).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deal(seed: u64, players: u8) -> String {
        let mut out = Vec::new();
        handle_deal_command(Some(seed), players, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn same_seed_same_deal() {
        assert_eq!(deal(12345, 3), deal(12345, 3));
        assert_ne!(deal(1, 3), deal(2, 3));
    }

    #[test]
    fn one_line_per_player_and_no_repeats() {
        let text = deal(999, 6);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2 + 6 + 1);
        assert!(lines[2].starts_with("Hole p1: "));
        assert!(lines[8].starts_with("Board: "));

        let mut cards: Vec<&str> = lines[2..]
            .iter()
            .flat_map(|l| l.split(": ").nth(1).unwrap_or("").split(' '))
            .collect();
        assert_eq!(cards.len(), 6 * 2 + 5);
        cards.sort_unstable();
        cards.dedup();
        assert_eq!(cards.len(), 17);
    }
}
