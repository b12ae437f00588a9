//! `holdem replay`: re-checks every settled hand in a JSONL history.
//!
//! For each round record:
//! - the pots, the chips committed and the chips won agree
//! - at a showdown, each pot went to the best hands among its contestants
//! - when the record carries a shuffle seed, a fresh deck shuffled with it
//!   deals the same hole cards and board
//!
//! Action records are counted but not re-applied.

use std::collections::BTreeSet;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, FixedOffset};
use holdem_engine::cards::Card;
use holdem_engine::deck::Deck;
use holdem_engine::hand::evaluate_hand;
use holdem_engine::logger::{HistoryEntry, PlayerSnapshot, RoundRecord};

use crate::error::CliError;
use crate::io_utils::read_text;
use crate::{parse_json_or_continue, ui};

pub fn handle_replay_command(
    input: &Path,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let content = read_text(input)?;

    let mut actions = 0usize;
    let mut rounds = 0usize;
    let mut failed = 0usize;
    let mut lines = 0usize;
    let mut parsed = 0usize;
    let mut span: Option<(DateTime<FixedOffset>, DateTime<FixedOffset>)> = None;
    for (lineno, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        lines += 1;
        let entry: HistoryEntry =
            parse_json_or_continue!(line, err, format!("line {}", lineno + 1));
        parsed += 1;

        let round = match entry {
            HistoryEntry::Action(_) => {
                actions += 1;
                continue;
            }
            HistoryEntry::Round(round) => round,
        };
        rounds += 1;
        if let Some(ts) = round.ts.as_deref().and_then(|t| DateTime::parse_from_rfc3339(t).ok()) {
            span = Some(match span {
                Some((first, last)) => (first.min(ts), last.max(ts)),
                None => (ts, ts),
            });
        }
        let problems = check_round(&round);
        if problems.is_empty() {
            writeln!(out, "Round {} ({}): ok", round.round, round.table_id)?;
        } else {
            failed += 1;
            writeln!(
                out,
                "Round {} ({}): FAILED: {}",
                round.round,
                round.table_id,
                problems.join("; ")
            )?;
        }
    }

    writeln!(
        out,
        "Replayed {} rounds ({} actions): {} ok, {} failed",
        rounds,
        actions,
        rounds - failed,
        failed
    )?;
    if let Some((first, last)) = span {
        writeln!(out, "Hands settled between {} and {}", first.to_rfc3339(), last.to_rfc3339())?;
    }
    let skipped = lines - parsed;
    if skipped > 0 {
        ui::display_warning(err, &format!("{} unreadable lines skipped", skipped))?;
    }
    if rounds == 0 {
        return Err(CliError::InvalidInput(format!(
            "no round records in {}",
            input.display()
        )));
    }
    if failed > 0 || skipped > 0 {
        return Err(CliError::InvalidInput(format!(
            "{} of {} rounds failed verification",
            failed, rounds
        )));
    }
    Ok(())
}

/// Everything wrong with one settled hand; empty when it checks out.
fn check_round(round: &RoundRecord) -> Vec<String> {
    let mut problems = Vec::new();

    let pots: u32 = round.pots.iter().map(|p| p.total).sum();
    let committed = round.total_committed();
    let won = round.total_won();
    if pots != committed || won != committed {
        problems.push(format!(
            "chips do not balance (committed {committed}, pots {pots}, won {won})"
        ));
    }

    if round.uncontested {
        check_uncontested(round, &mut problems);
    } else {
        check_showdown(round, &mut problems);
    }

    if let Some(seed) = round.seed {
        check_deal(round, seed, &mut problems);
    }
    problems
}

fn check_uncontested(round: &RoundRecord, problems: &mut Vec<String>) {
    for pot in &round.pots {
        let ok = match pot.winners.as_slice() {
            [winner] => snapshot(round, winner).is_some_and(|p| p.contending),
            _ => false,
        };
        if !ok {
            problems.push(format!(
                "{} was uncontested but went to {:?}",
                pot.name, pot.winners
            ));
        }
    }
}

fn check_showdown(round: &RoundRecord, problems: &mut Vec<String>) {
    let board = match Card::parse_many(&round.board) {
        Ok(board) => board,
        Err(e) => {
            problems.push(format!("bad board: {e}"));
            return;
        }
    };
    for pot in &round.pots {
        let mut best: Option<u16> = None;
        let mut expected = BTreeSet::new();
        for id in &pot.contestants {
            let Some(p) = snapshot(round, id).filter(|p| p.contending) else {
                continue;
            };
            let value = match Card::parse_many(&p.cards)
                .map_err(|e| e.to_string())
                .and_then(|hole| {
                    let seven: Vec<Card> = hole.into_iter().chain(board.iter().copied()).collect();
                    evaluate_hand(&seven).map_err(|e| e.to_string())
                }) {
                Ok(rank) => rank.value,
                Err(e) => {
                    problems.push(format!("cannot rank {id}: {e}"));
                    return;
                }
            };
            match best {
                Some(b) if value < b => {}
                Some(b) if value == b => {
                    expected.insert(id.as_str());
                }
                _ => {
                    best = Some(value);
                    expected = BTreeSet::from([id.as_str()]);
                }
            }
        }
        let actual: BTreeSet<&str> = pot.winners.iter().map(String::as_str).collect();
        if expected.is_empty() {
            if !actual.is_empty() {
                problems.push(format!("{} paid {:?} with nobody contending", pot.name, actual));
            }
        } else if actual != expected {
            problems.push(format!(
                "{} went to {:?}, best hands were {:?}",
                pot.name, actual, expected
            ));
        }
    }
}

/// Re-deals the hand from its seed: hole cards one per player per pass in
/// seat order, then the board.
fn check_deal(round: &RoundRecord, seed: u64, problems: &mut Vec<String>) {
    let mut dealt: Vec<&PlayerSnapshot> =
        round.players.iter().filter(|p| !p.cards.is_empty()).collect();
    dealt.sort_by_key(|p| p.seat);

    let mut deck = Deck::new();
    deck.set_seed(seed);
    deck.shuffle();

    let per_player = dealt.iter().map(|p| p.cards.len()).max().unwrap_or(0);
    let mut hole: Vec<Vec<String>> = vec![Vec::new(); dealt.len()];
    for _ in 0..per_player {
        for cards in hole.iter_mut() {
            cards.push(deck.deal_card().code());
        }
    }
    for (p, cards) in dealt.iter().zip(&hole) {
        if &p.cards != cards {
            problems.push(format!(
                "seed {seed} deals {} to {}, history has {}",
                cards.join(" "),
                p.player_id,
                p.cards.join(" ")
            ));
        }
    }

    let board: Vec<String> = deck
        .deal_cards(round.board.len())
        .iter()
        .map(Card::code)
        .collect();
    if board != round.board {
        problems.push(format!(
            "seed {seed} deals board {}, history has {}",
            board.join(" "),
            round.board.join(" ")
        ));
    }
}

fn snapshot<'a>(round: &'a RoundRecord, player_id: &str) -> Option<&'a PlayerSnapshot> {
    round.players.iter().find(|p| p.player_id == player_id)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use holdem_engine::logger::PotRecord;

    use super::*;

    fn player(id: &str, seat: usize, cards: &[&str], committed: u32, won: u32) -> PlayerSnapshot {
        PlayerSnapshot {
            player_id: id.into(),
            handle: id.into(),
            seat,
            stack: 0,
            wallet: 0,
            committed: BTreeMap::from([("river".to_string(), committed)]),
            cards: cards.iter().map(|c| c.to_string()).collect(),
            hand: None,
            contending: true,
            departed: false,
            won,
        }
    }

    fn showdown() -> RoundRecord {
        RoundRecord {
            table_id: "t".into(),
            round: 1,
            seed: None,
            board: ["2C", "7D", "9H", "JS", "KD"].map(String::from).to_vec(),
            uncontested: false,
            players: vec![
                player("a", 0, &["AS", "AH"], 50, 100),
                player("b", 1, &["3C", "4C"], 50, 0),
            ],
            pots: vec![PotRecord {
                name: "main".into(),
                total: 100,
                contestants: vec!["a".into(), "b".into()],
                winners: vec!["a".into()],
                winning_hand: None,
                residual: 0,
            }],
            ts: None,
        }
    }

    #[test]
    fn correct_showdown_passes() {
        assert!(check_round(&showdown()).is_empty());
    }

    #[test]
    fn wrong_winner_is_reported() {
        let mut round = showdown();
        round.pots[0].winners = vec!["b".into()];
        round.players[0].won = 0;
        round.players[1].won = 100;
        let problems = check_round(&round);
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("best hands"));
    }

    #[test]
    fn unbalanced_chips_are_reported() {
        let mut round = showdown();
        round.players[0].won = 90;
        assert!(check_round(&round)[0].contains("do not balance"));
    }

    #[test]
    fn seeded_deal_is_reproduced() {
        let mut deck = Deck::new();
        deck.set_seed(31);
        deck.shuffle();
        let cards: Vec<String> = deck.deal_cards(9).iter().map(Card::code).collect();

        let mut round = showdown();
        round.seed = Some(31);
        round.players[0].cards = vec![cards[0].clone(), cards[2].clone()];
        round.players[1].cards = vec![cards[1].clone(), cards[3].clone()];
        round.board = cards[4..].to_vec();
        let problems = check_round(&round);
        assert!(
            problems.iter().all(|p| !p.contains("seed")),
            "{problems:?}"
        );

        round.seed = Some(32);
        assert!(check_round(&round).iter().any(|p| p.contains("seed 32")));
    }
}
