use std::collections::{HashMap, HashSet};

use holdem_engine::cards::{Card, Rank, Suit};
use holdem_engine::deck::Deck;
use holdem_engine::errors::CardError;
use holdem_engine::player::Player;

fn assert_full_deck(deck: &Deck) {
    let cards = deck.cards();
    assert_eq!(cards.len(), 52);
    let unique: HashSet<Card> = cards.iter().copied().collect();
    assert_eq!(unique.len(), 52);

    let mut ranks: HashMap<Rank, usize> = HashMap::new();
    let mut suits: HashMap<Suit, usize> = HashMap::new();
    for c in cards {
        *ranks.entry(c.rank).or_default() += 1;
        *suits.entry(c.suit).or_default() += 1;
    }
    assert!(ranks.values().all(|&n| n == 4), "4 of each rank: {ranks:?}");
    assert!(suits.values().all(|&n| n == 13), "13 of each suit: {suits:?}");
}

#[test]
fn new_deck_is_complete() {
    assert_full_deck(&Deck::new_with_seed(1));
}

#[test]
fn shuffles_are_permutations() {
    let mut deck = Deck::new_with_seed(9);
    for _ in 0..5 {
        deck.shuffle();
        assert_full_deck(&deck);
    }
    assert_eq!(deck.shuffle_count(), 5);
}

#[test]
fn seed_replays_the_same_order() {
    let mut live = Deck::new();
    live.shuffle();
    let seed = live.last_seed().expect("shuffled deck has a seed");

    let mut replay = Deck::new_with_seed(777);
    replay.set_seed(seed);
    replay.shuffle();
    assert_eq!(live.cards(), replay.cards());
}

#[test]
fn same_construction_seed_same_shuffles() {
    let mut a = Deck::new_with_seed(12345);
    let mut b = Deck::new_with_seed(12345);
    for _ in 0..3 {
        a.shuffle();
        b.shuffle();
        assert_eq!(a.cards(), b.cards());
    }
}

#[test]
fn different_seeds_differ() {
    let mut a = Deck::new_with_seed(1);
    let mut b = Deck::new_with_seed(2);
    a.shuffle();
    b.shuffle();
    assert_ne!(a.cards(), b.cards());
}

#[test]
fn dealing_wraps_without_reshuffle() {
    let mut deck = Deck::new_with_seed(3);
    deck.shuffle();
    let first = deck.deal_card();
    for _ in 1..52 {
        deck.deal_card();
    }
    assert_eq!(deck.deal_card(), first);
    assert_eq!(deck.shuffle_count(), 1);
}

#[test]
fn deal_to_players_goes_round_in_seat_order() {
    let mut deck = Deck::new_with_seed(5);
    deck.shuffle();
    let order = deck.cards().to_vec();
    let mut players: Vec<Player> = (0..3)
        .map(|i| Player::new(format!("p{i}"), format!("h{i}"), 0))
        .collect();

    deck.deal_to_players(&mut players, 2, |p| p.id != "p1");

    assert_eq!(players[0].cards(), &[order[0], order[2]]);
    assert!(players[1].cards().is_empty());
    assert_eq!(players[2].cards(), &[order[1], order[3]]);
}

#[test]
fn card_codes_parse_case_insensitively() {
    let upper: Card = "TS".parse().unwrap();
    let lower: Card = "ts".parse().unwrap();
    assert_eq!(upper, lower);
    assert_eq!(upper, Card::new(Rank::Ten, Suit::Spades));
    assert_eq!(lower.code(), "TS");
}

#[test]
fn malformed_codes_are_rejected() {
    for bad in ["", "T", "1S", "TX", "TSS", "10S"] {
        assert_eq!(
            bad.parse::<Card>(),
            Err(CardError::InvalidFormat(bad.to_string())),
            "{bad:?} should not parse"
        );
    }
}
