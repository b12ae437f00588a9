use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::player::Player;

pub const DECK_SIZE: usize = 52;

/// A 52-card deck with a wrapping deal cursor and replayable shuffles.
///
/// Every shuffle starts from the canonical order and permutes it with a
/// ChaCha20 stream seeded by a single `u64`, so the seed alone reproduces the
/// post-shuffle order. Seeds come from an internal seeder, or from
/// [`Deck::set_seed`] when a specific ordering has to be replayed.
///
/// ```
/// use holdem_engine::deck::Deck;
///
/// let mut live = Deck::new();
/// live.shuffle();
/// let seed = live.last_seed().unwrap();
///
/// let mut replay = Deck::new();
/// replay.set_seed(seed);
/// replay.shuffle();
/// assert_eq!(live.deal_card(), replay.deal_card());
/// ```
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    shuffles: u32,
    last_seed: Option<u64>,
    next_seed: Option<u64>,
    seeder: ChaCha20Rng,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Unshuffled deck whose shuffle seeds are drawn from OS entropy.
    pub fn new() -> Self {
        Self::with_seeder(ChaCha20Rng::seed_from_u64(rand::random()))
    }

    /// Unshuffled deck whose sequence of shuffle seeds is fully determined by `seed`.
    pub fn new_with_seed(seed: u64) -> Self {
        Self::with_seeder(ChaCha20Rng::seed_from_u64(seed))
    }

    fn with_seeder(seeder: ChaCha20Rng) -> Self {
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            shuffles: 0,
            last_seed: None,
            next_seed: None,
            seeder,
        }
    }

    /// Pins the seed used by the next shuffle.
    pub fn set_seed(&mut self, seed: u64) {
        self.next_seed = Some(seed);
    }

    /// Returns the seed the next shuffle will use, drawing it now if needed.
    pub fn prepare_seed(&mut self) -> u64 {
        if let Some(seed) = self.next_seed {
            return seed;
        }
        let seed = self.seeder.next_u64();
        self.next_seed = Some(seed);
        seed
    }

    pub fn shuffle(&mut self) {
        let seed = self.prepare_seed();
        self.next_seed = None;
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        self.cards = full_deck();
        self.cards.shuffle(&mut rng);
        self.position = 0;
        self.shuffles += 1;
        self.last_seed = Some(seed);
    }

    /// Deals the next card. After the 52nd card the cursor returns to the top
    /// of the current order; the deck is not reshuffled.
    pub fn deal_card(&mut self) -> Card {
        if self.position >= self.cards.len() {
            self.position = 0;
        }
        let c = self.cards[self.position];
        self.position += 1;
        c
    }

    pub fn deal_cards(&mut self, count: usize) -> Vec<Card> {
        (0..count).map(|_| self.deal_card()).collect()
    }

    /// Deals `count` cards to each player accepted by `filter`, one card per
    /// player per pass, in the order the slice is given (seating order).
    pub fn deal_to_players<F>(&mut self, players: &mut [Player], count: usize, filter: F)
    where
        F: Fn(&Player) -> bool,
    {
        for _ in 0..count {
            for p in players.iter_mut().filter(|p| filter(p)) {
                let card = self.deal_card();
                p.give_card(card);
            }
        }
    }

    pub fn reset(&mut self) {
        self.cards = full_deck();
        self.position = 0;
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn shuffle_count(&self) -> u32 {
        self.shuffles
    }

    pub fn last_seed(&self) -> Option<u64> {
        self.last_seed
    }
}
