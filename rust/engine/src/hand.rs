use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::errors::GameError;
use crate::ranking;
use crate::tables::{FLUSHES, HASH_ADJUST, HASH_SEED, HASH_VALUES, UNIQUE5};

/// Number of distinct five-card equivalence classes.
pub const DISTINCT_HANDS: u16 = 7462;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High card",
            Category::OnePair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }

    pub fn rank_number(self) -> u8 {
        self as u8
    }
}

/// The best five-card hand found among a player's cards.
///
/// `value` runs from 1 (seven-high) to 7462 (royal flush); equal values are
/// equal hands whatever the suits. `high` is the top card of the category,
/// with the wheel (A-2-3-4-5) reported as five-high.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct HandRank {
    pub value: u16,
    pub category: Category,
    pub high: Rank,
    /// The five cards that made the hand, ascending by face.
    pub cards: [Card; 5],
}

impl HandRank {
    pub fn beats(&self, other: &HandRank) -> bool {
        self.value > other.value
    }

    pub fn describe(&self) -> String {
        format!("{} ({} high)", self.category.name(), self.high.name())
    }

    pub fn card_codes(&self) -> Vec<String> {
        self.cards.iter().map(Card::code).collect()
    }
}

/// Orders two hands by strength only.
pub fn compare_hands(a: &HandRank, b: &HandRank) -> Ordering {
    a.value.cmp(&b.value)
}

/// Ranks exactly five cards, returning the raw class (1 = royal flush, 7462 = seven-high).
///
/// The caller guarantees the cards are distinct.
pub fn evaluate_five(cards: &[Card; 5]) -> u16 {
    let [c1, c2, c3, c4, c5] = cards.map(|c| c.encoding());
    let q = ((c1 | c2 | c3 | c4 | c5) >> 16) as usize;
    if c1 & c2 & c3 & c4 & c5 & 0xF000 != 0 {
        return FLUSHES[q];
    }
    let unique = UNIQUE5[q];
    if unique != 0 {
        return unique;
    }
    let product = (c1 & 0xFF) * (c2 & 0xFF) * (c3 & 0xFF) * (c4 & 0xFF) * (c5 & 0xFF);
    HASH_VALUES[perfect_hash(product)]
}

/// Maps a prime product to its slot in the hash value table.
pub(crate) fn perfect_hash(product: u32) -> usize {
    let mut key = product.wrapping_add(HASH_SEED);
    key ^= key >> 16;
    key = key.wrapping_add(key << 8);
    key ^= key >> 4;
    let bucket = ((key >> 8) & 0x1FF) as usize;
    let slot = key.wrapping_add(key << 2) >> 19;
    (slot ^ HASH_ADJUST[bucket] as u32) as usize
}

/// Finds the best five-card hand among 5 to 7 distinct cards.
///
/// Every five-card combination is scored with [`evaluate_five`]; the first
/// strongest combination found is kept, so the result is a pure function of
/// the input order.
///
/// # Errors
///
/// [`GameError::IllegalHand`] when fewer than 5 or more than 7 cards are
/// given, or when any card appears twice.
///
/// # Examples
///
/// ```
/// use holdem_engine::cards::Card;
/// use holdem_engine::hand::{evaluate_hand, Category};
///
/// let cards = Card::parse_many(["AS", "KS", "QS", "JS", "TS", "2C", "3D"]).unwrap();
/// let best = evaluate_hand(&cards).unwrap();
/// assert_eq!(best.category, Category::RoyalFlush);
/// assert_eq!(best.value, 7462);
/// ```
pub fn evaluate_hand(cards: &[Card]) -> Result<HandRank, GameError> {
    if !(5..=7).contains(&cards.len()) {
        return Err(GameError::IllegalHand(format!(
            "expected 5 to 7 cards, got {}",
            cards.len()
        )));
    }
    for (i, a) in cards.iter().enumerate() {
        if cards[i + 1..].iter().any(|b| b.encoding() == a.encoding()) {
            return Err(GameError::IllegalHand(format!("duplicate card {a}")));
        }
    }

    let mut best: Option<(u16, [Card; 5])> = None;
    for combo in five_card_combinations(cards.len()) {
        let five = combo.map(|i| cards[i]);
        let raw = evaluate_five(&five);
        match best {
            Some((b, _)) if raw >= b => {}
            _ => best = Some((raw, five)),
        }
    }
    let Some((raw, mut five)) = best else {
        return Err(GameError::IllegalHand("no five-card combination".into()));
    };

    five.sort();
    let value = DISTINCT_HANDS + 1 - raw;
    let (category, high) = ranking::classify(value, &five);
    Ok(HandRank {
        value,
        category,
        high,
        cards: five,
    })
}

fn five_card_combinations(n: usize) -> Vec<[usize; 5]> {
    let mut out = Vec::with_capacity(21);
    for a in 0..n {
        for b in a + 1..n {
            for c in b + 1..n {
                for d in c + 1..n {
                    for e in d + 1..n {
                        out.push([a, b, c, d, e]);
                    }
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combination_counts() {
        assert_eq!(five_card_combinations(5).len(), 1);
        assert_eq!(five_card_combinations(6).len(), 6);
        assert_eq!(five_card_combinations(7).len(), 21);
    }

    #[test]
    fn hash_slots_stay_in_table() {
        // Largest prime product: four aces and a king.
        let product = 41u32.pow(4) * 37;
        assert!(perfect_hash(product) < HASH_VALUES.len());
    }
}
