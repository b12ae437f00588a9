//! Symbolic naming of an already-scored five-card hand.
//!
//! The numeric value decides who wins; this pass only labels the hand. Each
//! classifier looks at the [`HandShape`] and either names a category or
//! passes. They run strongest first and the first match wins.

use crate::cards::{Card, Rank};
use crate::hand::{Category, DISTINCT_HANDS};

/// Rank groups and run structure of five cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandShape {
    pub value: u16,
    /// `(count, rank)` per distinct rank, largest group first, then highest rank.
    pub groups: Vec<(u8, Rank)>,
    /// Top of the run when the five ranks are consecutive; five for the wheel.
    pub straight_high: Option<Rank>,
    pub suited: bool,
}

impl HandShape {
    pub fn new(value: u16, cards: &[Card; 5]) -> Self {
        let mut counts = [0u8; 15];
        for c in cards {
            counts[c.rank as usize] += 1;
        }
        let mut groups: Vec<(u8, Rank)> = (2..=14u8)
            .filter(|&r| counts[r as usize] > 0)
            .map(|r| (counts[r as usize], Rank::from_u8(r)))
            .collect();
        groups.sort_by(|a, b| b.cmp(a));

        let suited = cards.iter().all(|c| c.suit == cards[0].suit);
        Self {
            value,
            straight_high: sequence_high(&groups),
            groups,
            suited,
        }
    }

    fn group_counts(&self) -> Vec<u8> {
        self.groups.iter().map(|&(n, _)| n).collect()
    }
}

/// Five distinct consecutive ranks, counting the ace low when it completes A-2-3-4-5.
fn sequence_high(groups: &[(u8, Rank)]) -> Option<Rank> {
    if groups.len() != 5 {
        return None;
    }
    let mut ranks: Vec<u8> = groups.iter().map(|&(_, r)| r as u8).collect();
    ranks.sort_unstable();
    if ranks == [2, 3, 4, 5, 14] {
        return Some(Rank::Five);
    }
    if ranks[4] - ranks[0] == 4 {
        return Some(Rank::from_u8(ranks[4]));
    }
    None
}

type Classifier = fn(&HandShape) -> Option<Category>;

const CHAIN: [Classifier; 10] = [
    royal_flush,
    straight_flush,
    four_of_a_kind,
    full_house,
    flush,
    straight,
    three_of_a_kind,
    two_pair,
    one_pair,
    high_card,
];

fn royal_flush(shape: &HandShape) -> Option<Category> {
    (shape.value == DISTINCT_HANDS).then_some(Category::RoyalFlush)
}

fn straight_flush(shape: &HandShape) -> Option<Category> {
    straight(shape)
        .and(flush(shape))
        .map(|_| Category::StraightFlush)
}

fn four_of_a_kind(shape: &HandShape) -> Option<Category> {
    (shape.group_counts()[0] == 4).then_some(Category::FourOfAKind)
}

fn full_house(shape: &HandShape) -> Option<Category> {
    (shape.group_counts() == [3, 2]).then_some(Category::FullHouse)
}

fn flush(shape: &HandShape) -> Option<Category> {
    shape.suited.then_some(Category::Flush)
}

fn straight(shape: &HandShape) -> Option<Category> {
    shape.straight_high.map(|_| Category::Straight)
}

fn three_of_a_kind(shape: &HandShape) -> Option<Category> {
    (shape.group_counts() == [3, 1, 1]).then_some(Category::ThreeOfAKind)
}

fn two_pair(shape: &HandShape) -> Option<Category> {
    (shape.group_counts() == [2, 2, 1]).then_some(Category::TwoPair)
}

fn one_pair(shape: &HandShape) -> Option<Category> {
    (shape.group_counts() == [2, 1, 1, 1]).then_some(Category::OnePair)
}

fn high_card(shape: &HandShape) -> Option<Category> {
    (shape.groups.len() == 5).then_some(Category::HighCard)
}

/// Names the hand and its top card. Five distinct cards always match at
/// least [`Category::HighCard`].
pub fn classify(value: u16, cards: &[Card; 5]) -> (Category, Rank) {
    let shape = HandShape::new(value, cards);
    let category = CHAIN
        .iter()
        .find_map(|classifier| classifier(&shape))
        .unwrap_or(Category::HighCard);
    let high = match category {
        Category::RoyalFlush | Category::StraightFlush | Category::Straight => {
            shape.straight_high.unwrap_or(Rank::Ace)
        }
        _ => shape.groups[0].1,
    };
    (category, high)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five(codes: [&str; 5]) -> [Card; 5] {
        codes.map(|c| c.parse().unwrap())
    }

    #[test]
    fn wheel_is_five_high() {
        let shape = HandShape::new(0, &five(["AS", "2D", "3C", "4H", "5S"]));
        assert_eq!(shape.straight_high, Some(Rank::Five));
    }

    #[test]
    fn broadway_is_ace_high() {
        let shape = HandShape::new(0, &five(["AS", "KD", "QC", "JH", "TS"]));
        assert_eq!(shape.straight_high, Some(Rank::Ace));
    }

    #[test]
    fn wrap_around_is_not_a_straight() {
        let shape = HandShape::new(0, &five(["QS", "KD", "AC", "2H", "3S"]));
        assert_eq!(shape.straight_high, None);
    }

    #[test]
    fn groups_sorted_by_size_then_rank() {
        let shape = HandShape::new(0, &five(["TS", "TD", "KS", "KH", "KD"]));
        assert_eq!(shape.groups, vec![(3, Rank::King), (2, Rank::Ten)]);
    }

    #[test]
    fn straight_flush_needs_both_runs_and_suit() {
        let (cat, high) = classify(7000, &five(["5H", "6H", "7H", "8H", "9H"]));
        assert_eq!(cat, Category::StraightFlush);
        assert_eq!(high, Rank::Nine);
    }
}
