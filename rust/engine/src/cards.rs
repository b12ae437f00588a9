use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CardError;

/// Represents one of the four suits in a standard 52-card deck.
/// Used as a component of [`Card`] to fully define a playing card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit (♣)
    Clubs,
    /// Diamonds suit (♦)
    Diamonds,
    /// Hearts suit (♥)
    Hearts,
    /// Spades suit (♠)
    Spades,
}

impl Suit {
    /// Suit flag occupying bits 12..16 of the card encoding.
    pub const fn bit(self) -> u32 {
        match self {
            Suit::Clubs => 0x8000,
            Suit::Diamonds => 0x4000,
            Suit::Hearts => 0x2000,
            Suit::Spades => 0x1000,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }

    pub fn from_symbol(c: char) -> Option<Suit> {
        match c.to_ascii_uppercase() {
            'C' => Some(Suit::Clubs),
            'D' => Some(Suit::Diamonds),
            'H' => Some(Suit::Hearts),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }
}

/// Represents the rank (face value) of a playing card from Two through Ace.
/// Numeric values are assigned for comparison and hand evaluation purposes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
    /// Ace (14)
    Ace,
}

const PRIMES: [u32; 13] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41];
const RANK_SYMBOLS: &[u8; 13] = b"23456789TJQKA";

impl Rank {
    pub fn from_u8(v: u8) -> Rank {
        match v {
            2 => Rank::Two,
            3 => Rank::Three,
            4 => Rank::Four,
            5 => Rank::Five,
            6 => Rank::Six,
            7 => Rank::Seven,
            8 => Rank::Eight,
            9 => Rank::Nine,
            10 => Rank::Ten,
            11 => Rank::Jack,
            12 => Rank::Queen,
            13 => Rank::King,
            _ => Rank::Ace,
        }
    }

    /// Zero-based index, deuce = 0 through ace = 12.
    pub const fn index(self) -> u32 {
        self as u32 - 2
    }

    pub const fn prime(self) -> u32 {
        PRIMES[self.index() as usize]
    }

    pub const fn symbol(self) -> char {
        RANK_SYMBOLS[self.index() as usize] as char
    }

    pub fn from_symbol(c: char) -> Option<Rank> {
        let upper = c.to_ascii_uppercase() as u8;
        RANK_SYMBOLS
            .iter()
            .position(|&s| s == upper)
            .map(|i| Rank::from_u8(i as u8 + 2))
    }

    pub fn name(self) -> &'static str {
        match self {
            Rank::Two => "Two",
            Rank::Three => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }
}

/// Represents a single playing card with a rank and suit.
///
/// Each card maps one-to-one onto a 32-bit evaluator key (see [`Card::encoding`]),
/// so comparing or hashing the fields is the same as comparing the encoding.
/// Field order makes the derived ordering sort by face first.
///
/// Cards serialize as their two-character code (`"TS"`, `"2h"` parses too).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Card {
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
    /// The suit of the card (Clubs, Diamonds, Hearts, or Spades)
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Card { rank, suit }
    }

    /// Packed evaluator key:
    ///
    /// ```text
    /// +--------+--------+--------+--------+
    /// |xxxbbbbb|bbbbbbbb|cdhsrrrr|xxpppppp|
    /// +--------+--------+--------+--------+
    /// ```
    ///
    /// `b` is one bit per rank, `cdhs` the suit, `r` the rank index and `p` the rank prime.
    ///
    /// ```
    /// use holdem_engine::cards::Card;
    ///
    /// let king_of_diamonds: Card = "KD".parse().unwrap();
    /// assert_eq!(king_of_diamonds.encoding(), 0x0800_4B25);
    /// ```
    pub const fn encoding(&self) -> u32 {
        let idx = self.rank.index();
        (1 << (idx + 16)) | self.suit.bit() | (idx << 8) | self.rank.prime()
    }

    /// Two-character code, rank symbol then suit symbol.
    pub fn code(&self) -> String {
        let mut s = String::with_capacity(2);
        s.push(self.rank.symbol());
        s.push(self.suit.symbol());
        s
    }

    /// Parses a list of codes, failing on the first malformed one.
    pub fn parse_many<I, S>(codes: I) -> Result<Vec<Card>, CardError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        codes.into_iter().map(|c| c.as_ref().parse()).collect()
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let mut chars = code.chars();
        let (Some(r), Some(s), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(CardError::InvalidFormat(code.to_string()));
        };
        match (Rank::from_symbol(r), Suit::from_symbol(s)) {
            (Some(rank), Some(suit)) => Ok(Card { rank, suit }),
            _ => Err(CardError::InvalidFormat(code.to_string())),
        }
    }
}

impl TryFrom<String> for Card {
    type Error = CardError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        code.parse()
    }
}

impl From<Card> for String {
    fn from(card: Card) -> String {
        card.code()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

/// The canonical 52-card sequence: each suit in turn, deuce to ace.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card { rank: r, suit: s });
        }
    }
    v
}
