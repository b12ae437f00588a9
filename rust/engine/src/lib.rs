//! # holdem-engine: Texas Hold'em table core
//!
//! A synchronous engine for one poker table: cards and a replayable deck, a
//! lookup-table hand evaluator, side pots, per-player state and the round
//! orchestrator that ties them together. Hosts drive it one action at a time
//! and deliver the [`view::TableEvent`]s it queues.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card values, codes and the 52-card sequence
//! - [`deck`] - Seeded ChaCha shuffling with a dealing cursor
//! - [`hand`] - Best-of-seven evaluation into a [`hand::HandRank`]
//! - [`ranking`] - Category names for evaluated hands
//! - [`pot`] - Side pot construction and payouts
//! - [`state`] - Player flags, sit-out requests and the action clock
//! - [`player`] - Players, their chips and the actions they can request
//! - [`rules`] - Bet validation
//! - [`game`] - Phases and the seated players
//! - [`engine`] - The round orchestrator
//! - [`view`] - Table snapshots and outbound events
//! - [`logger`] - Hand history records and JSONL writer
//! - [`settings`] - Table configuration
//! - [`errors`] - Error types
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_engine::cards::Card;
//! use holdem_engine::hand::evaluate_hand;
//!
//! let cards = Card::parse_many(["AH", "KH", "QH", "JH", "TH", "2C", "3D"]).unwrap();
//! let rank = evaluate_hand(&cards).unwrap();
//! assert_eq!(rank.value, 7462);
//! println!("{}", rank.describe());
//! ```
//!
//! ## Replays
//!
//! A deck seeded with the same value shuffles the same way:
//!
//! ```rust
//! use holdem_engine::deck::Deck;
//!
//! let mut a = Deck::new_with_seed(42);
//! let mut b = Deck::new_with_seed(42);
//! a.shuffle();
//! b.shuffle();
//! assert_eq!(a.cards(), b.cards());
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod pot;
pub mod ranking;
pub mod rules;
pub mod settings;
pub mod state;
mod tables;
pub mod view;
