use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What a card game variant needs from the table: hand sizes and seat limits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameVariant {
    pub name: String,
    /// Hole cards dealt to each player
    pub start_cards: usize,
    /// Community cards by the river
    pub board_cards: usize,
    pub min_players: usize,
    pub max_players: usize,
}

impl GameVariant {
    pub fn texas_holdem() -> Self {
        Self {
            name: "Texas Hold'em".to_string(),
            start_cards: 2,
            board_cards: 5,
            min_players: 2,
            max_players: 9,
        }
    }
}

impl Default for GameVariant {
    fn default() -> Self {
        Self::texas_holdem()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShuffleOption {
    /// Shuffle before every round
    #[default]
    Always,
    /// Shuffle before the first round only; later rounds keep dealing from the cursor
    Never,
}

/// Doubles both blinds every `interval_secs` until the big blind would pass `max_big_blind`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlindIncrease {
    pub interval_secs: u64,
    pub max_big_blind: u32,
}

/// Table configuration, fixed when the table is created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GameSettings {
    pub table_id: String,
    pub variant: GameVariant,
    pub small_blind: u32,
    pub big_blind: u32,
    /// Chips moved from wallet to stack on joining or re-buying
    pub buy_in: u32,
    /// Seconds a player has to act before the automatic action; 0 disables it
    pub action_timeout_secs: u64,
    pub shuffle: ShuffleOption,
    /// Raises must be at least the size of the previous raise (otherwise one big blind)
    pub enforce_minimum_raise: bool,
    /// Blinds are posted by the table instead of waiting for the players
    pub auto_post_blinds: bool,
    /// Seeds the deck's seed sequence, for replays and tests
    pub seed: Option<u64>,
    pub blind_increase: Option<BlindIncrease>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            table_id: "table".to_string(),
            variant: GameVariant::texas_holdem(),
            small_blind: 1,
            big_blind: 2,
            buy_in: 200,
            action_timeout_secs: 30,
            shuffle: ShuffleOption::Always,
            enforce_minimum_raise: true,
            auto_post_blinds: false,
            seed: None,
            blind_increase: None,
        }
    }
}

impl GameSettings {
    pub fn action_timeout(&self) -> Option<Duration> {
        (self.action_timeout_secs > 0).then(|| Duration::from_secs(self.action_timeout_secs))
    }

    /// Validate settings values
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.table_id.trim().is_empty() {
            return Err(SettingsError::InvalidValue(
                "table_id cannot be empty".to_string(),
            ));
        }

        if self.small_blind == 0 {
            return Err(SettingsError::InvalidValue(
                "small_blind must be greater than 0".to_string(),
            ));
        }

        if self.big_blind < self.small_blind {
            return Err(SettingsError::InvalidValue(
                "big_blind cannot be below small_blind".to_string(),
            ));
        }

        if self.buy_in < self.big_blind {
            return Err(SettingsError::InvalidValue(
                "buy_in must cover at least one big blind".to_string(),
            ));
        }

        let v = &self.variant;
        if v.min_players < 2 || v.min_players > v.max_players {
            return Err(SettingsError::InvalidValue(format!(
                "player limits {}..={} are not playable",
                v.min_players, v.max_players
            )));
        }

        if !(1..=4).contains(&v.start_cards) {
            return Err(SettingsError::InvalidValue(
                "start_cards must be between 1 and 4".to_string(),
            ));
        }

        if v.board_cards != 5 {
            return Err(SettingsError::InvalidValue(
                "board_cards must be 5 (flop, turn, river)".to_string(),
            ));
        }

        if let Some(inc) = self.blind_increase {
            if inc.interval_secs == 0 {
                return Err(SettingsError::InvalidValue(
                    "blind_increase.interval_secs must be greater than 0".to_string(),
                ));
            }
            if inc.max_big_blind < self.big_blind {
                return Err(SettingsError::InvalidValue(
                    "blind_increase.max_big_blind cannot be below big_blind".to_string(),
                ));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SettingsError {
    #[error("Invalid settings value: {0}")]
    InvalidValue(String),
}
