use thiserror::Error;

use crate::game::Phase;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CardError {
    #[error("Invalid card code '{0}': expected rank (23456789TJQKA) then suit (CDHS)")]
    InvalidFormat(String),
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum GameError {
    #[error("Invalid player: {0}")]
    InvalidPlayer(String),
    #[error("Illegal hand: {0}")]
    IllegalHand(String),
    #[error("Game state has moved on: table is at {expected:?}, action was for {submitted:?}")]
    StateMismatch { expected: Phase, submitted: Phase },
    #[error("Player {0} is not at this table")]
    PlayerNotFound(String),
    #[error("Action is not on player {0}")]
    NotPlayersTurn(String),
    #[error("You must post the blind first")]
    BlindDue,
    #[error("Invalid bet amount: {amount}, minimum: {minimum}")]
    InvalidBetAmount { amount: u32, minimum: u32 },
    #[error("Insufficient chips for action")]
    InsufficientChips,
    #[error("Not enough players to start a round")]
    NotEnoughPlayers,
    #[error("A round is already in progress")]
    RoundInProgress,
    #[error("Action not allowed: {0}")]
    ActionNotAllowed(String),
    #[error(transparent)]
    InvalidCard(#[from] CardError),
}
