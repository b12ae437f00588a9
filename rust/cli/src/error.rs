//! Error type shared by the command handlers.

use std::fmt;

use holdem_engine::errors::{CardError, GameError};
use holdem_engine::settings::SettingsError;

use crate::config::ConfigError;

/// Anything that makes a command fail. Every variant exits with code 2.
#[derive(Debug)]
pub enum CliError {
    /// Reading input, writing output or history files
    Io(std::io::Error),

    /// Arguments or input files that cannot be used
    InvalidInput(String),

    /// Configuration that failed to load or validate
    Config(String),

    /// The engine rejected something
    Engine(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        CliError::Engine(error.to_string())
    }
}

impl From<SettingsError> for CliError {
    fn from(error: SettingsError) -> Self {
        CliError::Config(error.to_string())
    }
}

impl From<CardError> for CliError {
    fn from(error: CardError) -> Self {
        CliError::InvalidInput(error.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(error: serde_json::Error) -> Self {
        CliError::Io(std::io::Error::other(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_errors_keep_their_reason() {
        let err = CliError::from(GameError::NotEnoughPlayers);
        assert!(matches!(err, CliError::Engine(_)));
        assert!(err.to_string().starts_with("Engine error: "));
    }

    #[test]
    fn bad_cards_are_invalid_input() {
        let err = CliError::from(CardError::InvalidFormat("ZZ".into()));
        assert!(matches!(err, CliError::InvalidInput(ref m) if m.contains("ZZ")));
    }

    #[test]
    fn io_errors_expose_their_source() {
        use std::error::Error;
        let err = CliError::from(std::io::Error::other("disk full"));
        assert!(err.source().is_some());
    }
}
