use holdem_engine::errors::GameError;
use holdem_engine::settings::SettingsError;
use thiserror::Error;

/// Failures reported by the table host.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("Table not found: {0}")]
    NotFound(String),
    #[error("Table {0} is closed")]
    Closed(String),
    #[error("Table {0} already exists")]
    Duplicate(String),
    #[error(transparent)]
    Game(#[from] GameError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

impl TableError {
    /// Machine-readable code for clients.
    pub fn code(&self) -> &'static str {
        match self {
            TableError::NotFound(_) => "table_not_found",
            TableError::Closed(_) => "table_closed",
            TableError::Duplicate(_) => "table_exists",
            TableError::Game(GameError::StateMismatch { .. }) => "state_mismatch",
            TableError::Game(GameError::InvalidPlayer(_)) => "invalid_player",
            TableError::Game(_) => "action_rejected",
            TableError::Settings(_) => "invalid_settings",
        }
    }
}
