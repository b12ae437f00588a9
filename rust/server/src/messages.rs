//! Requests a [`TableActor`](crate::actor::TableActor) accepts.

use std::time::Duration;

use holdem_engine::cards::Card;
use holdem_engine::engine::NewPlayer;
use holdem_engine::game::Phase;
use holdem_engine::player::PlayerAction;
use holdem_engine::view::{GameUpdate, TableView};
use serde::Serialize;
use tokio::sync::oneshot;

use crate::errors::TableError;

pub type Reply<T> = oneshot::Sender<Result<T, TableError>>;

#[derive(Debug)]
pub enum TableMessage {
    /// Seat a player; replies with the seat
    Join {
        player: NewPlayer,
        response: Reply<usize>,
    },
    /// Remove a player, cashing out their stack; replies with the wallet
    Leave {
        player_id: String,
        response: Reply<u32>,
    },
    Act {
        action: PlayerAction,
        response: Reply<GameUpdate>,
    },
    GetView {
        response: oneshot::Sender<TableView>,
    },
    /// The caller's own hole cards
    GetHoleCards {
        player_id: String,
        response: Reply<Vec<Card>>,
    },
    GetSummary {
        response: oneshot::Sender<TableSummary>,
    },
    /// Steps the blinds up now; replies with the new pair, if any
    IncreaseBlinds {
        response: oneshot::Sender<Option<(u32, u32)>>,
    },
    Close {
        response: oneshot::Sender<()>,
    },
}

/// What a pool listing shows for one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSummary {
    pub table_id: String,
    pub players: usize,
    pub max_players: usize,
    pub phase: Phase,
    pub round: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    /// Time since the table last handled a player request
    #[serde(with = "secs")]
    pub idle: Duration,
}

mod secs {
    use std::time::Duration;

    use serde::Serializer;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_secs())
    }
}
