//! What the table tells the outside world.
//!
//! The engine never sends anything itself. It queues [`TableEvent`]s that a
//! host drains and delivers: private updates to one player, broadcasts to the
//! table, and history records.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::Phase;
use crate::logger::{ActionRecord, RoundRecord};
use crate::player::{ActionKind, Player};
use crate::state::Blinds;

/// Public view of one seat. Hole cards are never included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatView {
    pub player_id: String,
    pub handle: String,
    pub seat: usize,
    pub stack: u32,
    pub on_table: u32,
    pub committed: u32,
    pub dealer: bool,
    pub host: bool,
    pub folded: bool,
    pub all_in: bool,
    pub sitting_out: bool,
    pub sit_out_next_round: bool,
    pub action_on: bool,
    pub blinds_due: Blinds,
    pub last_action: Option<ActionKind>,
}

impl SeatView {
    pub fn of(p: &Player) -> Self {
        Self {
            player_id: p.id.clone(),
            handle: p.handle.clone(),
            seat: p.seat,
            stack: p.stack.stack(),
            on_table: p.stack.on_table(),
            committed: p.stack.total_committed(),
            dealer: p.state.is_dealer(),
            host: p.state.is_host(),
            folded: p.state.is_folded(),
            all_in: p.state.is_all_in(),
            sitting_out: p.state.is_sitting_out(),
            sit_out_next_round: p.state.sits_out_next_round(),
            action_on: p.state.is_action_on(),
            blinds_due: p.state.blinds_due(),
            last_action: p.state.last_action(),
        }
    }
}

/// Snapshot of a table, safe to broadcast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableView {
    pub table_id: String,
    pub round: u32,
    pub phase: Phase,
    pub board: Vec<Card>,
    /// Chips collected from finished streets
    pub pot: u32,
    pub required_bet: u32,
    pub min_raise: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    pub action_on: Option<String>,
    pub seats: Vec<SeatView>,
}

/// A message for players.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Update {
    State(TableView),
    HoleCards {
        cards: Vec<Card>,
    },
    BlindDue {
        blind: Blinds,
        amount: u32,
    },
    Reveal {
        player_id: String,
        handle: String,
        cards: Vec<Card>,
        message: String,
        winner: bool,
    },
    Status {
        message: String,
    },
    /// The table acted for a player who ran out of time or sat out on the clock
    Automated {
        player_id: String,
        action: ActionKind,
    },
    Removed {
        player_id: String,
        handle: String,
    },
}

/// Output queued by the engine for its host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    Private {
        player_id: String,
        update: Update,
        delay_ms: u64,
    },
    Broadcast {
        update: Update,
        delay_ms: u64,
    },
    Action(ActionRecord),
    RoundComplete(RoundRecord),
}

/// What a call to [`Engine::deal`](crate::engine::Engine::deal) achieved.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DealOutcome {
    /// Cards went out and the phase advanced
    Dealt,
    NotEnoughPlayers,
    BlindsDue,
    WaitingOnBets,
    /// Everyone has called; the big blind still has the option
    WaitingBigBlindCheck,
    /// Nobody can bet any more, so the hand was run out or won uncontested
    AutoCompleting,
    /// Nothing to deal in this phase
    NoDeal,
    /// Showdown finished the hand
    RoundComplete,
}

/// Reply to an accepted action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameUpdate {
    pub action: ActionKind,
    pub player_id: String,
    pub automated: bool,
    pub outcome: Option<DealOutcome>,
    pub view: TableView,
}
