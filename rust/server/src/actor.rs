//! One task per table. The actor owns the [`Engine`]; every player request
//! and timer expiry for the table goes through its inbox, so the engine sees
//! them strictly one at a time.

use std::sync::Arc;
use std::time::Duration;

use holdem_engine::cards::Card;
use holdem_engine::engine::{Engine, NewPlayer};
use holdem_engine::errors::GameError;
use holdem_engine::logger::HistoryEntry;
use holdem_engine::player::PlayerAction;
use holdem_engine::view::{GameUpdate, TableEvent, TableView, Update};
use tokio::sync::{mpsc, oneshot};
use tokio::time::{interval_at, sleep, sleep_until, Instant, Interval, MissedTickBehavior};

use crate::errors::TableError;
use crate::events::Notifier;
use crate::history::HistoryWriter;
use crate::messages::{TableMessage, TableSummary};

const INBOX_CAPACITY: usize = 100;

/// Cheap to clone; all clones talk to the same actor.
#[derive(Debug, Clone)]
pub struct TableHandle {
    sender: mpsc::Sender<TableMessage>,
    table_id: String,
}

impl TableHandle {
    pub fn table_id(&self) -> &str {
        &self.table_id
    }

    /// False once the actor has stopped.
    pub fn is_open(&self) -> bool {
        !self.sender.is_closed()
    }

    async fn request<T>(
        &self,
        make: impl FnOnce(oneshot::Sender<T>) -> TableMessage,
    ) -> Result<T, TableError> {
        let (tx, rx) = oneshot::channel();
        self.sender
            .send(make(tx))
            .await
            .map_err(|_| TableError::Closed(self.table_id.clone()))?;
        rx.await.map_err(|_| TableError::Closed(self.table_id.clone()))
    }

    pub async fn join(&self, player: NewPlayer) -> Result<usize, TableError> {
        self.request(|response| TableMessage::Join { player, response })
            .await?
    }

    /// Returns the player's wallet after cashing out.
    pub async fn leave(&self, player_id: &str) -> Result<u32, TableError> {
        let player_id = player_id.to_string();
        self.request(|response| TableMessage::Leave {
            player_id,
            response,
        })
        .await?
    }

    pub async fn act(&self, action: PlayerAction) -> Result<GameUpdate, TableError> {
        self.request(|response| TableMessage::Act { action, response })
            .await?
    }

    pub async fn view(&self) -> Result<TableView, TableError> {
        self.request(|response| TableMessage::GetView { response })
            .await
    }

    pub async fn hole_cards(&self, player_id: &str) -> Result<Vec<Card>, TableError> {
        let player_id = player_id.to_string();
        self.request(|response| TableMessage::GetHoleCards {
            player_id,
            response,
        })
        .await?
    }

    pub async fn summary(&self) -> Result<TableSummary, TableError> {
        self.request(|response| TableMessage::GetSummary { response })
            .await
    }

    pub async fn increase_blinds(&self) -> Result<Option<(u32, u32)>, TableError> {
        self.request(|response| TableMessage::IncreaseBlinds { response })
            .await
    }

    /// Stops the actor. Requests already queued are answered first.
    pub async fn close(&self) -> Result<(), TableError> {
        self.request(|response| TableMessage::Close { response })
            .await
    }
}

pub struct TableActor {
    table_id: String,
    engine: Engine,
    inbox: mpsc::Receiver<TableMessage>,
    notifier: Arc<dyn Notifier>,
    history: Option<HistoryWriter>,
    last_activity: Instant,
    closed: bool,
}

impl TableActor {
    pub fn new(
        engine: Engine,
        notifier: Arc<dyn Notifier>,
        history: Option<HistoryWriter>,
    ) -> (Self, TableHandle) {
        let (sender, inbox) = mpsc::channel(INBOX_CAPACITY);
        let table_id = engine.table_id().to_string();
        let handle = TableHandle {
            sender,
            table_id: table_id.clone(),
        };
        let actor = Self {
            table_id,
            engine,
            inbox,
            notifier,
            history,
            last_activity: Instant::now(),
            closed: false,
        };
        (actor, handle)
    }

    /// Runs until closed or until every handle has been dropped.
    pub async fn run(mut self) {
        tracing::info!(table_id = %self.table_id, "table open");
        let mut blind_timer = self.engine.settings().blind_increase.map(|schedule| {
            let period = Duration::from_secs(schedule.interval_secs.max(1));
            let mut timer = interval_at(Instant::now() + period, period);
            timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
            timer
        });

        while !self.closed {
            let deadline = self.engine.next_deadline().map(Instant::from_std);
            tokio::select! {
                message = self.inbox.recv() => match message {
                    Some(message) => self.handle_message(message),
                    None => break,
                },
                _ = wait_until(deadline) => self.on_action_timeout(),
                _ = next_tick(&mut blind_timer) => {
                    if let Some((small, big)) = self.engine.increase_blinds() {
                        tracing::info!(table_id = %self.table_id, small, big, "blinds increasing");
                    }
                }
            }
            self.flush_events();
        }

        self.inbox.close();
        tracing::info!(table_id = %self.table_id, round = self.engine.round(), "table closed");
    }

    /// Events a request produced are handed on before its reply is sent.
    fn handle_message(&mut self, message: TableMessage) {
        match message {
            TableMessage::Join { player, response } => {
                self.touch();
                let player_id = player.id.clone();
                let result = self.engine.add_player(player);
                match &result {
                    Ok(seat) => tracing::info!(
                        table_id = %self.table_id,
                        player_id = %player_id,
                        seat,
                        "player joined"
                    ),
                    Err(e) => tracing::warn!(
                        table_id = %self.table_id,
                        player_id = %player_id,
                        error = %e,
                        "join rejected"
                    ),
                }
                self.flush_events();
                let _ = response.send(result.map_err(TableError::from));
            }
            TableMessage::Leave {
                player_id,
                response,
            } => {
                self.touch();
                let result = self
                    .engine
                    .remove_player(&player_id)
                    .map(|p| p.stack.wallet());
                if let Ok(wallet) = result {
                    tracing::info!(
                        table_id = %self.table_id,
                        player_id = %player_id,
                        wallet,
                        "player left"
                    );
                }
                self.flush_events();
                let _ = response.send(result.map_err(TableError::from));
            }
            TableMessage::Act { action, response } => {
                self.touch();
                let result = self.act(action);
                self.flush_events();
                let _ = response.send(result);
            }
            TableMessage::GetView { response } => {
                let _ = response.send(self.engine.view());
            }
            TableMessage::GetHoleCards {
                player_id,
                response,
            } => {
                let result = self
                    .engine
                    .hole_cards(&player_id)
                    .map(<[Card]>::to_vec)
                    .ok_or_else(|| TableError::from(GameError::PlayerNotFound(player_id)));
                let _ = response.send(result);
            }
            TableMessage::GetSummary { response } => {
                let _ = response.send(self.summary());
            }
            TableMessage::IncreaseBlinds { response } => {
                let blinds = self.engine.increase_blinds();
                self.flush_events();
                let _ = response.send(blinds);
            }
            TableMessage::Close { response } => {
                self.closed = true;
                let _ = response.send(());
            }
        }
    }

    fn act(&mut self, action: PlayerAction) -> Result<GameUpdate, TableError> {
        let player_id = action.player_id.clone();
        let kind = action.kind;
        match self.engine.handle_action(action) {
            Ok(update) => {
                tracing::debug!(
                    table_id = %self.table_id,
                    player_id = %player_id,
                    action = kind.as_str(),
                    round = self.engine.round(),
                    phase = %self.engine.phase(),
                    "action accepted"
                );
                Ok(update)
            }
            Err(e) => {
                tracing::warn!(
                    table_id = %self.table_id,
                    player_id = %player_id,
                    action = kind.as_str(),
                    phase = %self.engine.phase(),
                    error = %e,
                    "action rejected"
                );
                if matches!(e, GameError::StateMismatch { .. }) {
                    // resync the client that acted on a stale view
                    self.notifier.send_private(
                        &self.table_id,
                        &player_id,
                        Update::State(self.engine.view()),
                    );
                }
                Err(e.into())
            }
        }
    }

    fn on_action_timeout(&mut self) {
        match self.engine.handle_timeout(Instant::now().into_std()) {
            Ok(Some(update)) => tracing::info!(
                table_id = %self.table_id,
                player_id = %update.player_id,
                action = update.action.as_str(),
                round = self.engine.round(),
                phase = %self.engine.phase(),
                "acted for player out of time"
            ),
            Ok(None) => {}
            Err(e) => tracing::warn!(
                table_id = %self.table_id,
                error = %e,
                "automatic action failed"
            ),
        }
    }

    fn flush_events(&mut self) {
        for event in self.engine.drain_events() {
            match event {
                TableEvent::Private {
                    player_id,
                    update,
                    delay_ms,
                } => self.deliver(Some(player_id), update, delay_ms),
                TableEvent::Broadcast { update, delay_ms } => self.deliver(None, update, delay_ms),
                TableEvent::Action(record) => {
                    if let Some(history) = &self.history {
                        history.append(HistoryEntry::Action(record));
                    }
                }
                TableEvent::RoundComplete(record) => {
                    for pot in record.pots.iter().filter(|p| p.residual > 0) {
                        tracing::warn!(
                            table_id = %self.table_id,
                            round = record.round,
                            pot = %pot.name,
                            residual = pot.residual,
                            "pot did not split evenly"
                        );
                    }
                    tracing::info!(
                        table_id = %self.table_id,
                        round = record.round,
                        pot = record.total_won(),
                        uncontested = record.uncontested,
                        "hand complete"
                    );
                    if let Some(history) = &self.history {
                        history.append(HistoryEntry::Round(record));
                    }
                }
            }
        }
    }

    /// Sends now, or from a timer task when the engine asked for a pause.
    fn deliver(&self, recipient: Option<String>, update: Update, delay_ms: u64) {
        let send = {
            let notifier = Arc::clone(&self.notifier);
            let table_id = self.table_id.clone();
            move || match recipient {
                Some(player_id) => notifier.send_private(&table_id, &player_id, update),
                None => notifier.broadcast(&table_id, update),
            }
        };
        if delay_ms == 0 {
            send();
        } else {
            tokio::spawn(async move {
                sleep(Duration::from_millis(delay_ms)).await;
                send();
            });
        }
    }

    fn summary(&self) -> TableSummary {
        let (small_blind, big_blind) = self.engine.blinds();
        TableSummary {
            table_id: self.table_id.clone(),
            players: self.engine.players().len(),
            max_players: self.engine.settings().variant.max_players,
            phase: self.engine.phase(),
            round: self.engine.round(),
            small_blind,
            big_blind,
            idle: self.last_activity.elapsed(),
        }
    }

    fn touch(&mut self) {
        self.last_activity = Instant::now();
    }
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(at) => sleep_until(at).await,
        None => std::future::pending().await,
    }
}

async fn next_tick(timer: &mut Option<Interval>) {
    match timer {
        Some(timer) => {
            timer.tick().await;
        }
        None => std::future::pending().await,
    }
}
