//! Hand history persistence for hosted tables.
//!
//! Tables never wait on storage: entries are queued to a [`HistoryWriter`]
//! whose blocking task appends them to any [`HistorySink`]. Failures are
//! logged and the entry is dropped.

use std::cmp::Ordering;
use std::io;
use std::sync::{Arc, RwLock};

use chrono::DateTime;
use holdem_engine::logger::{ActionRecord, HistoryEntry, HistorySink, RoundRecord};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};

enum WriterMsg {
    Entry(HistoryEntry),
    Flush(oneshot::Sender<()>),
}

/// Fire-and-forget handle to a history sink. Clones share the sink.
#[derive(Debug, Clone)]
pub struct HistoryWriter {
    tx: mpsc::UnboundedSender<WriterMsg>,
}

impl HistoryWriter {
    /// Moves `sink` onto a blocking task. Must be called within a tokio runtime.
    pub fn spawn<S: HistorySink + 'static>(mut sink: S) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel();
        tokio::task::spawn_blocking(move || {
            while let Some(msg) = rx.blocking_recv() {
                match msg {
                    WriterMsg::Entry(entry) => {
                        if let Err(err) = sink.append(&entry) {
                            tracing::warn!(error = %err, "failed to write hand history");
                        }
                    }
                    WriterMsg::Flush(done) => {
                        let _ = done.send(());
                    }
                }
            }
        });
        Self { tx }
    }

    pub fn append(&self, entry: HistoryEntry) {
        if self.tx.send(WriterMsg::Entry(entry)).is_err() {
            tracing::warn!("history writer has stopped; entry dropped");
        }
    }

    /// Resolves once everything queued before the call has been written.
    pub async fn flush(&self) {
        let (done, wait) = oneshot::channel();
        if self.tx.send(WriterMsg::Flush(done)).is_ok() {
            let _ = wait.await;
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HistoryError {
    #[error("History storage lock poisoned")]
    StoragePoisoned,
}

/// Shared in-memory history, newest last. Clones see the same entries, so
/// one can be handed to a [`HistoryWriter`] and another kept for queries.
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    entries: Arc<RwLock<Vec<HistoryEntry>>>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn rounds_where<F>(&self, mut keep: F) -> Result<Vec<RoundRecord>, HistoryError>
    where
        F: FnMut(&RoundRecord) -> bool,
    {
        let entries = self
            .entries
            .read()
            .map_err(|_| HistoryError::StoragePoisoned)?;
        Ok(entries
            .iter()
            .filter_map(|e| match e {
                HistoryEntry::Round(r) if keep(r) => Some(r.clone()),
                _ => None,
            })
            .collect())
    }

    /// Most recent rounds first; at most `limit` (100 by default).
    pub fn recent_rounds(&self, limit: Option<usize>) -> Result<Vec<RoundRecord>, HistoryError> {
        let mut rounds = self.rounds_where(|_| true)?;
        rounds.reverse();
        rounds.truncate(limit.unwrap_or(100));
        Ok(rounds)
    }

    pub fn round(&self, table_id: &str, round: u32) -> Result<Option<RoundRecord>, HistoryError> {
        Ok(self
            .rounds_where(|r| r.table_id == table_id && r.round == round)?
            .pop())
    }

    /// Actions of one hand, in the order they were taken.
    pub fn actions(&self, table_id: &str, round: u32) -> Result<Vec<ActionRecord>, HistoryError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| HistoryError::StoragePoisoned)?;
        Ok(entries
            .iter()
            .filter_map(|e| match e {
                HistoryEntry::Action(a) if a.table_id == table_id && a.round == round => {
                    Some(a.clone())
                }
                _ => None,
            })
            .collect())
    }

    pub fn filter_rounds(&self, filter: &RoundFilter) -> Result<Vec<RoundRecord>, HistoryError> {
        self.rounds_where(|r| filter.matches(r))
    }

    pub fn total_rounds(&self) -> Result<usize, HistoryError> {
        Ok(self.rounds_where(|_| true)?.len())
    }

    pub fn calculate_stats(&self) -> Result<HistoryStats, HistoryError> {
        let rounds = self.rounds_where(|_| true)?;
        if rounds.is_empty() {
            return Ok(HistoryStats::default());
        }
        let total_pot: u64 = rounds.iter().map(|r| u64::from(r.total_won())).sum();
        let uncontested = rounds.iter().filter(|r| r.uncontested).count();
        Ok(HistoryStats {
            total_rounds: rounds.len(),
            showdowns: rounds.len() - uncontested,
            uncontested,
            total_pot,
            avg_pot_size: total_pot as f64 / rounds.len() as f64,
        })
    }
}

impl HistorySink for HistoryStore {
    fn append(&mut self, entry: &HistoryEntry) -> io::Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| io::Error::other(HistoryError::StoragePoisoned))?;
        entries.push(entry.clone());
        Ok(())
    }
}

/// Criteria for [`HistoryStore::filter_rounds`]; unset fields match anything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoundFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_id: Option<String>,
    /// Only hands this player was seated for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_id: Option<String>,
    /// Only hands this player won chips in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,
    /// RFC3339 bounds, inclusive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
}

impl RoundFilter {
    fn matches(&self, round: &RoundRecord) -> bool {
        if self.table_id.as_ref().is_some_and(|t| *t != round.table_id) {
            return false;
        }
        if let Some(player) = &self.player_id {
            if !round.players.iter().any(|p| &p.player_id == player) {
                return false;
            }
        }
        if let Some(winner) = &self.winner {
            if !round.pots.iter().any(|pot| pot.winners.contains(winner)) {
                return false;
            }
        }
        if let (Some(ts), Some(from)) = (&round.ts, &self.date_from) {
            if compare_stamps(ts, from) == Ordering::Less {
                return false;
            }
        }
        if let (Some(ts), Some(to)) = (&round.ts, &self.date_to) {
            if compare_stamps(ts, to) == Ordering::Greater {
                return false;
            }
        }
        true
    }
}

/// Compares RFC3339 stamps as instants, so offsets other than `Z` work.
/// Unparseable stamps fall back to text order.
fn compare_stamps(a: &str, b: &str) -> Ordering {
    match (DateTime::parse_from_rfc3339(a), DateTime::parse_from_rfc3339(b)) {
        (Ok(a), Ok(b)) => a.cmp(&b),
        _ => a.cmp(b),
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HistoryStats {
    pub total_rounds: usize,
    pub showdowns: usize,
    pub uncontested: usize,
    pub total_pot: u64,
    pub avg_pot_size: f64,
}
