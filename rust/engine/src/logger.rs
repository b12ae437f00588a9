use std::collections::BTreeMap;
use std::fs::{create_dir_all, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// One accepted action, automated ones included.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub table_id: String,
    pub round: u32,
    pub phase: String,
    pub player_id: String,
    pub action: String,
    /// Chips moved from the stack by this action
    pub amount: u32,
    /// Player's total for the street afterwards
    pub street_total: u32,
    #[serde(default)]
    pub automated: bool,
    /// Connection the request came from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// RFC3339, filled in by the writer when missing
    #[serde(default)]
    pub ts: Option<String>,
}

/// A player as they stood when the hand was settled.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub player_id: String,
    pub handle: String,
    pub seat: usize,
    /// Stack after payouts
    pub stack: u32,
    pub wallet: u32,
    /// Chips committed per street, keyed by phase name
    pub committed: BTreeMap<String, u32>,
    pub cards: Vec<String>,
    #[serde(default)]
    pub hand: Option<String>,
    /// Still contesting the pot at the end
    pub contending: bool,
    /// Left the table during the hand
    #[serde(default)]
    pub departed: bool,
    pub won: u32,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PotRecord {
    pub name: String,
    pub total: u32,
    pub contestants: Vec<String>,
    pub winners: Vec<String>,
    #[serde(default)]
    pub winning_hand: Option<String>,
    pub residual: u32,
}

/// Settlement of one completed hand.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub table_id: String,
    pub round: u32,
    /// Shuffle seed of the hand; absent when the deck was not reshuffled for it
    pub seed: Option<u64>,
    pub board: Vec<String>,
    /// Won without a showdown
    #[serde(default)]
    pub uncontested: bool,
    pub players: Vec<PlayerSnapshot>,
    pub pots: Vec<PotRecord>,
    #[serde(default)]
    pub ts: Option<String>,
}

impl RoundRecord {
    pub fn total_committed(&self) -> u32 {
        self.players
            .iter()
            .flat_map(|p| p.committed.values())
            .sum()
    }

    pub fn total_won(&self) -> u32 {
        self.players.iter().map(|p| p.won).sum()
    }
}

/// A line of hand history.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HistoryEntry {
    Action(ActionRecord),
    Round(RoundRecord),
}

impl HistoryEntry {
    fn stamp(&mut self) {
        let ts = match self {
            HistoryEntry::Action(a) => &mut a.ts,
            HistoryEntry::Round(r) => &mut r.ts,
        };
        if ts.is_none() {
            *ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
    }
}

/// Somewhere history can be appended.
pub trait HistorySink: Send {
    fn append(&mut self, entry: &HistoryEntry) -> io::Result<()>;
}

/// Writes one JSON object per line, LF terminated.
pub struct JsonlHistory {
    writer: BufWriter<File>,
}

impl JsonlHistory {
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(f),
        })
    }
}

impl HistorySink for JsonlHistory {
    fn append(&mut self, entry: &HistoryEntry) -> io::Result<()> {
        // inject timestamp if missing
        let mut rec = entry.clone();
        rec.stamp();
        let line = serde_json::to_string(&rec).map_err(io::Error::other)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }
}

/// Keeps history in memory, for tests and short-lived tables.
#[derive(Debug, Default)]
pub struct MemoryHistory {
    entries: Vec<HistoryEntry>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn rounds(&self) -> impl Iterator<Item = &RoundRecord> {
        self.entries.iter().filter_map(|e| match e {
            HistoryEntry::Round(r) => Some(r),
            HistoryEntry::Action(_) => None,
        })
    }
}

impl HistorySink for MemoryHistory {
    fn append(&mut self, entry: &HistoryEntry) -> io::Result<()> {
        let mut rec = entry.clone();
        rec.stamp();
        self.entries.push(rec);
        Ok(())
    }
}

/// Reads a JSONL history file, skipping blank lines.
pub fn read_history<P: AsRef<Path>>(path: P) -> io::Result<Vec<HistoryEntry>> {
    let reader = BufReader::new(File::open(path)?);
    let mut out = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        out.push(serde_json::from_str(&line).map_err(io::Error::other)?);
    }
    Ok(out)
}
