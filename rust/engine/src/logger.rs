use serde::{Deserialize, Serialize};

use crate::engine::{Engine, GameState};
use crate::events::GameEvent;

/// How a recorded game finished.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameResult {
    /// The terminal sum invariant held
    Won,
    /// The deck ran out with cards on the table
    Lost,
    /// Play stopped before a terminal state (move cap reached)
    Abandoned,
}

impl From<GameState> for GameResult {
    fn from(state: GameState) -> Self {
        match state {
            GameState::Won => GameResult::Won,
            GameState::Lost => GameResult::Lost,
            GameState::Playing => GameResult::Abandoned,
        }
    }
}

/// Complete record of one game, serialized as a single JSONL line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Unique identifier for this game (format: YYYYMMDD-NNNNNN)
    pub game_id: String,
    /// Shuffle seed (enables deterministic replay); absent for stacked decks
    pub seed: Option<u64>,
    /// Number of piles the game started with
    pub piles: usize,
    /// How the game finished
    pub result: GameResult,
    /// Successful deals and picks
    pub moves: usize,
    /// Cards left in the deck when play stopped
    pub deck_count: usize,
    /// Chronological notifications emitted by the engine
    #[serde(default)]
    pub events: Vec<GameEvent>,
    /// Timestamp when the game was recorded (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    /// Additional metadata (extensible JSON object)
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

impl GameRecord {
    /// Captures the current state of `engine` together with `events`.
    pub fn from_engine(game_id: String, engine: &Engine, events: Vec<GameEvent>) -> Self {
        Self {
            game_id,
            seed: engine.seed(),
            piles: started_piles(&events).unwrap_or(engine.pile_ids().len()),
            result: engine.state().into(),
            moves: engine.moves(),
            deck_count: engine.deck_count(),
            events,
            ts: None,
            meta: None,
        }
    }
}

fn started_piles(events: &[GameEvent]) -> Option<usize> {
    events.iter().find_map(|e| match e {
        GameEvent::Started { piles, .. } => Some(*piles),
        _ => None,
    })
}

pub fn format_game_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct GameLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl GameLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        Self::open(path, false)
    }

    /// Like [`GameLogger::create`] but keeps existing records.
    pub fn append<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        Self::open(path, true)
    }

    fn open<P: AsRef<Path>>(path: P, append: bool) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = OpenOptions::new()
            .create(true)
            .write(true)
            .append(append)
            .truncate(!append)
            .open(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_game_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &GameRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
