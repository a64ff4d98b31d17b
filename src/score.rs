use crate::board::Player;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::{fs, io};
use thiserror::Error;

/// Default file name of the on-disk tally, the same fixed key the scores
/// have always lived under.
pub const DEFAULT_SCORE_FILE: &str = "xo_scores.json";

/// The running tally of finished rounds.
///
/// Counters never decrease within a session; resetting replaces the whole
/// value. The serialized field names (`X`, `O`, `draw`) are the stored
/// format and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scores {
    #[serde(rename = "X")]
    pub x: u32,
    #[serde(rename = "O")]
    pub o: u32,
    #[serde(rename = "draw")]
    pub draws: u32,
}

impl Scores {
    /// Credits a finished round to its winner.
    pub fn record_win(&mut self, player: Player) {
        match player {
            Player::X => self.x += 1,
            Player::O => self.o += 1,
        }
    }

    /// Records a drawn round.
    pub fn record_draw(&mut self) {
        self.draws += 1;
    }
}

/// A failure while writing the tally to disk.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("failed to write score file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode scores: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Durable storage for the score tally, one JSON file per store.
///
/// Reading never fails: an absent or malformed file falls back to zeroed
/// counters, so a corrupted tally cannot take the game down. Writing
/// surfaces its error and leaves recovery to the caller.
#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
}

impl Default for ScoreStore {
    fn default() -> Self {
        Self::new(DEFAULT_SCORE_FILE)
    }
}

impl ScoreStore {
    /// Creates a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted tally, falling back to zeroed counters when the
    /// file is absent or does not hold a valid tally.
    pub fn load(&self) -> Scores {
        match fs::read_to_string(&self.path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(scores) => scores,
                Err(err) => {
                    tracing::debug!(
                        path = %self.path.display(),
                        %err,
                        "malformed score file, starting from zero"
                    );
                    Scores::default()
                }
            },
            Err(err) => {
                tracing::debug!(
                    path = %self.path.display(),
                    %err,
                    "no readable score file, starting from zero"
                );
                Scores::default()
            }
        }
    }

    /// Writes the tally to the backing file, replacing what was there.
    pub fn save(&self, scores: &Scores) -> Result<(), ScoreError> {
        let encoded = serde_json::to_string(scores)?;
        fs::write(&self.path, encoded)?;
        Ok(())
    }
}
