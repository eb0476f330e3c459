use tracing::info;

use crate::store::StoreError;
use crate::store::kv::KeyValueStore;

pub const NAMESPACE: &str = "typeshala";

/// Storage key for a game mode's best score, e.g. `typeshala-word-rain-highscore`.
pub fn key_for(mode: &str) -> String {
    format!("{NAMESPACE}-{mode}-highscore")
}

/// Best score per game mode on top of any key-value store.
pub struct HighScores<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> HighScores<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Missing or unparseable entries read as zero.
    pub fn get(&self, mode: &str) -> u64 {
        self.store
            .get(&key_for(mode))
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Stores `score` only when it beats the current best. Returns whether it did.
    pub fn record(&mut self, mode: &str, score: u64) -> Result<bool, StoreError> {
        let best = self.get(mode);
        if score <= best {
            return Ok(false);
        }
        self.store.set(&key_for(mode), &score.to_string())?;
        info!(mode, score, previous = best, "new high score");
        Ok(true)
    }
}
