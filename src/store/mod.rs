pub mod high_score;
pub mod json_store;
pub mod kv;

use thiserror::Error;

pub use high_score::HighScores;
pub use json_store::JsonStore;
pub use kv::{KeyValueStore, MemoryStore};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
