use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::store::StoreError;
use crate::store::kv::KeyValueStore;

const STORAGE_FILE: &str = "storage.json";

/// Key-value store backed by a single JSON object on disk.
///
/// Every `set` rewrites the whole file through a temp file and rename, so a
/// crash mid-write leaves the previous contents intact.
pub struct JsonStore {
    base_dir: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonStore {
    pub fn new() -> Result<Self, StoreError> {
        Self::with_base_dir(default_data_dir())
    }

    pub fn with_base_dir(base_dir: PathBuf) -> Result<Self, StoreError> {
        fs::create_dir_all(&base_dir)?;
        let entries = load_entries(&base_dir.join(STORAGE_FILE));
        Ok(Self { base_dir, entries })
    }

    pub fn path(&self) -> PathBuf {
        self.base_dir.join(STORAGE_FILE)
    }

    fn save(&self) -> Result<(), StoreError> {
        let path = self.path();
        let tmp_path = path.with_extension("json.tmp");

        let json = serde_json::to_string_pretty(&self.entries)?;
        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;

        fs::rename(&tmp_path, &path)?;
        debug!(path = %path.display(), entries = self.entries.len(), "storage saved");
        Ok(())
    }
}

impl KeyValueStore for JsonStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let previous = self.entries.insert(key.to_string(), value.to_string());
        if let Err(e) = self.save() {
            // Keep memory in step with what is on disk.
            match previous {
                Some(old) => self.entries.insert(key.to_string(), old),
                None => self.entries.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }
}

pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("typeshala")
}

fn load_entries(path: &Path) -> BTreeMap<String, String> {
    if !path.exists() {
        return BTreeMap::new();
    }
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unreadable storage file");
                BTreeMap::new()
            }
        },
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read storage file");
            BTreeMap::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn make_test_store() -> (TempDir, JsonStore) {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::with_base_dir(dir.path().to_path_buf()).unwrap();
        (dir, store)
    }

    #[test]
    fn test_values_survive_reopen() {
        let (dir, mut store) = make_test_store();
        store.set("typeshala-word-rain-highscore", "420").unwrap();
        drop(store);

        let reopened = JsonStore::with_base_dir(dir.path().to_path_buf()).unwrap();
        assert_eq!(
            reopened.get("typeshala-word-rain-highscore").as_deref(),
            Some("420")
        );
    }

    #[test]
    fn test_corrupt_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(STORAGE_FILE), "{not json").unwrap();
        let mut store = JsonStore::with_base_dir(dir.path().to_path_buf()).unwrap();
        assert!(store.get("anything").is_none());

        // A write replaces the corrupt file with a valid one.
        store.set("k", "v").unwrap();
        let content = fs::read_to_string(store.path()).unwrap();
        let parsed: BTreeMap<String, String> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.get("k").map(String::as_str), Some("v"));
    }

    #[test]
    fn test_no_tmp_file_left_behind() {
        let (dir, mut store) = make_test_store();
        store.set("a", "1").unwrap();
        let tmp_files: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().and_then(|x| x.to_str()) == Some("tmp"))
            .collect();
        assert!(tmp_files.is_empty(), "no residual .tmp files");
    }

    #[test]
    fn test_failed_save_rolls_back_memory() {
        let (dir, mut store) = make_test_store();
        store.set("a", "1").unwrap();
        // Point the store at a directory that no longer exists.
        store.base_dir = dir.path().join("gone");
        assert!(store.set("a", "2").is_err());
        assert_eq!(store.get("a").as_deref(), Some("1"));
        assert!(store.set("b", "3").is_err());
        assert!(store.get("b").is_none());
    }
}
