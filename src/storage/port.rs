//! Key-value storage port with file-backed and in-memory implementations.
use crate::constants::STORAGE_DIR_NAME;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

/// String-keyed JSON text store, the stand-in for browser local storage.
///
/// Implementations are best-effort: a failed save is reported but callers
/// treat the collections as advisory state, never a hard dependency.
pub trait StoragePort: Send + Sync {
    /// Returns the stored text for `key`, or `None` when absent
    fn load(&self, key: &str) -> Option<String>;

    fn save(&self, key: &str, value: &str) -> Result<(), String>;
}

/// One JSON file per key under the per-user data directory
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new() -> Self {
        let dir = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(STORAGE_DIR_NAME);
        Self { dir }
    }

    /// Storage rooted at an explicit directory (used by tests)
    pub fn with_dir(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Default for FileStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl StoragePort for FileStorage {
    fn load(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(text) => Some(text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                log::error!("[Storage] Failed to read {}: {}", path.display(), e);
                None
            }
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), String> {
        std::fs::create_dir_all(&self.dir)
            .map_err(|e| format!("Failed to create {}: {}", self.dir.display(), e))?;
        let path = self.path_for(key);
        std::fs::write(&path, value)
            .map_err(|e| format!("Failed to write {}: {}", path.display(), e))
    }
}

/// In-memory store used as a fake in tests and headless runs
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoragePort for MemoryStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), String> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| "Storage mutex poisoned".to_string())?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
