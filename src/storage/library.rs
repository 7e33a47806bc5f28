//! The user's saved track collection, persisted under `musicLibrary`.
//!
//! Two encodings exist on disk: a legacy sequence of bare track ids and the
//! current sequence of full track records. Loads decode either and normalize
//! to full records immediately; every write persists the current form, so
//! legacy data migrates away on the first mutation.
use crate::constants::LIBRARY_STORAGE_KEY;
use crate::data::catalog;
use crate::models::Track;
use crate::services::Notifier;
use crate::storage::StoragePort;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
#[serde(untagged)]
enum LibraryEncoding {
    Ids(Vec<String>),
    Records(Vec<Track>),
}

pub struct LibraryStore {
    storage: Arc<dyn StoragePort>,
    notifier: Arc<dyn Notifier>,
}

impl LibraryStore {
    pub fn new(storage: Arc<dyn StoragePort>, notifier: Arc<dyn Notifier>) -> Self {
        Self { storage, notifier }
    }

    /// Load the library as full records.
    ///
    /// Missing key yields an empty library. A parse failure is logged and
    /// treated the same way; stale unparsable data is deliberately discarded
    /// rather than surfaced as an error.
    pub fn load(&self) -> Vec<Track> {
        let raw = match self.storage.load(LIBRARY_STORAGE_KEY) {
            Some(raw) => raw,
            None => return Vec::new(),
        };

        match serde_json::from_str::<LibraryEncoding>(&raw) {
            Ok(LibraryEncoding::Records(tracks)) => tracks,
            Ok(LibraryEncoding::Ids(ids)) => {
                log::info!(
                    "[Library] Legacy id-list encoding detected ({} entries)",
                    ids.len()
                );
                ids.iter()
                    .filter_map(|id| match catalog::track_by_id(id) {
                        Some(track) => Some(track.clone()),
                        None => {
                            log::warn!("[Library] Dropping unknown legacy track id {}", id);
                            None
                        }
                    })
                    .collect()
            }
            Err(e) => {
                log::error!("[Library] Failed to parse saved library: {}", e);
                Vec::new()
            }
        }
    }

    pub fn contains(&self, track_id: &str) -> bool {
        self.load().iter().any(|track| track.id == track_id)
    }

    /// Add a track. Idempotent: a second add of the same id is a no-op.
    /// Returns true when the library changed.
    pub fn add(&self, track: &Track) -> bool {
        let mut tracks = self.load();
        if tracks.iter().any(|t| t.id == track.id) {
            return false;
        }
        tracks.push(track.clone());
        self.persist(&tracks);
        self.notifier.success(&format!(
            "{} by {} added to your library",
            track.title, track.artist
        ));
        true
    }

    /// Remove a track by id. Returns true when the library changed.
    pub fn remove(&self, track_id: &str) -> bool {
        let mut tracks = self.load();
        let before = tracks.len();
        tracks.retain(|track| track.id != track_id);
        if tracks.len() == before {
            return false;
        }
        self.persist(&tracks);
        self.notifier.success("Track removed from your library");
        true
    }

    fn persist(&self, tracks: &[Track]) {
        match serde_json::to_string(tracks) {
            Ok(json) => {
                if let Err(e) = self.storage.save(LIBRARY_STORAGE_KEY, &json) {
                    log::error!("[Library] Failed to save library: {}", e);
                }
            }
            Err(e) => log::error!("[Library] Failed to encode library: {}", e),
        }
    }
}
