//! User playlists, persisted as one collection under `musicPlaylists`.
use crate::constants::PLAYLISTS_STORAGE_KEY;
use crate::models::{Playlist, Track};
use crate::services::Notifier;
use crate::storage::StoragePort;
use std::sync::Arc;

pub struct PlaylistStore {
    storage: Arc<dyn StoragePort>,
    notifier: Arc<dyn Notifier>,
}

fn default_playlists() -> Vec<Playlist> {
    vec![
        Playlist::new("top-2023", "Your Top Songs 2023"),
        Playlist::new("workout", "Workout Mix"),
        Playlist::new("chill", "Chill Vibes"),
        Playlist::new("focus", "Focus Flow"),
        Playlist::new("road-trip", "Road Trip"),
    ]
}

impl PlaylistStore {
    pub fn new(storage: Arc<dyn StoragePort>, notifier: Arc<dyn Notifier>) -> Self {
        Self { storage, notifier }
    }

    /// Load all playlists, seeding the defaults on first run.
    ///
    /// A parse failure is logged and also falls back to the seeded defaults,
    /// persisted immediately.
    pub fn load(&self) -> Vec<Playlist> {
        match self.storage.load(PLAYLISTS_STORAGE_KEY) {
            Some(raw) => match serde_json::from_str::<Vec<Playlist>>(&raw) {
                Ok(playlists) => playlists,
                Err(e) => {
                    log::error!("[Playlists] Failed to parse saved playlists: {}", e);
                    self.seed_defaults()
                }
            },
            None => self.seed_defaults(),
        }
    }

    pub fn get(&self, playlist_id: &str) -> Option<Playlist> {
        self.load().into_iter().find(|p| p.id == playlist_id)
    }

    /// Append a track id to one playlist. No-op when the id is already
    /// present or the playlist does not exist. Other playlists are untouched.
    pub fn add_track(&self, playlist_id: &str, track: &Track) -> bool {
        let mut playlists = self.load();
        let playlist = match playlists.iter_mut().find(|p| p.id == playlist_id) {
            Some(p) => p,
            None => {
                log::warn!("[Playlists] Unknown playlist {}", playlist_id);
                return false;
            }
        };
        if playlist.contains(&track.id) {
            return false;
        }
        playlist.track_ids.push(track.id.clone());
        let name = playlist.name.clone();
        self.persist(&playlists);
        self.notifier
            .success(&format!("{} added to {}", track.title, name));
        true
    }

    /// Filter a track id out of one playlist
    pub fn remove_track(&self, playlist_id: &str, track_id: &str) -> bool {
        let mut playlists = self.load();
        let playlist = match playlists.iter_mut().find(|p| p.id == playlist_id) {
            Some(p) => p,
            None => {
                log::warn!("[Playlists] Unknown playlist {}", playlist_id);
                return false;
            }
        };
        let before = playlist.track_ids.len();
        playlist.track_ids.retain(|id| id != track_id);
        if playlist.track_ids.len() == before {
            return false;
        }
        self.persist(&playlists);
        self.notifier.success("Track removed from playlist");
        true
    }

    fn seed_defaults(&self) -> Vec<Playlist> {
        log::info!("[Playlists] Seeding default playlists");
        let defaults = default_playlists();
        self.persist(&defaults);
        defaults
    }

    fn persist(&self, playlists: &[Playlist]) {
        match serde_json::to_string(playlists) {
            Ok(json) => {
                if let Err(e) = self.storage.save(PLAYLISTS_STORAGE_KEY, &json) {
                    log::error!("[Playlists] Failed to save playlists: {}", e);
                }
            }
            Err(e) => log::error!("[Playlists] Failed to encode playlists: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalog;
    use crate::services::MemoryNotifier;
    use crate::storage::MemoryStorage;

    fn store() -> (PlaylistStore, Arc<MemoryStorage>, Arc<MemoryNotifier>) {
        let storage = Arc::new(MemoryStorage::new());
        let notifier = Arc::new(MemoryNotifier::new());
        let store = PlaylistStore::new(storage.clone(), notifier.clone());
        (store, storage, notifier)
    }

    #[test]
    fn first_load_seeds_five_empty_defaults() {
        let (store, storage, _) = store();
        let playlists = store.load();

        assert_eq!(playlists.len(), 5);
        assert!(playlists.iter().all(|p| p.track_ids.is_empty()));
        assert_eq!(playlists[0].name, "Your Top Songs 2023");
        // seeded set is persisted immediately
        assert!(storage.load(PLAYLISTS_STORAGE_KEY).is_some());
    }

    #[test]
    fn unparsable_value_reseeds_defaults() {
        let (store, storage, _) = store();
        storage.save(PLAYLISTS_STORAGE_KEY, "not json").unwrap();

        let playlists = store.load();
        assert_eq!(playlists.len(), 5);
        let raw = storage.load(PLAYLISTS_STORAGE_KEY).unwrap();
        assert!(serde_json::from_str::<Vec<Playlist>>(&raw).is_ok());
    }

    #[test]
    fn add_track_is_idempotent_and_scoped_to_one_playlist() {
        let (store, _, notifier) = store();
        let track = catalog::track_by_id("5").unwrap();

        assert!(store.add_track("workout", track));
        assert!(!store.add_track("workout", track));

        let playlists = store.load();
        let workout = playlists.iter().find(|p| p.id == "workout").unwrap();
        assert_eq!(workout.track_ids, vec!["5".to_string()]);
        for other in playlists.iter().filter(|p| p.id != "workout") {
            assert!(other.track_ids.is_empty());
        }
        assert_eq!(notifier.messages().len(), 1);
        assert!(notifier.messages()[0].contains("Workout Mix"));
    }

    #[test]
    fn remove_track_filters_only_that_playlist() {
        let (store, _, _) = store();
        let track = catalog::track_by_id("5").unwrap();
        store.add_track("workout", track);
        store.add_track("road-trip", track);

        assert!(store.remove_track("workout", "5"));
        assert!(!store.remove_track("workout", "5"));

        assert!(store.get("workout").unwrap().track_ids.is_empty());
        assert_eq!(store.get("road-trip").unwrap().track_ids, vec!["5"]);
    }

    #[test]
    fn unknown_playlist_is_a_noop() {
        let (store, _, _) = store();
        let track = catalog::track_by_id("1").unwrap();
        assert!(!store.add_track("no-such-playlist", track));
        assert!(!store.remove_track("no-such-playlist", "1"));
    }

    #[test]
    fn wire_format_uses_camel_case_track_ids() {
        let (store, storage, _) = store();
        store.add_track("chill", catalog::track_by_id("7").unwrap());

        let raw = storage.load(PLAYLISTS_STORAGE_KEY).unwrap();
        assert!(raw.contains("\"trackIds\""));
    }
}
