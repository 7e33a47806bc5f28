//! Application facade wiring catalog, stores, search and playback.
//!
//! Front-ends call these methods on input events and `poll()` on their own
//! schedule; there is no hidden reactive graph. All state lives on the
//! calling thread, only the online search and audio output run on background
//! threads behind channels.
use crate::api::search::SearchOutcome;
use crate::data::{catalog, recommendations};
use crate::models::{Playlist, Track};
use crate::services::Notifier;
use crate::state::{MediaElement, PlaybackSession, SearchState};
use crate::storage::{LibraryStore, PlaylistStore, StoragePort};
use crate::utils::{async_helper, track_filter};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;

pub struct MeloMixApp {
    pub library: LibraryStore,
    pub playlists: PlaylistStore,
    pub playback: PlaybackSession,
    pub search: SearchState,
    notifier: Arc<dyn Notifier>,
    search_rx: Option<Receiver<async_helper::AsyncTaskResult<SearchOutcome>>>,
}

impl MeloMixApp {
    pub fn new(
        storage: Arc<dyn StoragePort>,
        element: Box<dyn MediaElement>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let library = LibraryStore::new(storage.clone(), notifier.clone());
        let playlists = PlaylistStore::new(storage, notifier.clone());
        let mut playback = PlaybackSession::new(element);
        playback.set_queue(catalog::all_tracks().to_vec());

        Self {
            library,
            playlists,
            playback,
            search: SearchState::default(),
            notifier,
            search_rx: None,
        }
    }

    /// Run the local filter synchronously and dispatch the online lookup to a
    /// background thread. An earlier in-flight lookup is abandoned, not
    /// cancelled; whichever response arrives last overwrites the results.
    pub fn run_search(&mut self, query: &str) {
        self.search.query = query.to_string();
        self.search.local_results = track_filter::filter_local(catalog::all_tracks(), query);

        if query.trim().is_empty() {
            self.search.online_results.clear();
            self.search.online_loading = false;
            self.search_rx = None;
            return;
        }

        log::info!("[App] Searching for '{}'", query);
        let (tx, rx) = channel();
        self.search_rx = Some(rx);
        self.search.online_loading = true;

        let query = query.to_string();
        async_helper::spawn_and_send(
            move || Box::pin(async move { Ok(crate::api::search_tracks(&query).await) }),
            tx,
        );
    }

    /// Drain finished background work and drive the playback tick
    pub fn poll(&mut self) {
        if let Some(rx) = &self.search_rx {
            match rx.try_recv() {
                Ok(Ok(outcome)) => {
                    if outcome.degraded {
                        self.notifier.info(&format!(
                            "Online search unavailable, showing sample results for '{}'",
                            self.search.query
                        ));
                    }
                    self.search.online_results = outcome.tracks;
                    self.search.online_loading = false;
                    self.search_rx = None;
                }
                Ok(Err(e)) => {
                    log::error!("[App] Search task failed: {}", e);
                    self.search.online_loading = false;
                    self.search_rx = None;
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    self.search.online_loading = false;
                    self.search_rx = None;
                }
            }
        }

        self.playback.tick();
    }

    /// Select a track in the context of the list it was clicked in; that list
    /// becomes the queue next/previous navigate over.
    pub fn play_from(&mut self, tracks: &[Track], track_id: &str) -> bool {
        let track = match tracks.iter().find(|t| t.id == track_id) {
            Some(t) => t.clone(),
            None => {
                log::warn!("[App] Track {} not found in current list", track_id);
                return false;
            }
        };
        self.playback.set_queue(tracks.to_vec());
        self.playback.select_track(&track);
        true
    }

    /// Resolve a playlist's track ids against the catalog and the saved
    /// library (which can hold online tracks). Unresolvable ids are skipped.
    pub fn playlist_tracks(&self, playlist: &Playlist) -> Vec<Track> {
        let library = self.library.load();
        playlist
            .track_ids
            .iter()
            .filter_map(|id| {
                catalog::track_by_id(id)
                    .cloned()
                    .or_else(|| library.iter().find(|t| &t.id == id).cloned())
            })
            .collect()
    }

    /// Simulated home-screen recommendations
    pub fn recommendations(&self) -> Vec<Track> {
        recommendations::recommended_tracks()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::MemoryNotifier;
    use crate::state::playback::NullElement;
    use crate::storage::MemoryStorage;

    fn app() -> MeloMixApp {
        MeloMixApp::new(
            Arc::new(MemoryStorage::new()),
            Box::new(NullElement),
            Arc::new(MemoryNotifier::new()),
        )
    }

    #[test]
    fn empty_search_clears_online_results_without_dispatch() {
        let mut app = app();
        app.search.online_results = catalog::all_tracks().to_vec();
        app.run_search("");

        assert_eq!(app.search.local_results.len(), 8);
        assert!(app.search.online_results.is_empty());
        assert!(!app.search.online_loading);
    }

    #[test]
    fn search_filters_local_results_synchronously() {
        let mut app = app();
        app.run_search("#jazz");
        assert_eq!(app.search.local_results.len(), 1);
        assert_eq!(app.search.local_results[0].id, "2");
        assert!(app.search.online_loading);
    }

    #[test]
    fn play_from_sets_queue_to_the_clicked_list() {
        let mut app = app();
        let jazz_only = vec![catalog::track_by_id("2").unwrap().clone()];

        assert!(app.play_from(&jazz_only, "2"));
        assert_eq!(app.playback.queue().len(), 1);
        assert_eq!(app.playback.current_track.as_ref().unwrap().id, "2");

        assert!(!app.play_from(&jazz_only, "1"));
    }

    #[test]
    fn playlist_tracks_resolve_from_catalog_and_library() {
        let app = app();
        let online = Track {
            id: "jamendo-7".to_string(),
            title: "Saved Online".to_string(),
            artist: "Someone".to_string(),
            album: "Web".to_string(),
            cover: String::new(),
            audio: String::new(),
            duration: 100,
            tags: vec!["online".to_string()],
            genre: "Electronic".to_string(),
        };
        app.library.add(&online);
        app.playlists.add_track("chill", catalog::track_by_id("7").unwrap());
        app.playlists.add_track("chill", &online);

        let playlist = app.playlists.get("chill").unwrap();
        let tracks = app.playlist_tracks(&playlist);
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].id, "7");
        assert_eq!(tracks[1].id, "jamendo-7");
    }
}
