//! Ephemeral playback session: current track, transport state, volume.
//!
//! Decoding and output are delegated to a [`MediaElement`] implementation,
//! the session only drives transitions (Idle, Loaded-Paused, Loaded-Playing)
//! and reacts to the element reporting the track as ended.
use crate::models::Track;
use std::time::Duration;

/// Seam to the platform audio output.
///
/// Mirrors the surface of a browser media element: load a source, toggle
/// play/pause, seek, set volume, observe position/duration/ended.
pub trait MediaElement: Send {
    fn load(&mut self, url: &str, duration_hint: Option<Duration>, autoplay: bool);
    fn play(&mut self);
    fn pause(&mut self);
    fn seek(&mut self, position: Duration);
    fn set_volume(&mut self, volume: f32);
    fn position(&self) -> Duration;
    fn duration(&self) -> Option<Duration>;
    fn is_ended(&self) -> bool;
}

/// No-op element for headless use
pub struct NullElement;

impl MediaElement for NullElement {
    fn load(&mut self, _url: &str, _duration_hint: Option<Duration>, _autoplay: bool) {}
    fn play(&mut self) {}
    fn pause(&mut self) {}
    fn seek(&mut self, _position: Duration) {}
    fn set_volume(&mut self, _volume: f32) {}
    fn position(&self) -> Duration {
        Duration::ZERO
    }
    fn duration(&self) -> Option<Duration> {
        None
    }
    fn is_ended(&self) -> bool {
        false
    }
}

pub struct PlaybackSession {
    element: Box<dyn MediaElement>,

    /// Currently known track sequence for next/previous navigation
    queue: Vec<Track>,
    pub current_track: Option<Track>,
    pub is_playing: bool,

    pub volume: f32,
    pub muted: bool,
    volume_before_mute: f32,
}

impl PlaybackSession {
    pub fn new(element: Box<dyn MediaElement>) -> Self {
        Self {
            element,
            queue: Vec::new(),
            current_track: None,
            is_playing: false,
            volume: 1.0,
            muted: false,
            volume_before_mute: crate::constants::DEFAULT_VOLUME_BEFORE_MUTE,
        }
    }

    /// Replace the known track sequence used by next/previous
    pub fn set_queue(&mut self, tracks: Vec<Track>) {
        self.queue = tracks;
    }

    pub fn queue(&self) -> &[Track] {
        &self.queue
    }

    /// Select a track and start playback from zero.
    ///
    /// Re-selecting the current track resumes from the current position
    /// instead of restarting; list components route repeat clicks through
    /// `toggle_playback` so a reload here would double-start the element.
    pub fn select_track(&mut self, track: &Track) {
        if self
            .current_track
            .as_ref()
            .map_or(false, |current| current.id == track.id)
        {
            log::debug!("[Playback] Track {} already current, resuming", track.id);
            self.element.play();
            self.is_playing = true;
            return;
        }

        log::info!("[Playback] Selecting track {}: {}", track.id, track.display());
        self.current_track = Some(track.clone());
        self.element.load(
            &track.audio,
            Some(Duration::from_secs(track.duration)),
            true,
        );
        self.element.set_volume(self.effective_volume());
        self.is_playing = true;
    }

    /// Loaded-Playing <-> Loaded-Paused, no-op while Idle
    pub fn toggle_playback(&mut self) {
        if self.current_track.is_none() {
            return;
        }
        if self.is_playing {
            self.element.pause();
            self.is_playing = false;
        } else {
            self.element.play();
            self.is_playing = true;
        }
    }

    /// Set position directly. Callers clamp to [0, duration].
    pub fn seek(&mut self, position: Duration) {
        if self.current_track.is_some() {
            self.element.seek(position);
        }
    }

    pub fn position(&self) -> Duration {
        self.element.position()
    }

    /// Total duration in seconds, element-reported when available
    pub fn duration_secs(&self) -> u64 {
        self.element
            .duration()
            .map(|d| d.as_secs())
            .or_else(|| self.current_track.as_ref().map(|t| t.duration))
            .unwrap_or(0)
    }

    /// Advance to the next track, wrapping at the end of the queue
    pub fn next_track(&mut self) {
        self.step(1);
    }

    /// Go back one track, wrapping at the start of the queue
    pub fn previous_track(&mut self) {
        self.step(-1);
    }

    fn step(&mut self, offset: i64) {
        if self.queue.is_empty() {
            return;
        }
        let len = self.queue.len() as i64;
        let current_index = self
            .current_track
            .as_ref()
            .and_then(|current| self.queue.iter().position(|t| t.id == current.id));
        let next_index = match current_index {
            Some(i) => ((i as i64 + offset).rem_euclid(len)) as usize,
            None => 0,
        };
        let track = self.queue[next_index].clone();
        self.select_track(&track);
    }

    /// Volume in [0,1]. Setting exactly 0 implies mute and leaves the stored
    /// volume at its last nonzero value; any nonzero set clears mute.
    pub fn set_volume(&mut self, volume: f32) {
        let volume = volume.clamp(0.0, 1.0);
        if volume == 0.0 {
            self.muted = true;
        } else {
            self.volume = volume;
            self.muted = false;
        }
        self.element.set_volume(self.effective_volume());
    }

    pub fn toggle_mute(&mut self) {
        if self.muted {
            self.volume = self.volume_before_mute;
            self.muted = false;
        } else {
            self.volume_before_mute = self.volume;
            self.muted = true;
        }
        self.element.set_volume(self.effective_volume());
    }

    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.volume
        }
    }

    /// Poll the element; an ended report is treated as pressing next
    pub fn tick(&mut self) {
        if self.is_playing && self.element.is_ended() {
            log::info!("[Playback] Track ended, advancing");
            self.next_track();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalog;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct FakeState {
        loaded_url: Option<String>,
        playing: bool,
        volume: f32,
        position: Duration,
        ended: bool,
        load_count: usize,
    }

    #[derive(Clone, Default)]
    struct FakeElement(Arc<Mutex<FakeState>>);

    impl MediaElement for FakeElement {
        fn load(&mut self, url: &str, _duration_hint: Option<Duration>, autoplay: bool) {
            let mut s = self.0.lock().unwrap();
            s.loaded_url = Some(url.to_string());
            s.playing = autoplay;
            s.position = Duration::ZERO;
            s.ended = false;
            s.load_count += 1;
        }
        fn play(&mut self) {
            self.0.lock().unwrap().playing = true;
        }
        fn pause(&mut self) {
            self.0.lock().unwrap().playing = false;
        }
        fn seek(&mut self, position: Duration) {
            self.0.lock().unwrap().position = position;
        }
        fn set_volume(&mut self, volume: f32) {
            self.0.lock().unwrap().volume = volume;
        }
        fn position(&self) -> Duration {
            self.0.lock().unwrap().position
        }
        fn duration(&self) -> Option<Duration> {
            None
        }
        fn is_ended(&self) -> bool {
            self.0.lock().unwrap().ended
        }
    }

    fn session_with_catalog() -> (PlaybackSession, FakeElement) {
        let element = FakeElement::default();
        let mut session = PlaybackSession::new(Box::new(element.clone()));
        session.set_queue(catalog::all_tracks().to_vec());
        (session, element)
    }

    #[test]
    fn select_track_resets_and_autoplays() {
        let (mut session, element) = session_with_catalog();
        let track = catalog::track_by_id("2").unwrap();
        session.select_track(track);

        assert!(session.is_playing);
        assert_eq!(session.current_track.as_ref().unwrap().id, "2");
        let state = element.0.lock().unwrap();
        assert_eq!(state.loaded_url.as_deref(), Some(track.audio.as_str()));
        assert!(state.playing);
    }

    #[test]
    fn reselecting_current_track_resumes_without_reload() {
        let (mut session, element) = session_with_catalog();
        let track = catalog::track_by_id("2").unwrap();
        session.select_track(track);
        session.seek(Duration::from_secs(42));
        session.toggle_playback();
        session.select_track(track);

        let state = element.0.lock().unwrap();
        assert_eq!(state.load_count, 1);
        assert_eq!(state.position, Duration::from_secs(42));
        assert!(state.playing);
    }

    #[test]
    fn toggle_playback_flips_loaded_states_only() {
        let (mut session, _) = session_with_catalog();
        // Idle: toggle is a no-op
        session.toggle_playback();
        assert!(!session.is_playing);

        session.select_track(catalog::track_by_id("1").unwrap());
        session.toggle_playback();
        assert!(!session.is_playing);
        session.toggle_playback();
        assert!(session.is_playing);
    }

    #[test]
    fn next_wraps_around_full_cycle() {
        let (mut session, _) = session_with_catalog();
        let first = catalog::all_tracks()[0].clone();
        session.select_track(&first);

        let n = session.queue().len();
        for _ in 0..n {
            session.next_track();
        }
        assert_eq!(session.current_track.as_ref().unwrap().id, first.id);
    }

    #[test]
    fn previous_wraps_at_the_start() {
        let (mut session, _) = session_with_catalog();
        session.select_track(&catalog::all_tracks()[0].clone());
        session.previous_track();
        assert_eq!(session.current_track.as_ref().unwrap().id, "8");
    }

    #[test]
    fn navigation_is_noop_with_empty_queue() {
        let element = FakeElement::default();
        let mut session = PlaybackSession::new(Box::new(element));
        session.next_track();
        session.previous_track();
        assert!(session.current_track.is_none());
    }

    #[test]
    fn ended_is_treated_as_next() {
        let (mut session, element) = session_with_catalog();
        session.select_track(&catalog::all_tracks()[0].clone());
        element.0.lock().unwrap().ended = true;
        session.tick();
        assert_eq!(session.current_track.as_ref().unwrap().id, "2");
    }

    #[test]
    fn zero_volume_mutes_but_keeps_stored_volume() {
        let (mut session, element) = session_with_catalog();
        session.set_volume(0.8);
        session.set_volume(0.0);

        assert!(session.muted);
        assert_eq!(session.volume, 0.8);
        assert_eq!(session.effective_volume(), 0.0);
        assert_eq!(element.0.lock().unwrap().volume, 0.0);

        // any nonzero set clears mute
        session.set_volume(0.3);
        assert!(!session.muted);
        assert_eq!(session.effective_volume(), 0.3);
    }

    #[test]
    fn toggle_mute_restores_previous_volume() {
        let (mut session, _) = session_with_catalog();
        session.set_volume(0.6);
        session.toggle_mute();
        assert!(session.muted);
        assert_eq!(session.effective_volume(), 0.0);
        session.toggle_mute();
        assert!(!session.muted);
        assert_eq!(session.effective_volume(), 0.6);
    }
}
