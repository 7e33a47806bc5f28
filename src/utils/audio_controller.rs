//! Audio output thread wrapping a rodio sink.
//!
//! The controller is the [`MediaElement`] implementation used by the real
//! player: commands go over an mpsc channel to a dedicated thread that
//! downloads the track bytes, decodes them and plays through a sink. Position
//! is tracked as base position + elapsed wall clock, refreshed on every loop
//! iteration into shared state the UI thread can read without blocking.
use crate::state::playback::MediaElement;
use crate::utils::error_handling::safe_lock;
use std::io::Cursor;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

pub enum AudioCommand {
    Load {
        url: String,
        duration_hint: Option<Duration>,
        autoplay: bool,
    },
    Play,
    Pause,
    SetVolume(f32),
    Seek(Duration),
}

pub struct AudioController {
    command_tx: Sender<AudioCommand>,
    position: Arc<Mutex<Duration>>,
    duration: Arc<Mutex<Option<Duration>>>,
    is_ended: Arc<Mutex<bool>>,
}

/// Per-track playback resources owned by the audio thread
struct LoadedTrack {
    // Keeps the output device open for the sink's lifetime
    _stream: rodio::OutputStream,
    sink: rodio::Sink,
    base_position: Duration,
    resumed_at: Option<Instant>,
    duration: Option<Duration>,
}

impl LoadedTrack {
    fn position(&self) -> Duration {
        let elapsed = self
            .resumed_at
            .map(|at| at.elapsed())
            .unwrap_or(Duration::ZERO);
        let position = self.base_position + elapsed;
        match self.duration {
            Some(total) if position > total => total,
            _ => position,
        }
    }

    fn is_playing(&self) -> bool {
        self.resumed_at.is_some()
    }
}

impl AudioController {
    pub fn new() -> Self {
        let (command_tx, command_rx): (Sender<AudioCommand>, Receiver<AudioCommand>) = channel();
        let position = Arc::new(Mutex::new(Duration::ZERO));
        let duration = Arc::new(Mutex::new(None));
        let is_ended = Arc::new(Mutex::new(false));

        let position_clone = position.clone();
        let duration_clone = duration.clone();
        let is_ended_clone = is_ended.clone();

        std::thread::spawn(move || {
            let rt = match crate::utils::error_handling::create_runtime() {
                Ok(r) => r,
                Err(e) => {
                    log::error!(
                        "[AudioController] Failed to create runtime for audio thread: {}",
                        e
                    );
                    return;
                }
            };
            let mut loaded: Option<LoadedTrack> = None;
            let mut current_volume: f32 = 1.0;

            loop {
                while let Ok(cmd) = command_rx.try_recv() {
                    match cmd {
                        AudioCommand::Load {
                            url,
                            duration_hint,
                            autoplay,
                        } => {
                            log::info!("[AudioController] Received Load command: {}", url);

                            // Reset ended flag before replacing the player
                            if let Some(mut lock) = safe_lock(&is_ended_clone, "AudioController") {
                                *lock = false;
                            }

                            // Dropping the old track frees the device and sink
                            if let Some(old) = loaded.take() {
                                log::debug!("[AudioController] Stopping previous track");
                                old.sink.stop();
                                drop(old);
                            }

                            match load_track(&rt, &url, duration_hint, autoplay, current_volume) {
                                Ok(track) => {
                                    if let Some(mut lock) =
                                        safe_lock(&duration_clone, "AudioController")
                                    {
                                        *lock = track.duration;
                                    }
                                    loaded = Some(track);
                                    log::info!("[AudioController] Audio playback started");
                                }
                                Err(e) => {
                                    log::error!("[AudioController] Error loading audio: {}", e);
                                }
                            }
                        }
                        AudioCommand::Play => {
                            log::debug!("[AudioController] Received Play command");
                            if let Some(track) = loaded.as_mut() {
                                track.sink.play();
                                if track.resumed_at.is_none() {
                                    track.resumed_at = Some(Instant::now());
                                }
                            }
                        }
                        AudioCommand::Pause => {
                            log::debug!("[AudioController] Received Pause command");
                            if let Some(track) = loaded.as_mut() {
                                track.base_position = track.position();
                                track.resumed_at = None;
                                track.sink.pause();
                            }
                        }
                        AudioCommand::SetVolume(volume) => {
                            current_volume = volume;
                            if let Some(track) = loaded.as_ref() {
                                track.sink.set_volume(volume);
                            }
                        }
                        AudioCommand::Seek(target) => {
                            log::debug!("[AudioController] Received Seek command to {:?}", target);

                            // Reset ended flag before the jump to avoid a
                            // false "track finished" report
                            if let Some(mut lock) = safe_lock(&is_ended_clone, "AudioController") {
                                *lock = false;
                            }

                            if let Some(track) = loaded.as_mut() {
                                match track.sink.try_seek(target) {
                                    Ok(()) => {
                                        track.base_position = target;
                                        if track.is_playing() {
                                            track.resumed_at = Some(Instant::now());
                                        }
                                    }
                                    Err(e) => {
                                        log::error!("[AudioController] Seek error: {:?}", e);
                                    }
                                }
                            }
                        }
                    }
                }

                // Publish position and ended status
                if let Some(track) = loaded.as_ref() {
                    if let Some(mut lock) = safe_lock(&position_clone, "AudioController") {
                        *lock = track.position();
                    }
                    if track.sink.empty() {
                        if let Some(mut lock) = safe_lock(&is_ended_clone, "AudioController") {
                            *lock = true;
                        }
                    }
                }

                std::thread::sleep(Duration::from_millis(50));
            }
        });

        Self {
            command_tx,
            position,
            duration,
            is_ended,
        }
    }
}

impl Default for AudioController {
    fn default() -> Self {
        Self::new()
    }
}

/// Download and decode a track, returning a ready sink
fn load_track(
    rt: &tokio::runtime::Runtime,
    url: &str,
    duration_hint: Option<Duration>,
    autoplay: bool,
    volume: f32,
) -> Result<LoadedTrack, Box<dyn std::error::Error + Send + Sync>> {
    use rodio::Source;

    let bytes = rt.block_on(fetch_audio_bytes(url))?;
    log::debug!("[AudioController] Downloaded {} bytes", bytes.len());

    let decoder = rodio::Decoder::new(Cursor::new(bytes))?;
    let duration = decoder.total_duration().or(duration_hint);

    let (stream, handle) = rodio::OutputStream::try_default()?;
    let sink = rodio::Sink::try_new(&handle)?;
    sink.set_volume(volume);
    sink.append(decoder);
    if !autoplay {
        sink.pause();
    }

    Ok(LoadedTrack {
        _stream: stream,
        sink,
        base_position: Duration::ZERO,
        resumed_at: autoplay.then(Instant::now),
        duration,
    })
}

async fn fetch_audio_bytes(url: &str) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>> {
    let response = reqwest::get(url).await?.error_for_status()?;
    Ok(response.bytes().await?.to_vec())
}

impl MediaElement for AudioController {
    fn load(&mut self, url: &str, duration_hint: Option<Duration>, autoplay: bool) {
        let _ = self.command_tx.send(AudioCommand::Load {
            url: url.to_string(),
            duration_hint,
            autoplay,
        });
    }

    fn play(&mut self) {
        let _ = self.command_tx.send(AudioCommand::Play);
    }

    fn pause(&mut self) {
        let _ = self.command_tx.send(AudioCommand::Pause);
    }

    fn seek(&mut self, position: Duration) {
        let _ = self.command_tx.send(AudioCommand::Seek(position));
    }

    fn set_volume(&mut self, volume: f32) {
        let _ = self.command_tx.send(AudioCommand::SetVolume(volume));
    }

    fn position(&self) -> Duration {
        safe_lock(&self.position, "AudioController")
            .map(|lock| *lock)
            .unwrap_or(Duration::ZERO)
    }

    fn duration(&self) -> Option<Duration> {
        safe_lock(&self.duration, "AudioController").and_then(|lock| *lock)
    }

    fn is_ended(&self) -> bool {
        safe_lock(&self.is_ended, "AudioController")
            .map(|lock| *lock)
            .unwrap_or(false)
    }
}
