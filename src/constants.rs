//! Application constants and configuration values

// === Jamendo API ===
pub const JAMENDO_CLIENT_ID: &str = "b1beeb33";
pub const JAMENDO_TRACKS_ENDPOINT: &str = "https://api.jamendo.com/v3.0/tracks/";
pub const SEARCH_RESULT_LIMIT: usize = 10;

// === Track fallbacks ===
pub const FALLBACK_COVER_URL: &str =
    "https://images.unsplash.com/photo-1511379938547-c1f69419868d?w=600";
pub const FALLBACK_GENRE: &str = "Unknown";
pub const FALLBACK_TAG: &str = "online";

// === Persisted collections ===
pub const LIBRARY_STORAGE_KEY: &str = "musicLibrary";
pub const PLAYLISTS_STORAGE_KEY: &str = "musicPlaylists";
pub const STORAGE_DIR_NAME: &str = "melomix";

// === Audio Playback ===
pub const VOLUME_STEP: f32 = 0.1;
pub const DEFAULT_VOLUME_BEFORE_MUTE: f32 = 0.7;
pub const SEEK_STEP_SECS: u64 = 10;

// === Search ===
pub const TAG_QUERY_MARKER: char = '#';
