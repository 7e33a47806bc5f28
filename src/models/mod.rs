// Data models for tracks, playlists and the Jamendo API schema

pub mod playlist;
pub mod responses;
pub mod track;

// Re-export commonly used types
pub use playlist::Playlist;
pub use responses::{JamendoHeaders, JamendoResponse, JamendoTrack};
pub use track::Track;
