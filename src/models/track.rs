use serde::{Deserialize, Serialize};

/// A single playable audio item with descriptive metadata.
///
/// Immutable once constructed: catalog tracks are fixed at startup, online
/// tracks are built once per search response.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub cover: String,
    pub audio: String,
    /// Duration in whole seconds.
    pub duration: u64,
    pub tags: Vec<String>,
    pub genre: String,
}

impl Track {
    /// "Artist - Title" label used by list displays and notifications
    pub fn display(&self) -> String {
        format!("{} - {}", self.artist, self.title)
    }
}
