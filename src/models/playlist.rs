use serde::{Deserialize, Serialize};

/// A named, ordered, user-curated set of track references.
///
/// Field names stay wire-compatible with the persisted `musicPlaylists`
/// JSON (`trackIds` is camelCase on disk).
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    #[serde(rename = "trackIds")]
    pub track_ids: Vec<String>,
}

impl Playlist {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            track_ids: Vec::new(),
        }
    }

    pub fn contains(&self, track_id: &str) -> bool {
        self.track_ids.iter().any(|id| id == track_id)
    }
}
