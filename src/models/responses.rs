use serde::Deserialize;

/// Envelope returned by the Jamendo `/tracks/` endpoint.
#[derive(Debug, Deserialize)]
pub struct JamendoResponse {
    pub headers: JamendoHeaders,
    #[serde(default)]
    pub results: Vec<JamendoTrack>,
}

#[derive(Debug, Deserialize, Default)]
pub struct JamendoHeaders {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub error_message: String,
    #[serde(default)]
    pub results_count: u64,
}

/// One remote track record. Most metadata fields are optional on the wire,
/// the mapping layer fills in fallbacks.
#[derive(Debug, Deserialize)]
pub struct JamendoTrack {
    pub id: serde_json::Value,
    pub name: String,
    pub artist_name: String,
    #[serde(default)]
    pub album_name: String,
    pub audio: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub musicinfo: Option<MusicInfo>,
}

#[derive(Debug, Deserialize, Default)]
pub struct MusicInfo {
    #[serde(default)]
    pub tags: Option<MusicInfoTags>,
}

#[derive(Debug, Deserialize, Default)]
pub struct MusicInfoTags {
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub instruments: Vec<String>,
    #[serde(default)]
    pub vartags: Vec<String>,
}

impl JamendoTrack {
    /// Remote ids arrive as either a number or a string depending on the
    /// output format, normalize to a plain string.
    pub fn id_string(&self) -> String {
        match &self.id {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}
