//! Online track search against the Jamendo catalog.
//!
//! One GET per query. Every failure mode (network error, non-2xx status, API
//! error code, decode failure) degrades to a deterministic synthetic result
//! list so the caller always has something to render; nothing here errors.
use crate::constants::{
    FALLBACK_COVER_URL, FALLBACK_GENRE, FALLBACK_TAG, JAMENDO_CLIENT_ID, JAMENDO_TRACKS_ENDPOINT,
    SEARCH_RESULT_LIMIT,
};
use crate::models::{JamendoResponse, JamendoTrack, Track};
use std::time::{SystemTime, UNIX_EPOCH};

pub struct SearchOutcome {
    pub tracks: Vec<Track>,
    /// True when the online lookup failed and the tracks are synthetic
    pub degraded: bool,
}

/// Search the online catalog. Never errors; see module docs.
pub async fn search_tracks(query: &str) -> SearchOutcome {
    match fetch_tracks(query).await {
        Ok(tracks) => {
            log::info!("[Search] Jamendo returned {} tracks for '{}'", tracks.len(), query);
            SearchOutcome {
                tracks,
                degraded: false,
            }
        }
        Err(e) => {
            log::warn!("[Search] Jamendo request for '{}' failed: {}", query, e);
            SearchOutcome {
                tracks: fallback_tracks(query),
                degraded: true,
            }
        }
    }
}

async fn fetch_tracks(
    query: &str,
) -> Result<Vec<Track>, Box<dyn std::error::Error + Send + Sync>> {
    let endpoint = format!(
        "{}?client_id={}&format=json&limit={}&include=musicinfo&search={}",
        JAMENDO_TRACKS_ENDPOINT,
        JAMENDO_CLIENT_ID,
        SEARCH_RESULT_LIMIT,
        urlencoding::encode(query)
    );
    log::debug!("[Search] GET {}", endpoint);

    let response = reqwest::get(&endpoint).await?;
    if !response.status().is_success() {
        return Err(format!("API responded with status: {}", response.status()).into());
    }

    let data: JamendoResponse = response.json().await?;
    if data.headers.code != 0 && data.headers.code != 200 {
        return Err(format!("API error: {}", data.headers.error_message).into());
    }

    Ok(data.results.into_iter().map(map_remote_track).collect())
}

/// Map one remote record to the local track shape, filling fallbacks for the
/// optional metadata.
fn map_remote_track(remote: JamendoTrack) -> Track {
    let info_tags = remote
        .musicinfo
        .as_ref()
        .and_then(|info| info.tags.as_ref());

    let genre = info_tags
        .and_then(|tags| tags.genres.first())
        .map(|genre| capitalize_first(genre))
        .unwrap_or_else(|| FALLBACK_GENRE.to_string());

    // Union of the flat tag list and both nested groupings
    let mut tags: Vec<String> = remote.tags.clone();
    if let Some(info_tags) = info_tags {
        tags.extend(info_tags.vartags.iter().cloned());
        tags.extend(info_tags.instruments.iter().cloned());
    }
    if tags.is_empty() {
        tags.push(FALLBACK_TAG.to_string());
    }

    let cover = if remote.image.is_empty() {
        FALLBACK_COVER_URL.to_string()
    } else {
        remote.image.clone()
    };

    Track {
        id: format!("jamendo-{}", remote.id_string()),
        title: remote.name.clone(),
        artist: remote.artist_name.clone(),
        album: remote.album_name.clone(),
        cover,
        audio: remote.audio.clone(),
        duration: remote.duration.round() as u64,
        tags,
        genre,
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Synthetic results shown when the online lookup fails. Titles embed the
/// query text, ids carry a timestamp suffix so each invocation is unique.
fn fallback_tracks(query: &str) -> Vec<Track> {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);

    let entries = [
        (format!("{} Dreams", query), "The Static Waves", "Electronic", 180),
        (format!("Echoes of {}", query), "Nova Circuit", "Ambient", 210),
        (format!("{} (Live Session)", query), "Midnight Parallel", "Pop", 165),
    ];
    let audio_urls = [
        "https://assets.mixkit.co/music/preview/mixkit-tech-house-vibes-130.mp3",
        "https://assets.mixkit.co/music/preview/mixkit-serene-view-443.mp3",
        "https://assets.mixkit.co/music/preview/mixkit-summer-fun-13.mp3",
    ];

    entries
        .into_iter()
        .zip(audio_urls)
        .enumerate()
        .map(|(n, ((title, artist, genre, duration), audio))| Track {
            id: format!("offline-{}-{}", n + 1, stamp),
            title,
            artist: artist.to_string(),
            album: "Offline Sessions".to_string(),
            cover: FALLBACK_COVER_URL.to_string(),
            audio: audio.to_string(),
            duration,
            tags: vec![FALLBACK_TAG.to_string()],
            genre: genre.to_string(),
        })
        .collect()
}
