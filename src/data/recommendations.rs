//! Stub "AI" recommendations.
//!
//! These are hard-coded records, not a real recommendation engine. Ids carry a
//! timestamp suffix so each invocation yields distinct entries.
use crate::models::Track;
use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

fn stub(n: u32, stamp: u128, title: &str, artist: &str, album: &str, cover: &str, audio: &str, duration: u64, extra_tag: &str, genre: &str) -> Track {
    Track {
        id: format!("rec-{}-{}", n, stamp),
        title: title.to_string(),
        artist: artist.to_string(),
        album: album.to_string(),
        cover: cover.to_string(),
        audio: audio.to_string(),
        duration,
        tags: vec![
            "ai".to_string(),
            "recommendation".to_string(),
            extra_tag.to_string(),
        ],
        genre: genre.to_string(),
    }
}

/// Simulated recommendations for the home screen
pub fn recommended_tracks() -> Vec<Track> {
    let stamp = now_millis();
    vec![
        stub(
            1,
            stamp,
            "Rhythmic Journey",
            "DeepBeats AI",
            "AI Recommendations Vol. 1",
            "https://images.unsplash.com/photo-1601312378427-822ab867012c?w=600",
            "https://assets.mixkit.co/music/preview/mixkit-tech-house-vibes-130.mp3",
            190,
            "electronic",
            "Electronic",
        ),
        stub(
            2,
            stamp,
            "Neon Dreams",
            "AI Composer",
            "Neural Beats",
            "https://images.unsplash.com/photo-1614149162883-504ce4d13909?w=600",
            "https://assets.mixkit.co/music/preview/mixkit-deep-urban-623.mp3",
            215,
            "ambient",
            "Ambient",
        ),
        stub(
            3,
            stamp,
            "Melodic Patterns",
            "NeuralGroove",
            "AI Composed Series",
            "https://images.unsplash.com/photo-1614624532983-4ce03382d63d?w=600",
            "https://assets.mixkit.co/music/preview/mixkit-serene-view-443.mp3",
            205,
            "jazz",
            "Jazz",
        ),
        stub(
            4,
            stamp,
            "Future Classic",
            "AI Symphony",
            "Machine Learning Music",
            "https://images.unsplash.com/photo-1511379938547-c1f69419868d?w=600",
            "https://assets.mixkit.co/music/preview/mixkit-jazzy-intro-171.mp3",
            180,
            "classical",
            "Classical",
        ),
    ]
}

/// Derive up to three preference tags from play history genre frequency,
/// padded with defaults when the history is too thin.
pub fn analyze_preferences(play_history: &[Track]) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for track in play_history {
        *counts.entry(track.genre.to_lowercase()).or_insert(0) += 1;
    }

    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let mut preferences: Vec<String> = ranked.into_iter().take(3).map(|(genre, _)| genre).collect();

    if preferences.len() < 2 {
        for fallback in ["electronic", "ambient"] {
            if !preferences.iter().any(|p| p == fallback) {
                preferences.push(fallback.to_string());
            }
        }
    }

    preferences
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalog;

    #[test]
    fn recommendations_are_fixed_stub_records() {
        let recs = recommended_tracks();
        assert_eq!(recs.len(), 4);
        assert!(recs.iter().all(|t| t.tags.contains(&"ai".to_string())));
        assert!(recs.iter().all(|t| t.id.starts_with("rec-")));
    }

    #[test]
    fn preferences_rank_genres_by_frequency() {
        let mut history: Vec<Track> = Vec::new();
        history.push(catalog::track_by_id("2").unwrap().clone()); // Jazz
        history.push(catalog::track_by_id("2").unwrap().clone()); // Jazz
        history.push(catalog::track_by_id("3").unwrap().clone()); // Electronic
        history.push(catalog::track_by_id("6").unwrap().clone()); // Rock

        let prefs = analyze_preferences(&history);
        assert_eq!(prefs[0], "jazz");
        assert_eq!(prefs.len(), 3);
    }

    #[test]
    fn preferences_pad_defaults_for_thin_history() {
        let prefs = analyze_preferences(&[]);
        assert!(prefs.contains(&"electronic".to_string()));
        assert!(prefs.contains(&"ambient".to_string()));
    }
}
