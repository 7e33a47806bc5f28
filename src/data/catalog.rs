//! In-memory sample catalog and its read-only derived views.
use crate::models::Track;
use once_cell::sync::Lazy;

fn sample(
    id: &str,
    title: &str,
    artist: &str,
    album: &str,
    cover: &str,
    audio: &str,
    duration: u64,
    tags: &[&str],
    genre: &str,
) -> Track {
    Track {
        id: id.to_string(),
        title: title.to_string(),
        artist: artist.to_string(),
        album: album.to_string(),
        cover: cover.to_string(),
        audio: audio.to_string(),
        duration,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        genre: genre.to_string(),
    }
}

static SAMPLE_TRACKS: Lazy<Vec<Track>> = Lazy::new(|| {
    vec![
        sample(
            "1",
            "Symphony No. 5",
            "Ludwig van Beethoven",
            "Classical Masterpieces",
            "https://images.unsplash.com/photo-1507838153414-b4b713384a76?w=600",
            "https://assets.mixkit.co/music/preview/mixkit-tech-house-vibes-130.mp3",
            183,
            &["classical", "orchestra", "symphonic"],
            "Classical",
        ),
        sample(
            "2",
            "Midnight Jazz",
            "Ella Johnson",
            "Late Night Sessions",
            "https://images.unsplash.com/photo-1514320291840-2e0a9bf2a9ae?w=600",
            "https://assets.mixkit.co/music/preview/mixkit-jazzy-intro-171.mp3",
            176,
            &["jazz", "smooth", "relaxing", "night"],
            "Jazz",
        ),
        sample(
            "3",
            "Electronic Dreams",
            "TechNova",
            "Digital Horizons",
            "https://images.unsplash.com/photo-1470225620780-dba8ba36b745?w=600",
            "https://assets.mixkit.co/music/preview/mixkit-deep-urban-623.mp3",
            125,
            &["electronic", "upbeat", "dance"],
            "Electronic",
        ),
        sample(
            "4",
            "Acoustic Morning",
            "Sarah Williams",
            "Sunrise Sessions",
            "https://images.unsplash.com/photo-1510915361894-db8b60106cb1?w=600",
            "https://assets.mixkit.co/music/preview/mixkit-relaxing-in-nature-522.mp3",
            214,
            &["acoustic", "guitar", "relaxing", "morning"],
            "Folk",
        ),
        sample(
            "5",
            "Hip Hop Groove",
            "MC Rhythm",
            "Urban Beats",
            "https://images.unsplash.com/photo-1571609806661-8395aa78b546?w=600",
            "https://assets.mixkit.co/music/preview/mixkit-hip-hop-02-621.mp3",
            142,
            &["hip hop", "beats", "urban", "workout"],
            "Hip Hop",
        ),
        sample(
            "6",
            "Rock Anthem",
            "The Amplifiers",
            "Volume Up",
            "https://images.unsplash.com/photo-1498038432885-c6f3f1b912ee?w=600",
            "https://assets.mixkit.co/music/preview/mixkit-driving-ambition-32.mp3",
            198,
            &["rock", "guitar", "energetic"],
            "Rock",
        ),
        sample(
            "7",
            "Ambient Waves",
            "Ocean Sounds",
            "Deep Relaxation",
            "https://images.unsplash.com/photo-1470813740244-df37b8c1edcb?w=600",
            "https://assets.mixkit.co/music/preview/mixkit-serene-view-443.mp3",
            231,
            &["ambient", "relaxing", "focus", "meditation"],
            "Ambient",
        ),
        sample(
            "8",
            "Pop Sensation",
            "Melody Stars",
            "Chart Toppers",
            "https://images.unsplash.com/photo-1501386761578-eac5c94b800a?w=600",
            "https://assets.mixkit.co/music/preview/mixkit-summer-fun-13.mp3",
            167,
            &["pop", "upbeat", "energetic"],
            "Pop",
        ),
    ]
});

/// Full sample set, stable order
pub fn all_tracks() -> &'static [Track] {
    &SAMPLE_TRACKS
}

pub fn track_by_id(id: &str) -> Option<&'static Track> {
    SAMPLE_TRACKS.iter().find(|track| track.id == id)
}

/// Unique tags across the catalog, first-seen order
pub fn all_tags() -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for track in SAMPLE_TRACKS.iter() {
        for tag in &track.tags {
            if !tags.contains(tag) {
                tags.push(tag.clone());
            }
        }
    }
    tags
}

/// Unique genres across the catalog, first-seen order
pub fn all_genres() -> Vec<String> {
    let mut genres: Vec<String> = Vec::new();
    for track in SAMPLE_TRACKS.iter() {
        if !genres.contains(&track.genre) {
            genres.push(track.genre.clone());
        }
    }
    genres
}

/// Filter the catalog by genre equality and/or any-tag match.
///
/// Both filters empty returns the full catalog. Pure function of its inputs.
pub fn filter_tracks(genre: Option<&str>, tags: &[String]) -> Vec<Track> {
    SAMPLE_TRACKS
        .iter()
        .filter(|track| genre.map_or(true, |g| track.genre == g))
        .filter(|track| tags.is_empty() || tags.iter().any(|tag| track.tags.contains(tag)))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_fixed_sample_set() {
        assert_eq!(all_tracks().len(), 8);
        assert_eq!(all_tracks()[0].title, "Symphony No. 5");
        assert!(track_by_id("5").is_some());
        assert!(track_by_id("99").is_none());
    }

    #[test]
    fn tags_and_genres_are_unique_first_seen() {
        let tags = all_tags();
        assert_eq!(tags[0], "classical");
        let mut deduped = tags.clone();
        deduped.dedup();
        assert_eq!(tags.len(), deduped.len());
        // "relaxing" appears on three tracks but only once here
        assert_eq!(tags.iter().filter(|t| *t == "relaxing").count(), 1);

        let genres = all_genres();
        assert_eq!(genres.len(), 8);
        assert_eq!(genres[0], "Classical");
    }

    #[test]
    fn filter_by_genre_returns_exact_matches() {
        let jazz = filter_tracks(Some("Jazz"), &[]);
        assert_eq!(jazz.len(), 1);
        assert_eq!(jazz[0].title, "Midnight Jazz");
    }

    #[test]
    fn filter_with_empty_inputs_returns_full_catalog() {
        assert_eq!(filter_tracks(None, &[]).len(), 8);
    }

    #[test]
    fn filter_combines_genre_and_tags() {
        let tags = vec!["relaxing".to_string()];
        let relaxing = filter_tracks(None, &tags);
        assert_eq!(relaxing.len(), 3);

        let relaxing_folk = filter_tracks(Some("Folk"), &tags);
        assert_eq!(relaxing_folk.len(), 1);
        assert_eq!(relaxing_folk[0].title, "Acoustic Morning");

        let no_match = filter_tracks(Some("Folk"), &["dance".to_string()]);
        assert!(no_match.is_empty());
    }
}
