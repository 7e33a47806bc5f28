//! Free-text and tag-marker filtering over track collections.
use crate::constants::TAG_QUERY_MARKER;
use crate::models::Track;

/// Filter a track list by a free-text query.
///
/// - Empty or whitespace-only query returns the input unchanged.
/// - A query starting with `#` matches tracks having at least one tag that
///   contains the remainder (case-insensitive substring).
/// - Anything else is a case-insensitive substring match against title,
///   artist, album, genre or any tag.
///
/// The filter is stable: input order is preserved, no ranking.
pub fn filter_local(tracks: &[Track], query: &str) -> Vec<Track> {
    let query = query.trim();
    if query.is_empty() {
        return tracks.to_vec();
    }

    if let Some(tag_query) = query.strip_prefix(TAG_QUERY_MARKER) {
        let tag_query = tag_query.to_lowercase();
        return tracks
            .iter()
            .filter(|track| {
                track
                    .tags
                    .iter()
                    .any(|tag| tag.to_lowercase().contains(&tag_query))
            })
            .cloned()
            .collect();
    }

    let query = query.to_lowercase();
    tracks
        .iter()
        .filter(|track| matches_any_field(track, &query))
        .cloned()
        .collect()
}

fn matches_any_field(track: &Track, query: &str) -> bool {
    track.title.to_lowercase().contains(query)
        || track.artist.to_lowercase().contains(query)
        || track.album.to_lowercase().contains(query)
        || track.genre.to_lowercase().contains(query)
        || track
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalog;

    #[test]
    fn empty_query_is_identity() {
        let tracks = catalog::all_tracks();
        assert_eq!(filter_local(tracks, ""), tracks.to_vec());
        assert_eq!(filter_local(tracks, "   "), tracks.to_vec());
    }

    #[test]
    fn tag_marker_matches_tag_substring_case_insensitive() {
        let tracks = catalog::all_tracks();
        let relaxing = filter_local(tracks, "#RELAX");
        assert!(!relaxing.is_empty());
        for track in &relaxing {
            assert!(track
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains("relax")));
        }
        // tracks without a matching tag are excluded
        assert!(!relaxing.iter().any(|t| t.id == "6"));
    }

    #[test]
    fn plain_query_matches_across_fields() {
        let tracks = catalog::all_tracks();
        // artist match
        assert_eq!(filter_local(tracks, "beethoven")[0].id, "1");
        // album match
        assert_eq!(filter_local(tracks, "urban beats")[0].id, "5");
        // genre match
        assert_eq!(filter_local(tracks, "folk")[0].id, "4");
        // tag match
        assert!(filter_local(tracks, "meditation").iter().any(|t| t.id == "7"));
        // no match
        assert!(filter_local(tracks, "polka").is_empty());
    }

    #[test]
    fn filter_preserves_input_order() {
        let tracks = catalog::all_tracks();
        let hits = filter_local(tracks, "guitar");
        let ids: Vec<&str> = hits.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["4", "6"]);
    }
}
