use std::fmt;

use crate::{
    spotify::{self, ApiError, tracks::TRACKS_BATCH_LIMIT},
    types::{ResolvedArtist, Track},
    utils, warning,
};

/// Number of albums requested from the discography endpoint.
const ALBUM_FETCH_LIMIT: u32 = 20;
/// Number of fetched albums actually walked, bounding the request fan-out.
const ALBUMS_CONSIDERED: usize = 10;
/// Number of tracks considered per album, bounding the request fan-out.
const TRACKS_PER_ALBUM: usize = 10;

/// How an artist's candidate tracks are fetched and ranked.
///
/// `Popularity` is a single upstream-curated top-tracks call. `Plays`
/// approximates "most played" by ranking the artist's whole recent
/// discography by popularity, because the Web API exposes no play counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankStrategy {
    Popularity,
    Plays,
}

impl fmt::Display for RankStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankStrategy::Popularity => write!(f, "popularity"),
            RankStrategy::Plays => write!(f, "plays"),
        }
    }
}

/// Produces the ranked track sequence for one resolved artist.
///
/// Dispatches to the strategy implementation and truncates the result to
/// `track_count`. A failure of the initial catalog call (top-tracks or
/// album listing) propagates and costs exactly this artist; sub-fetch
/// failures inside the plays strategy only degrade the result.
pub async fn acquire(
    token: &str,
    artist: &ResolvedArtist,
    market: &str,
    strategy: RankStrategy,
    track_count: usize,
) -> Result<Vec<Track>, ApiError> {
    match strategy {
        RankStrategy::Popularity => acquire_by_popularity(token, artist, market, track_count).await,
        RankStrategy::Plays => acquire_by_plays(token, artist, market, track_count).await,
    }
}

/// The fast path: one top-tracks call, upstream already ranked descending.
async fn acquire_by_popularity(
    token: &str,
    artist: &ResolvedArtist,
    market: &str,
    track_count: usize,
) -> Result<Vec<Track>, ApiError> {
    let top = spotify::tracks::get_top_tracks(token, &artist.id, market).await?;

    let mut tracks: Vec<Track> = top.into_iter().map(Track::from).collect();
    tracks.truncate(track_count);
    Ok(tracks)
}

/// The discography path: albums and singles are enumerated, their track
/// listings collected, the full track objects batch-resolved, and the result
/// filtered, de-duplicated and sorted by popularity.
///
/// Every sub-fetch (one album's track listing, one batch lookup) degrades
/// gracefully: its failure is logged and that contribution dropped, the
/// artist keeps whatever the remaining fetches produced. All sub-fetches are
/// issued sequentially to stay within upstream rate limits.
async fn acquire_by_plays(
    token: &str,
    artist: &ResolvedArtist,
    market: &str,
    track_count: usize,
) -> Result<Vec<Track>, ApiError> {
    let mut albums =
        spotify::albums::get_artist_albums(token, &artist.id, market, ALBUM_FETCH_LIMIT).await?;
    albums.truncate(ALBUMS_CONSIDERED);

    let mut candidate_ids: Vec<String> = Vec::new();
    for album in &albums {
        match spotify::albums::get_album_tracks(token, &album.id, market).await {
            Ok(items) => {
                candidate_ids.extend(items.into_iter().take(TRACKS_PER_ALBUM).map(|t| t.id));
            }
            Err(e) => {
                warning!("Skipping album {}: {}", album.name, e);
            }
        }
    }

    let mut found = Vec::new();
    for chunk in candidate_ids.chunks(TRACKS_BATCH_LIMIT) {
        match spotify::tracks::get_tracks(token, chunk, market).await {
            Ok(tracks) => found.extend(tracks),
            Err(e) => {
                warning!("Skipping a batch of {} tracks: {}", chunk.len(), e);
            }
        }
    }

    // Album listings include collaborations; only tracks crediting the
    // target artist count.
    let tracks: Vec<Track> = found
        .into_iter()
        .filter(|t| t.artists.iter().any(|a| a.id == artist.id))
        .map(Track::from)
        .collect();

    Ok(rank_tracks(tracks, track_count))
}

/// Final ranking shared by the plays strategy: de-duplicate by track id
/// (first occurrence wins), stable-sort descending by popularity, truncate.
pub fn rank_tracks(mut tracks: Vec<Track>, track_count: usize) -> Vec<Track> {
    utils::remove_duplicate_tracks(&mut tracks);
    utils::sort_tracks_by_popularity(&mut tracks);
    tracks.truncate(track_count);
    tracks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: &str, name: &str, popularity: u32) -> Track {
        Track {
            id: id.to_string(),
            uri: format!("spotify:track:{}", id),
            name: name.to_string(),
            primary_artist_name: "Artist".to_string(),
            album_name: "Album".to_string(),
            image_url: None,
            preview_url: None,
            popularity,
        }
    }

    #[test]
    fn rank_tracks_deduplicates_by_id() {
        let tracks = vec![
            track("a", "Song A", 10),
            track("b", "Song B", 50),
            track("a", "Song A (album version)", 80),
        ];

        let ranked = rank_tracks(tracks, 10);

        assert_eq!(ranked.len(), 2);
        // First occurrence wins, so "a" keeps popularity 10 and sorts last.
        assert_eq!(ranked[0].id, "b");
        assert_eq!(ranked[1].id, "a");
        assert_eq!(ranked[1].popularity, 10);
    }

    #[test]
    fn rank_tracks_sorts_descending_with_stable_ties() {
        let tracks = vec![
            track("a", "First", 40),
            track("b", "Second", 70),
            track("c", "Third", 40),
        ];

        let ranked = rank_tracks(tracks, 10);

        let ids: Vec<&str> = ranked.iter().map(|t| t.id.as_str()).collect();
        // Equal popularity keeps input order: "a" before "c".
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn rank_tracks_truncates_to_requested_count() {
        let tracks = (0..8)
            .map(|i| track(&format!("id{}", i), "Song", 80 - i as u32))
            .collect();

        let ranked = rank_tracks(tracks, 3);

        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].id, "id0");
        assert_eq!(ranked[2].id, "id2");
    }
}
