use std::collections::HashSet;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::{
    tracklist::RankStrategy,
    types::{ArtistItem, ResolvedArtist, Track},
};

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Picks the best artist candidate for a free-text query. An exact
/// case-insensitive name match wins over upstream relevance order,
/// because fuzzy search often ranks a more popular but differently
/// named artist first. Falls back to the first candidate.
pub fn pick_best_match(query: &str, candidates: Vec<ArtistItem>) -> Option<ResolvedArtist> {
    if candidates.is_empty() {
        return None;
    }

    let query = query.trim().to_lowercase();
    let chosen = candidates
        .iter()
        .find(|c| c.name.to_lowercase() == query)
        .or_else(|| candidates.first())?;

    Some(ResolvedArtist {
        id: chosen.id.clone(),
        name: chosen.name.clone(),
    })
}

pub fn remove_duplicate_tracks(tracks: &mut Vec<Track>) {
    let mut seen_ids = HashSet::new();
    tracks.retain(|track| seen_ids.insert(track.id.clone()));
}

/// Sorts descending by popularity. The sort is stable: equally popular
/// tracks keep their prior relative order, there is no secondary key.
pub fn sort_tracks_by_popularity(tracks: &mut Vec<Track>) {
    tracks.sort_by(|a, b| b.popularity.cmp(&a.popularity));
}

pub fn parse_strategy(s: &str) -> Result<RankStrategy, String> {
    let normalized = s.trim().to_lowercase();
    if normalized.is_empty() {
        return Err("strategy cannot be empty".to_string());
    }

    match normalized.as_str() {
        "popularity" => Ok(RankStrategy::Popularity),
        "plays" => Ok(RankStrategy::Plays),
        other => Err(format!(
            "invalid value '{}' (expected 'popularity' or 'plays')",
            other
        )),
    }
}
