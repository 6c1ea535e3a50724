use crate::{
    spotify::{self, ApiError},
    types::ResolvedArtist,
    utils,
};

/// Outcome of resolving a free-text artist name against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Match(ResolvedArtist),
    NotFound,
}

/// Resolves a free-text artist name to a catalog identity.
///
/// Asks the search endpoint for the top five candidates and picks the first
/// whose name equals the query case-insensitively; when no candidate matches
/// exactly, the first (highest upstream relevance) candidate wins. Zero
/// candidates resolve to [`Resolution::NotFound`].
///
/// Network and API failures propagate; deciding whether a failed resolution
/// aborts anything is the aggregation loop's call.
pub async fn resolve(token: &str, name: &str) -> Result<Resolution, ApiError> {
    let candidates = spotify::search::search_artists(token, name, 5).await?;

    Ok(match utils::pick_best_match(name, candidates) {
        Some(artist) => Resolution::Match(artist),
        None => Resolution::NotFound,
    })
}
