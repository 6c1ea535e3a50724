use crate::{
    config,
    spotify::{ApiError, get_json},
    types::{ArtistItem, ArtistSearchResponse},
};

/// Searches the catalog for artists matching a free-text name.
///
/// Queries Spotify's `/search` endpoint with `type=artist` and returns the
/// candidates in upstream relevance order. Picking the right candidate out
/// of the returned list is the resolver's job, not this function's.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `name` - Free-text artist name as the user typed it
/// * `limit` - Maximum number of candidates to return (1-50)
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<ArtistItem>)` - Candidate artists, best upstream match first
/// - `Err(ApiError)` - Non-success HTTP status or transport failure
///
/// # Example
///
/// ```
/// let candidates = search_artists(&token, "the beatles", 5).await?;
/// if let Some(first) = candidates.first() {
///     println!("Best candidate: {}", first.name);
/// }
/// ```
pub async fn search_artists(
    token: &str,
    name: &str,
    limit: u32,
) -> Result<Vec<ArtistItem>, ApiError> {
    let api_url = format!(
        "{uri}/search?q={query}&type=artist&limit={limit}",
        uri = &config::spotify_apiurl(),
        query = urlencoding::encode(name),
        limit = limit
    );

    let res = get_json::<ArtistSearchResponse>(token, &api_url).await?;
    Ok(res.artists.items)
}
