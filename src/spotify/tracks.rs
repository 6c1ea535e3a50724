use crate::{
    config,
    spotify::{ApiError, get_json},
    types::{FullTrack, SeveralTracksResponse, TopTracksResponse},
};

/// Maximum number of track ids the batch lookup endpoint accepts per call.
pub const TRACKS_BATCH_LIMIT: usize = 50;

/// Retrieves an artist's top tracks from the Spotify Web API.
///
/// The `/artists/{id}/top-tracks` endpoint returns an upstream-curated list,
/// already sorted descending by popularity and capped by Spotify (typically
/// at 10 tracks). Availability depends on the market, which is why the
/// country code is mandatory here.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `artist_id` - Spotify ID of the artist
/// * `market` - ISO 3166-1 alpha-2 country code (e.g., "US", "DE")
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<FullTrack>)` - Top tracks, most popular first
/// - `Err(ApiError)` - Non-success HTTP status or transport failure
///
/// # Example
///
/// ```
/// let tracks = get_top_tracks(&token, "3WrFJ7ztbogyGnTHbHJFl2", "US").await?;
/// println!("Top track: {}", tracks[0].name);
/// ```
pub async fn get_top_tracks(
    token: &str,
    artist_id: &str,
    market: &str,
) -> Result<Vec<FullTrack>, ApiError> {
    let api_url = format!(
        "{uri}/artists/{id}/top-tracks?market={market}",
        uri = &config::spotify_apiurl(),
        id = artist_id,
        market = market
    );

    let res = get_json::<TopTracksResponse>(token, &api_url).await?;
    Ok(res.tracks)
}

/// Retrieves full track objects (including popularity) for a batch of ids.
///
/// The `/tracks` endpoint resolves up to [`TRACKS_BATCH_LIMIT`] ids in one
/// request. Ids Spotify cannot resolve come back as `null` entries; those
/// are dropped here so callers only ever see complete tracks.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `ids` - Track ids to resolve; at most [`TRACKS_BATCH_LIMIT`] per call
/// * `market` - ISO 3166-1 alpha-2 country code
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<FullTrack>)` - Resolved tracks in request order, unknowns dropped
/// - `Err(ApiError)` - Non-success HTTP status or transport failure
///
/// # Example
///
/// ```
/// for chunk in ids.chunks(TRACKS_BATCH_LIMIT) {
///     let tracks = get_tracks(&token, chunk, "US").await?;
///     all.extend(tracks);
/// }
/// ```
pub async fn get_tracks(
    token: &str,
    ids: &[String],
    market: &str,
) -> Result<Vec<FullTrack>, ApiError> {
    let api_url = format!(
        "{uri}/tracks?ids={ids}&market={market}",
        uri = &config::spotify_apiurl(),
        ids = ids.join(","),
        market = market
    );

    let res = get_json::<SeveralTracksResponse>(token, &api_url).await?;
    Ok(res.tracks.into_iter().flatten().collect())
}
