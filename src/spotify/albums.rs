use crate::{
    config,
    spotify::{ApiError, get_json},
    types::{AlbumItem, AlbumTrackItem, AlbumTracksResponse, AlbumsResponse},
};

/// Retrieves an artist's albums and singles from the Spotify Web API.
///
/// Queries `/artists/{id}/albums` with `include_groups=album,single`. The
/// appears-on and compilation groups are deliberately left out: they are
/// dominated by collaborator tracks that get filtered away again after the
/// batch lookup, at the cost of extra requests.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `artist_id` - Spotify ID of the artist
/// * `market` - ISO 3166-1 alpha-2 country code
/// * `limit` - Maximum number of albums to return (1-50)
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<AlbumItem>)` - Albums in upstream order (most recent first)
/// - `Err(ApiError)` - Non-success HTTP status or transport failure
///
/// # Example
///
/// ```
/// let albums = get_artist_albums(&token, artist_id, "US", 20).await?;
/// println!("Found {} releases", albums.len());
/// ```
pub async fn get_artist_albums(
    token: &str,
    artist_id: &str,
    market: &str,
    limit: u32,
) -> Result<Vec<AlbumItem>, ApiError> {
    let api_url = format!(
        "{uri}/artists/{id}/albums?include_groups=album,single&market={market}&limit={limit}",
        uri = &config::spotify_apiurl(),
        id = artist_id,
        market = market,
        limit = limit
    );

    let res = get_json::<AlbumsResponse>(token, &api_url).await?;
    Ok(res.items)
}

/// Retrieves the track listing of a single album.
///
/// The `/albums/{id}/tracks` entries carry no popularity; they only provide
/// the ids that are afterwards resolved into full track objects through the
/// batch lookup.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `album_id` - Spotify ID of the album
/// * `market` - ISO 3166-1 alpha-2 country code
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<AlbumTrackItem>)` - Tracks in album order
/// - `Err(ApiError)` - Non-success HTTP status or transport failure
pub async fn get_album_tracks(
    token: &str,
    album_id: &str,
    market: &str,
) -> Result<Vec<AlbumTrackItem>, ApiError> {
    let api_url = format!(
        "{uri}/albums/{id}/tracks?market={market}",
        uri = &config::spotify_apiurl(),
        id = album_id,
        market = market
    );

    let res = get_json::<AlbumTracksResponse>(token, &api_url).await?;
    Ok(res.items)
}
