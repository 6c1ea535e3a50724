use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    pub token: Option<Token>,
}

// --- Wire types (Spotify Web API responses) ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistSearchResponse {
    pub artists: ArtistSearchPage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistSearchPage {
    pub items: Vec<ArtistItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistItem {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTracksResponse {
    pub tracks: Vec<FullTrack>,
}

/// A complete track object as returned by the top-tracks and batch track
/// lookup endpoints. `album`, `preview_url` and `popularity` are nullable
/// upstream and must not be assumed present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullTrack {
    pub id: String,
    pub uri: String,
    pub name: String,
    pub artists: Vec<ArtistItem>,
    pub album: Option<AlbumRef>,
    pub preview_url: Option<String>,
    pub popularity: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumRef {
    pub name: String,
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumsResponse {
    pub items: Vec<AlbumItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumItem {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumTracksResponse {
    pub items: Vec<AlbumTrackItem>,
}

/// Track entry from an album listing. No popularity here; full objects
/// are resolved afterwards through the batch track lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumTrackItem {
    pub id: String,
    pub name: String,
}

/// Response of the batch track lookup. Unknown ids come back as `null`
/// entries and are skipped by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeveralTracksResponse {
    pub tracks: Vec<Option<FullTrack>>,
}

// --- Domain types ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArtist {
    pub id: String,
    pub name: String,
}

/// A catalog track reduced to what the pipeline and the output need.
/// Identity is `id`; two tracks with the same id are the same track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub id: String,
    pub uri: String,
    pub name: String,
    pub primary_artist_name: String,
    pub album_name: String,
    pub image_url: Option<String>,
    pub preview_url: Option<String>,
    pub popularity: u32,
}

impl From<FullTrack> for Track {
    fn from(t: FullTrack) -> Self {
        let primary_artist_name = t
            .artists
            .first()
            .map(|a| a.name.clone())
            .unwrap_or_else(|| "Unknown Artist".to_string());
        let (album_name, image_url) = match t.album {
            Some(album) => (album.name, album.images.first().map(|i| i.url.clone())),
            None => ("Unknown Album".to_string(), None),
        };

        Track {
            id: t.id,
            uri: t.uri,
            name: t.name,
            primary_artist_name,
            album_name,
            image_url,
            preview_url: t.preview_url,
            popularity: t.popularity.unwrap_or(0),
        }
    }
}

/// A track plus its selection flag. Every track starts included and is
/// only ever flipped through the track list's toggle operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectableTrack {
    pub track: Track,
    pub included: bool,
}

impl SelectableTrack {
    pub fn new(track: Track) -> Self {
        Self {
            track,
            included: true,
        }
    }
}

/// The tracks found for one successfully resolved artist, in ranked order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistTrackGroup {
    pub artist_name: String,
    pub tracks: Vec<SelectableTrack>,
}

impl ArtistTrackGroup {
    pub fn new(artist_name: String, tracks: Vec<Track>) -> Self {
        Self {
            artist_name,
            tracks: tracks.into_iter().map(SelectableTrack::new).collect(),
        }
    }
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub track: String,
    pub artist: String,
    pub album: String,
    pub popularity: u32,
    pub id: String,
}
