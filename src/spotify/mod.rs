//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by
//! spotlistcli: authentication, artist search, and the catalog lookups the
//! track aggregation pipeline is built on. It handles all HTTP communication,
//! JSON decoding and error mapping, providing a clean Rust interface for the
//! higher-level pipeline logic.
//!
//! ## Architecture
//!
//! The module follows a feature-based organization where each submodule
//! handles a specific domain of Spotify API functionality:
//!
//! ```text
//! Application Layer (CLI, Tracklist Pipeline)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 PKCE)
//!     ├── Artist Search (search::search_artists)
//!     ├── Album Lookups (albums::get_artist_albums, albums::get_album_tracks)
//!     └── Track Lookups (tracks::get_top_tracks, tracks::get_tracks)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## API Coverage
//!
//! - `GET /search` - Artist candidate lookup for free-text names
//! - `GET /artists/{id}/top-tracks` - Upstream-ranked top tracks
//! - `GET /artists/{id}/albums` - Artist discography, filtered by group
//! - `GET /albums/{id}/tracks` - Track listing of a single album
//! - `GET /tracks` - Batch full-track lookup, up to 50 ids per call
//! - `POST /api/token` - Token exchange and refresh operations
//!
//! ## Error Handling
//!
//! Every catalog wrapper takes the bearer token from its caller and returns
//! [`ApiError`] on failure. There are no retries at this layer: a non-success
//! HTTP status is mapped to [`ApiError::Status`] with the status code and the
//! response body embedded, and propagates to the caller. Recovery decisions
//! (skip an artist, degrade an album's contribution) belong to the
//! aggregation pipeline, which is the only layer that knows what a partial
//! result is worth.
//!
//! ## Authentication Strategy
//!
//! [`auth`] implements OAuth 2.0 with PKCE (Proof Key for Code Exchange):
//! a cryptographically random code verifier, a SHA-256 derived challenge,
//! browser-based user authorization, a local callback server receiving the
//! authorization code, and a final code-for-token exchange. No client secret
//! is stored or transmitted.

use std::fmt;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

pub mod albums;
pub mod auth;
pub mod search;
pub mod tracks;

/// Error type for all catalog requests.
///
/// `Status` carries the non-success HTTP status together with the response
/// body; `Request` wraps transport-level failures (connection, TLS, decode).
#[derive(Debug)]
pub enum ApiError {
    Status { status: StatusCode, message: String },
    Request(reqwest::Error),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Status { status, message } => {
                if message.is_empty() {
                    write!(f, "API responded with status {}", status)
                } else {
                    write!(f, "API responded with status {}: {}", status, message)
                }
            }
            ApiError::Request(e) => write!(f, "request failed: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Request(err)
    }
}

/// Performs an authenticated GET against the Web API and decodes the JSON
/// response. Non-success statuses are turned into [`ApiError::Status`] with
/// the body text preserved, which is where Spotify puts its error messages.
pub(crate) async fn get_json<T: DeserializeOwned>(token: &str, url: &str) -> Result<T, ApiError> {
    let client = Client::new();
    let response = client.get(url).bearer_auth(token).send().await?;

    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(ApiError::Status { status, message });
    }

    Ok(response.json::<T>().await?)
}
