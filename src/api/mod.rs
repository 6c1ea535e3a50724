//! # API Module
//!
//! HTTP endpoints for the transient local server spotlistcli runs during
//! authentication.
//!
//! ## Endpoints
//!
//! - [`callback`] - Handles OAuth callback requests from Spotify's
//!   authorization server. This endpoint completes the PKCE authentication
//!   flow by exchanging the authorization code for an access token.
//! - [`health`] - Health check endpoint returning application status and
//!   version information.
//!
//! The module is built on [Axum](https://docs.rs/axum); each endpoint is an
//! async function plugged into the router in [`crate::server`].

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
