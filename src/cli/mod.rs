//! # CLI Module
//!
//! This module provides the command-line interface layer for spotlistcli.
//! It implements the user-facing commands and coordinates between the
//! Spotify client, the track aggregation pipeline, and user interaction.
//!
//! ## Commands
//!
//! - [`auth`] - Initiates the Spotify OAuth authentication flow with PKCE
//!   security
//! - [`tracks`] - Resolves the given artist names, aggregates their ranked
//!   tracks, applies exclusions, and emits the serialized track-URI list
//!
//! ## Architecture Design
//!
//! The CLI module follows a layered architecture approach:
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Tracklist Pipeline (Resolution, Ranking, Aggregation, Selection)
//!     ↓
//! API Layer (Spotify Integration)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! The CLI renders what the pipeline reports (progress spinners fed by the
//! pipeline's status callback, per-artist outcome lines, a track table and
//! the final output text) and never computes pipeline results itself.
//!
//! ## Error Handling Philosophy
//!
//! - **Graceful degradation**: one artist failing to resolve or fetch never
//!   prevents the remaining artists from producing output
//! - **Helpful messages**: missing-token errors point at `spotlistcli auth`
//! - **Hard failures only at the edges**: a missing credential or a batch
//!   where nothing was found terminates with a clear message

mod auth;
mod tracks;

pub use auth::auth;
pub use tracks::tracks;
