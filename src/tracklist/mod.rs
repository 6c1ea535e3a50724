//! # Track List Pipeline Module
//!
//! This module implements the core of spotlistcli: turning an ordered list of
//! free-text artist names into a curated, ordered list of track URIs.
//!
//! ## Pipeline Stages
//!
//! ```text
//! artist names
//!     ↓  resolver   - free-text name to best-matching catalog identity
//!     ↓  strategy   - resolved artist to ranked tracks (popularity | plays)
//!     ↓  aggregate  - sequential per-artist orchestration, failure isolation
//!     ↓  selection  - include/exclude per track, deterministic serialization
//! serialized track-URI text
//! ```
//!
//! ## Failure Model
//!
//! Failures are absorbed at the smallest boundary that still leaves a useful
//! result:
//!
//! - a failed album or batch lookup inside the plays strategy degrades that
//!   contribution and the artist keeps whatever else was found,
//! - a failed search or top-tracks call costs exactly that artist,
//! - only a missing credential ([`PipelineError::NotAuthenticated`]) or a
//!   batch where no artist yielded anything ([`PipelineError::TotalFailure`])
//!   surface to the caller.
//!
//! ## Ordering
//!
//! Artists are processed strictly sequentially, and so are the sub-fetches of
//! the plays strategy. This keeps request concurrency against the Web API at
//! one, keeps per-artist status updates observable in order, and makes output
//! order identical to input order. The ordering is a design constraint, not
//! an accident of implementation; a parallel rework would change observable
//! behavior.

use std::fmt;

mod aggregate;
mod resolver;
mod selection;
mod strategy;

pub use aggregate::{AggregateOptions, AggregationResult, ArtistOutcome, ArtistStatus, Session};
pub use resolver::{Resolution, resolve};
pub use selection::Tracklist;
pub use strategy::{RankStrategy, acquire, rank_tracks};

/// Errors that abort a whole pipeline invocation.
///
/// Everything else (unresolvable names, upstream errors, artists without
/// tracks) is recorded per artist and never propagates past the aggregation
/// loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// No bearer token available; nothing was attempted.
    NotAuthenticated,
    /// Every requested artist ended without a track group.
    TotalFailure,
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::NotAuthenticated => {
                write!(f, "not authenticated with Spotify")
            }
            PipelineError::TotalFailure => {
                write!(f, "no tracks found for any of the requested artists")
            }
        }
    }
}

impl std::error::Error for PipelineError {}
