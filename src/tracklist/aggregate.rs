use crate::{
    tracklist::{PipelineError, RankStrategy, Resolution, Tracklist, resolver, strategy},
    types::ArtistTrackGroup,
};

/// Processing state of one artist within an aggregation run.
///
/// Transitions are `Queued → Searching → FetchingTracks → Success | Error`;
/// every transition is reported through the status callback the moment it
/// happens, so a presentation layer can render per-artist progress live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtistStatus {
    Queued,
    Searching,
    FetchingTracks,
    Success(usize),
    Error(String),
}

/// Terminal status of one artist, kept for the post-run summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistOutcome {
    pub name: String,
    pub status: ArtistStatus,
}

/// Knobs of one aggregation run.
#[derive(Debug, Clone)]
pub struct AggregateOptions {
    pub track_count: usize,
    pub strategy: RankStrategy,
}

/// Result of an aggregation run: the per-artist track groups in input order
/// plus the terminal status of every requested artist, including the ones
/// that produced no group.
#[derive(Debug, Clone)]
pub struct AggregationResult {
    pub groups: Vec<ArtistTrackGroup>,
    pub outcomes: Vec<ArtistOutcome>,
}

impl AggregationResult {
    /// Hands the groups to the selection model. A run in which no artist
    /// produced a group is the batch-level failure condition.
    pub fn into_tracklist(self) -> Result<Tracklist, PipelineError> {
        if self.groups.is_empty() {
            return Err(PipelineError::TotalFailure);
        }

        Ok(Tracklist::new(self.groups))
    }
}

/// An authenticated aggregation session: the bearer credential and the
/// market every catalog request is scoped to.
///
/// The credential is checked once here; afterwards it is read-only and
/// shared by every request of the run.
pub struct Session {
    token: String,
    market: String,
}

impl Session {
    /// Creates a session, refusing to proceed without a credential.
    pub fn new(token: String, market: String) -> Result<Self, PipelineError> {
        if token.trim().is_empty() {
            return Err(PipelineError::NotAuthenticated);
        }

        Ok(Self { token, market })
    }

    pub fn market(&self) -> &str {
        &self.market
    }

    /// Runs the aggregation pipeline over a list of artist names.
    ///
    /// Artists are processed strictly sequentially. For each name the
    /// resolver and the configured acquisition strategy run in turn; every
    /// failure (unresolvable name, upstream error, zero tracks) is converted
    /// into that artist's terminal status and the loop continues with the
    /// next name. One artist can never abort the batch. Group order matches
    /// input order because nothing runs out of turn.
    ///
    /// `on_status` is invoked synchronously for every status transition with
    /// the artist's name; the caller renders these however it likes.
    pub async fn aggregate(
        &self,
        names: &[String],
        options: &AggregateOptions,
        on_status: &mut dyn FnMut(&str, &ArtistStatus),
    ) -> AggregationResult {
        let names: Vec<&str> = names
            .iter()
            .map(|n| n.trim())
            .filter(|n| !n.is_empty())
            .collect();

        for name in &names {
            on_status(name, &ArtistStatus::Queued);
        }

        let mut groups: Vec<ArtistTrackGroup> = Vec::new();
        let mut outcomes: Vec<ArtistOutcome> = Vec::new();

        for name in names {
            let (status, group) = self.process_artist(name, options, on_status).await;

            if let Some(group) = group {
                groups.push(group);
            }

            outcomes.push(ArtistOutcome {
                name: name.to_string(),
                status,
            });
        }

        AggregationResult { groups, outcomes }
    }

    /// Runs resolution and acquisition for a single artist and returns its
    /// terminal status along with the group when tracks were found.
    async fn process_artist(
        &self,
        name: &str,
        options: &AggregateOptions,
        on_status: &mut dyn FnMut(&str, &ArtistStatus),
    ) -> (ArtistStatus, Option<ArtistTrackGroup>) {
        on_status(name, &ArtistStatus::Searching);

        let artist = match resolver::resolve(&self.token, name).await {
            Ok(Resolution::Match(artist)) => artist,
            Ok(Resolution::NotFound) => {
                let status = ArtistStatus::Error("not found".to_string());
                on_status(name, &status);
                return (status, None);
            }
            Err(e) => {
                let status = ArtistStatus::Error(e.to_string());
                on_status(name, &status);
                return (status, None);
            }
        };

        on_status(name, &ArtistStatus::FetchingTracks);

        match strategy::acquire(
            &self.token,
            &artist,
            &self.market,
            options.strategy,
            options.track_count,
        )
        .await
        {
            Ok(tracks) if tracks.is_empty() => {
                let status = ArtistStatus::Error("no tracks".to_string());
                on_status(name, &status);
                (status, None)
            }
            Ok(tracks) => {
                let status = ArtistStatus::Success(tracks.len());
                on_status(name, &status);
                (status, Some(ArtistTrackGroup::new(artist.name, tracks)))
            }
            Err(e) => {
                let status = ArtistStatus::Error(e.to_string());
                on_status(name, &status);
                (status, None)
            }
        }
    }
}
