use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    config, error, info,
    management::TokenManager,
    success,
    tracklist::{AggregateOptions, ArtistStatus, RankStrategy, Session},
    types::TrackTableRow,
    warning,
};

pub async fn tracks(
    artists: Vec<String>,
    count: usize,
    strategy: RankStrategy,
    market: Option<String>,
    exclude: Vec<String>,
    output: Option<String>,
) {
    let mut token_mgr = match TokenManager::load().await {
        Ok(manager) => manager,
        Err(e) => {
            error!(
                "Failed to load token. Please run spotlistcli auth\n Error: {}",
                e
            );
        }
    };

    let token = token_mgr.get_valid_token().await;
    let market = market.unwrap_or_else(config::spotify_market);

    let session = match Session::new(token, market) {
        Ok(session) => session,
        Err(e) => error!("{}", e),
    };

    let options = AggregateOptions {
        track_count: count,
        strategy,
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message("Resolving artists...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let mut on_status = |name: &str, status: &ArtistStatus| match status {
        ArtistStatus::Queued => {}
        ArtistStatus::Searching => {
            pb.set_message(format!("Searching for {}...", name));
        }
        ArtistStatus::FetchingTracks => {
            pb.set_message(format!("Fetching tracks for {} ({})...", name, strategy));
        }
        ArtistStatus::Success(track_count) => {
            pb.set_message(format!("Found {} tracks for {}.", track_count, name));
        }
        ArtistStatus::Error(message) => {
            pb.set_message(format!("{}: {}", name, message));
        }
    };

    let result = session.aggregate(&artists, &options, &mut on_status).await;
    pb.finish_and_clear();

    for outcome in &result.outcomes {
        match &outcome.status {
            ArtistStatus::Success(track_count) => {
                success!("Found {} tracks for {}.", track_count, outcome.name)
            }
            ArtistStatus::Error(message) => warning!("{}: {}", outcome.name, message),
            _ => {}
        }
    }

    let mut tracklist = match result.into_tracklist() {
        Ok(tracklist) => tracklist,
        Err(e) => error!("{}", e),
    };

    for track_id in &exclude {
        if !tracklist.toggle(track_id, false) {
            warning!("Unknown track id {}", track_id);
        }
    }

    let table_rows: Vec<TrackTableRow> = tracklist
        .groups()
        .iter()
        .flat_map(|group| &group.tracks)
        .filter(|entry| entry.included)
        .map(|entry| TrackTableRow {
            track: entry.track.name.clone(),
            artist: entry.track.primary_artist_name.clone(),
            album: entry.track.album_name.clone(),
            popularity: entry.track.popularity,
            id: entry.track.id.clone(),
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
    info!("{} tracks selected.", tracklist.included_count());

    match output {
        Some(path) => match async_fs::write(&path, tracklist.serialized()).await {
            Ok(_) => success!("Track list written to {}.", path),
            Err(e) => error!("Failed to write track list to {}: {}", path, e),
        },
        None => {
            println!("{}", tracklist.serialized());
        }
    }
}
