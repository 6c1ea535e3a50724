use spotlistcli::tracklist::{
    AggregationResult, ArtistOutcome, ArtistStatus, PipelineError, Session,
};
use spotlistcli::types::{ArtistTrackGroup, Track};

fn create_test_track(id: &str) -> Track {
    Track {
        id: id.to_string(),
        uri: format!("spotify:track:{}", id),
        name: "Song".to_string(),
        primary_artist_name: "Test Artist".to_string(),
        album_name: "Test Album".to_string(),
        image_url: None,
        preview_url: None,
        popularity: 50,
    }
}

#[test]
fn test_session_requires_token() {
    let result = Session::new(String::new(), "US".to_string());
    assert!(matches!(result, Err(PipelineError::NotAuthenticated)));

    // Whitespace is not a credential either
    let result = Session::new("   ".to_string(), "US".to_string());
    assert!(matches!(result, Err(PipelineError::NotAuthenticated)));
}

#[test]
fn test_session_accepts_token() {
    let session = Session::new("BQC-token".to_string(), "DE".to_string()).unwrap();
    assert_eq!(session.market(), "DE");
}

#[test]
fn test_empty_aggregation_is_total_failure() {
    let result = AggregationResult {
        groups: Vec::new(),
        outcomes: vec![ArtistOutcome {
            name: "Nobody".to_string(),
            status: ArtistStatus::Error("not found".to_string()),
        }],
    };

    assert!(matches!(
        result.into_tracklist(),
        Err(PipelineError::TotalFailure)
    ));
}

#[test]
fn test_aggregation_with_groups_becomes_tracklist() {
    let result = AggregationResult {
        groups: vec![ArtistTrackGroup::new(
            "Artist".to_string(),
            vec![create_test_track("t1")],
        )],
        outcomes: vec![ArtistOutcome {
            name: "Artist".to_string(),
            status: ArtistStatus::Success(1),
        }],
    };

    let tracklist = result.into_tracklist().unwrap();
    assert_eq!(tracklist.included_count(), 1);
    assert!(tracklist.serialized().contains("spotify:track:t1"));
}

#[test]
fn test_pipeline_error_messages() {
    assert_eq!(
        PipelineError::NotAuthenticated.to_string(),
        "not authenticated with Spotify"
    );
    assert_eq!(
        PipelineError::TotalFailure.to_string(),
        "no tracks found for any of the requested artists"
    );
}
