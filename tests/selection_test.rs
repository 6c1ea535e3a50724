use spotlistcli::tracklist::Tracklist;
use spotlistcli::types::{ArtistTrackGroup, Track};

// Helper function to create a test track
fn create_test_track(id: &str, name: &str, popularity: u32) -> Track {
    Track {
        id: id.to_string(),
        uri: format!("spotify:track:{}", id),
        name: name.to_string(),
        primary_artist_name: "Test Artist".to_string(),
        album_name: "Test Album".to_string(),
        image_url: None,
        preview_url: None,
        popularity,
    }
}

fn create_test_tracklist() -> Tracklist {
    Tracklist::new(vec![
        ArtistTrackGroup::new(
            "Artist One".to_string(),
            vec![
                create_test_track("a1", "One", 90),
                create_test_track("a2", "Two", 80),
            ],
        ),
        ArtistTrackGroup::new(
            "Artist Two".to_string(),
            vec![create_test_track("b1", "Three", 70)],
        ),
    ])
}

#[test]
fn test_all_tracks_included_by_default() {
    let tracklist = create_test_tracklist();

    assert_eq!(tracklist.included_count(), 3);
    for group in tracklist.groups() {
        assert!(group.tracks.iter().all(|t| t.included));
    }
}

#[test]
fn test_serialized_format() {
    let tracklist = create_test_tracklist();

    let expected = "# Artist One\n\
                    spotify:track:a1\n\
                    spotify:track:a2\n\
                    \n\
                    # Artist Two\n\
                    spotify:track:b1\n\
                    \n";
    assert_eq!(tracklist.serialized(), expected);
}

#[test]
fn test_serialization_is_idempotent() {
    let tracklist = create_test_tracklist();

    // Two reads without an intervening mutation yield identical text
    let first = tracklist.serialized().to_string();
    let second = tracklist.serialized().to_string();
    assert_eq!(first, second);
}

#[test]
fn test_group_order_matches_creation_order() {
    let tracklist = create_test_tracklist();
    let text = tracklist.serialized();

    let first = text.find("# Artist One").unwrap();
    let second = text.find("# Artist Two").unwrap();
    assert!(first < second);
}

#[test]
fn test_toggle_excludes_track_line() {
    let mut tracklist = create_test_tracklist();

    assert!(tracklist.toggle("a2", false));

    assert_eq!(tracklist.included_count(), 2);
    assert!(!tracklist.serialized().contains("spotify:track:a2"));
    // The rest of the group is untouched
    assert!(tracklist.serialized().contains("spotify:track:a1"));
}

#[test]
fn test_toggle_round_trip_restores_position() {
    let mut tracklist = create_test_tracklist();
    let original = tracklist.serialized().to_string();

    assert!(tracklist.toggle("a1", false));
    assert!(tracklist.toggle("a1", true));

    // The track line reappears at its original position within its group
    assert_eq!(tracklist.serialized(), original);
}

#[test]
fn test_toggle_unknown_id() {
    let mut tracklist = create_test_tracklist();
    let original = tracklist.serialized().to_string();

    assert!(!tracklist.toggle("nope", false));

    // Unknown ids leave the model unchanged
    assert_eq!(tracklist.serialized(), original);
    assert_eq!(tracklist.included_count(), 3);
}

#[test]
fn test_fully_excluded_group_is_omitted() {
    let mut tracklist = create_test_tracklist();

    tracklist.toggle("b1", false);

    let text = tracklist.serialized();
    // No header and no stray blank line for the empty group
    assert!(!text.contains("# Artist Two"));
    assert!(!text.ends_with("\n\n\n"));
    assert!(text.contains("# Artist One"));

    // The group stays in the model and can come back
    assert_eq!(tracklist.groups().len(), 2);
}

#[test]
fn test_select_all_and_deselect_all() {
    let mut tracklist = create_test_tracklist();

    tracklist.deselect_all();
    assert_eq!(tracklist.included_count(), 0);
    assert_eq!(tracklist.serialized(), "");

    tracklist.select_all();
    assert_eq!(tracklist.included_count(), 3);
    assert_eq!(tracklist.serialized(), create_test_tracklist().serialized());
}

#[test]
fn test_deselect_all_then_toggle_single() {
    let mut tracklist = create_test_tracklist();

    tracklist.deselect_all();
    tracklist.toggle("b1", true);

    let expected = "# Artist Two\n\
                    spotify:track:b1\n\
                    \n";
    assert_eq!(tracklist.serialized(), expected);
}
