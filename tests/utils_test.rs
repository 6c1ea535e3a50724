use spotlistcli::tracklist::RankStrategy;
use spotlistcli::types::{ArtistItem, Track};
use spotlistcli::utils::*;

// Helper function to create a search candidate
fn create_candidate(id: &str, name: &str) -> ArtistItem {
    ArtistItem {
        id: id.to_string(),
        name: name.to_string(),
    }
}

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

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    // Should not be empty
    assert!(!challenge.is_empty());

    // Should be deterministic - same input produces same output
    let challenge2 = generate_code_challenge(verifier);
    assert_eq!(challenge, challenge2);

    // Different input should produce different output
    let challenge3 = generate_code_challenge("different_verifier");
    assert_ne!(challenge, challenge3);

    // Should be base64-encoded (URL-safe, no padding)
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_pick_best_match_empty_candidates() {
    let result = pick_best_match("anyone", Vec::new());
    assert!(result.is_none());
}

#[test]
fn test_pick_best_match_prefers_exact_name() {
    // The first-ranked candidate is NOT the exact match
    let candidates = vec![
        create_candidate("id1", "Beatles Tribute Band"),
        create_candidate("id2", "The Beatles"),
    ];

    let resolved = pick_best_match("the beatles", candidates).unwrap();

    // Case-insensitive exact match wins over upstream relevance order
    assert_eq!(resolved.id, "id2");
    assert_eq!(resolved.name, "The Beatles");
}

#[test]
fn test_pick_best_match_falls_back_to_first() {
    let candidates = vec![
        create_candidate("id1", "Daft Punk"),
        create_candidate("id2", "Daft Punk Tribute"),
    ];

    // No exact match - the highest-relevance candidate wins
    let resolved = pick_best_match("daft", candidates).unwrap();
    assert_eq!(resolved.id, "id1");
}

#[test]
fn test_pick_best_match_trims_query() {
    let candidates = vec![create_candidate("id1", "Queen")];

    let resolved = pick_best_match("  queen  ", candidates).unwrap();
    assert_eq!(resolved.id, "id1");
}

#[test]
fn test_remove_duplicate_tracks() {
    let mut tracks = vec![
        create_test_track("id1", "Track 1", 80),
        create_test_track("id2", "Track 2", 70),
        create_test_track("id1", "Track 1 Duplicate", 60), // Duplicate
        create_test_track("id3", "Track 3", 50),
    ];

    remove_duplicate_tracks(&mut tracks);

    // Should have 3 unique tracks
    assert_eq!(tracks.len(), 3);

    // Should contain the first occurrence of each unique ID
    let ids: Vec<&String> = tracks.iter().map(|t| &t.id).collect();
    assert_eq!(ids, vec!["id1", "id2", "id3"]);
    assert_eq!(tracks[0].popularity, 80);
}

#[test]
fn test_sort_tracks_by_popularity() {
    let mut tracks = vec![
        create_test_track("id1", "Low", 10),
        create_test_track("id2", "High", 90),
        create_test_track("id3", "Mid", 50),
    ];

    sort_tracks_by_popularity(&mut tracks);

    let popularity: Vec<u32> = tracks.iter().map(|t| t.popularity).collect();
    assert_eq!(popularity, vec![90, 50, 10]);
}

#[test]
fn test_sort_tracks_by_popularity_keeps_tie_order() {
    let mut tracks = vec![
        create_test_track("id1", "First Tie", 40),
        create_test_track("id2", "Top", 90),
        create_test_track("id3", "Second Tie", 40),
    ];

    sort_tracks_by_popularity(&mut tracks);

    // Equal popularity keeps the prior relative order - no secondary key
    let ids: Vec<&String> = tracks.iter().map(|t| &t.id).collect();
    assert_eq!(ids, vec!["id2", "id1", "id3"]);
}

#[test]
fn test_parse_strategy_valid_inputs() {
    assert_eq!(
        parse_strategy("popularity").unwrap(),
        RankStrategy::Popularity
    );
    assert_eq!(parse_strategy("plays").unwrap(), RankStrategy::Plays);

    // Test case insensitivity and surrounding whitespace
    assert_eq!(
        parse_strategy(" Popularity ").unwrap(),
        RankStrategy::Popularity
    );
    assert_eq!(parse_strategy("PLAYS").unwrap(), RankStrategy::Plays);
}

#[test]
fn test_parse_strategy_invalid_inputs() {
    // Test empty string
    let result = parse_strategy("");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("cannot be empty"));

    // Test whitespace only
    let result = parse_strategy("   ");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("cannot be empty"));

    // Test invalid strategy
    let result = parse_strategy("shuffle");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("invalid value 'shuffle'"));
}

#[test]
fn test_strategy_display() {
    assert_eq!(RankStrategy::Popularity.to_string(), "popularity");
    assert_eq!(RankStrategy::Plays.to_string(), "plays");
}
