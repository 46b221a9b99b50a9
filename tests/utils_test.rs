use chrono::NaiveDate;
use spotipath::types::{Artist, ArtistPath, CollabTableRow, Collaboration, PathStep};
use spotipath::utils::*;

// Helper function to create a test artist
fn create_test_artist(id: &str, name: &str) -> Artist {
    Artist {
        id: id.to_string(),
        name: name.to_string(),
        genres: vec!["pop".to_string()],
        popularity: Some(50),
        uri: format!("spotify:artist:{}", id),
    }
}

// Helper function to create a test collaboration
fn create_test_collab(artist_id: &str, artist_name: &str, track_uri: &str) -> Collaboration {
    Collaboration {
        artist: create_test_artist(artist_id, artist_name),
        track_name: "Some Track".to_string(),
        album_name: "Some Album".to_string(),
        release_date: NaiveDate::from_ymd_opt(2023, 1, 1),
        track_uri: track_uri.to_string(),
    }
}

// Helper function to create a test table row
fn create_test_row(artist: &str, track: &str, released: &str) -> CollabTableRow {
    CollabTableRow {
        artist: artist.to_string(),
        track: track.to_string(),
        album: "Album".to_string(),
        released: released.to_string(),
    }
}

#[test]
fn test_parse_release_date_full_precision() {
    let date = parse_release_date("2024-03-15");
    assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 15));
}

#[test]
fn test_parse_release_date_month_precision() {
    // Missing day defaults to the first of the month
    let date = parse_release_date("2024-03");
    assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 1));
}

#[test]
fn test_parse_release_date_year_precision() {
    // Missing month and day default to January 1st
    let date = parse_release_date("2024");
    assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 1));
}

#[test]
fn test_parse_release_date_invalid_inputs() {
    assert!(parse_release_date("").is_none());
    assert!(parse_release_date("invalid").is_none());
    assert!(parse_release_date("24-03-15").is_none());
    assert!(parse_release_date("2024-13").is_none());
    assert!(parse_release_date("2024-02-30").is_none());
    assert!(parse_release_date("2024-03-15T00:00:00").is_none());
}

#[test]
fn test_dedupe_collaborations() {
    let mut collabs = vec![
        create_test_collab("a1", "Artist One", "spotify:track:t1"),
        create_test_collab("a2", "Artist Two", "spotify:track:t2"),
        create_test_collab("a1", "Artist One", "spotify:track:t1"), // duplicate
        create_test_collab("a1", "Artist One", "spotify:track:t3"), // same artist, other track
    ];

    dedupe_collaborations(&mut collabs);

    // Same artist on a different track is not a duplicate
    assert_eq!(collabs.len(), 3);
    let uris: Vec<&str> = collabs.iter().map(|c| c.track_uri.as_str()).collect();
    assert_eq!(
        uris,
        vec!["spotify:track:t1", "spotify:track:t2", "spotify:track:t3"]
    );
}

#[test]
fn test_collaboration_equality_ignores_metadata() {
    let mut left = create_test_collab("a1", "Artist One", "spotify:track:t1");
    let mut right = create_test_collab("a1", "Artist One", "spotify:track:t1");
    left.album_name = "Album A".to_string();
    right.album_name = "Album B".to_string();

    assert_eq!(left, right);
}

#[test]
fn test_sort_collab_rows() {
    let mut rows = vec![
        create_test_row("Zeta", "Track 1", "2023-10-01"),
        create_test_row("Alpha", "Track 2", "2023-01-01"),
        create_test_row("Alpha", "Track 3", "2023-06-01"),
        create_test_row("Beta", "Track 4", "2023-03-01"),
    ];

    sort_collab_rows(&mut rows);

    // Sorted by artist ascending, then by release date descending
    assert_eq!(rows[0].artist, "Alpha");
    assert_eq!(rows[0].released, "2023-06-01");
    assert_eq!(rows[1].artist, "Alpha");
    assert_eq!(rows[1].released, "2023-01-01");
    assert_eq!(rows[2].artist, "Beta");
    assert_eq!(rows[3].artist, "Zeta");
}

#[test]
fn test_join_ids() {
    assert_eq!(join_ids(["a", "b", "c"]), "a,b,c");
    assert_eq!(join_ids(["solo"]), "solo");

    let empty: [&str; 0] = [];
    assert_eq!(join_ids(empty), "");
}

#[test]
fn test_artist_path_display() {
    let path = ArtistPath {
        steps: vec![
            PathStep {
                artist: create_test_artist("a1", "Alpha"),
                via_track: None,
            },
            PathStep {
                artist: create_test_artist("a2", "Gamma"),
                via_track: Some("Song Two".to_string()),
            },
            PathStep {
                artist: create_test_artist("a3", "Delta"),
                via_track: Some("Song Four".to_string()),
            },
        ],
    };

    assert_eq!(
        path.to_string(),
        "Alpha → Gamma (via 'Song Two') → Delta (via 'Song Four')"
    );
    assert_eq!(path.hops(), 2);
}

#[test]
fn test_artist_path_single_step() {
    let path = ArtistPath {
        steps: vec![PathStep {
            artist: create_test_artist("a1", "Alpha"),
            via_track: None,
        }],
    };

    assert_eq!(path.to_string(), "Alpha");
    assert_eq!(path.hops(), 0);
}
