use std::path::PathBuf;

use chrono::{NaiveDate, Utc};
use serde_json::json;
use spotipath::management::ResponseCache;
use spotipath::types::{Artist, Collaboration};

// Each test gets its own directory under the system temp dir so tests can
// run in parallel without stepping on each other.
fn temp_cache_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "spotipath-cache-test-{}-{}",
        tag,
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[tokio::test]
async fn test_cache_set_and_get() {
    let cache = ResponseCache::new(temp_cache_dir("set-get"), None);

    let data = json!({"name": "Alpha", "id": "alpha_id"});
    cache.set("test_key", &data).await.unwrap();

    let retrieved: Option<serde_json::Value> = cache.get("test_key").await;
    assert_eq!(retrieved, Some(data));

    // Entry lands on disk wrapped in a timestamp envelope
    let path = cache.cache_path("test_key");
    assert!(path.is_file());
    let stored: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert!(stored["timestamp"].is_i64());
    assert_eq!(stored["data"]["id"], "alpha_id");
}

#[tokio::test]
async fn test_cache_collaboration_set() {
    let cache = ResponseCache::new(temp_cache_dir("collabs"), None);

    // The collaborator sets the graph caches carry chrono dates; they have
    // to survive the trip through the envelope as typed values
    let collabs = vec![Collaboration {
        artist: Artist {
            id: "beta_id".to_string(),
            name: "Beta".to_string(),
            genres: vec!["pop".to_string()],
            popularity: Some(80),
            uri: "spotify:artist:beta_id".to_string(),
        },
        track_name: "Song One".to_string(),
        album_name: "Fixture Album".to_string(),
        release_date: NaiveDate::from_ymd_opt(2023, 6, 15),
        track_uri: "spotify:track:song_one".to_string(),
    }];
    cache.set("collaborations:alpha_id", &collabs).await.unwrap();

    let retrieved: Option<Vec<Collaboration>> = cache.get("collaborations:alpha_id").await;
    let retrieved = retrieved.unwrap();
    assert_eq!(retrieved, collabs);
    assert_eq!(
        retrieved[0].release_date,
        NaiveDate::from_ymd_opt(2023, 6, 15)
    );
    assert_eq!(retrieved[0].artist.name, "Beta");
}

#[tokio::test]
async fn test_cache_missing_key() {
    let cache = ResponseCache::new(temp_cache_dir("missing"), None);

    let value: Option<serde_json::Value> = cache.get("nonexistent_key").await;
    assert!(value.is_none());
}

#[tokio::test]
async fn test_cache_corrupt_entry_is_a_miss() {
    let dir = temp_cache_dir("corrupt");
    let cache = ResponseCache::new(dir.clone(), None);

    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(cache.cache_path("test_key"), "invalid json content").unwrap();

    let value: Option<serde_json::Value> = cache.get("test_key").await;
    assert!(value.is_none());
}

#[tokio::test]
async fn test_cache_ttl_expiry() {
    let cache = ResponseCache::new(temp_cache_dir("ttl"), Some(1));

    let data = json!({"test": "data"});
    cache.set("test_key", &data).await.unwrap();

    // Fresh entry is served
    let value: Option<serde_json::Value> = cache.get("test_key").await;
    assert_eq!(value, Some(data.clone()));

    // Rewind the stored timestamp two hours to simulate an expired entry
    let path = cache.cache_path("test_key");
    let expired = json!({
        "timestamp": Utc::now().timestamp() - 2 * 3600,
        "data": data,
    });
    std::fs::write(&path, serde_json::to_string(&expired).unwrap()).unwrap();

    let value: Option<serde_json::Value> = cache.get("test_key").await;
    assert!(value.is_none());
}

#[tokio::test]
async fn test_cache_no_ttl_never_expires() {
    let cache = ResponseCache::new(temp_cache_dir("no-ttl"), None);

    cache.set("test_key", &json!(42)).await.unwrap();

    let path = cache.cache_path("test_key");
    let ancient = json!({"timestamp": 0, "data": 42});
    std::fs::write(&path, serde_json::to_string(&ancient).unwrap()).unwrap();

    let value: Option<i64> = cache.get("test_key").await;
    assert_eq!(value, Some(42));
}

#[tokio::test]
async fn test_cache_special_character_keys() {
    let cache = ResponseCache::new(temp_cache_dir("special"), None);

    // Keys carry ids, offsets and raw user input; the hashed filename has to
    // absorb anything
    let key = "artist-search:AC/DC & friends?";
    cache.set(key, &json!("value")).await.unwrap();

    let value: Option<String> = cache.get(key).await;
    assert_eq!(value.as_deref(), Some("value"));

    let file_name = cache.cache_path(key);
    let file_name = file_name.file_name().unwrap().to_str().unwrap();
    assert!(file_name.ends_with(".json"));
    assert!(
        file_name
            .trim_end_matches(".json")
            .chars()
            .all(|c| c.is_ascii_hexdigit())
    );
}

#[tokio::test]
async fn test_cache_path_is_stable() {
    let dir = temp_cache_dir("stable");
    let cache = ResponseCache::new(dir, None);

    assert_eq!(cache.cache_path("key"), cache.cache_path("key"));
    assert_ne!(cache.cache_path("key"), cache.cache_path("other_key"));
}

#[tokio::test]
async fn test_cache_contains() {
    let cache = ResponseCache::new(temp_cache_dir("contains"), None);

    assert!(!cache.contains("test_key"));
    cache.set("test_key", &json!(1)).await.unwrap();
    assert!(cache.contains("test_key"));
    assert!(!cache.contains("other_key"));
}

#[tokio::test]
async fn test_cache_count_and_clear() {
    let cache = ResponseCache::new(temp_cache_dir("count-clear"), None);

    assert_eq!(cache.count_entries(), 0);

    for i in 0..5 {
        cache.set(&format!("key_{}", i), &json!(i)).await.unwrap();
    }
    assert_eq!(cache.count_entries(), 5);

    cache.clear().await.unwrap();
    assert_eq!(cache.count_entries(), 0);
    assert!(!cache.contains("key_0"));
}
