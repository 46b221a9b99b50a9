use std::{io::Error, path::PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use sha2::{Digest, Sha256};

#[derive(Debug)]
pub enum CacheError {
    IoError(Error),
    SerdeError(serde_json::Error),
}

impl From<Error> for CacheError {
    fn from(err: Error) -> Self {
        CacheError::IoError(err)
    }
}

impl std::fmt::Display for CacheError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CacheError::IoError(e) => write!(f, "cache io error: {}", e),
            CacheError::SerdeError(e) => write!(f, "cache serde error: {}", e),
        }
    }
}

impl std::error::Error for CacheError {}

#[derive(Debug, Serialize, Deserialize)]
struct Envelope<T> {
    timestamp: i64,
    data: T,
}

/// Best-effort key-value store for API responses, one JSON file per key.
///
/// Keys are arbitrary strings (they contain ids, offsets and user input), so
/// the on-disk filename is the SHA-256 digest of the key. Every entry is
/// wrapped in an envelope carrying the write timestamp; entries older than
/// the optional TTL read as a miss. Corrupt or unreadable entries also read
/// as a miss, never as an error.
pub struct ResponseCache {
    dir: PathBuf,
    ttl_seconds: Option<i64>,
}

impl ResponseCache {
    pub fn new(dir: PathBuf, ttl_hours: Option<i64>) -> Self {
        Self {
            dir,
            ttl_seconds: ttl_hours.map(|h| h * 3600),
        }
    }

    /// Cache directory used by the CLI:
    /// `<data_local_dir>/spotipath/cache/api`.
    pub fn default_dir() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("spotipath/cache/api");
        path
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.cache_path(key);
        let content = async_fs::read_to_string(&path).await.ok()?;
        let envelope: Envelope<T> = serde_json::from_str(&content).ok()?;

        if let Some(ttl) = self.ttl_seconds {
            if Utc::now().timestamp() - envelope.timestamp > ttl {
                return None;
            }
        }

        Some(envelope.data)
    }

    pub async fn set<T: Serialize>(&self, key: &str, data: &T) -> Result<(), CacheError> {
        let path = self.cache_path(key);
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(CacheError::IoError)?;
        }

        let envelope = Envelope {
            timestamp: Utc::now().timestamp(),
            data,
        };
        let json = serde_json::to_string_pretty(&envelope).map_err(CacheError::SerdeError)?;
        async_fs::write(&path, json)
            .await
            .map_err(CacheError::IoError)
    }

    /// Synchronous existence probe. Used by the path finder to order the
    /// search frontier without reading entries; TTL is not consulted here.
    pub fn contains(&self, key: &str) -> bool {
        self.cache_path(key).is_file()
    }

    /// Number of entries currently on disk.
    pub fn count_entries(&self) -> usize {
        match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries
                .flatten()
                .filter(|e| e.path().extension().is_some_and(|ext| ext == "json"))
                .count(),
            Err(_) => 0,
        }
    }

    pub async fn clear(&self) -> Result<(), CacheError> {
        async_fs::remove_dir_all(&self.dir)
            .await
            .map_err(CacheError::IoError)
    }

    pub fn cache_path(&self, key: &str) -> PathBuf {
        self.dir.join(Self::file_name(key))
    }

    fn file_name(key: &str) -> String {
        let digest = Sha256::digest(key.as_bytes());
        format!("{:x}.json", digest)
    }
}
