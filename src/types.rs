use std::hash::{Hash, Hasher};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    #[serde(default)]
    pub obtained_at: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub popularity: Option<u32>,
    #[serde(default)]
    pub uri: String,
}

/// Reduced artist object as it appears on album and track listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub artists: SearchArtistsPage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchArtistsPage {
    pub items: Vec<Artist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeveralArtistsResponse {
    pub artists: Vec<Option<Artist>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumsPage {
    pub items: Vec<Album>,
    pub next: Option<String>,
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub name: String,
    pub release_date: String,
    pub release_date_precision: String,
    pub album_type: String,
    pub artists: Vec<TrackArtist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeveralAlbumsResponse {
    pub albums: Vec<Option<AlbumDetail>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumDetail {
    pub id: String,
    pub name: String,
    pub release_date: String,
    pub release_date_precision: String,
    pub tracks: TracksPage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TracksPage {
    pub items: Vec<Track>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub uri: String,
    pub artists: Vec<TrackArtist>,
}

/// A single co-credit linking two artists through a track.
///
/// Two collaborations are considered equal when they point at the same
/// collaborator through the same track URI; everything else is metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collaboration {
    pub artist: Artist,
    pub track_name: String,
    pub album_name: String,
    pub release_date: Option<NaiveDate>,
    pub track_uri: String,
}

impl PartialEq for Collaboration {
    fn eq(&self, other: &Self) -> bool {
        self.artist.id == other.artist.id && self.track_uri == other.track_uri
    }
}

impl Eq for Collaboration {}

impl Hash for Collaboration {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.artist.id.hash(state);
        self.track_uri.hash(state);
    }
}

/// One hop on a collaboration path. The first step of a path carries no
/// connecting track.
#[derive(Debug, Clone, PartialEq)]
pub struct PathStep {
    pub artist: Artist,
    pub via_track: Option<String>,
}

/// A chain of collaborations from a source artist to a target artist.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistPath {
    pub steps: Vec<PathStep>,
}

impl ArtistPath {
    /// Number of collaboration edges on the path.
    pub fn hops(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

impl std::fmt::Display for ArtistPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i == 0 {
                write!(f, "{}", step.artist.name)?;
            } else {
                write!(
                    f,
                    " → {} (via '{}')",
                    step.artist.name,
                    step.via_track.as_deref().unwrap_or("?")
                )?;
            }
        }
        Ok(())
    }
}

#[derive(Tabled)]
pub struct CollabTableRow {
    pub artist: String,
    pub track: String,
    pub album: String,
    pub released: String,
}
