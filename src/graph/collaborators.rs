use std::collections::{HashMap, HashSet};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Res,
    management::{ResponseCache, TokenManager},
    spotify::{
        albums::{ALBUM_BATCH_LIMIT, get_album_tracks, get_several_albums},
        artists::{get_artist_albums, get_several_artists, search_artist},
    },
    types::{Album, Artist, Collaboration, Track},
    utils,
};

use super::path::CollabSource;

const ALBUM_PAGE_LIMIT: u32 = 50;
const TRACK_PAGE_LIMIT: u32 = 50;
const ARTIST_BATCH_LIMIT: usize = 50;

/// Lazy neighbor expansion over the Spotify catalog.
///
/// Every API response that contributes to an expansion is memoized in the
/// response cache under a stable key, so an interrupted expansion resumes
/// where it left off and a finished one never touches the network again:
///
/// - `artist-search:{name}` - resolved artist for a search term (lowercased)
/// - `artist-albums:{id}:{offset}` - one discography page
/// - `album-tracks:{id}` - completed track list of an oversized album
/// - `artist-data:{id}` - full artist object of a collaborator
/// - `collaborations:{id}` - the finished collaborator set of an artist
pub struct SpotifyGraph {
    token_mgr: TokenManager,
    cache: ResponseCache,
}

impl SpotifyGraph {
    pub fn new(token_mgr: TokenManager, cache: ResponseCache) -> Self {
        Self { token_mgr, cache }
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    fn search_key(name: &str) -> String {
        format!("artist-search:{}", name.to_lowercase())
    }

    fn albums_key(artist_id: &str, offset: u32) -> String {
        format!("artist-albums:{}:{}", artist_id, offset)
    }

    fn tracks_key(album_id: &str) -> String {
        format!("album-tracks:{}", album_id)
    }

    fn artist_key(artist_id: &str) -> String {
        format!("artist-data:{}", artist_id)
    }

    fn collab_key(artist_id: &str) -> String {
        format!("collaborations:{}", artist_id)
    }

    /// Resolves an artist by name, best match first. A miss on the API is
    /// not cached so a typo does not stick.
    pub async fn artist_by_name(&mut self, name: &str) -> Res<Option<Artist>> {
        let key = Self::search_key(name);
        if let Some(artist) = self.cache.get::<Artist>(&key).await {
            return Ok(Some(artist));
        }

        let token = self.token_mgr.get_valid_token().await;
        let artist = search_artist(&token, name).await?;
        if let Some(ref artist) = artist {
            self.cache.set(&key, artist).await?;
        }
        Ok(artist)
    }

    /// Returns every collaborator of the given artist along with the track
    /// that links them. The finished set is cached; a second call for the
    /// same artist is a single cache read.
    pub async fn collaborators(&mut self, artist: &Artist) -> Res<Vec<Collaboration>> {
        let key = Self::collab_key(&artist.id);
        if let Some(collabs) = self.cache.get::<Vec<Collaboration>>(&key).await {
            return Ok(collabs);
        }

        let pb = spinner(format!("Fetching discography for {}...", artist.name));

        let albums = self.artist_albums(&artist.id).await?;
        let album_ids = unique_album_ids(&albums);
        let albums_total = album_ids.len();

        let mut collabs: Vec<Collaboration> = Vec::new();
        let mut scanned = 0;

        for chunk in album_ids.chunks(ALBUM_BATCH_LIMIT) {
            let token = self.token_mgr.get_valid_token().await;
            let detail = get_several_albums(&token, chunk).await?;

            // null slots mark albums Spotify could not resolve
            for album in detail.albums.into_iter().flatten() {
                scanned += 1;
                pb.set_message(format!(
                    "Scanning {album_name} ({scanned}/{albums_total})...",
                    album_name = album.name,
                    scanned = scanned,
                    albums_total = albums_total
                ));

                let release_date = utils::parse_release_date(&album.release_date);
                let tracks = if album.tracks.next.is_some() {
                    self.complete_album_tracks(&album.id, album.tracks.items)
                        .await?
                } else {
                    album.tracks.items
                };

                for track in &tracks {
                    for track_artist in &track.artists {
                        if track_artist.id == artist.id {
                            continue;
                        }
                        collabs.push(Collaboration {
                            artist: Artist {
                                id: track_artist.id.clone(),
                                name: track_artist.name.clone(),
                                genres: Vec::new(),
                                popularity: None,
                                uri: String::new(),
                            },
                            track_name: track.name.clone(),
                            album_name: album.name.clone(),
                            release_date,
                            track_uri: track.uri.clone(),
                        });
                    }
                }
            }
        }

        utils::dedupe_collaborations(&mut collabs);

        pb.set_message(format!("Resolving {} collaborators...", collabs.len()));
        self.enrich_collaborators(&mut collabs).await?;

        self.cache.set(&key, &collabs).await?;
        pb.finish_and_clear();
        Ok(collabs)
    }

    /// Walks all discography pages for an artist. Pages are cached
    /// individually so a partially-walked discography resumes for free.
    async fn artist_albums(&mut self, artist_id: &str) -> Res<Vec<Album>> {
        let mut albums: Vec<Album> = Vec::new();
        let mut offset = 0;

        loop {
            let key = Self::albums_key(artist_id, offset);
            let page_items = match self.cache.get::<Vec<Album>>(&key).await {
                Some(items) => items,
                None => {
                    let token = self.token_mgr.get_valid_token().await;
                    let page = get_artist_albums(&token, artist_id, ALBUM_PAGE_LIMIT, offset).await?;
                    self.cache.set(&key, &page.items).await?;
                    page.items
                }
            };

            let fetched = page_items.len() as u32;
            albums.extend(page_items);

            if fetched < ALBUM_PAGE_LIMIT {
                break;
            }
            offset += fetched;
        }

        Ok(albums)
    }

    /// Completes the track list of an album whose embedded page overflowed.
    async fn complete_album_tracks(
        &mut self,
        album_id: &str,
        first_page: Vec<Track>,
    ) -> Res<Vec<Track>> {
        let key = Self::tracks_key(album_id);
        if let Some(tracks) = self.cache.get::<Vec<Track>>(&key).await {
            return Ok(tracks);
        }

        let mut tracks = first_page;
        loop {
            let token = self.token_mgr.get_valid_token().await;
            let page =
                get_album_tracks(&token, album_id, TRACK_PAGE_LIMIT, tracks.len() as u32).await?;
            let fetched = page.items.len() as u32;
            tracks.extend(page.items);
            if fetched < TRACK_PAGE_LIMIT {
                break;
            }
        }

        self.cache.set(&key, &tracks).await?;
        Ok(tracks)
    }

    /// Replaces the reduced track-credit artists with full artist objects
    /// (genres, popularity), fetching missing ones in batches of 50.
    async fn enrich_collaborators(&mut self, collabs: &mut [Collaboration]) -> Res<()> {
        let mut full: HashMap<String, Artist> = HashMap::new();
        let mut missing: Vec<String> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for collab in collabs.iter() {
            if !seen.insert(collab.artist.id.clone()) {
                continue;
            }
            match self
                .cache
                .get::<Artist>(&Self::artist_key(&collab.artist.id))
                .await
            {
                Some(artist) => {
                    full.insert(artist.id.clone(), artist);
                }
                None => missing.push(collab.artist.id.clone()),
            }
        }

        for chunk in missing.chunks(ARTIST_BATCH_LIMIT) {
            let token = self.token_mgr.get_valid_token().await;
            let artists = get_several_artists(&token, chunk).await?;
            for artist in artists {
                self.cache.set(&Self::artist_key(&artist.id), &artist).await?;
                full.insert(artist.id.clone(), artist);
            }
        }

        for collab in collabs.iter_mut() {
            if let Some(artist) = full.get(&collab.artist.id) {
                collab.artist = artist.clone();
            }
        }

        Ok(())
    }
}

impl CollabSource for SpotifyGraph {
    async fn artist_by_name(&mut self, name: &str) -> Res<Option<Artist>> {
        SpotifyGraph::artist_by_name(self, name).await
    }

    async fn collaborators(&mut self, artist: &Artist) -> Res<Vec<Collaboration>> {
        SpotifyGraph::collaborators(self, artist).await
    }

    fn is_cached(&self, artist_id: &str) -> bool {
        self.cache.contains(&Self::collab_key(artist_id))
    }
}

fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}

/// Albums can repeat across the album and single groups; keep the first
/// occurrence of each id.
fn unique_album_ids(albums: &[Album]) -> Vec<String> {
    let mut seen = HashSet::new();
    albums
        .iter()
        .filter(|a| seen.insert(a.id.clone()))
        .map(|a| a.id.clone())
        .collect()
}
